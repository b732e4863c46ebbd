//! The rendering-surface capability.
//!
//! A [`Surface`] is what the board controller draws onto every frame. It
//! combines text measurement (needed by layout), shape and text drawing, and
//! a save/restore transform stack so text can ride a rotating physics body.
//! Backends decide how the primitives materialize; the crate ships an SVG
//! backend in the `dropboard` library and tests use recording fakes.

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
    text::{TextMeasurer, TextStyle},
};

/// Fill/stroke/line-width descriptor for drawn shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
}

impl ShapeStyle {
    pub fn new(fill: Color, stroke: Color, line_width: f32) -> Self {
        Self {
            fill,
            stroke,
            line_width,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Color::default(),
            stroke: Color::default(),
            line_width: 1.0,
        }
    }
}

/// A 2D drawing target with a transform stack.
///
/// Coordinates passed to the drawing methods are interpreted in the current
/// transformed frame: after `translate(p)` followed by `rotate(a)`, drawing at
/// the origin lands at `p` rotated by `a` in surface space. `save`/`restore`
/// push and pop the whole transform state, mirroring canvas semantics.
///
/// Implementations must tolerate `restore` without a matching `save` as a
/// no-op rather than panic.
pub trait Surface: TextMeasurer {
    /// Dimensions of the drawable area in pixels.
    fn size(&self) -> Size;

    /// Discards everything drawn so far, starting a fresh frame.
    fn clear(&mut self);

    /// Draws a rectangle with rounded corners under the current transform.
    fn draw_round_rect(&mut self, bounds: Bounds, corner_radius: f32, style: &ShapeStyle);

    /// Draws one line of text centered horizontally on `position` and
    /// centered vertically on its baseline box, under the current transform.
    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle, color: &Color);

    /// Pushes the current transform state.
    fn save(&mut self);

    /// Pops the most recently saved transform state.
    fn restore(&mut self);

    /// Offsets subsequent drawing by `offset`.
    fn translate(&mut self, offset: Point);

    /// Rotates subsequent drawing by `radians` around the current origin.
    fn rotate(&mut self, radians: f32);
}
