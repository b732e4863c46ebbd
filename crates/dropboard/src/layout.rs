//! Grid layout for skill boxes.
//!
//! Transforms a list of skills into positioned boxes:
//!
//! ```text
//! [Skill]
//!     ↓ wrap labels against the box width budget
//! lines per skill
//!     ↓ size each box to its widest line
//! box sizes
//!     ↓ greedy left-to-right, top-to-bottom packing
//! [BoxPlacement]
//! ```
//!
//! The packing is a deliberate one-pass approximation: boxes are placed in
//! input order with a moving cursor and no backtracking, trading density for
//! a stable, predictable grid. Text width comes from a [`TextMeasurer`]
//! capability so the algorithm itself stays font-agnostic.

use log::debug;

use dropboard_core::{
    geometry::{Point, Size},
    text::{TextMeasurer, TextStyle},
};

use crate::{config::LayoutConfig, skill::Skill};

/// A positioned skill box produced by the layout pass.
///
/// `center` is the box midpoint in container coordinates, which is also the
/// translation its physics body is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlacement {
    center: Point,
    size: Size,
    lines: Vec<String>,
}

impl BoxPlacement {
    /// Returns the center point of the box
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the box dimensions
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the wrapped label lines, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Decomposes the placement into its parts, giving up ownership of the
    /// wrapped lines.
    pub fn into_parts(self) -> (Point, Size, Vec<String>) {
        (self.center, self.size, self.lines)
    }
}

/// Greedy row-packing layout engine for skill boxes.
#[derive(Debug, Clone)]
pub struct GridLayout {
    config: LayoutConfig,
    text_style: TextStyle,
}

impl GridLayout {
    /// Creates a layout engine for the given container and text style.
    pub fn new(config: LayoutConfig, text_style: TextStyle) -> Self {
        Self { config, text_style }
    }

    /// Computes one placement per skill, in input order.
    ///
    /// Boxes flow left to right and wrap to a new row when the next box would
    /// cross the right edge of the container. The first box of a row is
    /// always placed, even if it alone is wider than the container; widths
    /// are clamped against `max_box_width`, never against the container.
    pub fn compute(&self, skills: &[Skill], measurer: &dyn TextMeasurer) -> Vec<BoxPlacement> {
        let padding = self.config.padding;
        let box_height = self.config.box_height;

        let mut cursor_x = padding;
        let mut cursor_y = padding;
        let mut max_height_in_row: f32 = 0.0;

        let mut placements = Vec::with_capacity(skills.len());
        for skill in skills {
            let lines = self.wrap_label(&skill.name, measurer);
            let width = self.box_width(&lines, measurer);

            if cursor_x + width + padding > self.config.container_width {
                // Move to the next row
                cursor_x = padding;
                cursor_y += max_height_in_row + padding;
                max_height_in_row = box_height;
            }

            placements.push(BoxPlacement {
                center: Point::new(cursor_x + width / 2.0, cursor_y + box_height / 2.0),
                size: Size::new(width, box_height),
                lines,
            });

            cursor_x += width + padding;
            max_height_in_row = max_height_in_row.max(box_height);
        }

        debug!(skills = skills.len(), placements = placements.len(); "Computed grid layout");
        placements
    }

    /// Wraps a label into lines that fit the box width budget.
    ///
    /// Words accumulate onto the current line while the joined line still
    /// measures under `max_box_width - 2 * padding`; a word that does not fit
    /// starts a new line. A single word wider than the budget is kept whole
    /// on a line of its own. Always produces at least one line.
    fn wrap_label(&self, label: &str, measurer: &dyn TextMeasurer) -> Vec<String> {
        let budget = self.config.max_box_width - 2.0 * self.config.padding;

        let mut words = label.split(' ');
        // `split` yields at least one (possibly empty) item
        let mut current = words
            .next()
            .expect("str::split always yields at least one item")
            .to_string();

        let mut lines = Vec::new();
        for word in words {
            let candidate = format!("{current} {word}");
            if measurer.measure(&candidate, &self.text_style) < budget {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
        lines
    }

    /// Width of a box holding the given lines: widest line plus padding on
    /// both sides, clamped to the configured box width range.
    fn box_width(&self, lines: &[String], measurer: &dyn TextMeasurer) -> f32 {
        let widest = lines
            .iter()
            .map(|line| measurer.measure(line, &self.text_style))
            .fold(0.0f32, f32::max);
        (widest + 2.0 * self.config.padding)
            .clamp(self.config.min_box_width, self.config.max_box_width)
    }
}
