//! SVG rendering surface.
//!
//! [`SvgSurface`] implements [`Surface`] by accumulating SVG elements in
//! memory. The canvas transform stack maps onto SVG `transform` attributes:
//! each drawn element is wrapped in a `<g>` carrying the transforms active at
//! draw time, so translated and rotated bodies come out exactly as the draw
//! pass describes them.

use log::debug;
use svg::{self, node::element as svg_element};

use dropboard_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    surface::{ShapeStyle, Surface},
    text::{FontMeasurer, TextMeasurer, TextStyle},
};

/// An in-memory SVG rendering surface.
///
/// Drawing mutates internal element buffers; [`finish`](Self::finish)
/// assembles them into a complete [`svg::Document`] sized to the surface.
pub struct SvgSurface {
    size: Size,
    measurer: FontMeasurer,
    transforms: Vec<String>,
    saved: Vec<Vec<String>>,
    content: Vec<Box<dyn svg::Node>>,
}

impl SvgSurface {
    /// Creates an empty surface with the given drawable size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            measurer: FontMeasurer::new(),
            transforms: Vec::new(),
            saved: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Assembles the accumulated elements into an SVG document.
    pub fn finish(self) -> svg::Document {
        debug!(elements = self.content.len(); "Assembling SVG document");
        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        self.content
            .into_iter()
            .fold(doc, |doc, element| doc.add(element))
    }

    /// Wraps an element in the currently active transforms, if any.
    fn push_element(&mut self, element: Box<dyn svg::Node>) {
        if self.transforms.is_empty() {
            self.content.push(element);
        } else {
            let group = svg_element::Group::new()
                .set("transform", self.transforms.join(" "))
                .add(element);
            self.content.push(Box::new(group));
        }
    }
}

impl TextMeasurer for SvgSurface {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        self.measurer.measure(text, style)
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.transforms.clear();
        self.saved.clear();
        self.content.clear();
    }

    fn draw_round_rect(&mut self, bounds: Bounds, corner_radius: f32, style: &ShapeStyle) {
        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", &style.fill)
            .set("fill-opacity", style.fill.alpha())
            .set("stroke", &style.stroke)
            .set("stroke-opacity", style.stroke.alpha())
            .set("stroke-width", style.line_width);
        if corner_radius > 0.0 {
            rect = rect.set("rx", corner_radius);
        }
        self.push_element(Box::new(rect));
    }

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle, color: &Color) {
        let mut rendered_text = svg_element::Text::new(text)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
            .set("fill", color)
            .set("fill-opacity", color.alpha());
        if style.bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }
        self.push_element(Box::new(rendered_text));
    }

    fn save(&mut self) {
        self.saved.push(self.transforms.clone());
    }

    fn restore(&mut self) {
        // Restoring with nothing saved leaves the transform state alone
        if let Some(transforms) = self.saved.pop() {
            self.transforms = transforms;
        }
    }

    fn translate(&mut self, offset: Point) {
        self.transforms
            .push(format!("translate({}, {})", offset.x(), offset.y()));
    }

    fn rotate(&mut self, radians: f32) {
        self.transforms
            .push(format!("rotate({})", radians.to_degrees()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(surface: SvgSurface) -> String {
        surface.finish().to_string()
    }

    #[test]
    fn test_empty_document_has_viewport() {
        let surface = SvgSurface::new(Size::new(800.0, 600.0));
        let output = rendered(surface);
        assert!(output.contains("<svg"));
        assert!(output.contains("viewBox=\"0 0 800 600\""));
    }

    #[test]
    fn test_rect_carries_style() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        let style = ShapeStyle::new(
            Color::new("#ffffff").unwrap(),
            Color::new("#000000").unwrap(),
            1.0,
        );
        surface.draw_round_rect(
            Point::new(60.0, 40.0).to_bounds(Size::new(80.0, 40.0)),
            5.0,
            &style,
        );
        let output = rendered(surface);
        assert!(output.contains("<rect"));
        assert!(output.contains("rx=\"5\""));
        assert!(output.contains("stroke-width=\"1\""));
        assert!(output.contains("width=\"80\""));
        assert!(output.contains("height=\"40\""));
    }

    #[test]
    fn test_square_rect_has_no_rounding() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        surface.draw_round_rect(
            Point::new(0.0, 0.0).to_bounds(Size::new(10.0, 10.0)),
            0.0,
            &ShapeStyle::default(),
        );
        assert!(!rendered(surface).contains("rx="));
    }

    #[test]
    fn test_text_is_centered_and_bold() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        surface.fill_text(
            "Rust",
            Point::new(60.0, 40.0),
            &TextStyle::default(),
            &Color::default(),
        );
        let output = rendered(surface);
        assert!(output.contains("Rust"));
        assert!(output.contains("text-anchor=\"middle\""));
        assert!(output.contains("font-weight=\"bold\""));
        assert!(output.contains("font-family=\"Arial\""));
    }

    #[test]
    fn test_transforms_wrap_elements_in_groups() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        surface.save();
        surface.translate(Point::new(10.0, 20.0));
        surface.rotate(0.0);
        surface.draw_round_rect(
            Point::new(0.0, 0.0).to_bounds(Size::new(4.0, 4.0)),
            0.0,
            &ShapeStyle::default(),
        );
        surface.restore();
        let output = rendered(surface);
        assert!(output.contains("transform=\"translate(10, 20) rotate(0)\""));
    }

    #[test]
    fn test_restore_pops_back_to_saved_state() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        surface.save();
        surface.translate(Point::new(10.0, 20.0));
        surface.restore();
        surface.draw_round_rect(
            Point::new(0.0, 0.0).to_bounds(Size::new(4.0, 4.0)),
            0.0,
            &ShapeStyle::default(),
        );
        assert!(!rendered(surface).contains("transform="));
    }

    #[test]
    fn test_restore_without_save_is_noop() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        surface.restore();
        surface.draw_round_rect(
            Point::new(0.0, 0.0).to_bounds(Size::new(4.0, 4.0)),
            0.0,
            &ShapeStyle::default(),
        );
        assert!(rendered(surface).contains("<rect"));
    }

    #[test]
    fn test_clear_discards_content() {
        let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
        surface.draw_round_rect(
            Point::new(0.0, 0.0).to_bounds(Size::new(4.0, 4.0)),
            0.0,
            &ShapeStyle::default(),
        );
        surface.clear();
        assert!(!rendered(surface).contains("<rect"));
    }
}
