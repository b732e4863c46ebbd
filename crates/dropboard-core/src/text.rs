//! Text styling and measurement.
//!
//! Layout decisions (line wrapping, box sizing) depend on how wide a piece of
//! text renders. That capability is expressed as the [`TextMeasurer`] trait so
//! the layout code stays independent of any particular font backend, and
//! implemented for real fonts by [`FontMeasurer`] on top of cosmic-text.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;

/// Visual style for the label text drawn on skill boxes.
///
/// The measured width of a string depends on every field except
/// `line_height`, which only controls vertical stacking of wrapped lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: String,
    font_size: u16,
    bold: bool,
    line_height: f32,
}

impl TextStyle {
    /// Creates a new text style.
    ///
    /// # Arguments
    ///
    /// * `font_family` - Font family name (e.g., "Arial", "monospace")
    /// * `font_size` - Font size in pixels
    /// * `bold` - Whether to use the bold weight
    /// * `line_height` - Vertical distance between stacked lines, in pixels
    pub fn new(font_family: impl Into<String>, font_size: u16, bold: bool, line_height: f32) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            bold,
            line_height,
        }
    }

    /// Returns the font family name
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns true if the bold weight is requested
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Returns the line height in pixels
    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 14,
            bold: true,
            line_height: 18.0,
        }
    }
}

/// Capability for measuring the rendered width of a single line of text.
///
/// The grid layout consumes this trait; rendering surfaces provide it.
pub trait TextMeasurer {
    /// Returns the width in pixels that `text` occupies when rendered with
    /// `style`. Must treat `text` as a single line; newlines are not
    /// interpreted.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;
}

/// Text measurement backed by a shared cosmic-text [`FontSystem`].
///
/// Building a `FontSystem` scans installed fonts and is expensive, so a
/// single instance is kept in a process-wide static and shared by every
/// `FontMeasurer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontMeasurer;

impl FontMeasurer {
    /// Creates a measurer that shares the process-wide font system.
    pub fn new() -> Self {
        Self
    }

    fn font_system() -> &'static Mutex<FontSystem> {
        static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();
        FONT_SYSTEM.get_or_init(|| {
            info!("Initializing FontSystem");
            Mutex::new(FontSystem::new())
        })
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let mut font_system = Self::font_system()
            .lock()
            .expect("failed to lock FontSystem");

        let font_size_px = style.font_size() as f32;
        let metrics = Metrics::new(font_size_px, style.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if style.bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(style.font_family()))
            .weight(weight);

        // Unconstrained buffer so the line never wraps during measurement
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut measured = false;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
                measured = true;
            }
        }

        if !measured {
            // Fall back to an average-advance estimate when no glyphs shaped
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
        }

        max_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_accessors() {
        let style = TextStyle::new("monospace", 16, false, 20.0);
        assert_eq!(style.font_family(), "monospace");
        assert_eq!(style.font_size(), 16);
        assert!(!style.bold());
        assert_eq!(style.line_height(), 20.0);
    }

    #[test]
    fn test_default_style_matches_board_text() {
        let style = TextStyle::default();
        assert_eq!(style.font_family(), "Arial");
        assert_eq!(style.font_size(), 14);
        assert!(style.bold());
        assert_eq!(style.line_height(), 18.0);
    }

    #[test]
    fn test_measure_empty_is_zero() {
        let measurer = FontMeasurer::new();
        assert_eq!(measurer.measure("", &TextStyle::default()), 0.0);
    }

    #[test]
    fn test_measure_is_positive() {
        let measurer = FontMeasurer::new();
        let width = measurer.measure("Rust", &TextStyle::default());
        assert!(width > 0.0, "width should be positive, got {width}");
    }

    #[test]
    fn test_longer_text_measures_wider() {
        let measurer = FontMeasurer::new();
        let style = TextStyle::default();
        let short = measurer.measure("Go", &style);
        let long = measurer.measure("Continuous Integration", &style);
        assert!(
            long > short,
            "longer text ({long}) should measure wider than shorter ({short})"
        );
    }

    #[test]
    fn test_larger_font_measures_wider() {
        let measurer = FontMeasurer::new();
        let small = TextStyle::new("Arial", 10, true, 18.0);
        let large = TextStyle::new("Arial", 28, true, 18.0);
        let narrow = measurer.measure("Databases", &small);
        let wide = measurer.measure("Databases", &large);
        assert!(
            wide > narrow,
            "larger font ({wide}) should measure wider than smaller ({narrow})"
        );
    }
}
