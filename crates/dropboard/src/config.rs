//! Application configuration.
//!
//! Every section deserializes from TOML with full defaults, so an empty
//! config file (or no file at all) reproduces the board exactly as the
//! defaults describe it: an 800x600 viewport, white chamfered boxes with
//! bold 14px Arial labels, dark-green walls, and a gentle downward gravity
//! when the drop is active.

use serde::Deserialize;

use dropboard_core::{color::Color, surface::ShapeStyle, text::TextStyle};

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Style configuration section
    #[serde(default)]
    pub style: StyleConfig,

    /// Physics configuration section
    #[serde(default)]
    pub physics: PhysicsConfig,
}

/// Layout configuration section.
///
/// `container_width` and `container_height` size the drawable viewport and
/// bound the greedy packing. Callers that want a different board size set
/// them here; nothing in the pipeline assumes the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the packing container and the drawable viewport
    pub container_width: f32,

    /// Height of the drawable viewport
    pub container_height: f32,

    /// Smallest width a box may take, regardless of its label
    pub min_box_width: f32,

    /// Largest width a box may take; also the wrapping budget for labels
    pub max_box_width: f32,

    /// Fixed height of every box
    pub box_height: f32,

    /// Gap between boxes, between rows, and around the container edge
    pub padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: 800.0,
            container_height: 600.0,
            min_box_width: 80.0,
            max_box_width: 180.0,
            box_height: 40.0,
            padding: 20.0,
        }
    }
}

/// Style configuration section.
///
/// Colors are kept as strings so any CSS color notation is accepted; they are
/// validated when resolved into [`ShapeStyle`] values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    box_fill: String,
    box_stroke: String,
    box_line_width: f32,

    /// Corner rounding radius for skill boxes
    pub box_corner_radius: f32,

    wall_fill: String,
    wall_stroke: String,
    wall_line_width: f32,

    text_color: String,
    font_family: String,
    font_size: u16,
    bold: bool,

    /// Vertical distance between stacked label lines
    pub line_height: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            box_fill: "#ffffff".to_string(),
            box_stroke: "#000000".to_string(),
            box_line_width: 1.0,
            box_corner_radius: 5.0,
            wall_fill: "#0f4c3a".to_string(),
            wall_stroke: "#2d8a62".to_string(),
            wall_line_width: 2.0,
            text_color: "#000000".to_string(),
            font_family: "Arial".to_string(),
            font_size: 14,
            bold: true,
            line_height: 18.0,
        }
    }
}

impl StyleConfig {
    /// Resolve the fill/stroke descriptor for skill boxes.
    ///
    /// Returns an error naming the offending field if a color fails to parse.
    pub fn box_style(&self) -> Result<ShapeStyle, String> {
        Ok(ShapeStyle::new(
            parse_color("box_fill", &self.box_fill)?,
            parse_color("box_stroke", &self.box_stroke)?,
            self.box_line_width,
        ))
    }

    /// Resolve the fill/stroke descriptor for boundary walls.
    pub fn wall_style(&self) -> Result<ShapeStyle, String> {
        Ok(ShapeStyle::new(
            parse_color("wall_fill", &self.wall_fill)?,
            parse_color("wall_stroke", &self.wall_stroke)?,
            self.wall_line_width,
        ))
    }

    /// Resolve the label text color.
    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text_color", &self.text_color)
    }

    /// Resolve the label text style.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(
            self.font_family.clone(),
            self.font_size,
            self.bold,
            self.line_height,
        )
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("invalid {field} in config: {err}"))
}

/// Physics configuration section.
///
/// Values are in the board's pixel coordinate space. The defaults mirror the
/// visual tuning the board ships with: bouncy, light boxes and a gravity that
/// lets them tumble rather than plummet.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward gravity applied while the drop is active
    pub gravity_y: f32,

    /// Bounciness of skill boxes
    pub restitution: f32,

    /// Surface friction of skill boxes
    pub friction: f32,

    /// Air resistance applied to moving boxes
    pub air_damping: f32,

    /// Mass density of skill boxes
    pub density: f32,

    /// Full span of the random horizontal kick, centered on zero
    pub kick_x: f32,

    /// Magnitude bound of the random upward kick
    pub kick_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: 0.5,
            restitution: 0.8,
            friction: 0.18,
            air_damping: 0.001,
            density: 0.001,
            kick_x: 4.0,
            kick_y: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_constants() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.container_width, 800.0);
        assert_eq!(layout.container_height, 600.0);
        assert_eq!(layout.min_box_width, 80.0);
        assert_eq!(layout.max_box_width, 180.0);
        assert_eq!(layout.box_height, 40.0);
        assert_eq!(layout.padding, 20.0);
    }

    #[test]
    fn test_default_styles_resolve() {
        let style = StyleConfig::default();
        assert!(style.box_style().is_ok());
        assert!(style.wall_style().is_ok());
        assert!(style.text_color().is_ok());
        assert_eq!(style.text_style().font_size(), 14);
    }

    #[test]
    fn test_invalid_color_names_field() {
        let style = StyleConfig {
            wall_fill: "chartreuse-ish".to_string(),
            ..StyleConfig::default()
        };
        let err = style.wall_style().unwrap_err();
        assert!(err.contains("wall_fill"), "error should name the field: {err}");
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.container_width, 800.0);
        assert_eq!(config.physics.gravity_y, 0.5);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            container_width = 1024.0

            [physics]
            gravity_y = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.container_width, 1024.0);
        assert_eq!(config.layout.container_height, 600.0);
        assert_eq!(config.physics.gravity_y, 1.0);
        assert_eq!(config.physics.restitution, 0.8);
    }
}
