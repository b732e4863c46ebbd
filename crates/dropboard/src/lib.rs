//! Dropboard - a physics-enabled skill board
//!
//! This library lays out short skill labels as a packed grid of rounded boxes,
//! simulates them as rigid bodies inside a walled container, and renders
//! frames of either state (the tidy grid or the physics drop) to SVG.

pub mod board;
pub mod config;
pub mod export;
pub mod layout;
pub mod skill;

mod error;

pub use dropboard_core::{color, geometry, surface, text};

pub use error::BoardError;

use log::info;

use dropboard_core::geometry::Size;

use board::BoardController;
use config::AppConfig;
use export::svg::SvgSurface;
use skill::Skill;

/// Builder for rendering skill boards.
///
/// This provides an API for producing board frames without managing the
/// controller lifecycle by hand: each call spins up a controller, runs it to
/// the requested state, and renders one frame.
///
/// Interactive hosts that need the live toggle drive a
/// [`BoardController`] directly instead.
///
/// # Examples
///
/// ```rust,no_run
/// use dropboard::{SkillBoard, config::AppConfig, skill::Skill};
///
/// let skills = vec![
///     Skill::new("rust", "Rust"),
///     Skill::new("sql", "SQL"),
/// ];
///
/// // With custom config
/// let config = AppConfig::default();
/// let board = SkillBoard::new(config);
///
/// // Render the static grid to SVG
/// let svg = board.render_svg(&skills)
///     .expect("Failed to render");
///
/// // Or use default config
/// let board = SkillBoard::default();
/// ```
#[derive(Default)]
pub struct SkillBoard {
    config: AppConfig,
}

impl SkillBoard {
    /// Create a new skill board with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, style, and
    ///   physics settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render the static grid state to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the configured styles fail to resolve.
    pub fn render_svg(&self, skills: &[Skill]) -> Result<String, BoardError> {
        info!(skills = skills.len(); "Rendering static grid");
        let mut controller = BoardController::new(self.config.clone())?;
        let mut surface = self.new_surface();

        controller.initialize(&surface, skills);
        controller.draw(&mut surface);
        controller.dispose();

        let svg_string = surface.finish().to_string();
        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    /// Render a frame of the physics drop after `steps` simulation ticks.
    ///
    /// The board is initialized as a grid, toggled into the drop state (which
    /// applies gravity and random kicks), and stepped before drawing.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the configured styles fail to resolve.
    pub fn render_drop_svg(&self, skills: &[Skill], steps: u32) -> Result<String, BoardError> {
        info!(skills = skills.len(), steps; "Rendering physics drop");
        let mut controller = BoardController::new(self.config.clone())?;
        let mut surface = self.new_surface();

        controller.initialize(&surface, skills);
        controller.toggle(&surface, skills);
        for _ in 0..steps {
            controller.step();
        }
        controller.draw(&mut surface);
        controller.dispose();

        let svg_string = surface.finish().to_string();
        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    fn new_surface(&self) -> SvgSurface {
        SvgSurface::new(Size::new(
            self.config.layout.container_width,
            self.config.layout.container_height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_skills() -> Vec<Skill> {
        vec![
            Skill::new("rust", "Rust"),
            Skill::new("sql", "SQL"),
            Skill::new("ci", "Continuous Integration"),
        ]
    }

    #[test]
    fn test_render_svg_contains_every_label_word() {
        let board = SkillBoard::default();
        let svg = board.render_svg(&demo_skills()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Rust"));
        assert!(svg.contains("SQL"));
        // Long labels may wrap, but every word survives
        assert!(svg.contains("Continuous"));
        assert!(svg.contains("Integration"));
    }

    #[test]
    fn test_render_drop_svg_produces_document() {
        let board = SkillBoard::default();
        let svg = board.render_drop_svg(&demo_skills(), 30).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Rust"));
    }

    #[test]
    fn test_render_empty_board() {
        let board = SkillBoard::default();
        let svg = board.render_svg(&[]).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_bad_config_is_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            box_fill = "not-a-color"
            "#,
        )
        .unwrap();
        let board = SkillBoard::new(config);
        let err = board.render_svg(&demo_skills()).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }
}
