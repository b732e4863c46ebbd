//! Dropboard CLI library
//!
//! This module contains the core CLI logic for the dropboard skill board
//! tool.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;
use serde::Deserialize;

use dropboard::{BoardError, SkillBoard, skill::Skill};

/// Input file format: a list of `[[skill]]` tables.
#[derive(Debug, Deserialize)]
struct SkillsFile {
    #[serde(default)]
    skill: Vec<Skill>,
}

/// Run the dropboard CLI application
///
/// This function reads the skills listed in the input file, renders the
/// requested board state, and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `BoardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), BoardError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing skill board"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;
    let skills_file: SkillsFile = toml::from_str(&source)
        .map_err(|e| BoardError::Config(format!("Failed to parse skills file: {e}")))?;

    // Render using the SkillBoard API
    let board = SkillBoard::new(app_config);
    let svg = if args.drop {
        board.render_drop_svg(&skills_file.skill, args.steps)?
    } else {
        board.render_svg(&skills_file.skill)?
    };

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
