//! Error types for dropboard operations.

use std::io;

use thiserror::Error;

/// The main error type for dropboard operations.
///
/// The board itself is designed not to fail at runtime: teardown paths are
/// no-ops on empty worlds and missing placements are skipped. What can fail
/// is getting the board set up (bad configuration) or getting a frame out
/// (I/O, export backend).
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
