//! Export backends for rendered board frames.
//!
//! A frame is produced by handing a [`Surface`] implementation to
//! [`BoardController::draw`]; the backends in this module implement that
//! trait for concrete output formats.
//!
//! # Available Backends
//!
//! - [`svg`] — in-memory SVG documents via [`svg::SvgSurface`]
//!
//! [`Surface`]: dropboard_core::surface::Surface
//! [`BoardController::draw`]: crate::board::BoardController::draw

/// SVG export backend.
pub mod svg;
