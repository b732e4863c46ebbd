//! Core types for the dropboard skill board.
//!
//! This crate provides the capability seams the board is built on: geometric
//! primitives, a color wrapper, text styling and measurement, and the
//! [`surface::Surface`] trait that rendering backends implement.

pub mod color;
pub mod geometry;
pub mod surface;
pub mod text;
