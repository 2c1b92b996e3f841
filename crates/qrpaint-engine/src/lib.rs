//! qrpaint engine crate.
//!
//! This crate owns the backend-agnostic pieces the renderers share: tile
//! geometry, colors, module matrices and their cache, and the draw stream.

pub mod coords;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod paint;
pub mod scene;

pub use error::EncodingError;
