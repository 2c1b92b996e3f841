//! Paint model shared by the render backends.
//!
//! Output is limited to two flat colors per render, so the only paint source
//! is a solid [`Color`]. Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
