//! Coordinate and geometry types shared across the render backends.
//!
//! Canonical space:
//! - Whole device pixels (raster) or user units (SVG, table)
//! - Origin top-left
//! - +X right, +Y down

mod canvas;
mod rect;
mod tile;

pub use canvas::Canvas;
pub use rect::Rect;
pub use tile::{TileGeometry, TileRule};
