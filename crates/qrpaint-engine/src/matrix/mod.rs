//! Module matrices and their memoization.
//!
//! - [`QrMatrix`]: immutable square grid of dark/light modules
//! - [`MatrixGenerator`]: the encoder seam; [`QrCodeGenerator`] is the default
//! - [`MatrixCache`]: get-or-build keyed on `(text, correction level)`

mod cache;
mod generator;
mod grid;
mod level;

pub use cache::{CacheEntry, MatrixCache};
pub use generator::{MatrixGenerator, QrCodeGenerator};
pub use grid::QrMatrix;
pub use level::CorrectionLevel;
