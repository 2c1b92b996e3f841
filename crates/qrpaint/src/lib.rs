//! qrpaint: paint QR module matrices onto a raster bitmap, a markup table,
//! or an SVG document.
//!
//! # Quick start
//!
//! ```rust
//! use qrpaint::prelude::*;
//!
//! let renderer = Renderer::new();
//!
//! // A bare payload uses the defaults: 256x256, correction code 3, black on white.
//! let node = renderer.render("HELLO").unwrap();
//! let png = node.as_raster().unwrap().to_png().unwrap();
//! assert!(!png.is_empty());
//!
//! // Or configure everything.
//! let svg = renderer
//!     .render(
//!         RenderConfig::new("HELLO")
//!             .with_mode(RenderMode::Vector)
//!             .with_size(210, 210)
//!             .with_foreground("#223388".parse().unwrap()),
//!     )
//!     .unwrap();
//! assert!(svg.as_vector().unwrap().source().contains("<rect"));
//! ```
//!
//! # Choosing a backend
//!
//! [`RenderMode::Auto`] asks the renderer's [`Capabilities`] whether the host
//! can show raster output, then vector output, and falls back to the table.
//! Inject [`StaticCapabilities`] or [`FnCapabilities`] to describe the host.
//!
//! # Matrices
//!
//! Matrices come from a [`MatrixGenerator`](qrpaint_engine::matrix::MatrixGenerator)
//! and are memoized in a [`MatrixCache`](qrpaint_engine::matrix::MatrixCache)
//! keyed on `(text, correction level)`. Pass a shared cache to
//! [`Renderer::with_parts`] to reuse matrices across renderers.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod render;
pub mod renderer;

pub use capabilities::{Capabilities, FnCapabilities, StaticCapabilities};
pub use config::{RenderConfig, RenderMode};
pub use error::RenderError;
pub use render::{BackendKind, Rendered};
pub use renderer::Renderer;

/// Everything needed to configure and run a render.
pub mod prelude {
    pub use crate::capabilities::{Capabilities, FnCapabilities, StaticCapabilities};
    pub use crate::config::{RenderConfig, RenderMode};
    pub use crate::error::RenderError;
    pub use crate::render::{
        Backend, BackendKind, RasterRenderer, RasterSurface, Rendered, TableElement, TableRenderer,
        VectorDocument, VectorRenderer,
    };
    pub use crate::renderer::Renderer;

    // Re-export the engine primitives callers need.
    pub use qrpaint_engine::matrix::{CorrectionLevel, MatrixCache, MatrixGenerator, QrMatrix};
    pub use qrpaint_engine::paint::Color;
    pub use qrpaint_engine::EncodingError;
}
