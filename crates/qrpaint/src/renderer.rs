use std::sync::Arc;

use qrpaint_engine::matrix::{MatrixCache, MatrixGenerator, QrCodeGenerator};

use crate::capabilities::{Capabilities, StaticCapabilities};
use crate::config::{RenderConfig, RenderMode};
use crate::error::RenderError;
use crate::render::{Backend, BackendKind, RasterRenderer, Rendered, TableRenderer, VectorRenderer};

/// Top-level entry point: config → cached matrix → backend.
///
/// The matrix cache is shared through an `Arc`, so several renderers (or
/// clones of one) reuse each other's matrices. Rendering itself is never
/// memoized: every call returns a fresh node.
///
/// ```rust
/// use qrpaint::{RenderConfig, RenderMode, Renderer};
///
/// let renderer = Renderer::new();
/// let node = renderer.render(RenderConfig::new("HELLO").with_mode(RenderMode::Table)).unwrap();
/// assert_eq!(node.mode(), RenderMode::Table);
/// ```
pub struct Renderer<G = QrCodeGenerator, C = StaticCapabilities> {
    cache:        Arc<MatrixCache<G>>,
    capabilities: C,
}

impl Renderer {
    /// `qrcode`-backed cache and a host that can show everything.
    pub fn new() -> Self {
        Self::with_parts(Arc::new(MatrixCache::default()), StaticCapabilities::default())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MatrixGenerator, C: Capabilities> Renderer<G, C> {
    pub fn with_parts(cache: Arc<MatrixCache<G>>, capabilities: C) -> Self {
        Self { cache, capabilities }
    }

    /// Swaps the capability source, keeping the cache.
    pub fn capabilities<C2: Capabilities>(self, capabilities: C2) -> Renderer<G, C2> {
        Renderer { cache: self.cache, capabilities }
    }

    #[inline]
    pub fn cache(&self) -> &Arc<MatrixCache<G>> {
        &self.cache
    }

    /// Renders a bare payload or a full [`RenderConfig`].
    ///
    /// Encoding failures surface as [`RenderError::Encoding`]; nothing is
    /// returned unless the node is complete.
    pub fn render(&self, input: impl Into<RenderConfig>) -> Result<Rendered, RenderError> {
        let config = input.into();
        if !config.canvas().is_valid() {
            return Err(RenderError::InvalidSize { width: config.width(), height: config.height() });
        }

        let matrix = self.cache.get_or_build(config.text(), config.correction_level())?;
        let backend = self.resolve_mode(config.mode());
        log::debug!(
            "rendering {n}x{n} matrix as {backend} at {w}x{h}",
            n = matrix.module_count(),
            w = config.width(),
            h = config.height(),
        );

        Ok(match backend {
            BackendKind::Raster => Rendered::Raster(RasterRenderer.render(&matrix, &config)?),
            BackendKind::Vector => Rendered::Vector(VectorRenderer.render(&matrix, &config)?),
            BackendKind::Table => Rendered::Table(TableRenderer.build(&matrix, &config)),
        })
    }

    /// Maps a requested mode to a concrete backend. `Auto` tries raster, then
    /// vector, then table.
    pub fn resolve_mode(&self, mode: RenderMode) -> BackendKind {
        match mode {
            RenderMode::Raster => BackendKind::Raster,
            RenderMode::Table => BackendKind::Table,
            RenderMode::Vector => BackendKind::Vector,
            RenderMode::Auto if self.capabilities.supports_raster() => BackendKind::Raster,
            RenderMode::Auto if self.capabilities.supports_vector() => BackendKind::Vector,
            RenderMode::Auto => BackendKind::Table,
        }
    }
}

impl<G, C: Clone> Clone for Renderer<G, C> {
    fn clone(&self) -> Self {
        Self { cache: Arc::clone(&self.cache), capabilities: self.capabilities.clone() }
    }
}
