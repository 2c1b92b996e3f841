//! Render backends.
//!
//! Each backend turns a shared, read-only [`QrMatrix`] plus a [`RenderConfig`]
//! into a fresh output node. Backends keep no state between calls.
//!
//! | Backend | Output | Tiles |
//! |---------|--------|-------|
//! | [`RasterRenderer`] | [`RasterSurface`] (RGBA bitmap) | gap-free |
//! | [`TableRenderer`] | [`TableElement`] (markup table) | uniform |
//! | [`VectorRenderer`] | [`VectorDocument`] (parsed SVG) | uniform |

pub mod raster;
pub mod table;
pub mod vector;

pub use raster::{RasterRenderer, RasterSurface};
pub use table::{TableCell, TableElement, TableRenderer, TableRow};
pub use vector::{VectorDocument, VectorRenderer};

use std::fmt;

use qrpaint_engine::matrix::QrMatrix;

use crate::config::{RenderConfig, RenderMode};
use crate::error::RenderError;

/// A backend that can paint a matrix.
pub trait Backend {
    type Output;

    fn render(&self, matrix: &QrMatrix, config: &RenderConfig) -> Result<Self::Output, RenderError>;
}

/// A concrete backend, as picked by
/// [`Renderer::resolve_mode`](crate::Renderer::resolve_mode).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BackendKind {
    Raster,
    Table,
    Vector,
}

impl From<BackendKind> for RenderMode {
    fn from(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Raster => RenderMode::Raster,
            BackendKind::Table => RenderMode::Table,
            BackendKind::Vector => RenderMode::Vector,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RenderMode::from(*self).name())
    }
}

/// Output of a dispatched render, tagged by the backend that produced it.
#[derive(Debug)]
pub enum Rendered {
    Raster(RasterSurface),
    Table(TableElement),
    Vector(VectorDocument),
}

impl Rendered {
    /// The concrete mode that produced this node (never [`RenderMode::Auto`]).
    pub fn mode(&self) -> RenderMode {
        self.backend().into()
    }

    pub fn backend(&self) -> BackendKind {
        match self {
            Rendered::Raster(_) => BackendKind::Raster,
            Rendered::Table(_) => BackendKind::Table,
            Rendered::Vector(_) => BackendKind::Vector,
        }
    }

    pub fn as_raster(&self) -> Option<&RasterSurface> {
        match self {
            Rendered::Raster(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableElement> {
        match self {
            Rendered::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&VectorDocument> {
        match self {
            Rendered::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_raster(self) -> Option<RasterSurface> {
        match self {
            Rendered::Raster(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<TableElement> {
        match self {
            Rendered::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_vector(self) -> Option<VectorDocument> {
        match self {
            Rendered::Vector(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use qrpaint_engine::matrix::{CorrectionLevel, QrMatrix};

    /// `n × n` checkerboard, dark where `row + col` is even.
    pub fn checker(n: usize) -> QrMatrix {
        let modules = (0..n * n).map(|i| (i / n + i % n) % 2 == 0).collect();
        QrMatrix::new("checker", CorrectionLevel::Low, n, modules).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use qrpaint_engine::coords::{TileGeometry, TileRule};
    use qrpaint_engine::matrix::{CorrectionLevel, MatrixGenerator, QrCodeGenerator};
    use qrpaint_engine::paint::Color;

    use super::*;

    /// Every backend darkens exactly the dark modules of a real QR matrix.
    #[test]
    fn all_backends_agree_on_dark_modules() {
        let m = QrCodeGenerator.build("HELLO", CorrectionLevel::Quartile).unwrap();
        let n = m.module_count() as u32;
        let config = RenderConfig::new("HELLO").with_size(n * 6, n * 6);
        let geo = TileGeometry::new(config.canvas(), m.module_count());

        let raster = RasterRenderer.render(&m, &config).unwrap();
        let table = TableRenderer.render(&m, &config).unwrap();
        let pixmap = VectorRenderer.render(&m, &config).unwrap().rasterize().unwrap();

        for (row, col, dark) in m.cells() {
            let rect = geo.cell_rect(row as u32, col as u32, TileRule::Uniform);
            let (cx, cy) = (rect.x + rect.w / 2, rect.y + rect.h / 2);

            let raster_dark = raster.pixel(cx, cy) == Some(Color::black());
            let table_dark = table.cell(row, col).map(|c| c.color) == Some(Color::black());
            let vector_dark = pixmap.pixel(cx, cy).map(|p| p.red()) == Some(0);

            assert_eq!(raster_dark, dark, "raster module ({row},{col})");
            assert_eq!(table_dark, dark, "table module ({row},{col})");
            assert_eq!(vector_dark, dark, "vector module ({row},{col})");
        }
    }

    #[test]
    fn rendered_reports_its_mode() {
        let m = fixtures::checker(3);
        let config = RenderConfig::new("");
        let table = Rendered::Table(TableRenderer.build(&m, &config));
        assert_eq!(table.mode(), RenderMode::Table);
        assert_eq!(table.backend(), BackendKind::Table);
        assert_eq!(BackendKind::Table.to_string(), "table");
        assert!(table.as_raster().is_none());
        assert!(table.into_table().is_some());
    }
}
