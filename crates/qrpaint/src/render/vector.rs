use std::fmt;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use qrpaint_engine::coords::{Canvas, TileRule};
use qrpaint_engine::matrix::QrMatrix;
use qrpaint_engine::paint::Color;
use qrpaint_engine::scene::DrawList;

use crate::config::RenderConfig;
use crate::error::RenderError;

use super::Backend;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A parsed SVG document together with the markup it came from.
pub struct VectorDocument {
    source: String,
    tree: Tree,
}

impl fmt::Debug for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.tree.size();
        f.debug_struct("VectorDocument")
            .field("width", &size.width())
            .field("height", &size.height())
            .field("source_len", &self.source.len())
            .finish()
    }
}

impl VectorDocument {
    /// Parses `source` into a render tree.
    pub fn parse(source: String) -> Result<Self, RenderError> {
        let tree = Tree::from_str(&source, &Options::default())
            .map_err(|e| RenderError::Vector(e.to_string()))?;
        Ok(Self { source, tree })
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.tree.size().width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.tree.size().height()
    }

    /// Rasterizes the document at its natural size.
    pub fn rasterize(&self) -> Result<Pixmap, RenderError> {
        let size = self.tree.size().to_int_size();
        let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or(
            RenderError::SurfaceAllocation { width: size.width(), height: size.height() },
        )?;
        resvg::render(&self.tree, Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

/// Emits one `<rect>` per module with uniform tiles.
#[derive(Debug, Copy, Clone, Default)]
pub struct VectorRenderer;

impl VectorRenderer {
    /// Builds the SVG markup without parsing it.
    pub fn markup(&self, matrix: &QrMatrix, config: &RenderConfig) -> String {
        let canvas = config.canvas();
        let list = DrawList::from_matrix(
            matrix,
            canvas,
            TileRule::Uniform,
            config.foreground(),
            config.background(),
        );
        SvgMarkup { canvas, list: &list }.to_string()
    }
}

impl Backend for VectorRenderer {
    type Output = VectorDocument;

    fn render(&self, matrix: &QrMatrix, config: &RenderConfig) -> Result<VectorDocument, RenderError> {
        VectorDocument::parse(self.markup(matrix, config))
    }
}

/// Root `<svg>` element with one `<rect>` per draw command.
struct SvgMarkup<'a> {
    canvas: Canvas,
    list: &'a DrawList,
}

impl fmt::Display for SvgMarkup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.canvas.width,
            h = self.canvas.height,
        )?;
        for cmd in self.list.items() {
            let r = cmd.rect;
            write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                r.x,
                r.y,
                r.w,
                r.h,
                FillAttrs(cmd.color)
            )?;
        }
        f.write_str("</svg>")
    }
}

/// `fill` plus `fill-opacity` when the color is translucent.
struct FillAttrs(Color);

impl fmt::Display for FillAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b, a } = self.0;
        write!(f, r##"fill="#{r:02x}{g:02x}{b:02x}""##)?;
        if a != 255 {
            write!(f, r#" fill-opacity="{:.3}""#, f32::from(a) / 255.0)?;
        }
        Ok(())
    }
}
