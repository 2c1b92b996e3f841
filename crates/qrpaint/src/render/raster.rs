use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use qrpaint_engine::coords::{Canvas, TileRule};
use qrpaint_engine::matrix::QrMatrix;
use qrpaint_engine::paint::Color;
use qrpaint_engine::scene::DrawList;

use crate::config::RenderConfig;
use crate::error::RenderError;

use super::Backend;

/// A fully painted bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocates a surface filled with `fill`.
    ///
    /// The buffer length is checked up front so an absurd size surfaces as
    /// [`RenderError::SurfaceAllocation`] rather than a panic inside `image`.
    pub fn new(canvas: Canvas, fill: Color) -> Result<Self, RenderError> {
        let alloc_err = || RenderError::SurfaceAllocation {
            width: canvas.width,
            height: canvas.height,
        };
        let len = canvas.rgba_len().ok_or_else(alloc_err)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| alloc_err())?;
        buf.extend(fill.to_array().iter().copied().cycle().take(len));
        let image = RgbaImage::from_raw(canvas.width, canvas.height, buf).ok_or_else(alloc_err)?;
        Ok(Self { image })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, a])| Color::rgba(*r, *g, *b, *a))
    }

    /// Paints every command in the list. Rects are clipped to the surface;
    /// zero-size ones paint nothing.
    pub fn paint(&mut self, list: &DrawList) {
        let (w, h) = (self.width(), self.height());
        for cmd in list.items() {
            let Some(rect) = cmd.rect.clipped_to(w, h) else {
                continue;
            };
            let px = Rgba(cmd.color.to_array());
            for y in rect.y..rect.max_y() {
                for x in rect.x..rect.max_x() {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }

    /// Encodes the surface as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}

/// Paints the matrix onto a bitmap with gap-free tiles.
#[derive(Debug, Copy, Clone, Default)]
pub struct RasterRenderer;

impl Backend for RasterRenderer {
    type Output = RasterSurface;

    fn render(&self, matrix: &QrMatrix, config: &RenderConfig) -> Result<RasterSurface, RenderError> {
        let canvas = config.canvas();
        let mut surface = RasterSurface::new(canvas, config.background())?;
        let list = DrawList::from_matrix(
            matrix,
            canvas,
            TileRule::GapFree,
            config.foreground(),
            config.background(),
        );
        surface.paint(&list);
        Ok(surface)
    }
}
