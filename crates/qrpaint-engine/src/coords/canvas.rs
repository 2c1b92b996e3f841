/// Requested output size in pixels (raster) or user units (SVG, table).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Byte length of an RGBA8 buffer covering the canvas, or `None` on overflow.
    #[inline]
    pub fn rgba_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }
}
