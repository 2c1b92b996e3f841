use super::{Canvas, Rect};

/// How a canvas is divided into per-module tiles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TileRule {
    /// Each edge sits at `floor(i * size / n)`, so tiles differ by at most one
    /// pixel and together cover the whole canvas.
    GapFree,
    /// Every tile is `floor(size / n)` wide; the remainder at the far edge is
    /// left uncovered.
    Uniform,
}

/// Tile arithmetic for one `(canvas, module_count)` pair.
///
/// Derived per render call; never stored alongside the matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TileGeometry {
    canvas: Canvas,
    module_count: u32,
}

impl TileGeometry {
    /// # Panics
    /// Panics (debug only) if `module_count` is zero.
    #[inline]
    pub fn new(canvas: Canvas, module_count: usize) -> Self {
        debug_assert!(module_count > 0, "TileGeometry requires at least one module");
        let module_count = u32::try_from(module_count.max(1)).unwrap_or(u32::MAX);
        Self { canvas, module_count }
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn module_count(&self) -> u32 {
        self.module_count
    }

    /// Uniform tile width, `floor(width / n)`.
    #[inline]
    pub fn tile_width(&self) -> u32 {
        self.canvas.width / self.module_count
    }

    /// Uniform tile height, `floor(height / n)`.
    #[inline]
    pub fn tile_height(&self) -> u32 {
        self.canvas.height / self.module_count
    }

    #[inline]
    pub fn exact_tile_width(&self) -> f64 {
        f64::from(self.canvas.width) / f64::from(self.module_count)
    }

    #[inline]
    pub fn exact_tile_height(&self) -> f64 {
        f64::from(self.canvas.height) / f64::from(self.module_count)
    }

    /// Pixel rectangle covered by the module at `(row, col)`.
    pub fn cell_rect(&self, row: u32, col: u32, rule: TileRule) -> Rect {
        match rule {
            TileRule::GapFree => {
                let x0 = edge(col, self.canvas.width, self.module_count);
                let x1 = edge(col + 1, self.canvas.width, self.module_count);
                let y0 = edge(row, self.canvas.height, self.module_count);
                let y1 = edge(row + 1, self.canvas.height, self.module_count);
                Rect::new(x0, y0, x1 - x0, y1 - y0)
            }
            TileRule::Uniform => {
                let tw = self.tile_width();
                let th = self.tile_height();
                Rect::new(col * tw, row * th, tw, th)
            }
        }
    }

    /// Area left uncovered by [`TileRule::Uniform`] along each axis.
    #[inline]
    pub fn uniform_remainder(&self) -> (u32, u32) {
        (
            self.canvas.width % self.module_count,
            self.canvas.height % self.module_count,
        )
    }
}

// Computed in u64 so `index * size` cannot overflow for any u32 canvas.
#[inline]
fn edge(index: u32, size: u32, n: u32) -> u32 {
    (u64::from(index) * u64::from(size) / u64::from(n)) as u32
}
