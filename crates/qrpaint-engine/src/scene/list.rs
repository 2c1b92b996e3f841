use crate::coords::{Canvas, TileGeometry, TileRule};
use crate::matrix::QrMatrix;
use crate::paint::Color;

use super::RectCmd;

/// Recorded draw stream for one render.
///
/// Paint order is insertion order. Tiles never overlap under either
/// [`TileRule`], so order only matters for debugging output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<RectCmd>,
}

impl DrawList {
    /// Records exactly one rect per module in row-major order.
    ///
    /// Dark modules get `foreground`, light ones `background`. Tiles that
    /// collapse to zero size on a small canvas are still recorded, so the
    /// list length is always `n * n`.
    pub fn from_matrix(
        matrix: &QrMatrix,
        canvas: Canvas,
        rule: TileRule,
        foreground: Color,
        background: Color,
    ) -> Self {
        let geometry = TileGeometry::new(canvas, matrix.module_count());
        log::trace!(
            "tiling {n}x{n} modules onto {w}x{h} ({rule:?}, tile {tw}x{th})",
            n = matrix.module_count(),
            w = canvas.width,
            h = canvas.height,
            tw = geometry.tile_width(),
            th = geometry.tile_height(),
        );

        let items = matrix
            .cells()
            .map(|(row, col, dark)| {
                let rect = geometry.cell_rect(row as u32, col as u32, rule);
                let color = if dark { foreground } else { background };
                RectCmd::new(rect, color, dark)
            })
            .collect();
        Self { items }
    }

    #[inline]
    pub fn items(&self) -> &[RectCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
