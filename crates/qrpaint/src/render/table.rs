use std::fmt;

use qrpaint_engine::coords::TileGeometry;
use qrpaint_engine::matrix::QrMatrix;
use qrpaint_engine::paint::Color;

use crate::config::RenderConfig;
use crate::error::RenderError;

use super::Backend;

const RESET: &str = "border:0px; margin:0px; padding:0px;";

/// One `<td>`: a uniform-width cell filled with a flat color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub width: u32,
    pub color: Color,
    pub dark: bool,
}

/// One `<tr>` of fixed height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub height: u32,
    pub cells: Vec<TableCell>,
}

/// Root `<table>` node.
///
/// The table background is the light color, so any space the uniform tiles
/// leave at the far edge blends in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableElement {
    pub background: Color,
    pub rows: Vec<TableRow>,
}

impl TableElement {
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell at `(row, col)`, if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    /// Serializes the element to markup.
    #[inline]
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TableElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<table style="{RESET} border-collapse:collapse; background-color: {};">"#,
            self.background
        )?;
        for row in &self.rows {
            write!(f, r#"<tr style="{RESET} height: {}px">"#, row.height)?;
            for cell in &row.cells {
                write!(
                    f,
                    r#"<td style="{RESET} width:{}px; background-color: {}"></td>"#,
                    cell.width, cell.color
                )?;
            }
            f.write_str("</tr>")?;
        }
        f.write_str("</table>")
    }
}

/// Emits the matrix as a table of uniformly sized, colored cells.
#[derive(Debug, Copy, Clone, Default)]
pub struct TableRenderer;

impl TableRenderer {
    /// Table construction cannot fail; this is the infallible form of
    /// [`Backend::render`].
    pub fn build(&self, matrix: &QrMatrix, config: &RenderConfig) -> TableElement {
        let geometry = TileGeometry::new(config.canvas(), matrix.module_count());
        let (tile_w, tile_h) = (geometry.tile_width(), geometry.tile_height());
        let fg = config.foreground();
        let bg = config.background();

        let rows = matrix
            .rows()
            .map(|modules| TableRow {
                height: tile_h,
                cells: modules
                    .iter()
                    .map(|&dark| TableCell {
                        width: tile_w,
                        color: if dark { fg } else { bg },
                        dark,
                    })
                    .collect(),
            })
            .collect();

        TableElement { background: bg, rows }
    }
}

impl Backend for TableRenderer {
    type Output = TableElement;

    fn render(&self, matrix: &QrMatrix, config: &RenderConfig) -> Result<TableElement, RenderError> {
        Ok(self.build(matrix, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn grid_has_one_cell_per_module() {
        let m = fixtures::checker(25);
        let t = TableRenderer.build(&m, &RenderConfig::new("").with_size(100, 100));
        assert_eq!(t.row_count(), 25);
        for row in &t.rows {
            assert_eq!(row.height, 4);
            assert_eq!(row.cells.len(), 25);
            assert!(row.cells.iter().all(|c| c.width == 4));
        }
    }

    #[test]
    fn cells_follow_matrix_values() {
        let m = fixtures::checker(5);
        let config = RenderConfig::new("").with_foreground(Color::rgb(9, 9, 9));
        let t = TableRenderer.build(&m, &config);
        for (row, col, dark) in m.cells() {
            let cell = t.cell(row, col).unwrap();
            assert_eq!(cell.dark, dark);
            let want = if dark { Color::rgb(9, 9, 9) } else { Color::white() };
            assert_eq!(cell.color, want);
        }
        assert_eq!(t.background, Color::white());
    }

    #[test]
    fn markup_shape() {
        let m = fixtures::checker(2);
        let html = TableRenderer.build(&m, &RenderConfig::new("").with_size(10, 10)).to_markup();
        assert!(html.starts_with(
            r#"<table style="border:0px; margin:0px; padding:0px; border-collapse:collapse; background-color: #ffffff;">"#
        ));
        assert!(html.ends_with("</tr></table>"));
        assert_eq!(html.matches("<tr ").count(), 2);
        assert_eq!(html.matches("<td ").count(), 4);
        assert_eq!(html.matches("background-color: #000000").count(), 2);
        assert!(html.contains("height: 5px"));
        assert!(html.contains("width:5px;"));
    }
}
