use crate::error::EncodingError;

use super::CorrectionLevel;

/// Square grid of QR modules; `true` is a dark module.
///
/// Built once by a [`MatrixGenerator`](super::MatrixGenerator) and never
/// mutated afterwards. Renderers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    text: String,
    level: CorrectionLevel,
    module_count: usize,
    /// Row-major, `module_count * module_count` entries.
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Wraps a row-major module buffer.
    ///
    /// Fails if the buffer is empty or not a perfect square of `module_count`.
    pub fn new(
        text: impl Into<String>,
        level: CorrectionLevel,
        module_count: usize,
        modules: Vec<bool>,
    ) -> Result<Self, EncodingError> {
        if module_count == 0 {
            return Err(EncodingError::EmptyMatrix);
        }
        if module_count.checked_mul(module_count) != Some(modules.len()) {
            return Err(EncodingError::NotSquare { side: module_count, cells: modules.len() });
        }
        Ok(Self { text: text.into(), level, module_count, modules })
    }

    /// Builds a matrix from nested rows. Handy for hand-written fixtures.
    pub fn from_rows(
        text: impl Into<String>,
        level: CorrectionLevel,
        rows: &[&[bool]],
    ) -> Result<Self, EncodingError> {
        let n = rows.len();
        let modules: Vec<bool> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::new(text, level, n, modules)
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn correction_level(&self) -> CorrectionLevel {
        self.level
    }

    #[inline]
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// Returns `true` for a dark module. Out-of-range indices read as light.
    #[inline]
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        if row >= self.module_count || col >= self.module_count {
            return false;
        }
        self.modules[row * self.module_count + col]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks_exact(self.module_count)
    }

    /// Iterates `(row, col, dark)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let n = self.module_count;
        self.modules.iter().enumerate().map(move |(i, &dark)| (i / n, i % n, dark))
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&d| d).count()
    }

    /// True when both matrices carry the same module data, regardless of key.
    pub fn same_modules(&self, other: &QrMatrix) -> bool {
        self.module_count == other.module_count && self.modules == other.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: CorrectionLevel = CorrectionLevel::Low;

    #[test]
    fn rejects_empty_and_ragged_buffers() {
        assert_eq!(QrMatrix::new("x", L, 0, vec![]), Err(EncodingError::EmptyMatrix));
        assert_eq!(
            QrMatrix::new("x", L, 2, vec![true; 3]),
            Err(EncodingError::NotSquare { side: 2, cells: 3 })
        );
    }

    #[test]
    fn indexes_row_major() {
        let m = QrMatrix::from_rows("x", L, &[&[true, false], &[false, false]]).unwrap();
        assert!(m.is_dark(0, 0));
        assert!(!m.is_dark(0, 1));
        assert!(!m.is_dark(5, 0));
        assert_eq!(m.dark_count(), 1);
        assert_eq!(m.rows().count(), 2);
        assert_eq!(m.cells().nth(2), Some((1, 0, false)));
    }
}
