use thiserror::Error;

use crate::matrix::CorrectionLevel;

/// A payload that could not be turned into a module matrix.
///
/// Raised by the matrix generator and surfaced unchanged through the cache and
/// every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("payload of {len} bytes does not fit any QR version at correction level {level:?}")]
    DataTooLong { len: usize, level: CorrectionLevel },

    #[error("payload contains a character the encoder cannot represent")]
    InvalidCharacter,

    #[error("unknown correction level code {0}; expected 0..=3")]
    InvalidCorrectionLevel(u8),

    #[error("matrix has no modules")]
    EmptyMatrix,

    #[error("module grid of {cells} cells is not {side}×{side}")]
    NotSquare { side: usize, cells: usize },

    #[error("matrix generator failed: {0}")]
    Generator(String),
}
