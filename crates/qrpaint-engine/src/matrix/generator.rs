use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::error::EncodingError;

use super::{CorrectionLevel, QrMatrix};

/// Builds module matrices from payloads.
///
/// Encoding (mode selection, Reed-Solomon, masking, version choice) lives
/// behind this trait; the render path only reads the resulting grid.
pub trait MatrixGenerator: Send + Sync {
    fn build(&self, text: &str, level: CorrectionLevel) -> Result<QrMatrix, EncodingError>;
}

impl<G: MatrixGenerator + ?Sized> MatrixGenerator for &G {
    fn build(&self, text: &str, level: CorrectionLevel) -> Result<QrMatrix, EncodingError> {
        (**self).build(text, level)
    }
}

/// Default generator backed by the `qrcode` crate.
#[derive(Debug, Copy, Clone, Default)]
pub struct QrCodeGenerator;

impl MatrixGenerator for QrCodeGenerator {
    fn build(&self, text: &str, level: CorrectionLevel) -> Result<QrMatrix, EncodingError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(level))
            .map_err(|e| map_qr_error(e, text.len(), level))?;

        let module_count = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();

        QrMatrix::new(text, level, module_count, modules)
    }
}

fn ec_level(level: CorrectionLevel) -> EcLevel {
    match level {
        CorrectionLevel::Low => EcLevel::L,
        CorrectionLevel::Medium => EcLevel::M,
        CorrectionLevel::Quartile => EcLevel::Q,
        CorrectionLevel::High => EcLevel::H,
    }
}

fn map_qr_error(err: QrError, len: usize, level: CorrectionLevel) -> EncodingError {
    match err {
        QrError::DataTooLong => EncodingError::DataTooLong { len, level },
        QrError::InvalidCharacter | QrError::UnsupportedCharacterSet => {
            EncodingError::InvalidCharacter
        }
        other => EncodingError::Generator(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_yields_version_one() {
        let m = QrCodeGenerator.build("HELLO", CorrectionLevel::Quartile).unwrap();
        assert_eq!(m.module_count(), 21);
        assert_eq!(m.text(), "HELLO");
        assert_eq!(m.correction_level(), CorrectionLevel::Quartile);
        // Finder pattern corners are always dark.
        assert!(m.is_dark(0, 0));
        assert!(m.is_dark(0, 20));
        assert!(m.is_dark(20, 0));
    }

    #[test]
    fn higher_redundancy_never_shrinks_the_matrix() {
        let text = "https://example.com/some/fairly/long/path?with=query&and=more";
        let low = QrCodeGenerator.build(text, CorrectionLevel::Low).unwrap();
        let high = QrCodeGenerator.build(text, CorrectionLevel::High).unwrap();
        assert!(high.module_count() >= low.module_count());
    }

    #[test]
    fn oversized_payload_is_an_encoding_error() {
        let text = "x".repeat(4000);
        let err = QrCodeGenerator.build(&text, CorrectionLevel::High).unwrap_err();
        assert_eq!(
            err,
            EncodingError::DataTooLong { len: 4000, level: CorrectionLevel::High }
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let a = QrCodeGenerator.build("SAME", CorrectionLevel::Medium).unwrap();
        let b = QrCodeGenerator.build("SAME", CorrectionLevel::Medium).unwrap();
        assert_eq!(a, b);
    }
}
