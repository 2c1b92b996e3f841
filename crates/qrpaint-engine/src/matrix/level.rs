use crate::error::EncodingError;

/// Error-correction redundancy used when encoding a payload.
///
/// The numeric codes are the classic QR option values (`L = 1, M = 0, Q = 3,
/// H = 2`), so `3` selects [`Quartile`](Self::Quartile).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CorrectionLevel {
    /// ~7% of codewords recoverable.
    Low,
    /// ~15%.
    Medium,
    /// ~25%.
    #[default]
    Quartile,
    /// ~30%.
    High,
}

impl CorrectionLevel {
    pub const ALL: [CorrectionLevel; 4] = [
        CorrectionLevel::Low,
        CorrectionLevel::Medium,
        CorrectionLevel::Quartile,
        CorrectionLevel::High,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            CorrectionLevel::Medium => 0,
            CorrectionLevel::Low => 1,
            CorrectionLevel::High => 2,
            CorrectionLevel::Quartile => 3,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CorrectionLevel::Medium),
            1 => Some(CorrectionLevel::Low),
            2 => Some(CorrectionLevel::High),
            3 => Some(CorrectionLevel::Quartile),
            _ => None,
        }
    }
}

impl TryFrom<u8> for CorrectionLevel {
    type Error = EncodingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(EncodingError::InvalidCorrectionLevel(code))
    }
}

impl From<CorrectionLevel> for u8 {
    fn from(level: CorrectionLevel) -> u8 {
        level.code()
    }
}
