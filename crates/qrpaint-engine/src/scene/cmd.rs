use crate::coords::Rect;
use crate::paint::Color;

/// Solid rectangle draw payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    /// Whether the rect stands for a dark module.
    pub dark: bool,
}

impl RectCmd {
    #[inline]
    pub const fn new(rect: Rect, color: Color, dark: bool) -> Self {
        Self { rect, color, dark }
    }
}
