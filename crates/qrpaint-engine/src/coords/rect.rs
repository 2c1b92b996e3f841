/// Axis-aligned rectangle in device pixels (top-left origin).
///
/// Unlike a float rect, tile rects must land on whole pixels so that adjacent
/// cells share an edge exactly.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn max_x(self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn max_y(self) -> u32 {
        self.y + self.h
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, px: u32, py: u32) -> bool {
        px >= self.x && py >= self.y && px < self.max_x() && py < self.max_y()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }

    /// Clamps the rect to a `width × height` canvas anchored at the origin.
    #[inline]
    pub fn clipped_to(self, width: u32, height: u32) -> Option<Rect> {
        self.intersect(Rect::new(0, 0, width, height))
    }
}
