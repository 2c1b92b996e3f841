/// What the hosting environment can display.
///
/// Only consulted for [`RenderMode::Auto`](crate::RenderMode::Auto). Keeping
/// the host query behind a trait leaves the dispatcher deterministic.
pub trait Capabilities {
    fn supports_raster(&self) -> bool;
    fn supports_vector(&self) -> bool;
}

/// Fixed answers, known up front.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StaticCapabilities {
    pub raster: bool,
    pub vector: bool,
}

impl StaticCapabilities {
    #[inline]
    pub const fn new(raster: bool, vector: bool) -> Self {
        Self { raster, vector }
    }

    /// Neither raster nor vector output can be shown; `Auto` picks the table.
    #[inline]
    pub const fn markup_only() -> Self {
        Self::new(false, false)
    }
}

impl Default for StaticCapabilities {
    /// Every backend is compiled in, so both queries succeed.
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Capabilities for StaticCapabilities {
    #[inline]
    fn supports_raster(&self) -> bool {
        self.raster
    }

    #[inline]
    fn supports_vector(&self) -> bool {
        self.vector
    }
}

/// Closure pair, for hosts that have to ask at render time.
pub struct FnCapabilities<R, V> {
    raster: R,
    vector: V,
}

impl<R, V> FnCapabilities<R, V>
where
    R: Fn() -> bool,
    V: Fn() -> bool,
{
    pub fn new(raster: R, vector: V) -> Self {
        Self { raster, vector }
    }
}

impl<R, V> Capabilities for FnCapabilities<R, V>
where
    R: Fn() -> bool,
    V: Fn() -> bool,
{
    fn supports_raster(&self) -> bool {
        (self.raster)()
    }

    fn supports_vector(&self) -> bool {
        (self.vector)()
    }
}
