use std::fmt;
use std::str::FromStr;

use qrpaint_engine::coords::Canvas;
use qrpaint_engine::matrix::CorrectionLevel;
use qrpaint_engine::paint::Color;

// ── RenderMode ────────────────────────────────────────────────────────────

/// Which backend produces the output.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RenderMode {
    /// Ask the host [`Capabilities`](crate::Capabilities): raster, then
    /// vector, then table.
    #[default]
    Auto,
    Raster,
    Table,
    Vector,
}

impl RenderMode {
    /// Resolves a backend name as accepted by the classic `render` option
    /// (`"canvas"`, `"table"`, `"svg"`).
    ///
    /// Unknown names fall back to [`Auto`](Self::Auto) instead of failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => RenderMode::Auto,
            "canvas" | "raster" | "bitmap" => RenderMode::Raster,
            "table" => RenderMode::Table,
            "svg" | "vector" => RenderMode::Vector,
            other => {
                log::warn!("unknown render mode {other:?}; falling back to auto");
                RenderMode::Auto
            }
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            RenderMode::Auto => "auto",
            RenderMode::Raster => "canvas",
            RenderMode::Table => "table",
            RenderMode::Vector => "svg",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

// ── RenderConfig ──────────────────────────────────────────────────────────

/// Everything one render call needs.
///
/// Built with chained `with_*` setters and never mutated once handed to
/// [`Renderer::render`](crate::Renderer::render).
///
/// ```rust
/// use qrpaint::{RenderConfig, RenderMode};
/// use qrpaint::prelude::{Color, CorrectionLevel};
///
/// let config = RenderConfig::new("HELLO")
///     .with_mode(RenderMode::Vector)
///     .with_size(128, 128)
///     .with_correction_level(CorrectionLevel::High)
///     .with_foreground(Color::rgb(0x22, 0x22, 0x88));
/// assert_eq!(config.width(), 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    text:             String,
    mode:             RenderMode,
    width:            u32,
    height:           u32,
    correction_level: CorrectionLevel,
    background:       Color,
    foreground:       Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text:             String::new(),
            mode:             RenderMode::Auto,
            width:            256,
            height:           256,
            correction_level: CorrectionLevel::default(),
            background:       Color::white(),
            foreground:       Color::black(),
        }
    }
}

impl RenderConfig {
    /// Default config carrying `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    // ── Builder ───────────────────────────────────────────────────────────

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Output size in pixels (raster) or user units (SVG, table).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    pub fn with_correction_level(mut self, level: CorrectionLevel) -> Self {
        self.correction_level = level;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    #[inline]
    pub fn correction_level(&self) -> CorrectionLevel {
        self.correction_level
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn foreground(&self) -> Color {
        self.foreground
    }
}

impl From<&str> for RenderConfig {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RenderConfig {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&RenderConfig> for RenderConfig {
    fn from(config: &RenderConfig) -> Self {
        config.clone()
    }
}
