use thiserror::Error;

use qrpaint_engine::EncodingError;

/// Everything a render call can fail with.
///
/// Nothing is retried and nothing partial is returned: on `Err` no output
/// node exists.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("render size must be positive, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("cannot allocate a {width}x{height} raster surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("vector document error: {0}")]
    Vector(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
