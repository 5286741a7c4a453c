use thiserror::Error;

/// Errors from rendering a swatch image in memory.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported swatch size: {0}")]
    UnsupportedSize(u32),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

/// Errors from the on-disk swatch cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tempfile::PersistError> for CacheError {
    fn from(e: tempfile::PersistError) -> Self {
        CacheError::Io(e.error)
    }
}

/// Errors that abort a whole query.
///
/// Unrecognized color tokens are not errors: they produce an ordinary error
/// record. Only failures of the swatch cache end up here.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Swatch cache error: {0}")]
    Cache(#[from] CacheError),
}
