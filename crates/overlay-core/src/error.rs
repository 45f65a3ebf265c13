use thiserror::Error;

pub type OverlayResult<T> = Result<T, OverlayError>;

/// Overlay-wide error.
///
/// None of these ever reach the host frame loop: lifecycle hooks log them and
/// degrade the overlay instead.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown key name: {0}")]
    UnknownKey(String),

    #[error("renderer not present")]
    RendererUnavailable,

    #[error("render surface not present")]
    SurfaceUnavailable,

    #[error("font atlas error: {0}")]
    FontAtlas(String),

    #[error("texture upload failed [{name}]: {reason}")]
    TextureUpload { name: String, reason: String },

    #[error("platform error: {0}")]
    Platform(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
