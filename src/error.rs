//! Error types shared by the canvas, the collidable registry and scene loading.

#[derive(Debug, thiserror::Error)]
pub enum RaylinesError {
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid circle radius: {0}")]
    InvalidRadius(f64),

    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f64),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("image encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RaylinesError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RaylinesError::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, RaylinesError>;
