use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("window must be at least 1x1, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
    #[error("frame rate must be positive")]
    InvalidFrameRate,
    #[error("font size must be positive")]
    InvalidFontSize,
}
