use thiserror::Error;

pub type CameraResult<T> = Result<T, CameraError>;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("invalid transform: x={x}, y={y}, scale={scale}")]
    InvalidTransform { x: f64, y: f64, scale: f64 },

    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
