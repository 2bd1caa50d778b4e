use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    /// A sensor parameter violates its precondition (non-positive field of view, resolution or
    /// range, negative noise variance, ...)
    #[error("invalid sensor configuration: {0}")]
    InvalidConfiguration(String),

    /// A map needs at least two points to define a single segment
    #[error("map must contain at least 2 points, got {points}")]
    InvalidMap { points: usize },

    #[error("failed to read sensor configuration")]
    Io(#[from] std::io::Error),

    #[error("failed to parse sensor configuration")]
    Json(#[from] serde_json::Error),
}
