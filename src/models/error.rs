#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Transport failure or non-2xx response
    #[error("API error: {0}")]
    ApiError(String),

    /// Successful response with nothing usable in it
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Empty or malformed data degrades to placeholders instead of a banner
    pub const fn is_empty_data(&self) -> bool {
        matches!(self, Self::DataError(_))
    }
}
