use thiserror::Error;

/// Error type for completion API calls.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Error type for the recipe generation and improvement flows.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Ai(#[from] AiError),

    /// The completion succeeded but did not carry the structured payload
    /// we asked for, or the payload was not valid JSON of the expected shape.
    #[error("Failed to extract recipe from completion: {0}")]
    Extraction(String),

    /// The extracted recipe does not satisfy the creation constraints.
    #[error("Generated recipe is invalid: {0}")]
    InvalidRecipe(String),
}
