use thiserror::Error;

#[derive(Debug, Error)]
pub enum QwenImageError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("api error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, QwenImageError>;
