use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid base URL: {0}")]
    Construction(#[source] url::ParseError),

    #[error("Malformed endpoint `{path}`: {source}")]
    MalformedUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },

    // Relative path would be collapsed by dot-segment removal
    #[error("Malformed endpoint `{0}`: `.` and `..` are not valid path segments")]
    DotSegment(String),

    // Connection refused, DNS failure, timeout (including a body that stalls)
    #[error("Network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
}
