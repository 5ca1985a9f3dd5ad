use reqwest::StatusCode;
use thiserror::Error;

/// Reasons a couplet could not be generated.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion API is not configured (OPENAI_API_KEY unset)")]
    NotConfigured,
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion API error {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("completion response has no content")]
    MissingChoice,
    #[error("no JSON object found in model output")]
    NoJson,
    #[error("model output is not a valid couplet: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Coarse failure class, used as a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Extraction,
    Parse,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Transport => "transport",
            ErrorKind::Extraction => "extraction",
            ErrorKind::Parse => "parse",
        }
    }
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::NotConfigured => ErrorKind::Configuration,
            GenerationError::Request(_)
            | GenerationError::Status { .. }
            | GenerationError::MalformedResponse(_)
            | GenerationError::MissingChoice => ErrorKind::Transport,
            GenerationError::NoJson => ErrorKind::Extraction,
            GenerationError::Parse(_) => ErrorKind::Parse,
        }
    }
}
