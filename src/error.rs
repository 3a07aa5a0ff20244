use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Please log in again.";
pub const VALIDATION_MESSAGE: &str = "Invalid data. Please check your input.";

/// Every failure a page handler can see. `Display` is the text shown to the
/// user in the status region; the `detail` fields are only logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("{}", unauthorized_text(.message))]
    Unauthorized { message: Option<String> },
    #[error("{0}")]
    Validation(String),
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },
    #[error("Invalid response: Expected JSON, but received HTML or another format.")]
    Format { detail: String },
    #[error("An error occurred. Please try again later.")]
    Network { detail: String },
}

fn unauthorized_text(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(UNAUTHORIZED_MESSAGE)
}

impl RequestError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: Some(message.into()),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn format(detail: impl Into<String>) -> Self {
        Self::Format {
            detail: detail.into(),
        }
    }

    /// Network failures stay on screen; everything else fades out.
    pub fn auto_hides(&self) -> bool {
        !matches!(self, Self::Network { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404 })
    }
}

/// The transport could not produce a response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request could not be sent: {0}")]
pub struct TransportError(pub String);

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        Self::Network { detail: err.0 }
    }
}
