use reqwest::StatusCode;
use thiserror::Error;

/// Why a dispatch produced no response body. Both kinds are handled the
/// same way at the dispatch boundary: rendered human-readable and handed
/// to the report sink.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with status {}", .status.as_u16())]
    Status { status: StatusCode },
}

impl DispatchError {
    /// HTTP status of the response, when one was received at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DispatchError::Transport(_) => None,
            DispatchError::Status { status } => Some(*status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_numeric_code() {
        let err = DispatchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "request failed with status 500");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
