use thiserror::Error;

/// Text of the notification shown for every failure.
pub const USER_MESSAGE: &str = "Error generating project";

/// Why a generate call did not produce a saved archive.
///
/// The variants only feed the diagnostic log; the user always sees
/// [`USER_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("failed to read archive body: {0}")]
    Body(String),

    #[error("failed to save archive: {0}")]
    Save(String),
}

impl GenerateError {
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_fixed() {
        let errors = [
            GenerateError::Transport("connection refused".into()),
            GenerateError::Status {
                status: 404,
                status_text: "Not Found".into(),
            },
            GenerateError::Status {
                status: 500,
                status_text: "Internal Server Error".into(),
            },
            GenerateError::Body("stream closed".into()),
            GenerateError::Save("No body element".into()),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), "Error generating project");
        }
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = GenerateError::Status {
            status: 502,
            status_text: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "server responded with HTTP 502 Bad Gateway");
    }
}
