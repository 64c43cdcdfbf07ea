use thiserror::Error;

/// Errors from the chatbot API client and session controller.
///
/// The network class (`Status`, `Transport`) is retryable; everything else
/// propagates immediately. Error detail is logged, never rendered verbatim
/// to the user.
#[derive(Debug, Error)]
pub enum ChatbotError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid message: {0}")]
    Validation(String),

    #[error("no active session")]
    NoSession,

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl ChatbotError {
    /// Whether the retry loop may re-issue the request after this error.
    ///
    /// Only network-class failures qualify: a non-2xx status or a
    /// connection-level transport failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ChatbotError::Status { .. } | ChatbotError::Transport(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_class_is_retryable() {
        assert!(
            ChatbotError::Status {
                status: 502,
                message: "bad gateway".to_string(),
            }
            .is_retryable()
        );
        assert!(ChatbotError::Transport("connection refused".to_string()).is_retryable());
    }

    #[test]
    fn test_other_classes_are_not_retryable() {
        assert!(!ChatbotError::Validation("too long".to_string()).is_retryable());
        assert!(!ChatbotError::NoSession.is_retryable());
        assert!(!ChatbotError::Unexpected("missing field".to_string()).is_retryable());
    }

    #[test]
    fn test_display() {
        let err = ChatbotError::Status {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: overloaded");
        assert_eq!(ChatbotError::NoSession.to_string(), "no active session");
    }
}
