use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http {
        status: u16,
        message: String,
        retry_after: Option<u32>,
    },
    Session(String),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Message suitable for inline display. Backend-supplied text passes
    /// through verbatim; transport errors keep their variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message)
            | AppError::Session(message)
            | AppError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Server-suggested wait before retrying, when the error carried one.
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            AppError::Http { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http {
                status, message, ..
            } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Session(message) => write!(formatter, "Session error: {message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_passes_backend_text_through_verbatim() {
        let error = AppError::Http {
            status: 400,
            message: "Email already registered".to_string(),
            retry_after: None,
        };
        assert_eq!(error.user_message(), "Email already registered");

        let error = AppError::Config("Passwords do not match.".to_string());
        assert_eq!(error.user_message(), "Passwords do not match.");
    }

    #[test]
    fn user_message_keeps_prefix_for_transport_errors() {
        let error = AppError::Network("connection refused".to_string());
        assert_eq!(error.user_message(), "Network error: connection refused");
    }

    #[test]
    fn retry_after_surfaces_only_for_http_errors() {
        let error = AppError::Http {
            status: 429,
            message: "Please wait before requesting another code".to_string(),
            retry_after: Some(30),
        };
        assert_eq!(error.retry_after(), Some(30));

        let error = AppError::Timeout("Request timed out.".to_string());
        assert_eq!(error.retry_after(), None);
    }
}
