use crate::api::LookupError;

/// Shown whenever the word service could not be reached at all
pub const CONNECTIVITY_MESSAGE: &str =
    "Oops! Couldn't connect to the server. Please check your internet connection or try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "connection_refused",
            ErrorType::Timeout => "timeout",
            ErrorType::NotFound => "not_found",
            ErrorType::ServerError => "server_error",
            ErrorType::NetworkError => "network_error",
            ErrorType::Other => "other",
        }
    }
}

/// Classify a lookup failure for logging
pub fn classify_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::TimedOut { .. } => ErrorType::Timeout,
        LookupError::Status { status, .. } | LookupError::Malformed { status } => match *status {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        },
        LookupError::Connectivity(e) => {
            if e.is_timeout() {
                return ErrorType::Timeout;
            }

            let error_msg = error_chain_text(e).to_lowercase();
            if error_msg.contains("connection refused") {
                ErrorType::ConnectionRefused
            } else if e.is_connect() || error_msg.contains("dns") || error_msg.contains("network") {
                ErrorType::NetworkError
            } else {
                ErrorType::Other
            }
        }
    }
}

/// User-facing text for a failed lookup
///
/// Server answers keep their status and message; anything without a response
/// collapses to the fixed connectivity text.
pub fn format_error_message(error: &LookupError) -> String {
    match error {
        LookupError::Status { .. } | LookupError::Malformed { .. } => error.to_string(),
        LookupError::Connectivity(_) | LookupError::TimedOut { .. } => CONNECTIVITY_MESSAGE.to_string(),
    }
}

/// Join an error and all its sources, outermost first
fn error_chain_text(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        text.push_str(": ");
        text.push_str(&err.to_string());
        source = err.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_server_error() {
        let err = LookupError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(classify_error(&err), ErrorType::ServerError);
    }

    #[test]
    fn test_classify_not_found() {
        let err = LookupError::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(classify_error(&err), ErrorType::NotFound);
    }

    #[test]
    fn test_classify_client_error_is_other() {
        let err = LookupError::Status {
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_classify_outer_timeout() {
        assert_eq!(classify_error(&LookupError::TimedOut { secs: 10 }), ErrorType::Timeout);
    }

    #[test]
    fn test_format_status_keeps_code_and_message() {
        let err = LookupError::Status {
            status: 500,
            message: "Internal Error".to_string(),
        };
        assert_eq!(format_error_message(&err), "Error: 500 - Internal Error");
    }

    #[test]
    fn test_format_malformed_body() {
        let err = LookupError::Malformed { status: 200 };
        assert_eq!(format_error_message(&err), "Error: 200 - Malformed response");
    }

    #[test]
    fn test_format_timeout_is_connectivity_message() {
        let err = LookupError::TimedOut { secs: 10 };
        assert_eq!(format_error_message(&err), CONNECTIVITY_MESSAGE);
    }

    #[test]
    fn test_error_chain_text_walks_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let outer = std::io::Error::other(inner);
        assert!(error_chain_text(&outer).contains("connection refused"));
    }
}
