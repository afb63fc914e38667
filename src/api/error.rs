use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("network task failed: {0}")]
    Task(String),
}

impl ApiError {
    /// Text for the blocking alert, naming the most likely cause.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(e) if e.is_timeout() => {
                "The contacts server did not answer in time. Check your network connection and try again.".to_string()
            }
            ApiError::Transport(e) if e.is_connect() => {
                "Could not reach the contacts server. Check your network connection or the server address.".to_string()
            }
            ApiError::Transport(_) => {
                "The request to the contacts server failed. Check your network connection or server status.".to_string()
            }
            ApiError::Status { status, body } => {
                let mut msg = if *status == 404 {
                    "The contact was not found on the server (HTTP 404).".to_string()
                } else {
                    format!("The server rejected the request (HTTP {status}). Check the server status and try again.")
                };
                // Short plain-text or JSON bodies usually carry the server's reason.
                let body = body.trim();
                if !body.is_empty() && body.len() <= 200 && !body.starts_with('<') {
                    msg.push_str("\n\nServer response: ");
                    msg.push_str(body);
                }
                msg
            }
            ApiError::Decode(_) => "The server sent a response that could not be read.".to_string(),
            ApiError::InvalidUrl(_) => {
                "The configured server address is not a valid URL.".to_string()
            }
            ApiError::Task(_) => "The operation was interrupted. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_code() {
        let err = ApiError::Status {
            status: 500,
            body: String::new(),
        };
        assert!(err.user_message().contains("HTTP 500"));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn not_found_is_called_out() {
        let err = ApiError::Status {
            status: 404,
            body: "gone".into(),
        };
        assert!(err.user_message().contains("not found"));
        assert!(err.user_message().ends_with("Server response: gone"));
    }

    #[test]
    fn html_error_pages_are_not_echoed() {
        let err = ApiError::Status {
            status: 502,
            body: "<html>bad gateway</html>".into(),
        };
        assert!(!err.user_message().contains("html"));
    }
}
