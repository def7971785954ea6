use thiserror::Error;

/// Failures surfaced by the web client. `Display` yields the message shown to
/// the user in an alert.
#[derive(Debug, Error)]
pub enum WebError {
    /// The server answered with a JSON-RPC error object.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// Non-success HTTP status outside of the JSON-RPC envelope.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server returned no result for {0}")]
    EmptyResult(String),

    #[error("Invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WebError {
    pub fn status(&self) -> Option<u16> {
        match self {
            WebError::Status { status, .. } => Some(*status),
            WebError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_server_message() {
        let err = WebError::Rpc {
            code: -32000,
            message: "Access Denied.".into(),
        };
        assert_eq!(err.to_string(), "Access Denied.");
    }

    #[test]
    fn unauthorized_status() {
        let err = WebError::Status {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(err.is_unauthorized());
        assert!(!WebError::EmptyResult("Web.Login".into()).is_unauthorized());
    }
}
