use thiserror::Error;

/// Text shown in place of the article list when a page could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading articles. Please try again later.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The feed answered with `success: false`.
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// The message a surface should display for this error.
    ///
    /// Feed-level failures carry the server's own message; everything else
    /// collapses into the generic loading error.
    pub fn user_message(&self) -> &str {
        match self {
            Error::Feed(message) => message,
            _ => LOAD_ERROR_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_keeps_server_message() {
        let err = Error::Feed("bad date".to_string());
        assert_eq!(err.user_message(), "bad date");
        assert_eq!(err.to_string(), "Feed error: bad date");
    }

    #[test]
    fn test_other_errors_use_generic_message() {
        let err: Error = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.user_message(), LOAD_ERROR_MESSAGE);

        let err = Error::InvalidRequest("limit must be greater than zero".to_string());
        assert_eq!(err.user_message(), LOAD_ERROR_MESSAGE);
    }
}
