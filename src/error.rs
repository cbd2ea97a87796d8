//! Error types for URL reconstruction and component access.

use thiserror::Error;

/// Errors that can occur while building a [`UrlAccessor`](crate::UrlAccessor) or reading from it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The requested component is not one of path, scheme, port, host, query.
    #[error("The URL component \"{0}\" is either invalid or not supported")]
    UnsupportedComponent(String),

    /// A security check was requested on a manually supplied URL.
    #[error("Cannot check a manually entered URL for SSL")]
    ManualUrlNotCheckable,

    /// The URL to parse was empty.
    #[error("URL is empty")]
    EmptyUrl,

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// A required server variable was not provided by the request context.
    #[error("Missing server variable: {0}")]
    MissingServerVar(&'static str),

    /// The server port variable is not a valid port number.
    #[error("Invalid server port: {0}")]
    InvalidServerPort(String),

    /// The accessor configuration could not be read.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::UrlParseError(err.to_string())
    }
}

impl From<toml::de::Error> for UrlError {
    fn from(err: toml::de::Error) -> Self {
        UrlError::Config(err.to_string())
    }
}
