// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The project manifest could not be parsed.
    Manifest(String),
    /// A remote image could not be downloaded.
    Fetch(FetchError),
    /// No usable audio output.
    Audio(String),
}

/// Specific failure kinds for remote image downloads.
/// Used to pick a localized placeholder message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Server answered with a non-success status code.
    Status(u16),

    /// Connection, TLS or timeout failure.
    Transport(String),

    /// Body arrived but was empty.
    EmptyBody,
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Transport(_) => "error-fetch-transport",
            FetchError::EmptyBody => "error-fetch-empty",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "server returned HTTP {}", code),
            FetchError::Transport(msg) => write!(f, "transport failure: {}", msg),
            FetchError::EmptyBody => write!(f, "empty response body"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Fetch(FetchError::Status(status.as_u16())),
            None => Error::Fetch(FetchError::Transport(err.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn manifest_error_formats_properly() {
        let err = Error::Manifest("missing title".into());
        assert_eq!(format!("{}", err), "Manifest Error: missing title");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("a = = b");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn audio_error_formats_properly() {
        let err = Error::Audio("no output device".into());
        assert_eq!(format!("{}", err), "Audio Error: no output device");
    }

    #[test]
    fn fetch_error_display_mentions_status() {
        let err: Error = FetchError::Status(404).into();
        assert!(format!("{}", err).contains("404"));
    }

    #[test]
    fn fetch_error_i18n_keys() {
        assert_eq!(FetchError::Status(500).i18n_key(), "error-fetch-status");
        assert_eq!(
            FetchError::Transport("reset".into()).i18n_key(),
            "error-fetch-transport"
        );
        assert_eq!(FetchError::EmptyBody.i18n_key(), "error-fetch-empty");
    }
}
