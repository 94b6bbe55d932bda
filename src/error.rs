// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
    State(String),
}

/// Problems found while loading the site content description.
/// Used to pick the notification shown before falling back to the bundled content.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// The bundled content file is missing from the binary.
    MissingBundle,

    /// The content file exists but is not valid TOML for the content schema.
    Malformed(String),

    /// The content parsed but declares no carousel slides and no articles.
    Empty,
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::MissingBundle => "notification-content-missing",
            ContentError::Malformed(_) => "notification-content-malformed",
            ContentError::Empty => "notification-content-empty",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingBundle => write!(f, "Bundled content is missing"),
            ContentError::Malformed(msg) => write!(f, "Malformed content: {}", msg),
            ContentError::Empty => write!(f, "Content declares nothing to show"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::State(e) => write!(f, "State Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
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
    fn content_error_converts_and_displays() {
        let err: Error = ContentError::Malformed("line 3".into()).into();
        assert_eq!(format!("{}", err), "Content Error: Malformed content: line 3");
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::MissingBundle.i18n_key(),
            "notification-content-missing"
        );
        assert_eq!(
            ContentError::Malformed(String::new()).i18n_key(),
            "notification-content-malformed"
        );
        assert_eq!(ContentError::Empty.i18n_key(), "notification-content-empty");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("= nope");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
