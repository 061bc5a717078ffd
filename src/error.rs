// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A required page anchor (section, block) could not be found.
    #[error("Missing anchor: {0}")]
    MissingAnchor(String),

    /// An embedded asset key did not resolve.
    #[error("Missing asset: {0}")]
    MissingAsset(String),
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
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("settings.toml")));
    }

    #[test]
    fn missing_anchor_display_names_the_anchor() {
        let err = Error::MissingAnchor("#pricing".to_string());
        assert_eq!(err.to_string(), "Missing anchor: #pricing");
    }
}
