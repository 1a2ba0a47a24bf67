// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Store operations never fail: unknown ids and empty messages are silent
//! no-ops. Errors only come from the surfaces around the store (settings
//! files and the async runtime channel).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Usage Error: {0}")]
    Usage(String),

    /// The runtime loop has exited and can no longer accept commands.
    #[error("Runtime Error: toast runtime is no longer running")]
    RuntimeClosed,
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

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
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
    fn toml_decode_error_maps_to_config_variant() {
        let decode = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = decode.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn runtime_closed_mentions_runtime() {
        assert!(Error::RuntimeClosed.to_string().contains("no longer running"));
    }
}
