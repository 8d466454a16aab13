// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Errors fall into three groups:
//! - construction errors ([`MessageError`]): an invalid banner never enters the manager
//! - usage errors ([`UsageError`]): caller bugs, always reported to the caller
//! - I/O and configuration errors from the settings file
//!
//! Benign races (dismissing an unknown banner, showing one twice) are not errors
//! and never surface here.

use crate::banner::ViewHandle;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Message(MessageError),
    Usage(UsageError),
    Io(String),
    Config(String),
}

/// Reasons a banner message cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    /// The body is empty or contains only whitespace.
    EmptyBody,
}

/// Misuse of the banner API by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The view handle was already torn down (or never issued by this builder).
    StaleViewHandle(ViewHandle),
    /// A view builder refused to build a view.
    BuildFailed(String),
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::EmptyBody => write!(f, "banner body must not be empty"),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::StaleViewHandle(handle) => {
                write!(f, "view handle {} has been torn down", handle.raw())
            }
            UsageError::BuildFailed(reason) => write!(f, "view build failed: {}", reason),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Message(e) => write!(f, "Message Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Message(err) => Some(err),
            Error::Usage(err) => Some(err),
            Error::Io(_) | Error::Config(_) => None,
        }
    }
}

impl std::error::Error for MessageError {}

impl std::error::Error for UsageError {}

impl From<MessageError> for Error {
    fn from(err: MessageError) -> Self {
        Error::Message(err)
    }
}

impl From<UsageError> for Error {
    fn from(err: UsageError) -> Self {
        Error::Usage(err)
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
    fn empty_body_converts_to_message_variant() {
        let err: Error = MessageError::EmptyBody.into();
        assert_eq!(err, Error::Message(MessageError::EmptyBody));
        assert_eq!(
            format!("{}", err),
            "Message Error: banner body must not be empty"
        );
    }

    #[test]
    fn stale_handle_mentions_handle_number() {
        let err = UsageError::StaleViewHandle(ViewHandle::from_raw(42));
        assert!(format!("{}", err).contains("42"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn usage_error_is_exposed_as_source() {
        use std::error::Error as _;
        let err: Error = UsageError::BuildFailed("no surface".into()).into();
        assert!(err.source().is_some());
    }
}
