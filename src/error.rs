//! Error types for value coercion.
//!
//! Scalar coercers never fail: an input they cannot interpret is reported through
//! the recognized flag of [`Coerced`](crate::Coerced). Only two operations return
//! an [`Error`]:
//!
//! - [`to_sequence`](crate::to_sequence), when the input is not array- or slice-like
//! - [`to_value`](crate::to_value), when a serde data shape has no [`Value`](crate::Value)
//!   counterpart
//!
//! ## Examples
//!
//! ```rust
//! use value_as::{to_sequence, Error, Value};
//!
//! let err = to_sequence(&Value::from("abcde")).unwrap_err();
//! assert!(matches!(err, Error::InvalidType { .. }));
//! assert_eq!(err.to_string(), "invalid type: expected array or slice, have string");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input had a different shape than the operation requires.
    #[error("invalid type: expected {expected}, have {have}")]
    InvalidType { expected: String, have: String },

    /// Unsupported serde shape while building a value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-type error naming the expected shape and the observed type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_as::Error;
    ///
    /// let err = Error::invalid_type("array or slice", "bool");
    /// assert_eq!(err.expected(), Some("array or slice"));
    /// assert_eq!(err.have(), Some("bool"));
    /// ```
    pub fn invalid_type(expected: &str, have: &str) -> Self {
        Error::InvalidType {
            expected: expected.to_string(),
            have: have.to_string(),
        }
    }

    /// Creates an unsupported type error for serde shapes that have no value counterpart.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// The expected shape, if this is an invalid-type error.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        match self {
            Error::InvalidType { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// The observed type name, if this is an invalid-type error.
    #[must_use]
    pub fn have(&self) -> Option<&str> {
        match self {
            Error::InvalidType { have, .. } => Some(have),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
