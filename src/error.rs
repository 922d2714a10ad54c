//! Error type for the fallible sort operations.
//!
//! Only a small part of the surface can fail: selecting a shell sort gap strategy by name and
//! the internal merge contract of natural merge sort. Everything that can be validated is
//! validated before the input slice is touched, so an `Err` always means the slice is unchanged.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Error type for sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// An argument does not have the expected shape, for example an unknown gap strategy name or
    /// a malformed run interval.
    InvalidArgument(String),

    /// The request names something that is recognized but not implemented.
    NotSupported(String),
}

impl SortError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::NotSupported(msg) => write!(f, "Not supported: {msg}"),
        }
    }
}

impl Error for SortError {}
