// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for IES parsing and model mutation

use thiserror::Error;

/// Result type alias for parser and model operations
pub type Result<T> = std::result::Result<T, IesError>;

/// Errors that can occur while parsing an IES file or mutating a model
///
/// Every failure is immediate and non-recoverable: a parse never returns a
/// partial model, and a rejected setter leaves the model untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IesError {
    /// Structural violation: missing/too-short input, missing TILT line,
    /// or the value stream ran out of tokens at a consumption checkpoint
    #[error("{0}")]
    Structural(String),

    /// Header line is missing the required format marker
    #[error("Invalid format header: {0}")]
    Format(String),

    /// A token failed to parse as its expected numeric type
    #[error("Invalid {field} value: '{token}'")]
    NumericParse {
        /// Which field or role the token was being consumed for
        field: &'static str,
        /// The offending literal text
        token: String,
    },

    /// Model-layer validation failure: angle ordering, type-dependent
    /// boundary windows, or an out-of-range index
    #[error("{0}")]
    Bounds(String),
}

impl IesError {
    /// Create a new structural error
    pub fn structural(msg: impl Into<String>) -> Self {
        IesError::Structural(msg.into())
    }

    /// Create a new header format error
    pub fn format(msg: impl Into<String>) -> Self {
        IesError::Format(msg.into())
    }

    /// Create a new numeric parse error for the given field role
    pub fn numeric(field: &'static str, token: impl Into<String>) -> Self {
        IesError::NumericParse {
            field,
            token: token.into(),
        }
    }

    /// Create a new bounds/validation error
    pub fn bounds(msg: impl Into<String>) -> Self {
        IesError::Bounds(msg.into())
    }
}
