use thiserror::Error;

use crate::book::BookField;

/// Errors produced while validating request input.
///
/// The `Display` text is what clients see in the `error` field of a failed
/// response, so the wording is part of the API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A create request is missing a field or carries one of the wrong type.
    #[error("Invalid input. Please provide all required fields with valid types.")]
    InvalidBook { field: BookField },

    #[error("{label} must be an integer.", label = .field.label())]
    NotAnInteger { field: BookField },

    #[error("{label} must be a string.", label = .field.label())]
    NotAString { field: BookField },

    #[error("Request body must be a JSON object.")]
    NotAnObject,
}

impl ValidationError {
    /// The field that failed validation, if the error concerns one.
    pub fn field(&self) -> Option<BookField> {
        match self {
            Self::InvalidBook { field }
            | Self::NotAnInteger { field }
            | Self::NotAString { field } => Some(*field),
            Self::NotAnObject => None,
        }
    }
}
