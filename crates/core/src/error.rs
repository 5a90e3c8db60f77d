//! Error types for marshalling operations.
//!
//! Every operation fails fast: the first error aborts the whole call and no
//! partial mapping or object is returned. Errors carry the dotted path of the
//! offending field (e.g. `items.member.2.name`). Paths are built inside-out:
//! the innermost failure records its own key and each enclosing level
//! prepends its segment with [`Error::at`].

use thiserror::Error;

/// All marshalling errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hint marks the field required but the mapping has no value for it
    #[error("missing required parameter: {field}")]
    MissingRequiredParam {
        /// Path of the missing key
        field: String,
    },

    /// A present value cannot be coerced to, or represented as, the target type
    #[error("cannot convert {field}: {reason}")]
    Conversion {
        /// Path of the offending field
        field: String,
        /// What went wrong
        reason: String,
    },

    /// A leaf falls outside what the target encoding can express
    #[error("unsupported value at {field}: {description}")]
    UnsupportedValue {
        /// Path of the offending value
        field: String,
        /// Description of the value
        description: String,
    },

    /// More than one hint matches the same field label
    #[error("more than one hint matches field {label}")]
    DuplicateHint {
        /// The field label with ambiguous hints
        label: String,
    },
}

/// Result type for marshalling operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Conversion error with no path yet; callers attach it with [`Error::at`].
    pub fn conversion(reason: impl Into<String>) -> Self {
        Error::Conversion {
            field: String::new(),
            reason: reason.into(),
        }
    }

    /// Unsupported-value error with no path yet.
    pub fn unsupported(description: impl Into<String>) -> Self {
        Error::UnsupportedValue {
            field: String::new(),
            description: description.into(),
        }
    }

    /// Prepend a path segment to the error's field path.
    ///
    /// `DuplicateHint` is about a type's hint table rather than a value
    /// position, so it is returned unchanged.
    pub fn at(self, segment: &str) -> Self {
        match self {
            Error::MissingRequiredParam { field } => Error::MissingRequiredParam {
                field: join_path(segment, &field),
            },
            Error::Conversion { field, reason } => Error::Conversion {
                field: join_path(segment, &field),
                reason,
            },
            Error::UnsupportedValue { field, description } => Error::UnsupportedValue {
                field: join_path(segment, &field),
                description,
            },
            e @ Error::DuplicateHint { .. } => e,
        }
    }

    /// Path of the offending field, if the error has one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingRequiredParam { field }
            | Error::Conversion { field, .. }
            | Error::UnsupportedValue { field, .. } => Some(field),
            Error::DuplicateHint { .. } => None,
        }
    }

    /// Check if this is a missing-required-parameter error.
    pub fn is_missing_param(&self) -> bool {
        matches!(self, Error::MissingRequiredParam { .. })
    }

    /// Check if this is a conversion error.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }
}

/// Join two path fragments with `.`, skipping empty ones.
pub(crate) fn join_path(prefix: &str, rest: &str) -> String {
    match (prefix.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}.{}", prefix, rest),
    }
}
