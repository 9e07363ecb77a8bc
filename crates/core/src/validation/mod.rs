//! Form schemas for contact and product records.
//!
//! Each schema takes an untyped JSON record and returns either the typed
//! record or a [`ValidationErrors`] listing every violated field. Validation
//! never stops at the first problem.
//!
//! ```
//! use loomline_core::validation::{ContactSchema, Schema};
//! use serde_json::json;
//!
//! let errors = ContactSchema::validate(&json!({
//!     "type": "VENDOR",
//!     "name": "A",
//!     "email": "not-an-email",
//! }))
//! .unwrap_err();
//!
//! assert_eq!(errors.fields(), vec!["name", "email"]);
//! ```

mod contact;
mod fields;
mod product;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use contact::{Contact, ContactSchema};
pub use product::{Product, ProductSchema};

/// Field name used when the record itself is not an object.
pub const ROOT_FIELD: &str = "_root";

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field, with array indices as dotted segments
    /// (`images.2`).
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error produced by one validation run. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("validation failed: {}", join(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wrap a list of errors. Returns `None` for an empty list.
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The individual field errors, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Field names that failed, in order. A field appears once per violation.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Number of field errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any error was reported against `field`.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A declarative schema over an untyped record.
pub trait Schema {
    /// The typed record produced on success.
    type Output;

    /// Check every field of `raw`.
    ///
    /// # Errors
    ///
    /// Returns all violated constraints together.
    fn validate(raw: &Value) -> Result<Self::Output, ValidationErrors>;
}
