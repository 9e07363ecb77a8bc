//! Offline form validation.
//!
//! # Usage
//!
//! ```bash
//! loom-cli validate contact contact.json
//! cat product.json | loom-cli validate product -
//! ```
//!
//! Prints the typed record on success. On failure prints one line per field
//! error and exits with status 1.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use loomline_core::{
    Schema, ValidationErrors, taxonomy,
    validation::{Contact, ContactSchema, Product, ProductSchema},
};

/// Errors from the validate command.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Input could not be read.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not JSON, or the record could not be printed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The record failed validation.
    #[error("{0} field error(s)")]
    Rejected(usize),
}

/// Which form to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Product,
}

/// A record that passed validation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Record {
    Contact(Contact),
    Product(Product),
}

/// Read a JSON document from `path`, or stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<Value, ValidateError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&text)?)
}

/// Validate `raw` as `kind`.
///
/// Products that pass the schema are also checked against the taxonomy.
pub fn check(kind: FormKind, raw: &Value) -> Result<Record, ValidationErrors> {
    match kind {
        FormKind::Contact => ContactSchema::validate(raw).map(Record::Contact),
        FormKind::Product => {
            let product = ProductSchema::validate(raw)?;
            let mismatches = taxonomy::check_selection(
                &product.category,
                &product.product_type,
                &product.material,
            );
            if let Some(errors) = ValidationErrors::from_errors(mismatches) {
                return Err(errors);
            }
            Ok(Record::Product(product))
        }
    }
}

/// Validate the record at `path` and print the outcome.
pub fn run(kind: FormKind, path: &Path) -> Result<(), ValidateError> {
    let raw = read_input(path)?;
    tracing::debug!(?kind, path = %path.display(), "Validating record");

    match check(kind, &raw) {
        Ok(record) => {
            let pretty = serde_json::to_string_pretty(&record)?;
            #[allow(clippy::print_stdout)]
            {
                println!("{pretty}");
            }
            Ok(())
        }
        Err(errors) => {
            #[allow(clippy::print_stdout)]
            for error in errors.errors() {
                println!("{error}");
            }
            Err(ValidateError::Rejected(errors.len()))
        }
    }
}
