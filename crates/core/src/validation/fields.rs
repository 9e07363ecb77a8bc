//! Field readers shared by the schemas.
//!
//! A [`FieldReader`] walks one record and accumulates errors as fields are
//! read, so a schema reads every field unconditionally and inspects the
//! collected errors at the end.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::{Map, Value};

use super::{FieldError, ROOT_FIELD, ValidationErrors};

pub const REQUIRED: &str = "Required";

pub struct FieldReader<'a> {
    record: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(raw: &'a Value) -> Self {
        match raw {
            Value::Object(record) => Self {
                record: Some(record),
                errors: Vec::new(),
            },
            other => Self {
                record: None,
                errors: vec![FieldError::new(
                    ROOT_FIELD,
                    format!("Expected object, received {}", kind(other)),
                )],
            },
        }
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// `Ok(None)` when the field is absent or null, `Err(())` when the whole
    /// record was rejected at the root.
    fn get(&self, field: &str) -> Result<Option<&'a Value>, ()> {
        let record = self.record.ok_or(())?;
        Ok(record.get(field).filter(|v| !v.is_null()))
    }

    /// A string that must be present.
    pub fn required_string(&mut self, field: &str) -> Option<&'a str> {
        match self.get(field) {
            Err(()) => None,
            Ok(None) => {
                self.push(field, REQUIRED);
                None
            }
            Ok(Some(Value::String(s))) => Some(s.as_str()),
            Ok(Some(other)) => {
                self.push(field, format!("Expected string, received {}", kind(other)));
                None
            }
        }
    }

    /// A required string of at least `min` characters.
    pub fn min_length(&mut self, field: &str, min: usize) -> Option<&'a str> {
        let value = self.required_string(field)?;
        if value.chars().count() < min {
            self.push(
                field,
                format!("String must contain at least {min} character(s)"),
            );
            return None;
        }
        Some(value)
    }

    /// Free text: absent or null reads as empty, anything else must be a
    /// string.
    pub fn text(&mut self, field: &str) -> String {
        match self.get(field) {
            Ok(Some(Value::String(s))) => s.clone(),
            Ok(Some(other)) => {
                self.push(field, format!("Expected string, received {}", kind(other)));
                String::new()
            }
            Ok(None) | Err(()) => String::new(),
        }
    }

    /// A number, coerced from JSON numbers or numeric text.
    pub fn number(&mut self, field: &str) -> Option<Decimal> {
        match self.get(field) {
            Err(()) => None,
            Ok(None) => {
                self.push(field, REQUIRED);
                None
            }
            Ok(Some(value)) => match coerce_decimal(value) {
                Coercion::Number(number) => Some(number),
                Coercion::OutOfRange { negative: false } => {
                    self.push(
                        field,
                        format!("Number must be less than or equal to {}", Decimal::MAX),
                    );
                    None
                }
                Coercion::OutOfRange { negative: true } => {
                    self.push(
                        field,
                        format!("Number must be greater than or equal to {}", Decimal::MIN),
                    );
                    None
                }
                Coercion::NotANumber => {
                    self.push(field, "Expected number, received nan");
                    None
                }
            },
        }
    }

    /// A boolean, defaulting when absent.
    pub fn boolean(&mut self, field: &str, default: bool) -> bool {
        match self.get(field) {
            Ok(Some(Value::Bool(b))) => *b,
            Ok(Some(other)) => {
                self.push(field, format!("Expected boolean, received {}", kind(other)));
                default
            }
            Ok(None) | Err(()) => default,
        }
    }

    /// An array of strings, empty when absent. Element errors are reported
    /// against `field.<index>`.
    pub fn string_list(&mut self, field: &str) -> Vec<String> {
        let items = match self.get(field) {
            Ok(Some(Value::Array(items))) => items,
            Ok(Some(other)) => {
                self.push(field, format!("Expected array, received {}", kind(other)));
                return Vec::new();
            }
            Ok(None) | Err(()) => return Vec::new(),
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => self.push(
                    &format!("{field}.{index}"),
                    format!("Expected string, received {}", kind(other)),
                ),
            }
        }
        out
    }

    /// Finish reading: `Ok(())` when no field failed.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        ValidationErrors::from_errors(self.errors).map_or(Ok(()), Err)
    }
}

/// Fallback for a schema whose reader finished cleanly but left a required
/// value unset. Every reader records an error before returning `None`, so
/// this is never produced in practice.
pub fn incomplete() -> ValidationErrors {
    ValidationErrors {
        errors: vec![FieldError::new(ROOT_FIELD, "Incomplete record")],
    }
}

/// Outcome of coercing a JSON value to a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Number(Decimal),
    /// A real number too large in magnitude for [`Decimal`].
    OutOfRange { negative: bool },
    NotANumber,
}

/// Coerce a JSON value to a decimal the way a form library coerces inputs:
/// numbers pass through, numeric text (surrounding whitespace allowed) is
/// parsed, everything else fails. Blank text fails too.
///
/// Values with more precision than [`Decimal`] carries are rounded.
pub fn coerce_decimal(value: &Value) -> Coercion {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_owned(),
        _ => return Coercion::NotANumber,
    };
    if text.is_empty() {
        return Coercion::NotANumber;
    }
    if let Ok(number) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        return Coercion::Number(number);
    }

    match text.parse::<f64>() {
        // `f64` also reads "inf" and "NaN", which are not form numbers.
        Ok(float) if float.is_nan() || text.to_ascii_lowercase().contains("inf") => {
            Coercion::NotANumber
        }
        Ok(float) if float.abs() < 1.0 => {
            Coercion::Number(Decimal::from_f64(float).unwrap_or(Decimal::ZERO))
        }
        Ok(float) => Decimal::from_f64(float).map_or(
            Coercion::OutOfRange {
                negative: float.is_sign_negative(),
            },
            Coercion::Number,
        ),
        Err(_) => Coercion::NotANumber,
    }
}

/// Name of a JSON value's type, for error messages.
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
