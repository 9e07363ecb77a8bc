use serde::Serialize;
use serde_json::Value;

use super::fields::{FieldReader, incomplete};
use super::{Schema, ValidationErrors};
use crate::types::{ContactType, Email};

/// A validated contact record (customer, vendor, or both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub name: String,
    /// `None` when the form left the email blank.
    pub email: Option<Email>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub gst_number: String,
}

/// Schema for the admin contact form.
///
/// | field | rule |
/// |-------|------|
/// | `type` | `CUSTOMER`, `VENDOR` or `BOTH` |
/// | `name` | at least 2 characters |
/// | `email` | empty, or a valid address |
/// | everything else | any string |
pub struct ContactSchema;

impl ContactSchema {
    pub const NAME_MIN_LENGTH: usize = 2;
}

impl Schema for ContactSchema {
    type Output = Contact;

    fn validate(raw: &Value) -> Result<Contact, ValidationErrors> {
        let mut reader = FieldReader::new(raw);

        let contact_type = reader.required_string("type").and_then(|value| {
            value.parse::<ContactType>().ok().or_else(|| {
                reader.push(
                    "type",
                    format!(
                        "Invalid enum value. Expected 'CUSTOMER' | 'VENDOR' | 'BOTH', received '{value}'"
                    ),
                );
                None
            })
        });

        let name = reader.min_length("name", Self::NAME_MIN_LENGTH);

        // Blank email is allowed; a non-blank one must parse.
        let email_text = reader.text("email");
        let email = if email_text.is_empty() {
            None
        } else {
            match Email::parse(&email_text) {
                Ok(email) => Some(email),
                Err(_) => {
                    reader.push("email", "Invalid email");
                    None
                }
            }
        };

        let phone = reader.text("phone");
        let address = reader.text("address");
        let city = reader.text("city");
        let state = reader.text("state");
        let country = reader.text("country");
        let pincode = reader.text("pincode");
        let gst_number = reader.text("gstNumber");

        reader.finish()?;

        match (contact_type, name) {
            (Some(contact_type), Some(name)) => Ok(Contact {
                contact_type,
                name: name.to_owned(),
                email,
                phone,
                address,
                city,
                state,
                country,
                pincode,
                gst_number,
            }),
            _ => Err(incomplete()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> Value {
        json!({
            "type": "CUSTOMER",
            "name": "Meera Textiles",
            "email": "a@b.com",
            "phone": "+91 98765 43210",
            "address": "12 Mill Road",
            "city": "Surat",
            "state": "Gujarat",
            "country": "India",
            "pincode": "395003",
            "gstNumber": "24AAACM1234F1Z5"
        })
    }

    #[test]
    fn test_valid_contact() {
        let contact = ContactSchema::validate(&valid()).unwrap();
        assert_eq!(contact.contact_type, ContactType::Customer);
        assert_eq!(contact.email.unwrap().as_str(), "a@b.com");
        assert_eq!(contact.gst_number, "24AAACM1234F1Z5");
    }

    #[test]
    fn test_empty_email_passes() {
        let mut raw = valid();
        raw["email"] = json!("");
        let contact = ContactSchema::validate(&raw).unwrap();
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_malformed_email_fails() {
        let mut raw = valid();
        raw["email"] = json!("not-an-email");
        let errors = ContactSchema::validate(&raw).unwrap_err();
        assert_eq!(errors.fields(), vec!["email"]);
        assert_eq!(errors.errors()[0].message, "Invalid email");
    }

    #[test]
    fn test_unconstrained_fields_accept_empty_or_absent() {
        let contact = ContactSchema::validate(&json!({
            "type": "VENDOR",
            "name": "Jo",
            "phone": "",
        }))
        .unwrap();
        assert_eq!(contact.phone, "");
        assert_eq!(contact.city, "");
    }

    #[test]
    fn test_collects_every_error() {
        let errors = ContactSchema::validate(&json!({
            "type": "SUPPLIER",
            "name": "J",
            "email": "x@",
            "city": 42,
        }))
        .unwrap_err();
        assert_eq!(errors.fields(), vec!["type", "name", "email", "city"]);
    }

    #[test]
    fn test_missing_type_is_required() {
        let errors = ContactSchema::validate(&json!({"name": "Jo"})).unwrap_err();
        assert_eq!(errors.errors()[0].field, "type");
        assert_eq!(errors.errors()[0].message, "Required");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let json = serde_json::to_value(ContactSchema::validate(&valid()).unwrap()).unwrap();
        assert_eq!(json["type"], "CUSTOMER");
        assert_eq!(json["gstNumber"], "24AAACM1234F1Z5");
    }
}
