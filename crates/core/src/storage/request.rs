//! # Storage Request
//!
//! Turns the agent's loosely-typed JSON into a validated request.
//! Top-level problems are fatal; per-contact problems are carried
//! alongside the valid records so they can be reported in order.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder for optional contact fields the agent could not find
pub const NOT_AVAILABLE: &str = "N/A";

/// Raw input to the storage tool
#[derive(Debug, Clone)]
pub enum ContactInfo {
    /// JSON-encoded payload
    Text(String),
    /// Already-parsed payload
    Structured(Value),
}

impl From<String> for ContactInfo {
    fn from(s: String) -> Self {
        ContactInfo::Text(s)
    }
}

impl From<&str> for ContactInfo {
    fn from(s: &str) -> Self {
        ContactInfo::Text(s.to_string())
    }
}

impl From<Value> for ContactInfo {
    fn from(v: Value) -> Self {
        ContactInfo::Structured(v)
    }
}

impl ContactInfo {
    /// Resolve to a JSON value, decoding text (including JSON strings) first
    pub fn into_value(self) -> Result<Value, StoreError> {
        match self {
            ContactInfo::Text(s) | ContactInfo::Structured(Value::String(s)) => {
                Ok(serde_json::from_str(&s)?)
            }
            ContactInfo::Structured(v) => Ok(v),
        }
    }
}

/// A contact that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub title: String,
    pub linkedin_url: String,
    pub phone: String,
    pub email: String,
}

/// A contact missing one or more required fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidContact {
    /// The contact's name if it had one, otherwise "Unknown"
    pub label: String,
    pub missing: Vec<&'static str>,
}

impl fmt::Display for InvalidContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing {}", self.missing.join(", "))
    }
}

/// Validated input for one `store` call
#[derive(Debug, Clone)]
pub struct StorageRequest {
    pub company_name: String,
    /// In input order
    pub contacts: Vec<Result<ContactRecord, InvalidContact>>,
}

impl StorageRequest {
    /// Parse and validate raw contact info
    pub fn parse(info: ContactInfo) -> Result<Self, StoreError> {
        Self::from_value(info.into_value()?)
    }

    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        let obj = value.as_object().ok_or(StoreError::NotAnObject)?;

        let company_name = match obj.get("company_name") {
            None | Some(Value::Null) => return Err(StoreError::MissingCompanyName),
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(_) => return Err(StoreError::InvalidCompanyName),
        };

        let contacts = match obj.get("contacts") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(StoreError::MissingContacts),
        };

        Ok(Self {
            company_name,
            contacts: contacts.iter().map(validate_contact).collect(),
        })
    }
}

fn validate_contact(value: &Value) -> Result<ContactRecord, InvalidContact> {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let name = required_field(obj, "name");
    let title = required_field(obj, "title");

    match (name, title) {
        (Some(name), Some(title)) => Ok(ContactRecord {
            name,
            title,
            linkedin_url: optional_field(obj, "linkedin_url"),
            phone: optional_field(obj, "phone"),
            email: optional_field(obj, "email"),
        }),
        (name, title) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push("name");
            }
            if title.is_none() {
                missing.push("title");
            }
            Err(InvalidContact {
                label: name.unwrap_or_else(|| "Unknown".to_string()),
                missing,
            })
        }
    }
}

fn required_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn optional_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_payload() {
        let req = StorageRequest::parse(
            r#"{"company_name": "Acme", "contacts": [{"name": "Ada", "title": "CTO"}]}"#.into(),
        )
        .unwrap();
        assert_eq!(req.company_name, "Acme");
        assert_eq!(req.contacts.len(), 1);

        let contact = req.contacts[0].as_ref().unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.linkedin_url, "N/A");
        assert_eq!(contact.phone, "N/A");
        assert_eq!(contact.email, "N/A");
    }

    #[test]
    fn test_structured_string_is_decoded() {
        let encoded = json!(r#"{"company_name": "Acme", "contacts": [{"name": "Ada", "title": "CTO"}]}"#);
        let req = StorageRequest::parse(encoded.into()).unwrap();
        assert_eq!(req.company_name, "Acme");
    }

    #[test]
    fn test_invalid_json() {
        let err = StorageRequest::parse("{not json".into()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Error: Failed to parse contact information as JSON"));
    }

    #[test]
    fn test_non_object() {
        let err = StorageRequest::parse(json!([1, 2]).into()).unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject));
    }

    #[test]
    fn test_missing_company_name() {
        let err = StorageRequest::from_value(json!({"contacts": [{"name": "Ada", "title": "CTO"}]}))
            .unwrap_err();
        assert!(err.to_string().contains("company_name"));

        let err = StorageRequest::from_value(json!({"company_name": null, "contacts": []}))
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingCompanyName));
    }

    #[test]
    fn test_empty_company_name() {
        let err = StorageRequest::from_value(json!({"company_name": "", "contacts": [{}]}))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidCompanyName));
    }

    #[test]
    fn test_missing_or_empty_contacts() {
        for value in [
            json!({"company_name": "Acme"}),
            json!({"company_name": "Acme", "contacts": []}),
            json!({"company_name": "Acme", "contacts": null}),
            json!({"company_name": "Acme", "contacts": "Ada"}),
        ] {
            let err = StorageRequest::from_value(value).unwrap_err();
            assert!(matches!(err, StoreError::MissingContacts));
        }
    }

    #[test]
    fn test_contact_validation_lists_missing_fields() {
        let req = StorageRequest::from_value(json!({
            "company_name": "Acme",
            "contacts": [
                {"name": "Ada"},
                {"title": "CFO"},
                {"name": "", "title": ""},
                "not an object"
            ]
        }))
        .unwrap();

        let errors: Vec<_> = req.contacts.iter().map(|c| c.clone().unwrap_err()).collect();
        assert_eq!(errors[0].label, "Ada");
        assert_eq!(errors[0].missing, vec!["title"]);
        assert_eq!(errors[1].label, "Unknown");
        assert_eq!(errors[1].missing, vec!["name"]);
        assert_eq!(errors[2].missing, vec!["name", "title"]);
        assert_eq!(errors[2].to_string(), "Missing name, title");
        assert_eq!(errors[3].label, "Unknown");
    }

    #[test]
    fn test_optional_fields() {
        let req = StorageRequest::from_value(json!({
            "company_name": "Acme",
            "contacts": [{
                "name": "Ada",
                "title": "CTO",
                "linkedin_url": "https://linkedin.com/in/ada",
                "phone": 5551234,
                "email": null
            }]
        }))
        .unwrap();

        let contact = req.contacts[0].as_ref().unwrap();
        assert_eq!(contact.linkedin_url, "https://linkedin.com/in/ada");
        assert_eq!(contact.phone, "5551234");
        assert_eq!(contact.email, "N/A");
    }
}
