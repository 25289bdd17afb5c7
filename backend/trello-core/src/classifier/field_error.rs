//! One entry of a 422 response's `errors` list and its rendered sentence.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorCode {
    /// The referenced value does not exist.
    Missing,
    /// A required field was not sent.
    MissingField,
    Invalid,
    AlreadyExists,
    /// Any other code, including an absent one. Rendered from the entry's
    /// own `message`.
    Other(String),
}

impl FieldErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "missing" => FieldErrorCode::Missing,
            "missing_field" => FieldErrorCode::MissingField,
            "invalid" => FieldErrorCode::Invalid,
            "already_exists" => FieldErrorCode::AlreadyExists,
            other => FieldErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldErrorCode::Missing => "missing",
            FieldErrorCode::MissingField => "missing_field",
            FieldErrorCode::Invalid => "invalid",
            FieldErrorCode::AlreadyExists => "already_exists",
            FieldErrorCode::Other(code) => code,
        }
    }
}

impl Default for FieldErrorCode {
    fn default() -> Self {
        FieldErrorCode::Other(String::new())
    }
}

/// A single validation failure reported by the API.
///
/// Every attribute is optional on the wire. Numbers and booleans are kept in
/// their text form; nested structures are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default, deserialize_with = "code_from_scalar")]
    pub code: FieldErrorCode,
    #[serde(default, deserialize_with = "scalar_text")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub resource: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
}

impl FieldError {
    /// Parse one element of the `errors` list.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the element is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        // Derived struct deserializers also accept sequences by position.
        let unexpected = match value {
            Value::Object(_) => return FieldError::deserialize(value),
            Value::Array(_) => Unexpected::Seq,
            Value::String(text) => Unexpected::Str(text),
            Value::Bool(flag) => Unexpected::Bool(*flag),
            Value::Number(_) => Unexpected::Other("number"),
            Value::Null => Unexpected::Unit,
        };
        Err(serde_json::Error::invalid_type(unexpected, &"a field error object"))
    }

    /// Human-readable sentence for this entry. Missing attributes render as
    /// empty text.
    pub fn render(&self) -> String {
        let field = self.field.as_deref().unwrap_or_default();
        let resource = self.resource.as_deref().unwrap_or_default();

        match &self.code {
            FieldErrorCode::Missing => format!(
                "The {field} {value} does not exist, for resource \"{resource}\"",
                value = self.value.as_deref().unwrap_or_default(),
            ),
            FieldErrorCode::MissingField => {
                format!("Field \"{field}\" is missing, for resource \"{resource}\"")
            }
            FieldErrorCode::Invalid => {
                format!("Field \"{field}\" is invalid, for resource \"{resource}\"")
            }
            FieldErrorCode::AlreadyExists => {
                format!("Field \"{field}\" already exists, for resource \"{resource}\"")
            }
            FieldErrorCode::Other(_) => self.message.clone().unwrap_or_default(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    Ok(text)
}

fn code_from_scalar<'de, D>(deserializer: D) -> Result<FieldErrorCode, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?
        .map(|code| FieldErrorCode::parse(&code))
        .unwrap_or_default())
}
