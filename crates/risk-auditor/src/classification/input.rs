use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::attributes::AttributeKey;

pub const SYSTEM_NAME_FIELD: &str = "systemName";
pub const SYSTEM_PURPOSE_FIELD: &str = "systemPurpose";

/// Validation failures raised before any rule is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidType { field, .. } => field,
        }
    }
}

/// Normalized questionnaire answers. Every attribute key is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentInput {
    system_name: String,
    system_purpose: String,
    flags: BTreeMap<AttributeKey, bool>,
}

impl AssessmentInput {
    /// Builds an input with every flag answered "no".
    pub fn new(
        system_name: impl Into<String>,
        system_purpose: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let system_name = checked_text(system_name.into(), SYSTEM_NAME_FIELD)?;
        let system_purpose = checked_text(system_purpose.into(), SYSTEM_PURPOSE_FIELD)?;

        let flags = AttributeKey::ordered()
            .into_iter()
            .map(|key| (key, false))
            .collect();

        Ok(Self {
            system_name,
            system_purpose,
            flags,
        })
    }

    pub fn with_flag(mut self, key: AttributeKey, value: bool) -> Self {
        self.flags.insert(key, value);
        self
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    pub fn system_purpose(&self) -> &str {
        &self.system_purpose
    }

    pub fn flag(&self, key: AttributeKey) -> bool {
        self.flags.get(&key).copied().unwrap_or(false)
    }

    /// Flags in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = (AttributeKey, bool)> + '_ {
        self.flags.iter().map(|(key, value)| (*key, *value))
    }
}

/// Rejects blank text; accepted text is kept exactly as supplied.
fn checked_text(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value)
}

/// Validates a raw request payload into an [`AssessmentInput`].
///
/// Absent or `null` flags count as "no"; unknown keys are ignored.
pub fn normalize(raw: &Value) -> Result<AssessmentInput, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::InvalidType {
        field: "payload",
        expected: "JSON object",
    })?;

    let system_name = required_text(object, SYSTEM_NAME_FIELD)?;
    let system_purpose = required_text(object, SYSTEM_PURPOSE_FIELD)?;
    let mut input = AssessmentInput::new(system_name, system_purpose)?;

    for key in AttributeKey::ordered() {
        let answer = match object.get(key.wire_name()) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(answer)) => *answer,
            Some(_) => {
                return Err(ValidationError::InvalidType {
                    field: key.wire_name(),
                    expected: "boolean",
                })
            }
        };
        input = input.with_flag(key, answer);
    }

    Ok(input)
}

fn required_text<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(ValidationError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

/// Payload keys that are neither text fields nor known attributes.
pub fn unrecognized_fields(raw: &Value) -> Vec<String> {
    let Some(object) = raw.as_object() else {
        return Vec::new();
    };

    object
        .keys()
        .filter(|key| {
            key.as_str() != SYSTEM_NAME_FIELD
                && key.as_str() != SYSTEM_PURPOSE_FIELD
                && AttributeKey::from_wire_name(key).is_none()
        })
        .cloned()
        .collect()
}
