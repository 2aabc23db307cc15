use crate::errors::FieldError;
use crate::validation::rules::{
    Field, FieldKind, NumberCheck, Pattern, Schema, TextCheck, UnknownKeys,
};
use serde_json::{Map, Number, Value};
use validator::ValidateEmail;

/// Reported when a required field is absent.
const REQUIRED: &str = "Required";
/// Reported when a regex-backed check without its own message fails.
const INVALID: &str = "Invalid";

impl Schema {
    /// Checks `input` against every declared field and returns the normalized
    /// record, or every violation found.
    ///
    /// Numbers given as numeric strings are coerced, digit-string query
    /// parameters become numbers, and undeclared keys are stripped or kept
    /// according to [`UnknownKeys`].
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, Vec<FieldError>> {
        let Value::Object(record) = input else {
            return Err(vec![FieldError::new(
                "unknown",
                format!("Expected object, received {}", type_name(input)),
            )]);
        };

        let mut output = match self.unknown_keys {
            UnknownKeys::Strip => Map::new(),
            UnknownKeys::Passthrough => record
                .iter()
                .filter(|(key, _)| self.field(key).is_none())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        };
        let mut errors = Vec::new();

        for field in self.fields {
            if let Some(value) = check_field(field, record.get(field.name), &mut errors) {
                output.insert(field.name.to_string(), value);
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }
}

fn check_field(field: &Field, value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<Value> {
    let mut report = |message: String| errors.push(FieldError::new(field.name, message));

    let Some(value) = value else {
        if field.required {
            report(match field.kind {
                FieldKind::Choice {
                    message: Some(message),
                    ..
                } => message.to_string(),
                _ => REQUIRED.to_string(),
            });
        }
        return None;
    };

    match &field.kind {
        FieldKind::Text(checks) => {
            let Value::String(text) = value else {
                report(format!("Expected string, received {}", type_name(value)));
                return None;
            };

            let mut valid = true;
            for check in checks.iter() {
                if let Some(message) = failed_text_check(check, text) {
                    report(message.to_string());
                    valid = false;
                }
            }

            valid.then(|| value.clone())
        }
        FieldKind::Number(checks) => {
            let Some(number) = coerce_number(value) else {
                report(format!("Expected number, received {}", type_name(value)));
                return None;
            };

            let amount = number.as_f64().unwrap_or_default();
            let mut valid = true;
            for check in checks.iter() {
                match check {
                    NumberCheck::Positive(message) if amount <= 0.0 => {
                        report(message.to_string());
                        valid = false;
                    }
                    NumberCheck::Positive(_) => {}
                }
            }

            valid.then_some(Value::Number(number))
        }
        FieldKind::Choice { options, message } => {
            let accepted = match value {
                Value::String(choice) => options.iter().any(|option| *option == choice),
                _ => false,
            };
            if accepted {
                return Some(value.clone());
            }

            report(match message {
                Some(message) => message.to_string(),
                None => default_choice_message(options, value),
            });
            None
        }
        FieldKind::Digits => {
            let Value::String(text) = value else {
                report(format!("Expected string, received {}", type_name(value)));
                return None;
            };

            if !Pattern::Digits.is_match(text) {
                report(INVALID.to_string());
                return None;
            }

            // digit strings past the signed range clamp to its maximum
            Some(Value::from(text.parse::<i64>().unwrap_or(i64::MAX)))
        }
    }
}

fn failed_text_check(check: &TextCheck, text: &str) -> Option<&'static str> {
    match check {
        TextCheck::MinLength(min, message) if text.chars().count() < *min => Some(*message),
        TextCheck::Email(message) if !text.to_owned().validate_email() => Some(*message),
        TextCheck::Matches(pattern, message) if !pattern.is_match(text) => Some(*message),
        _ => None,
    }
}

/// Numbers pass through; numeric strings become numbers, integers where
/// possible.
pub(crate) fn coerce_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(number) => Some(number.clone()),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            if let Ok(integer) = text.parse::<i64>() {
                return Some(Number::from(integer));
            }
            text.parse::<f64>()
                .ok()
                .filter(|float| float.is_finite())
                .and_then(Number::from_f64)
        }
        _ => None,
    }
}

fn default_choice_message(options: &[&str], received: &Value) -> String {
    let expected = options
        .iter()
        .map(|option| format!("'{option}'"))
        .collect::<Vec<_>>()
        .join(" | ");

    match received {
        Value::String(choice) => {
            format!("Invalid enum value. Expected {expected}, received '{choice}'")
        }
        other => format!("Expected {expected}, received {}", type_name(other)),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
