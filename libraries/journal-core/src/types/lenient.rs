/// Loose deserialization helpers for browser form payloads
use serde::{de, Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Deserialize an optional form value as text.
///
/// Browser forms send empty strings for untouched inputs and sometimes send numbers
/// for numeric inputs. Empty strings, `null`, `false` and zero all count as "not
/// supplied"; numbers are kept in their JSON text form.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    text_from_value(Option::<Value>::deserialize(deserializer)?)
}

/// Like [`optional_text`], but a JSON number is truncated toward zero first.
///
/// `92.5` reads as `"92"`; strings are passed through untouched.
pub(crate) fn optional_integer_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => {
            Ok(Some(truncated(&number)))
        }
        other => text_from_value(other),
    }
}

fn truncated(number: &Number) -> String {
    if let Some(whole) = number.as_i64() {
        whole.to_string()
    } else if let Some(whole) = number.as_u64() {
        whole.to_string()
    } else {
        number.as_f64().map_or_else(|| number.to_string(), |f| f.trunc().to_string())
    }
}

fn text_from_value<E: de::Error>(value: Option<Value>) -> Result<Option<String>, E> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}
