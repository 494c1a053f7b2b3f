use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single modifier or mix value.
///
/// Only booleans, numbers and strings take part in class derivation. Every other
/// shape (null, arrays, objects, absent values) collapses into `Unsupported`, which
/// contributes no class token.
#[derive(Clone, PartialEq, Debug)]
pub enum BemValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Unsupported,
}

/// Modifiers keyed by name. The map keeps insertion order; derivation reorders
/// array-index keys first (see `utils::natural_key_order`).
pub type ModifierMap = IndexMap<String, BemValue>;

/// Mixes keyed by name. Same shape as `ModifierMap`, rendered without a prefix.
pub type MixMap = IndexMap<String, BemValue>;

/// Ordered class tokens: base name, literal class name, modifiers, mixes.
pub type ClassList = Vec<String>;

impl BemValue {
    /// Renders a number the way UI hosts stringify numeric attribute values.
    ///
    /// Integral values drop the fractional part, `-0` becomes `0` and non-finite
    /// values use their spelled-out names. Magnitudes of `1e21` and above, or below
    /// `1e-6`, switch to exponent form with an explicit sign (`1e+21`, `1e-7`).
    fn render_number(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        if value.is_infinite() {
            return match value.is_sign_positive() {
                true => "Infinity".to_string(),
                false => "-Infinity".to_string(),
            };
        }

        if value == 0.0 {
            return "0".to_string();
        }

        let magnitude = value.abs();

        if magnitude >= 1e21 || magnitude < 1e-6 {
            let exponent_form = format!("{:e}", value);

            return match exponent_form.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    format!("{}e+{}", mantissa, exponent)
                }
                _ => exponent_form,
            };
        }

        value.to_string()
    }

    /// Returns the string form of a valued entry, or `None` when the entry
    /// is a boolean or unsupported.
    pub fn as_token_value(&self) -> Option<String> {
        match self {
            BemValue::Number(value) => Some(Self::render_number(*value)),
            BemValue::Text(value) => Some(value.to_owned()),
            BemValue::Bool(_) | BemValue::Unsupported => None,
        }
    }
}

impl fmt::Display for BemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BemValue::Bool(value) => write!(f, "{}", value),
            BemValue::Number(value) => write!(f, "{}", Self::render_number(*value)),
            BemValue::Text(value) => write!(f, "{}", value),
            BemValue::Unsupported => write!(f, "unsupported"),
        }
    }
}

impl From<bool> for BemValue {
    fn from(value: bool) -> Self {
        BemValue::Bool(value)
    }
}

impl From<f64> for BemValue {
    fn from(value: f64) -> Self {
        BemValue::Number(value)
    }
}

impl From<f32> for BemValue {
    fn from(value: f32) -> Self {
        BemValue::Number(value as f64)
    }
}

impl From<i32> for BemValue {
    fn from(value: i32) -> Self {
        BemValue::Number(value as f64)
    }
}

impl From<i64> for BemValue {
    fn from(value: i64) -> Self {
        BemValue::Number(value as f64)
    }
}

impl From<u32> for BemValue {
    fn from(value: u32) -> Self {
        BemValue::Number(value as f64)
    }
}

impl From<u64> for BemValue {
    fn from(value: u64) -> Self {
        BemValue::Number(value as f64)
    }
}

impl From<usize> for BemValue {
    fn from(value: usize) -> Self {
        BemValue::Number(value as f64)
    }
}

impl From<&str> for BemValue {
    fn from(value: &str) -> Self {
        BemValue::Text(value.to_string())
    }
}

impl From<String> for BemValue {
    fn from(value: String) -> Self {
        BemValue::Text(value)
    }
}

impl<T: Into<BemValue>> From<Option<T>> for BemValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => BemValue::Unsupported,
        }
    }
}

impl From<serde_json::Value> for BemValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(v) => BemValue::Bool(v),
            serde_json::Value::Number(v) => match v.as_f64() {
                Some(n) => BemValue::Number(n),
                None => BemValue::Unsupported,
            },
            serde_json::Value::String(v) => BemValue::Text(v),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => BemValue::Unsupported,
        }
    }
}

impl<'de> Deserialize<'de> for BemValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;

        Ok(BemValue::from(raw))
    }
}

impl Serialize for BemValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BemValue::Bool(value) => serializer.serialize_bool(*value),
            BemValue::Number(value) => serializer.serialize_f64(*value),
            BemValue::Text(value) => serializer.serialize_str(value),
            BemValue::Unsupported => serializer.serialize_none(),
        }
    }
}
