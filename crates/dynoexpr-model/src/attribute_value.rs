//! DynamoDB-style `AttributeValue` with marshalling conversions.
//!
//! An `AttributeValue` is a tagged union where exactly one variant is
//! present; the JSON wire format uses single-key objects such as
//! `{"S": "hello"}` or `{"N": "42"}`. Numbers are string-encoded on the wire
//! to preserve arbitrary precision.
//!
//! The `From` impls at the bottom of this module are the marshaller: they
//! encode the type-inference rules that turn a native scalar or collection
//! into its wire representation (strings become `S`, numbers become `N`,
//! sequences become `L`, and so on). [`AttributeValue::from_json`] and
//! [`AttributeValue::to_json`] do the same for dynamically-typed JSON
//! documents.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A typed wire value.
///
/// Exactly one variant is present. Equality is structural over the variant
/// tag and payload, which is what placeholder deduplication in the builder
/// relies on: two values that marshal identically compare equal here.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String value.
    S(String),
    /// Number value, string-encoded for arbitrary precision.
    N(String),
    /// Binary value (base64-encoded in JSON).
    B(bytes::Bytes),
    /// String set.
    Ss(Vec<String>),
    /// Number set (string-encoded).
    Ns(Vec<String>),
    /// Binary set (base64-encoded in JSON).
    Bs(Vec<bytes::Bytes>),
    /// Boolean value.
    Bool(bool),
    /// Null value.
    Null(bool),
    /// List of attribute values.
    L(Vec<AttributeValue>),
    /// Map of attribute values.
    M(HashMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Returns the wire type tag for this value (`"S"`, `"N"`, `"BOOL"`, …).
    #[must_use]
    pub fn type_descriptor(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::B(_) => "B",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS",
            Self::Bool(_) => "BOOL",
            Self::Null(_) => "NULL",
            Self::L(_) => "L",
            Self::M(_) => "M",
        }
    }

    /// Returns the string value if this is an `S` variant.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number string if this is an `N` variant.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the list if this is an `L` variant.
    #[must_use]
    pub fn as_l(&self) -> Option<&[AttributeValue]> {
        match self {
            Self::L(l) => Some(l),
            _ => None,
        }
    }

    /// Returns `true` if this is a null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(true))
    }

    /// Marshal a JSON document value into its wire representation.
    ///
    /// Strings become `S`, numbers `N` (keeping the source text), booleans
    /// `Bool`, `null` becomes `Null(true)`, arrays `L`, and objects `M`.
    /// Set and binary variants never come out of this conversion; they are
    /// constructed explicitly by callers that mean them.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null(true),
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => Self::N(n.to_string()),
            serde_json::Value::String(s) => Self::S(s.clone()),
            serde_json::Value::Array(items) => {
                Self::L(items.iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(entries) => Self::M(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Unmarshal this wire value back into a JSON document value.
    ///
    /// Lossy only where the wire format is richer than JSON: numbers that
    /// parse become JSON numbers (otherwise they stay strings), sets become
    /// arrays, and binary payloads become base64 strings.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use base64::Engine;
        let b64 = |b: &bytes::Bytes| base64::engine::general_purpose::STANDARD.encode(b);
        match self {
            Self::S(s) => serde_json::Value::String(s.clone()),
            Self::N(n) => n
                .parse::<serde_json::Number>()
                .map_or_else(|_| serde_json::Value::String(n.clone()), serde_json::Value::Number),
            Self::B(b) => serde_json::Value::String(b64(b)),
            Self::Ss(v) => v.iter().cloned().map(serde_json::Value::String).collect(),
            Self::Ns(v) => v
                .iter()
                .map(|n| Self::N(n.clone()).to_json())
                .collect(),
            Self::Bs(v) => v.iter().map(|b| serde_json::Value::String(b64(b))).collect(),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Null(_) => serde_json::Value::Null,
            Self::L(items) => items.iter().map(Self::to_json).collect(),
            Self::M(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Eq for AttributeValue {}

impl std::hash::Hash for AttributeValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::S(s) => s.hash(state),
            Self::N(n) => n.hash(state),
            Self::B(b) => b.hash(state),
            Self::Bool(b) | Self::Null(b) => b.hash(state),
            Self::Ss(v) | Self::Ns(v) => v.hash(state),
            Self::Bs(v) => {
                for b in v {
                    b.hash(state);
                }
            }
            Self::L(v) => v.hash(state),
            Self::M(m) => {
                // Deterministic hash for maps: sort keys.
                let mut pairs: Vec<_> = m.iter().collect();
                pairs.sort_by_key(|(k, _)| *k);
                for (k, v) in pairs {
                    k.hash(state);
                    v.hash(state);
                }
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S(s) => write!(f, "{{S: {s}}}"),
            Self::N(n) => write!(f, "{{N: {n}}}"),
            Self::B(b) => write!(f, "{{B: {} bytes}}", b.len()),
            Self::Ss(v) => write!(f, "{{SS: {v:?}}}"),
            Self::Ns(v) => write!(f, "{{NS: {v:?}}}"),
            Self::Bs(v) => write!(f, "{{BS: {} items}}", v.len()),
            Self::Bool(b) => write!(f, "{{BOOL: {b}}}"),
            Self::Null(b) => write!(f, "{{NULL: {b}}}"),
            Self::L(v) => write!(f, "{{L: {} items}}", v.len()),
            Self::M(m) => write!(f, "{{M: {} keys}}", m.len()),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use base64::Engine;
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::S(s) => map.serialize_entry("S", s)?,
            Self::N(n) => map.serialize_entry("N", n)?,
            Self::B(b) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                map.serialize_entry("B", &encoded)?;
            }
            Self::Ss(v) => map.serialize_entry("SS", v)?,
            Self::Ns(v) => map.serialize_entry("NS", v)?,
            Self::Bs(v) => {
                let encoded: Vec<String> = v
                    .iter()
                    .map(|b| base64::engine::general_purpose::STANDARD.encode(b))
                    .collect();
                map.serialize_entry("BS", &encoded)?;
            }
            Self::Bool(b) => map.serialize_entry("BOOL", b)?,
            Self::Null(b) => map.serialize_entry("NULL", b)?,
            Self::L(list) => map.serialize_entry("L", list)?,
            Self::M(m) => map.serialize_entry("M", m)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeValueVisitor)
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an AttributeValue object with exactly one type key")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        use base64::Engine;

        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::custom(
                "AttributeValue must have exactly one key",
            ));
        };

        let decode = |encoded: &str| {
            base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .map(bytes::Bytes::from)
        };

        let value = match key.as_str() {
            "S" => AttributeValue::S(map.next_value()?),
            "N" => AttributeValue::N(map.next_value()?),
            "B" => {
                let encoded: String = map.next_value()?;
                AttributeValue::B(decode(&encoded).map_err(de::Error::custom)?)
            }
            "SS" => AttributeValue::Ss(map.next_value()?),
            "NS" => AttributeValue::Ns(map.next_value()?),
            "BS" => {
                let encoded: Vec<String> = map.next_value()?;
                let decoded: Result<Vec<bytes::Bytes>, _> =
                    encoded.iter().map(|e| decode(e)).collect();
                AttributeValue::Bs(decoded.map_err(de::Error::custom)?)
            }
            "BOOL" => AttributeValue::Bool(map.next_value()?),
            "NULL" => AttributeValue::Null(map.next_value()?),
            "L" => AttributeValue::L(map.next_value()?),
            "M" => AttributeValue::M(map.next_value()?),
            other => {
                return Err(de::Error::unknown_field(
                    other,
                    &["S", "N", "B", "SS", "NS", "BS", "BOOL", "NULL", "L", "M"],
                ));
            }
        };

        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Marshalling conversions from native values
// ---------------------------------------------------------------------------

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::S(s.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::S(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+) => {
        $(impl From<$ty> for AttributeValue {
            fn from(n: $ty) -> Self {
                Self::N(n.to_string())
            }
        })+
    };
}

impl_from_number!(i32, i64, u32, u64, f64);

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(items: Vec<T>) -> Self {
        Self::L(items.into_iter().map(Into::into).collect())
    }
}

impl From<&serde_json::Value> for AttributeValue {
    fn from(value: &serde_json::Value) -> Self {
        Self::from_json(value)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(&value)
    }
}
