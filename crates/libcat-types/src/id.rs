use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::json::{as_integer, is_truthy};

/// Caller-supplied identifier of a [`Book`](crate::Book).
///
/// Identifiers are always held and compared as strings. Integer input, both
/// in request bodies and in previously persisted collections, is normalized
/// to its decimal form, so `7` and `"7"` name the same book while `"007"`
/// names a different one.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an identifier from request JSON.
    ///
    /// Accepts a non-empty string or a non-zero integer, where integral
    /// floats such as `7.0` count as integers. Anything else, including `0`
    /// and `""`, yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        if !is_truthy(value) {
            return None;
        }
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => match n.as_u64() {
                Some(u) => Some(Self(u.to_string())),
                None => as_integer(value).map(|i| Self(i.to_string())),
            },
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Float(f) => match as_integer(&Value::from(f)) {
                Some(n) => Self(n.to_string()),
                None => return Err(D::Error::custom(format!("book_id {f} is not an integer"))),
            },
        })
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookId({})", self.0)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn from_json_accepts_strings_and_integers() {
        assert_eq!(BookId::from_json(&json!("b1")), Some(BookId::new("b1")));
        assert_eq!(BookId::from_json(&json!(42)), Some(BookId::new("42")));
        assert_eq!(BookId::from_json(&json!(-1)), Some(BookId::new("-1")));
        assert_eq!(BookId::from_json(&json!(u64::MAX)), Some(BookId::new(u64::MAX.to_string())));
    }

    #[test]
    fn integral_floats_read_as_integers() {
        assert_eq!(BookId::from_json(&json!(7.0)), Some(BookId::new("7")));
        assert_eq!(BookId::from_json(&json!(-3.0)), Some(BookId::new("-3")));
        assert_eq!(BookId::from_json(&json!(0.0)), None);

        let id: BookId = serde_json::from_str("7.0").unwrap();
        assert_eq!(id, BookId::new("7"));
        assert!(serde_json::from_str::<BookId>("7.5").is_err());
    }

    #[test]
    fn from_json_rejects_falsy_and_other_types() {
        assert_eq!(BookId::from_json(&json!("")), None);
        assert_eq!(BookId::from_json(&json!(0)), None);
        assert_eq!(BookId::from_json(&json!(null)), None);
        assert_eq!(BookId::from_json(&json!(1.5)), None);
        assert_eq!(BookId::from_json(&json!(true)), None);
        assert_eq!(BookId::from_json(&json!(["b1"])), None);
    }

    #[test]
    fn deserializes_numeric_ids_as_strings() {
        let id: BookId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
        let id: BookId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&BookId::new("b1")).unwrap();
        assert_eq!(json, "\"b1\"");
    }

    #[test]
    fn leading_zeros_are_significant() {
        let numeric: BookId = serde_json::from_str("7").unwrap();
        assert_ne!(numeric, BookId::new("007"));
    }

    #[test]
    fn debug_and_display() {
        let id = BookId::new("b1");
        assert_eq!(format!("{id}"), "b1");
        assert_eq!(format!("{id:?}"), "BookId(b1)");
    }

    proptest! {
        #[test]
        fn integer_and_string_forms_agree(n in any::<i64>()) {
            let from_number: BookId = serde_json::from_value(json!(n)).unwrap();
            let from_string: BookId = serde_json::from_value(json!(n.to_string())).unwrap();
            prop_assert_eq!(from_number, from_string);
        }

        #[test]
        fn non_empty_strings_survive_from_json(s in ".+") {
            let id = BookId::from_json(&Value::String(s.clone())).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }
    }
}
