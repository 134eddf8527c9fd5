use std::cmp::Ordering;
use std::fmt;

use crate::context::CompareMode;
use crate::url::UrlValue;

/// A dynamically-typed scalar value.
///
/// This is the value shape extension code sees: the engine's full hierarchy
/// is wider, but aggregate steps and type constructors exchange exactly
/// these variants. `Null` is the distinguished absence singleton; it is
/// never validated, cast, or interned.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit IEEE 754 floating-point number.
    Double(f64),
    /// A UTF-8 text string.
    Text(String),
    /// A validated, canonicalized URL.
    Url(UrlValue),
}

impl SqlValue {
    /// Returns true if this is a NULL value.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert to a double following the engine's numeric coercion rules.
    ///
    /// - NULL -> 0.0
    /// - Integer -> as f64
    /// - Double -> itself
    /// - Text / Url -> attempt to parse, 0.0 on failure
    #[allow(clippy::cast_precision_loss)]
    pub fn to_double(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Integer(i) => *i as f64,
            Self::Double(f) => *f,
            Self::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Self::Url(u) => u.canonical().trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    /// Sort class: NULL < numeric < text-like.
    const fn sort_class(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Integer(_) | Self::Double(_) => 1,
            Self::Text(_) => 2,
            Self::Url(_) => 3,
        }
    }
}

/// Quote a string as a SQL literal, doubling embedded quote characters.
#[must_use]
pub fn quote_sql_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(i) => write!(f, "{i}"),
            // {:?} keeps the ".0" suffix on whole doubles, distinguishing
            // them from integer literals.
            Self::Double(v) => write!(f, "{v:?}"),
            Self::Text(s) => f.write_str(&quote_sql_string(s)),
            Self::Url(u) => f.write_str(&u.sql_literal()),
        }
    }
}

impl PartialEq for SqlValue {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Equal))
    }
}

impl PartialOrd for SqlValue {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let class_a = self.sort_class();
        let class_b = other.sort_class();
        if class_a != class_b {
            return Some(class_a.cmp(&class_b));
        }
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Double(a), Self::Double(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Double(b)) => (*a as f64).partial_cmp(b),
            (Self::Double(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            // The enum ordering carries no host context, so URL values
            // compare under the binary mode here. Collation-aware paths go
            // through `UrlValue::compare` with the host's mode instead.
            (Self::Url(a), Self::Url(b)) => Some(a.compare(b, CompareMode::Binary)),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for SqlValue {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<UrlValue> for SqlValue {
    fn from(u: UrlValue) -> Self {
        Self::Url(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_null() {
        assert!(SqlValue::Null.is_null());
        assert!(!SqlValue::Integer(0).is_null());
    }

    #[test]
    fn to_double_coercions() {
        assert_eq!(SqlValue::Null.to_double(), 0.0);
        assert_eq!(SqlValue::Integer(4).to_double(), 4.0);
        assert_eq!(SqlValue::Double(2.5).to_double(), 2.5);
        assert_eq!(SqlValue::Text(" 1.5 ".to_owned()).to_double(), 1.5);
        assert_eq!(SqlValue::Text("nope".to_owned()).to_double(), 0.0);
    }

    #[test]
    fn display_renders_sql_literals() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Integer(42).to_string(), "42");
        assert_eq!(SqlValue::Double(3.0).to_string(), "3.0");
        assert_eq!(SqlValue::Text("it's".to_owned()).to_string(), "'it''s'");
    }

    #[test]
    fn quote_doubles_embedded_quotes() {
        assert_eq!(quote_sql_string(""), "''");
        assert_eq!(quote_sql_string("a'b'c"), "'a''b''c'");
    }

    #[test]
    fn sort_order_null_numeric_text() {
        assert!(SqlValue::Null < SqlValue::Integer(i64::MIN));
        assert!(SqlValue::Integer(9) < SqlValue::Text(String::new()));
        assert_eq!(SqlValue::Integer(1), SqlValue::Double(1.0));
    }

    #[test]
    fn url_ordering_matches_binary_compare_mode() {
        use crate::codec::ScalarType;
        use crate::intern::ValueInterner;
        use crate::url::UrlType;

        let interner = ValueInterner::new();
        let a = UrlType
            .construct("http://alpha.example.com", None, &interner)
            .unwrap();
        let b = UrlType
            .construct("http://beta.example.com", None, &interner)
            .unwrap();
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        let (SqlValue::Url(ua), SqlValue::Url(ub)) = (&a, &b) else {
            panic!("expected URL values");
        };
        assert_eq!(
            a.partial_cmp(&b),
            Some(ua.compare(ub, CompareMode::Binary))
        );
    }

    #[test]
    fn serde_round_trip() {
        let v = SqlValue::Text("hello".to_owned());
        let json = serde_json::to_string(&v).expect("serialize");
        let back: SqlValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(v, back);
    }
}
