//! The URL data type: a validated, canonicalized, interned string scalar.
//!
//! Accepted grammar:
//!
//! ```text
//! url    := scheme "://" host [ ":" port ] [ "/" tail ]
//! scheme := "http" | "https" | "ftp"            (case-insensitive)
//! host   := label ("." label)* "." final | final
//! label  := 1*(ALPHA / DIGIT / "-")
//! final  := 2*ALPHA
//! port   := 1*DIGIT
//! tail   := *ANY
//! ```
//!
//! The canonical form is the full lowercased input. Lowercasing deliberately
//! covers the path/query tail as well, matching the engine's established
//! behavior even though path components of a URL are case-sensitive per
//! RFC 3986.

use std::cmp::Ordering;
use std::sync::Arc;

use harrow_error::{HarrowError, Result};

use crate::codec::ScalarType;
use crate::context::{CastContext, CompareMode};
use crate::intern::ValueInterner;
use crate::value::{quote_sql_string, SqlValue};

/// An immutable URL value.
///
/// Identity (equality, hashing, ordering) is computed solely from the
/// canonical string. Interning affects which instances share storage, never
/// how they compare.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct UrlValue {
    canonical: Arc<str>,
}

impl UrlValue {
    pub(crate) fn from_canonical(canonical: Arc<str>) -> Self {
        Self { canonical }
    }

    /// The canonical form of the empty string.
    ///
    /// Used when the host keeps empty strings distinct from NULL. Every call
    /// yields the same canonical form.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            canonical: Arc::from(""),
        }
    }

    /// The canonical string.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Whether this is the empty-canonical value.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Compare two URL values through the host's string-compare primitive.
    ///
    /// Canonical forms are already lowercase, so case sensitivity is moot
    /// here, but routing through [`CompareMode`] keeps collation decisions in
    /// one place.
    pub fn compare(&self, other: &Self, mode: CompareMode) -> Ordering {
        mode.compare_string(self.canonical(), other.canonical(), true)
    }

    /// The SQL literal form: the canonical string, quoted.
    #[must_use]
    pub fn sql_literal(&self) -> String {
        quote_sql_string(&self.canonical)
    }

    /// Whether two values share the same interned storage.
    ///
    /// Sharing is a cache property, not an identity property: equal values
    /// may or may not share storage depending on the interner's cap.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.canonical, &other.canonical)
    }
}

/// The URL scalar type codec.
pub struct UrlType;

impl ScalarType for UrlType {
    fn name(&self) -> &str {
        "URL"
    }

    /// Construct a URL value from a raw string.
    ///
    /// Empty input resolves per the host's empty-strings-as-null mode.
    /// Non-empty input is validated against the URL grammar, lowercased, and
    /// interned when at or below the interner's per-entry cap.
    fn construct(
        &self,
        raw: &str,
        ctx: Option<&CastContext>,
        interner: &ValueInterner,
    ) -> Result<SqlValue> {
        if raw.is_empty() {
            if ctx.is_some_and(|c| c.mode().treat_empty_strings_as_null) {
                return Ok(SqlValue::Null);
            }
            return Ok(SqlValue::Url(UrlValue::empty()));
        }
        if !is_well_formed(raw) {
            return Err(HarrowError::invalid_value(self.name(), raw));
        }
        let canonical = raw.to_lowercase();
        Ok(SqlValue::Url(UrlValue::from_canonical(
            interner.resolve(canonical),
        )))
    }
}

fn is_well_formed(raw: &str) -> bool {
    let Some(idx) = raw.find("://") else {
        return false;
    };
    if !is_supported_scheme(&raw[..idx]) {
        return false;
    }
    let rest = &raw[idx + 3..];
    // The tail after the first '/' is unrestricted; only the authority part
    // is checked further.
    let authority = match rest.find('/') {
        Some(p) => &rest[..p],
        None => rest,
    };
    let (host, port) = match authority.find(':') {
        Some(p) => (&authority[..p], Some(&authority[p + 1..])),
        None => (authority, None),
    };
    if let Some(port) = port {
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    is_valid_host(host)
}

fn is_supported_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http")
        || scheme.eq_ignore_ascii_case("https")
        || scheme.eq_ignore_ascii_case("ftp")
}

fn is_valid_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    let labels: Vec<&str> = host.split('.').collect();
    let (last, rest) = labels.split_last().expect("split on non-empty string");
    if last.len() < 2 || !last.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    rest.iter().all(|label| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
