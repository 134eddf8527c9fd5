use thiserror::Error;

/// Primary error type for Harrow's value and aggregate extension surface.
///
/// The extension core produces a single operative error kind: a value that
/// failed validation, or an operation that received input outside its
/// domain. Both carry the label of the rejecting field or operation and the
/// offending literal, so the host can surface the exact input that was
/// refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarrowError {
    /// Input was rejected by a type's validator or an operation's domain
    /// check. `what` names the field or operation; `value` is the literal
    /// that was refused.
    #[error("invalid value for {what}: {value}")]
    InvalidValue { what: String, value: String },
}

impl HarrowError {
    /// Create an invalid-value error.
    pub fn invalid_value(what: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            what: what.into(),
            value: value.into(),
        }
    }

    /// The label naming the field or operation that rejected the input.
    pub fn what(&self) -> &str {
        match self {
            Self::InvalidValue { what, .. } => what,
        }
    }

    /// The offending literal carried by this error.
    pub fn offending_value(&self) -> &str {
        match self {
            Self::InvalidValue { value, .. } => value,
        }
    }
}

/// Result type alias using `HarrowError`.
pub type Result<T> = std::result::Result<T, HarrowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HarrowError::invalid_value("URL", "not a url");
        assert_eq!(err.to_string(), "invalid value for URL: not a url");
    }

    #[test]
    fn convenience_constructor() {
        let err = HarrowError::invalid_value("HARMONIC_MEAN input", "0");
        assert!(matches!(
            err,
            HarrowError::InvalidValue { ref what, ref value }
                if what == "HARMONIC_MEAN input" && value == "0"
        ));
    }

    #[test]
    fn accessors() {
        let err = HarrowError::invalid_value("URL", "ftp:/broken");
        assert_eq!(err.what(), "URL");
        assert_eq!(err.offending_value(), "ftp:/broken");
    }

    #[test]
    fn errors_compare_by_payload() {
        let a = HarrowError::invalid_value("URL", "x");
        let b = HarrowError::invalid_value("URL", "x");
        let c = HarrowError::invalid_value("URL", "y");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
