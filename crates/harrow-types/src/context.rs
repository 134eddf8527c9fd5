//! Host context handles passed opaquely into extension code.
//!
//! Extension components never construct these themselves in production: the
//! engine owns them and threads them through `construct`/`step`/`finalize`
//! calls. They are plain data here so tests can instantiate them directly.

use std::cmp::Ordering;

/// Compatibility-mode flags that affect value casting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlMode {
    /// When set, casting an empty string to a string-like type yields NULL
    /// instead of the type's empty value.
    pub treat_empty_strings_as_null: bool,
}

/// The host's string-compare primitive.
///
/// All string-like value comparisons route through this, even when the
/// operands are already normalized, so that a single collation choice
/// governs ORDER BY, GROUP BY, and index traversal consistently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareMode {
    /// Raw byte comparison (the default).
    #[default]
    Binary,
    /// ASCII case-insensitive comparison. Only folds `A-Z` → `a-z`;
    /// non-ASCII bytes are compared as-is.
    NoCase,
}

impl CompareMode {
    /// Compare two strings under this mode.
    ///
    /// `case_sensitive = false` requests ASCII case folding even under
    /// [`CompareMode::Binary`]; under [`CompareMode::NoCase`] folding always
    /// applies.
    pub fn compare_string(&self, a: &str, b: &str, case_sensitive: bool) -> Ordering {
        match (self, case_sensitive) {
            (Self::Binary, true) => a.as_bytes().cmp(b.as_bytes()),
            (Self::Binary, false) | (Self::NoCase, _) => {
                let l = a.bytes().map(|c| c.to_ascii_lowercase());
                let r = b.bytes().map(|c| c.to_ascii_lowercase());
                l.cmp(r)
            }
        }
    }
}

/// Comparison and cast context handed to value constructors.
///
/// Bundles the compatibility mode and the compare primitive the way the
/// engine's cast pipeline sees them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CastContext {
    mode: SqlMode,
    compare: CompareMode,
}

impl CastContext {
    /// Create a context with the given mode and compare primitive.
    #[must_use]
    pub const fn new(mode: SqlMode, compare: CompareMode) -> Self {
        Self { mode, compare }
    }

    /// The compatibility-mode flags.
    pub const fn mode(&self) -> SqlMode {
        self.mode
    }

    /// The string-compare primitive.
    pub const fn compare_mode(&self) -> CompareMode {
        self.compare
    }
}

/// Opaque execution handle for aggregate calls.
///
/// Carries only an identifier for host bookkeeping and log correlation;
/// nothing in the extension core reads any other state from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Session {
    id: u64,
}

impl Session {
    /// Create a session handle with the given id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    /// The session id.
    pub const fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_compare_is_byte_order() {
        let mode = CompareMode::Binary;
        assert_eq!(mode.compare_string("abc", "abc", true), Ordering::Equal);
        assert_eq!(mode.compare_string("abc", "abd", true), Ordering::Less);
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(mode.compare_string("ABC", "abc", true), Ordering::Less);
    }

    #[test]
    fn binary_compare_folds_when_case_insensitive() {
        let mode = CompareMode::Binary;
        assert_eq!(mode.compare_string("ABC", "abc", false), Ordering::Equal);
        assert_eq!(mode.compare_string("A", "b", false), Ordering::Less);
    }

    #[test]
    fn nocase_compare_always_folds() {
        let mode = CompareMode::NoCase;
        assert_eq!(mode.compare_string("Alice", "alice", true), Ordering::Equal);
        assert_eq!(mode.compare_string("Alice", "alice", false), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric() {
        let pairs = [("abc", "def"), ("hello", "world"), ("ABC", "abc")];
        for mode in [CompareMode::Binary, CompareMode::NoCase] {
            for (a, b) in pairs {
                let forward = mode.compare_string(a, b, true);
                let reverse = mode.compare_string(b, a, true);
                assert_eq!(forward, reverse.reverse(), "{mode:?}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn default_context_keeps_empty_strings() {
        let ctx = CastContext::default();
        assert!(!ctx.mode().treat_empty_strings_as_null);
        assert_eq!(ctx.compare_mode(), CompareMode::Binary);
    }

    #[test]
    fn session_id_round_trip() {
        let session = Session::new(7);
        assert_eq!(session.id(), 7);
    }
}
