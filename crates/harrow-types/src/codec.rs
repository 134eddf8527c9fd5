//! Open codec trait for engine-registrable scalar types.
//!
//! A scalar type bundles validation, canonicalization, and interning behind
//! a single construction entry point. The engine wires implementers into its
//! own cast/literal dispatch tables by composition; there is no shared value
//! base type.

use harrow_error::Result;

use crate::context::CastContext;
use crate::intern::ValueInterner;
use crate::value::SqlValue;

/// A registrable scalar type.
///
/// This trait is **open** (user-implementable). The engine calls
/// [`construct`](Self::construct) when parsing a literal of this type or
/// casting a string to it.
///
/// # Contract
///
/// `construct` either returns a fully-formed value or an error; it must not
/// leave observable side effects on failure (beyond diagnostics).
pub trait ScalarType: Send + Sync {
    /// Type name, used in error labels and diagnostics.
    fn name(&self) -> &str;

    /// Validate, normalize, and (when eligible) intern a raw string into a
    /// value of this type.
    ///
    /// `ctx` carries the host's compatibility mode; `None` means default
    /// mode. `interner` is the host-owned deduplication cache.
    fn construct(
        &self,
        raw: &str,
        ctx: Option<&CastContext>,
        interner: &ValueInterner,
    ) -> Result<SqlValue>;
}
