//! Value model and type-extension surface for Harrow.
//!
//! This crate defines:
//! - [`SqlValue`], the dynamically-typed scalar passed between the engine
//!   and extension code
//! - the open [`ScalarType`] codec trait for engine-registrable value types
//! - [`UrlValue`]/[`UrlType`], the URL data type (validated, canonicalized,
//!   interned)
//! - [`ValueInterner`], the explicit, host-owned deduplication cache
//! - the host context handles ([`CastContext`], [`CompareMode`], [`SqlMode`],
//!   [`Session`]) that extension code receives opaquely

pub mod codec;
pub mod context;
pub mod intern;
pub mod url;
pub mod value;

pub use codec::ScalarType;
pub use context::{CastContext, CompareMode, Session, SqlMode};
pub use intern::ValueInterner;
pub use url::{UrlType, UrlValue};
pub use value::{quote_sql_string, SqlValue};
