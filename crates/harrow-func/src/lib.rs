//! Aggregate extension surface for Harrow.
//!
//! This crate defines the open [`AggregateFunction`] trait that the engine's
//! aggregation driver invokes per group, and the built-in `HARMONIC_MEAN`
//! implementation. Function registration and dispatch live in the engine;
//! extension authors only implement the trait.

pub mod aggregate;
pub mod harmonic;

pub use aggregate::AggregateFunction;
pub use harmonic::{HarmonicMeanFunc, HarmonicState};
