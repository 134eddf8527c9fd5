//! `HARMONIC_MEAN(X)` aggregate.
//!
//! The harmonic mean of n values is `n / (1/x1 + ... + 1/xn)`. NULL inputs
//! are skipped; a `0` input is a domain error that aborts the group.
//!
//! # Empty-set behavior
//! An empty group finalizes to NULL. A group whose reciprocals sum to
//! exactly zero (mixed-sign inputs canceling, e.g. `[1, -1]`) also
//! finalizes to NULL rather than dividing by zero.

use harrow_error::{HarrowError, Result};
use harrow_types::{Session, SqlValue};
use tracing::debug;

use crate::aggregate::AggregateFunction;

/// Per-group state for `HARMONIC_MEAN`: a row count and a running
/// sum of reciprocals.
#[derive(Debug, Clone, Default)]
pub struct HarmonicState {
    count: i64,
    sum_reciprocals: f64,
}

/// The `HARMONIC_MEAN` aggregate function.
pub struct HarmonicMeanFunc;

impl AggregateFunction for HarmonicMeanFunc {
    type State = HarmonicState;

    fn initial_state(&self) -> Self::State {
        HarmonicState::default()
    }

    fn step(&self, session: &Session, state: &mut Self::State, value: &SqlValue) -> Result<()> {
        if value.is_null() {
            return Ok(());
        }
        state.count += 1;
        let x = value.to_double();
        if x == 0.0 {
            debug!(session = session.id(), "harmonic_mean rejected zero input");
            return Err(HarrowError::invalid_value("HARMONIC_MEAN input", "0"));
        }
        state.sum_reciprocals += 1.0 / x;
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn finalize(&self, _session: &Session, state: Self::State) -> Result<SqlValue> {
        if state.count == 0 || state.sum_reciprocals == 0.0 {
            return Ok(SqlValue::Null);
        }
        Ok(SqlValue::Double(state.count as f64 / state.sum_reciprocals))
    }

    fn name(&self) -> &str {
        "harmonic_mean"
    }
}
