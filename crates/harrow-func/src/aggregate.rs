//! Aggregate function trait.
//!
//! Aggregate functions accumulate a result across multiple rows. Each
//! GROUP BY group gets its own state.

use harrow_error::Result;
use harrow_types::{Session, SqlValue};

/// An aggregate SQL function.
///
/// This trait is **open** (user-implementable). Extension authors implement
/// it to add custom aggregates; the engine's aggregation driver owns the
/// state lifecycle.
///
/// # State lifecycle
///
/// 1. [`initial_state`](Self::initial_state) creates a fresh accumulator
///    when a group begins.
/// 2. [`step`](Self::step) is called once per contributing row, in row
///    order, single-threaded.
/// 3. [`finalize`](Self::finalize) consumes the state and returns the
///    group's result, exactly once after the last step.
///
/// A state is never reused or rewound. An `Err` from `step` is terminal for
/// that state: accumulation for the group is abandoned and no further calls
/// are made on it.
///
/// # Send + Sync
///
/// The function object itself is shared across threads via `Arc`. The
/// `State` type must be `Send` so the driver can move it between threads;
/// states are never accessed concurrently.
pub trait AggregateFunction: Send + Sync {
    /// The per-group accumulator type.
    type State: Send;

    /// Create a fresh accumulator (zero/identity state).
    fn initial_state(&self) -> Self::State;

    /// Process one row, updating the accumulator.
    ///
    /// `session` is the host's execution handle, passed through opaquely.
    fn step(&self, session: &Session, state: &mut Self::State, value: &SqlValue) -> Result<()>;

    /// Consume the accumulator and produce the final result.
    fn finalize(&self, session: &Session, state: Self::State) -> Result<SqlValue>;

    /// The function name, used in error messages and EXPLAIN output.
    fn name(&self) -> &str;
}
