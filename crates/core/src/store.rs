//! State-store trait for explicit UI state containers.

/// State container execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Stores must not perform IO or side effects in either step. Deferred work
/// (e.g. an auto-clear timer) belongs to the dispatching shell, which feeds
/// its outcome back in as another command.
pub trait StateStore {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Monotonically increasing version of the store's state.
    ///
    /// Bumped by one per applied event; lets a rendering shell detect change
    /// without diffing the whole state.
    fn version(&self) -> u64;

    /// Evolve in-memory state from a single event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}
