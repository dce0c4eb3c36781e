//! bd-results: time series storage for simulation runs.

pub mod store;
pub mod types;

pub use store::ResultStore;
pub use types::{RunOutcome, RunSummary, StepSnapshot};
