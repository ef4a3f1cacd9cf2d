//! Metric names recorded by the Store runtime.
//!
//! The runtime records through the `metrics` facade only. Without an
//! installed recorder every call is a no-op; a binary that wants the numbers
//! installs its own exporter and calls [`describe`] once.
//!
//! - `store.actions.total`: actions reduced, including effect feedback
//! - `store.actions.rejected`: actions refused after shutdown
//! - `store.reducer.duration_seconds`: time spent inside `reduce`
//! - `store.effects.executed{type}`: effects executed, by variant
//! - `store.storage.failures`: failed storage reads and writes

use metrics::{describe_counter, describe_histogram, Unit};

/// Actions reduced, including effect feedback
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions refused after shutdown
pub const REJECTED_ACTIONS: &str = "store.actions.rejected";

/// Time spent inside `reduce`
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Effects executed, labelled by variant
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";

/// Failed storage reads and writes
pub const STORAGE_FAILURES: &str = "store.storage.failures";

/// Register descriptions for every runtime metric with the installed recorder.
pub fn describe() {
    describe_counter!(ACTIONS_TOTAL, Unit::Count, "Actions reduced by the store");
    describe_counter!(
        REJECTED_ACTIONS,
        Unit::Count,
        "Actions rejected because the store was shut down"
    );
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Time spent executing the reducer"
    );
    describe_counter!(EFFECTS_EXECUTED, Unit::Count, "Effects executed, by type");
    describe_counter!(
        STORAGE_FAILURES,
        Unit::Count,
        "Storage operations that returned an error"
    );
}
