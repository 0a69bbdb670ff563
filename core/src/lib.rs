pub mod debugger;
pub mod errors;
pub mod format;
pub mod params;
pub mod sinks;
pub mod stats;
pub mod trace;
pub mod value;

pub use debugger::Debugger;
pub use stats::StatsTarget;
pub use trace::{RuntimeCapture, StackCapture, StackFrame, StackSummary, TraceSelector};
pub use value::{Record, Value};

use errors::GanderError;

/// Convenience function to dump a value to the log sink of a
/// default-configured [`Debugger`].
pub fn log_dump(
    value: impl Into<Value>,
    message: Option<&str>,
    selector: impl Into<TraceSelector>,
    terminate_after: bool,
) {
    Debugger::new().log_dump(value, message, selector, terminate_after);
}

/// Convenience function to dump a value to the display sink of a
/// default-configured [`Debugger`].
pub fn display_dump(
    value: impl Into<Value>,
    message: Option<&str>,
    selector: impl Into<TraceSelector>,
    terminate_after: bool,
) {
    Debugger::new().display_dump(value, message, selector, terminate_after);
}

/// Declared parameter names of the calling function, recovered from its
/// source text. See [`params::caller_parameter_names`].
pub fn caller_parameter_names() -> Result<Vec<String>, GanderError> {
    Debugger::new().caller_parameter_names()
}

/// Run `f` and dump `{Runtime, Memory usage}` per `target`, returning `f`'s
/// result unchanged.
pub fn run_with_stats<T>(target: impl Into<StatsTarget>, f: impl FnOnce() -> T) -> T {
    Debugger::new().run_with_stats(target, f)
}
