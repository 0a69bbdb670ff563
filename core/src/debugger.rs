use crate::errors::GanderError;
use crate::format;
use crate::params;
use crate::sinks::{ConsolePage, DisplaySink, LogFacade, LogSink, ProcessExit, Terminate};
use crate::stats::{self, StatsTarget};
use crate::trace::{RuntimeCapture, StackCapture, TraceSelector};
use crate::value::Value;

/// Fixed message handed to the terminate capability after an opt-in abort.
pub const KILLED: &str = "Killed";

/// A configured debug helper: stack source, both output sinks, and the
/// terminate capability.
///
/// `Debugger::new()` wires the production pieces; tests and embedders swap
/// any seam through the builder. The helper itself is stateless — every dump
/// inspects only its own inputs and its own call stack, so a shared
/// `Debugger` needs no locking.
pub struct Debugger {
    capture: Box<dyn StackCapture>,
    log: Box<dyn LogSink>,
    display: Box<dyn DisplaySink>,
    terminator: Box<dyn Terminate>,
}

impl Default for Debugger {
    fn default() -> Self {
        Self {
            capture: Box::new(RuntimeCapture),
            log: Box::new(LogFacade),
            display: Box::new(ConsolePage),
            terminator: Box::new(ProcessExit),
        }
    }
}

impl Debugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capture(mut self, capture: impl StackCapture + 'static) -> Self {
        self.capture = Box::new(capture);
        self
    }

    pub fn with_log_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.log = Box::new(sink);
        self
    }

    pub fn with_display_sink(mut self, sink: impl DisplaySink + 'static) -> Self {
        self.display = Box::new(sink);
        self
    }

    pub fn with_terminate(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    /// Dump `value` to the log sink. With `terminate_after`, control passes
    /// to the terminate capability once the write is done.
    pub fn log_dump(
        &self,
        value: impl Into<Value>,
        message: Option<&str>,
        selector: impl Into<TraceSelector>,
        terminate_after: bool,
    ) {
        let text = format::format_value(
            &value.into(),
            message,
            selector.into(),
            self.capture.as_ref(),
        );
        self.log.write(&text);
        if terminate_after {
            self.terminator.terminate(KILLED);
        }
    }

    /// Dump `value` to the display sink, wrapped in the sink's preformatted
    /// envelope. Same terminate behavior as [`Debugger::log_dump`].
    pub fn display_dump(
        &self,
        value: impl Into<Value>,
        message: Option<&str>,
        selector: impl Into<TraceSelector>,
        terminate_after: bool,
    ) {
        let text = format::format_value(
            &value.into(),
            message,
            selector.into(),
            self.capture.as_ref(),
        );
        self.display.write_preformatted(&text);
        if terminate_after {
            self.terminator.terminate(KILLED);
        }
    }

    /// Declared parameter names of the function that called into gander.
    /// See [`params::caller_parameter_names`] for the failure modes.
    pub fn caller_parameter_names(&self) -> Result<Vec<String>, GanderError> {
        params::caller_parameter_names(self.capture.as_ref())
    }

    /// Run `f`, dump `{Runtime, Memory usage}` to the sink `target` picks,
    /// and return `f`'s result unchanged.
    pub fn run_with_stats<T>(
        &self,
        target: impl Into<StatsTarget>,
        f: impl FnOnce() -> T,
    ) -> T {
        stats::run_with_stats(self, target.into(), f)
    }
}
