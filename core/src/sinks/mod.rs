use std::sync::{Arc, Mutex};

/// Destination for log-routed dumps.
pub trait LogSink {
    fn write(&self, text: &str);
}

/// Destination for display-routed dumps. Implementations wrap the text in
/// their own preformatted envelope before emission.
pub trait DisplaySink {
    fn write_preformatted(&self, text: &str);
}

/// Injected process-termination capability, invoked only when a dump opts
/// in. Injection keeps the core testable without ending the test process.
pub trait Terminate {
    fn terminate(&self, message: &str) -> !;
}

/// Routes dumps through the `log` facade, one record per dump.
///
/// Dumps are developer diagnostics, so they go out at debug level under the
/// `gander` target; whatever backend the host installed decides where they
/// land.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn write(&self, text: &str) {
        log::debug!(target: "gander", "{text}");
    }
}

/// Prints dumps to stdout between fixed-width rules so multi-line dumps stay
/// visually separate from surrounding program output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePage;

const RULE: &str = "----------------------------------------";

impl DisplaySink for ConsolePage {
    fn write_preformatted(&self, text: &str) {
        println!("{RULE}\n{text}\n{RULE}");
    }
}

/// Prints the message to stderr and ends the process with a nonzero status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, message: &str) -> ! {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

/// Collects everything written to it, for tests and embedders that want to
/// capture dumps instead of emitting them. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    fn push(&self, text: &str) {
        self.entries.lock().unwrap().push(text.to_string());
    }
}

impl LogSink for MemorySink {
    fn write(&self, text: &str) {
        self.push(text);
    }
}

impl DisplaySink for MemorySink {
    fn write_preformatted(&self, text: &str) {
        self.push(text);
    }
}
