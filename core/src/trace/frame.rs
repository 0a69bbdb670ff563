use serde::Serialize;

/// One call-stack entry at the instant of a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackFrame {
    /// Demangled symbol path, hash suffix stripped.
    pub function: String,
    pub file: String,
    pub line: u32,
    /// Leading module path of the symbol, `None` when it did not resolve.
    pub module: Option<String>,
}

impl StackFrame {
    /// Final path segment of `function` — the bare name as written at the
    /// declaration site.
    pub fn bare_name(&self) -> &str {
        self.function.rsplit("::").next().unwrap_or(&self.function)
    }
}
