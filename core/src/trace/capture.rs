use backtrace::Backtrace;

use super::frame::StackFrame;
use super::selector::TraceSelector;
use crate::format::Report;

/// Source of "the current call stack", innermost frame first.
///
/// Dumps reach the stack through this seam so the walk can be scripted in
/// tests and replaced by hosts that keep their own frame bookkeeping.
pub trait StackCapture {
    fn frames(&self) -> Vec<StackFrame>;
}

/// Captures the live thread's stack via the `backtrace` crate.
///
/// Frame details depend on debug info being present; frames whose symbols do
/// not resolve keep placeholder fields so stack depth is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeCapture;

impl StackCapture for RuntimeCapture {
    fn frames(&self) -> Vec<StackFrame> {
        let mut frames = Vec::new();
        for frame in Backtrace::new().frames() {
            for symbol in frame.symbols() {
                let function = match symbol.name() {
                    Some(name) => strip_hash(name.to_string()),
                    None => "<unknown>".to_string(),
                };
                frames.push(StackFrame {
                    module: module_of(&function),
                    file: symbol
                        .filename()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default(),
                    line: symbol.lineno().unwrap_or(0),
                    function,
                });
            }
        }
        frames
    }
}

/// Result of one stack walk: the call-site summary plus the frames the
/// selector kept.
#[derive(Debug, Clone)]
pub struct StackSummary {
    /// `"(Debug in <file> at line: <line>)"`, or empty when the stack held
    /// no frame outside the helper.
    pub caller: String,
    pub selector: TraceSelector,
    pub frames: Vec<StackFrame>,
}

impl StackSummary {
    /// Summary line, newline, then the pretty-printed frame list. Under
    /// [`TraceSelector::None`] there is no list at all; under the other
    /// selectors an empty selection still renders its collection marker.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.caller);
        out.push('\n');
        if self.selector != TraceSelector::None {
            let list = Report::List(self.frames.iter().map(Report::from).collect());
            out.push_str(&list.render());
        }
        out
    }
}

/// Walk the capture source, strip the helper's own leading frames, note the
/// first frame outside the helper, and keep what the selector asks for.
///
/// Never fails: an empty or all-helper stack yields an empty summary and an
/// empty frame list.
pub fn capture(source: &dyn StackCapture, selector: TraceSelector) -> StackSummary {
    let mut frames = source.frames();

    let skip = frames
        .iter()
        .position(|frame| !is_helper_frame(frame))
        .unwrap_or(frames.len());
    frames.drain(..skip);

    let caller = match frames.first() {
        Some(first) => format!("(Debug in {} at line: {})", first.file, first.line),
        None => String::new(),
    };

    let frames = match selector {
        TraceSelector::None => Vec::new(),
        TraceSelector::Last => frames.into_iter().take(1).collect(),
        TraceSelector::All => frames,
    };

    StackSummary {
        caller,
        selector,
        frames,
    }
}

/// Frames declared inside this crate, plus the capture machinery sitting
/// below it on a live stack.
fn is_helper_frame(frame: &StackFrame) -> bool {
    const NOISE: &[&str] = &[
        "backtrace::",
        "backtrace_rs",
        "std::backtrace",
        "<unknown>",
    ];

    let name = frame.function.as_str();
    if NOISE.iter().any(|prefix| name.contains(prefix)) {
        return true;
    }
    // Trait impls demangle as `<gander::… as gander::…>::method`, so a plain
    // prefix test on the module path is not enough.
    name.starts_with("gander::")
        || name.contains("<gander::")
        || frame
            .module
            .as_deref()
            .is_some_and(|module| module == "gander" || module.starts_with("gander::"))
}

/// Drop the `::h0123456789abcdef` suffix rustc appends to mangled symbols.
fn strip_hash(symbol: String) -> String {
    if let Some(idx) = symbol.rfind("::h") {
        let tail = &symbol[idx + 3..];
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_hexdigit()) {
            return symbol[..idx].to_string();
        }
    }
    symbol
}

/// Everything before the final path segment, `None` for bare names.
fn module_of(path: &str) -> Option<String> {
    path.rfind("::").map(|idx| path[..idx].to_string())
}
