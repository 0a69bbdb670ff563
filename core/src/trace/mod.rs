mod capture;
mod frame;
mod selector;

pub use capture::{RuntimeCapture, StackCapture, StackSummary, capture};
pub use frame::StackFrame;
pub use selector::TraceSelector;
