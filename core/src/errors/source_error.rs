use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("no caller frame outside gander on the stack")]
    NoCallerFrame,

    #[error("could not read source file '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("no `fn {function}` signature found in '{path}'")]
    SignatureNotFound { function: String, path: String },
}
