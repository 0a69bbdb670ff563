mod source_error;

pub use source_error::SourceError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all gander errors.
///
/// Formatting and stack inspection never fail; errors only come out of the
/// best-effort source-scraping paths.
#[derive(Debug, Error, Diagnostic)]
pub enum GanderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),
}
