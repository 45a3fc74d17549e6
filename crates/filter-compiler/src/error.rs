use filter_syntax::SyntaxError;
use thiserror::Error;

/// Configuration faults raised while compiling a filter.
///
/// Malformed OceanBase 1.0 input is not an error: it is reported as an
/// unsuccessful compilation instead.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to parse filter: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Unsupported source type: {0}")]
    UnsupportedSourceType(String),
}
