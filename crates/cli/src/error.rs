use filter_compiler::FilterError;
use filter_syntax::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the configuration file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the configuration file as JSON: {0}")]
    ConfigDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to parse the filter: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Failed to compile the filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Filter was rejected for source type {0}")]
    CompileRejected(String),

    #[error("Either --filter or --config must be provided")]
    MissingFilter,
}
