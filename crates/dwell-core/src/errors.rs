use thiserror::Error;

/// Errors surfaced by the core pipeline.
///
/// Only ingestion and artifact writing can fail; the extraction and sweep
/// stages are total functions. Inverted or unterminated stops are data,
/// not errors; they flow through and show up in the output.
#[derive(Debug, Error)]
pub enum DwellError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A time value that is neither plain seconds nor a clock string.
    #[error("cannot parse time value '{value}'")]
    Time { value: String },

    /// Structurally broken stop log.
    #[error("malformed stop log (line {line}): {reason}")]
    Malformed { line: usize, reason: String },
}
