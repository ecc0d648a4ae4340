#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Row Error: expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },
    #[error("Row Error: column '{column}' is not a number: {value:?}")]
    InvalidNumber { column: &'static str, value: String },
}

impl PipelineError {
    /// Row-level errors only discard the offending line; everything else ends the load.
    pub fn is_row_error(&self) -> bool {
        match self {
            PipelineError::MissingFields { .. } | PipelineError::InvalidNumber { .. } => true,
            PipelineError::Csv(err) => !matches!(err.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
