use thiserror::Error;

/// Errors surfaced by request handling and file output.
///
/// Synthesis itself never fails; unresolvable data is dropped and logged.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(
        "Missing required parameters: chartConfig, evaluationData, or chartDataMaps must be provided (missing: {})",
        .fields.join(", ")
    )]
    MissingInput { fields: Vec<&'static str> },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
