use thiserror::Error;

pub type SummaryResult<T> = Result<T, SummaryError>;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Location error: {0}")]
    Location(String),
}
