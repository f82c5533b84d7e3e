use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Data loading error: {0}")]
    DataLoadError(String),

    #[error("CSV parse error: {0}")]
    CsvError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
