use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Failed to shape {0} panel data: {1}")]
    Shaping(String, String),

    #[error("An unexpected error occurred during payload normalization: {0}")]
    InternalError(String),
}
