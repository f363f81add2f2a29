use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("period '{period}' has no digits in its first token")]
    MalformedPeriod { period: String },

    #[error("dataset contains no records")]
    EmptyDataset,
}
