pub type Result<T> = std::result::Result<T, SummaryError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// Embedded rate data is not a JSON object of non-negative numbers.
    MalformedRateData(String),
    /// A `SummaryConfig` override could not be parsed.
    InvalidConfig(String),
    /// The page backend refused an operation, e.g. attaching a listener.
    Dom(String),
}

impl std::fmt::Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryError::MalformedRateData(err) => write!(f, "Malformed rate data: {}", err),
            SummaryError::InvalidConfig(err) => write!(f, "Invalid summary config: {}", err),
            SummaryError::Dom(err) => write!(f, "DOM error: {}", err),
        }
    }
}

impl std::error::Error for SummaryError {}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        SummaryError::MalformedRateData(err.to_string())
    }
}
