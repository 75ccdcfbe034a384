use thiserror::Error;

/// The three failure buckets the repository reports to callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// The service answered with a non-success status.
    #[error("Error the server: {0}")]
    Server(String),

    /// The service could not be reached.
    #[error("Error connection. Check your internet")]
    Connection,

    #[error("Unexpected error {0}")]
    Unexpected(String),
}

/// Errors returned by the forecast use case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("Location cannot be empty")]
    EmptyLocation,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_fixed_prefixes() {
        assert_eq!(
            RepositoryError::Server("500 Internal Server Error".into()).to_string(),
            "Error the server: 500 Internal Server Error"
        );
        assert_eq!(
            RepositoryError::Connection.to_string(),
            "Error connection. Check your internet"
        );
        assert_eq!(
            RepositoryError::Unexpected("boom".into()).to_string(),
            "Unexpected error boom"
        );
    }

    #[test]
    fn forecast_error_is_transparent_over_repository_error() {
        let err = ForecastError::from(RepositoryError::Connection);
        assert_eq!(err.to_string(), "Error connection. Check your internet");
        assert_eq!(ForecastError::EmptyLocation.to_string(), "Location cannot be empty");
    }
}
