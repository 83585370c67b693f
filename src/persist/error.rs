//! Persistence error types
//!
//! Persistence is best-effort during study: [`super::LearnedStore::save`]
//! logs and swallows these. Opening a store and
//! [`super::LearnedStore::try_save`] report them to the caller.

use thiserror::Error;

/// Errors from the learned-set key-value store
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),

    /// The stored value is not a JSON array of strings
    #[error("Error while decoding learned set: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: PersistenceError = json_err.into();
        assert!(matches!(err, PersistenceError::Json(_)));
        assert!(err.to_string().starts_with("Error while decoding learned set"));
    }

    #[test]
    fn test_sled_error_conversion() {
        let sled_err = sled::Error::Unsupported("test".to_string());
        let err: PersistenceError = sled_err.into();
        assert!(matches!(err, PersistenceError::Sled(_)));
    }
}
