//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`StaysError`]
//! via `#[from]`. Storage adapters box their concrete error type into the
//! [`StaysError::Storage`] variant so the domain stays free of IO crates.

/// Top-level error shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum StaysError {
    /// The request payload was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record or relation could not be resolved.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request payload problems, phrased exactly as the API reports them.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Body absent, unparseable, or not a JSON object.
    #[error("Not a JSON")]
    NotJson,

    /// A required key is absent from the payload.
    #[error("Missing {0}")]
    MissingField(&'static str),
}

/// A referenced record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Record kind, e.g. `"State"` or `"Place"`.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_missing_field_like_the_legacy_api() {
        assert_eq!(
            ValidationError::MissingField("name").to_string(),
            "Missing name"
        );
        assert_eq!(ValidationError::NotJson.to_string(), "Not a JSON");
    }

    #[test]
    fn should_convert_not_found_into_stays_error() {
        let err: StaysError = NotFoundError {
            entity: "State",
            id: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, StaysError::NotFound(_)));
    }
}
