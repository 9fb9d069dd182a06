//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use hostingde_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A desired record breaks a local rule; nothing was sent to the API.
    #[error("Invalid value for `{field}`: {message}")]
    Validation { field: String, message: String },

    /// A batch diff was assembled from inconsistent lists.
    #[error("Invalid record diff: {0}")]
    InvalidDiff(String),

    /// No record with this id exists remotely.
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// The write succeeded but no returned record could be identified as the
    /// one just written.
    #[error("No record named {name} of type {record_type} with the written content in zone {zone_id}")]
    RecordNotMatched {
        zone_id: String,
        name: String,
        record_type: String,
    },

    /// A lookup by id returned more than one record.
    #[error("Lookup of record {record_id} returned {count} records")]
    AmbiguousLookup { record_id: String, count: usize },

    /// Credentials map could not be parsed.
    #[error("{0}")]
    CredentialValidation(CredentialValidationError),

    /// A remote call failed.
    #[error("{operation} {target}: {source}")]
    Remote {
        operation: String,
        target: String,
        #[source]
        source: ProviderError,
    },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Wrap a [`ProviderError`] with the operation and the record or zone it targeted.
    ///
    /// ```rust
    /// use hostingde_reconciler::{CoreError, ProviderError};
    ///
    /// let err = ProviderError::Timeout { provider: "hostingde".into(), detail: "30s".into() };
    /// let err = CoreError::remote("read", "r-1")(err);
    /// assert!(err.to_string().starts_with("read r-1:"));
    /// ```
    pub fn remote(
        operation: &'static str,
        target: impl Into<String>,
    ) -> impl FnOnce(ProviderError) -> Self {
        let target = target.into();
        move |source| Self::Remote {
            operation: operation.to_string(),
            target,
            source,
        }
    }

    /// The underlying provider error, if any.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Remote { source, .. } | Self::Provider(source) => Some(source),
            _ => None,
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. }
            | Self::InvalidDiff(_)
            | Self::RecordNotFound(_)
            | Self::CredentialValidation(_) => true,
            Self::RecordNotMatched { .. } | Self::AmbiguousLookup { .. } => false,
            Self::Remote { source, .. } | Self::Provider(source) => source.is_expected(),
        }
    }
}

impl From<CredentialValidationError> for CoreError {
    fn from(e: CredentialValidationError) -> Self {
        Self::CredentialValidation(e)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
