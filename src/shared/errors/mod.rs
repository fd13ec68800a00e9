//! Error Types
//!
//! Layered error types. Remote rejections are not errors here: they are
//! reported as `CreationOutcome` values by the registration use case.

use thiserror::Error;

/// Domain-level errors representing broken invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("SOS url '{0}' has no 'sos' path segment to derive the admin endpoint from")]
    InvalidSosUrl(String),
}

/// Transport-level errors for failed HTTP exchanges
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while building SOS request documents
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Cannot build request: {0}")]
    Invalid(String),
}

/// Use case-level errors. Only failures of the collaborators end up here;
/// `DomainError`s are raised while building the use case's inputs.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Builder(#[from] BuilderError),
}

impl UseCaseError {
    /// Get a stable error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Builder(_) => "BUILDER_ERROR",
        }
    }
}

/// Errors raised while loading a network manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Cannot read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<validator::ValidationErrors> for ManifestError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();

        // Nested struct/list errors have no field errors at the top level
        if messages.is_empty() {
            return ManifestError::Validation(vec![err.to_string()]);
        }
        ManifestError::Validation(messages)
    }
}
