//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;

pub use errors::{BuilderError, DomainError, ManifestError, TransportError, UseCaseError};
