//! SOS Transport Gateway
//!
//! Abstract trait for the raw HTTP exchanges with an SOS instance.

use async_trait::async_trait;

use crate::shared::errors::TransportError;

/// One `name=value` pair of a GET query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPart {
    pub name: String,
    pub value: String,
}

impl HttpPart {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Transport trait for SOS HTTP exchanges.
///
/// `Ok(None)` means the service answered without a usable body. Only
/// failures to complete the exchange are errors.
#[async_trait]
pub trait SosTransport: Send + Sync {
    /// POST an XML document and return the response text
    async fn post_xml(&self, url: &str, body: &str) -> Result<Option<String>, TransportError>;

    /// GET with query parts and return the response text
    async fn get(&self, url: &str, parts: &[HttpPart]) -> Result<Option<String>, TransportError>;
}
