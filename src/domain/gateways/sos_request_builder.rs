//! SOS Request Builder Gateway
//!
//! Abstract trait for composing the XML documents POSTed to the SOS.

use crate::domain::models::identifiers::{DerivedIdentifiers, IdentifierDeriver, NetworkId};
use crate::domain::models::network::NetworkDescription;
use crate::domain::models::publisher::PublisherInfo;
use crate::shared::errors::BuilderError;

/// Builder trait for SOS request documents
#[cfg_attr(test, mockall::automock)]
pub trait SosRequestBuilder: Send + Sync {
    /// DescribeSensor request for a procedure
    fn describe_sensor(&self, procedure_id: &NetworkId) -> Result<String, BuilderError>;

    /// RegisterSensor request describing the whole network
    fn register_network(
        &self,
        network: &NetworkDescription,
        identifiers: &DerivedIdentifiers,
        deriver: &IdentifierDeriver,
        publisher: &PublisherInfo,
    ) -> Result<String, BuilderError>;
}
