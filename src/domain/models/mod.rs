//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod endpoints;
pub mod identifiers;
pub mod network;
pub mod publisher;
pub mod registration;
pub mod sos_response;

pub use endpoints::SosEndpoints;
pub use identifiers::{DerivedIdentifiers, IdentifierDeriver, NetworkId, NetworkProcedureId};
pub use network::{
    Location, NetworkData, NetworkDescription, SensorDescription, SourceReference,
    StationDescription,
};
pub use publisher::PublisherInfo;
pub use registration::{CreationOutcome, OfferingScope, RegistrationReport, RemoteNetworkState};
pub use sos_response::ResponseClassifier;
