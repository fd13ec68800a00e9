//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod registration_observer;
pub mod sos_request_builder;
pub mod sos_transport;

pub use registration_observer::RegistrationObserver;
pub use sos_request_builder::SosRequestBuilder;
pub use sos_transport::{HttpPart, SosTransport};
