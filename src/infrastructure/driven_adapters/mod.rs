//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - HTTP transport to the SOS
//! - XML request documents
//! - Registration logging
//! - Configuration

pub mod config;
pub mod http_transport;
pub mod tracing_observer;
pub mod xml_request_builder;

pub use config::AppConfig;
pub use http_transport::ReqwestSosTransport;
pub use tracing_observer::TracingRegistrationObserver;
pub use xml_request_builder::XmlRequestBuilder;
