//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (manifest loading) and
//! driven adapters (HTTP transport, XML builders, logging, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
