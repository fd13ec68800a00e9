//! SOS Network Registrar
//!
//! Registers sensor networks and their offerings with a Sensor Observation
//! Service, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
