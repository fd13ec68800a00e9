//! Driving Adapters
//!
//! Entry points that drive the application:
//! - JSON network manifest and its DTOs

pub mod manifest;
