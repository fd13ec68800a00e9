//! Network Manifest Module
//!
//! Reads the JSON file listing the networks to register.

pub mod dto;
pub mod loader;

pub use loader::{load_manifest, parse_manifest};
