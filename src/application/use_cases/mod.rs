//! Use Cases
//!
//! Application-specific business rules.

pub mod networks;

pub use networks::EnsureNetworkRegisteredUseCase;
