//! Network Use Cases
//!
//! Registration of sensor networks with the SOS.

mod ensure_network_registered;

pub use ensure_network_registered::EnsureNetworkRegisteredUseCase;
