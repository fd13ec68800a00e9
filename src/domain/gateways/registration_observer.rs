//! Registration Observer Gateway
//!
//! Injected capability that records what a registration run did.

use crate::domain::models::identifiers::NetworkId;
use crate::domain::models::registration::{RegistrationReport, RemoteNetworkState};

/// Receives the notable events of a registration run
pub trait RegistrationObserver: Send + Sync {
    fn state_observed(&self, network_id: &NetworkId, state: RemoteNetworkState);

    fn network_creating(&self, network_id: &NetworkId);

    fn network_created(&self, network_id: &NetworkId);

    fn network_rejected(&self, network_id: &NetworkId, response: &str);

    fn offering_creating(&self, network_id: &NetworkId, source_id: &str);

    fn offering_created(&self, network_id: &NetworkId);

    fn offering_rejected(&self, network_id: &NetworkId, response: &str);

    /// The offering was not requested because the network is missing
    fn offering_blocked(&self, network_id: &NetworkId);

    /// The run is over; `report` says what was found and done
    fn registration_finished(&self, report: &RegistrationReport);
}
