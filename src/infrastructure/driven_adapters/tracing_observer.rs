//! Tracing Registration Observer
//!
//! Forwards registration events to `tracing`.

use crate::domain::gateways::RegistrationObserver;
use crate::domain::models::identifiers::NetworkId;
use crate::domain::models::registration::{RegistrationReport, RemoteNetworkState};

/// RegistrationObserver that emits structured tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRegistrationObserver;

impl RegistrationObserver for TracingRegistrationObserver {
    fn state_observed(&self, network_id: &NetworkId, state: RemoteNetworkState) {
        tracing::info!(network_id = %network_id, ?state, "Observed remote network state");
    }

    fn network_creating(&self, network_id: &NetworkId) {
        tracing::info!(network_id = %network_id, "Creating network");
    }

    fn network_created(&self, network_id: &NetworkId) {
        tracing::info!(network_id = %network_id, "Finished creating network");
    }

    fn network_rejected(&self, network_id: &NetworkId, response: &str) {
        tracing::error!(network_id = %network_id, response, "SOS rejected network registration");
    }

    fn offering_creating(&self, network_id: &NetworkId, source_id: &str) {
        tracing::info!(network_id = %network_id, source_id, "Creating offering");
    }

    fn offering_created(&self, network_id: &NetworkId) {
        tracing::info!(network_id = %network_id, "Finished creating offering");
    }

    fn offering_rejected(&self, network_id: &NetworkId, response: &str) {
        tracing::error!(network_id = %network_id, response, "SOS rejected offering creation");
    }

    fn offering_blocked(&self, network_id: &NetworkId) {
        tracing::warn!(network_id = %network_id, "Offering not created, network is not registered");
    }

    fn registration_finished(&self, report: &RegistrationReport) {
        tracing::info!(
            network_id = %report.identifiers.network_id,
            registered = report.is_registered(),
            network = ?report.network,
            offering = ?report.offering,
            "Network registration finished"
        );
    }
}
