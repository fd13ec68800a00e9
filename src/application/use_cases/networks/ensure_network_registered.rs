//! Ensure Network Registered Use Case
//!
//! Makes sure a network and its offering exist on the SOS, creating
//! whichever is missing. Remote state is queried on every run and never
//! cached, so running it again is harmless.
//!
//! Two concurrent runs for the same network can both observe "missing" and
//! both try to create it. Nothing here serialises them; the outcome depends
//! on how the SOS handles duplicate registrations.

use std::sync::Arc;

use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::gateways::{HttpPart, RegistrationObserver, SosRequestBuilder, SosTransport};
use crate::domain::models::endpoints::SosEndpoints;
use crate::domain::models::identifiers::{DerivedIdentifiers, IdentifierDeriver};
use crate::domain::models::network::NetworkDescription;
use crate::domain::models::publisher::PublisherInfo;
use crate::domain::models::registration::{
    CreationOutcome, OfferingScope, RegistrationReport, RemoteNetworkState,
};
use crate::domain::models::sos_response::ResponseClassifier;
use crate::shared::errors::UseCaseError;

/// Use case for registering a network and its offering
pub struct EnsureNetworkRegisteredUseCase {
    transport: Arc<dyn SosTransport>,
    request_builder: Arc<dyn SosRequestBuilder>,
    observer: Arc<dyn RegistrationObserver>,
    deriver: IdentifierDeriver,
    endpoints: SosEndpoints,
}

impl EnsureNetworkRegisteredUseCase {
    /// Create a new EnsureNetworkRegisteredUseCase
    #[must_use]
    pub fn new(
        transport: Arc<dyn SosTransport>,
        request_builder: Arc<dyn SosRequestBuilder>,
        observer: Arc<dyn RegistrationObserver>,
        deriver: IdentifierDeriver,
        endpoints: SosEndpoints,
    ) -> Self {
        Self {
            transport,
            request_builder,
            observer,
            deriver,
            endpoints,
        }
    }

    /// Execute the use case
    ///
    /// The network is always handled before the offering, and the offering
    /// is only requested once the network is confirmed to exist.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Transport` if an HTTP exchange fails.
    /// Returns `UseCaseError::Builder` if a request document cannot be built.
    pub async fn execute(
        &self,
        network: &NetworkDescription,
        publisher: &PublisherInfo,
        scope: OfferingScope,
    ) -> Result<RegistrationReport, UseCaseError> {
        let identifiers = self.deriver.derive(network);
        let span = tracing::info_span!(
            "registration",
            run_id = %Uuid::new_v4(),
            network_id = %identifiers.network_id,
        );

        self.run(network, publisher, scope, identifiers)
            .instrument(span)
            .await
    }

    /// Boolean form of [`Self::execute`]: `true` iff both the network and
    /// its offering exist when the call returns.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub async fn ensure_registered(
        &self,
        network: &NetworkDescription,
        publisher: &PublisherInfo,
        all_procedures: bool,
    ) -> Result<bool, UseCaseError> {
        let report = self
            .execute(
                network,
                publisher,
                OfferingScope::from_all_procedures(all_procedures),
            )
            .await?;
        Ok(report.is_registered())
    }

    async fn run(
        &self,
        network: &NetworkDescription,
        publisher: &PublisherInfo,
        scope: OfferingScope,
        identifiers: DerivedIdentifiers,
    ) -> Result<RegistrationReport, UseCaseError> {
        let network_exists = self.is_network_created(network).await?;
        let offering_exists = self.is_offering_created(network).await?;
        let initial_state = RemoteNetworkState::observe(network_exists, offering_exists);
        self.observer
            .state_observed(&identifiers.network_id, initial_state);

        if initial_state == RemoteNetworkState::FullyRegistered {
            let report = RegistrationReport {
                identifiers,
                initial_state,
                network: CreationOutcome::AlreadyExists,
                offering: CreationOutcome::AlreadyExists,
                checked_at: Utc::now(),
            };
            self.observer.registration_finished(&report);
            return Ok(report);
        }

        let network_outcome = if initial_state.network_exists() {
            CreationOutcome::AlreadyExists
        } else {
            self.create_network(network, publisher).await?
        };

        let offering_outcome = if initial_state.offering_exists() {
            CreationOutcome::AlreadyExists
        } else {
            self.create_offering(network, scope).await?
        };

        let report = RegistrationReport {
            identifiers,
            initial_state,
            network: network_outcome,
            offering: offering_outcome,
            checked_at: Utc::now(),
        };

        self.observer.registration_finished(&report);
        Ok(report)
    }

    /// Whether the SOS can describe the network's procedure
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError` if the request cannot be built or sent.
    pub async fn is_network_created(
        &self,
        network: &NetworkDescription,
    ) -> Result<bool, UseCaseError> {
        let network_id = self.deriver.network_id(network);
        let request = self.request_builder.describe_sensor(&network_id)?;

        let response = self
            .transport
            .post_xml(self.endpoints.sos_url(), &request)
            .await?;

        Ok(ResponseClassifier::describes_sensor(response.as_deref()))
    }

    /// Register the network unless it already exists
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError` if a request cannot be built or sent.
    pub async fn create_network(
        &self,
        network: &NetworkDescription,
        publisher: &PublisherInfo,
    ) -> Result<CreationOutcome, UseCaseError> {
        if self.is_network_created(network).await? {
            return Ok(CreationOutcome::AlreadyExists);
        }

        let identifiers = self.deriver.derive(network);
        self.observer.network_creating(&identifiers.network_id);

        let request =
            self.request_builder
                .register_network(network, &identifiers, &self.deriver, publisher)?;
        let response = self
            .transport
            .post_xml(self.endpoints.sos_url(), &request)
            .await?;

        if ResponseClassifier::registration_accepted(response.as_deref()) {
            self.observer.network_created(&identifiers.network_id);
            Ok(CreationOutcome::Created)
        } else {
            let reason = ResponseClassifier::rejection_reason(response.as_deref());
            self.observer
                .network_rejected(&identifiers.network_id, &reason);
            Ok(CreationOutcome::Rejected(reason))
        }
    }

    /// Whether the admin endpoint reports an offering for the network
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Transport` if the request cannot be sent.
    pub async fn is_offering_created(
        &self,
        network: &NetworkDescription,
    ) -> Result<bool, UseCaseError> {
        let network_id = self.deriver.network_id(network);
        let parts = [
            HttpPart::new("request", "OfferingExists"),
            HttpPart::new("id", network_id.as_str()),
        ];

        let response = self
            .transport
            .get(self.endpoints.admin_url(), &parts)
            .await?;

        Ok(ResponseClassifier::offering_exists(response.as_deref()))
    }

    /// Create the network's offering unless it already exists.
    ///
    /// Returns `BlockedByMissingNetwork` without contacting the admin
    /// endpoint when the network itself is not registered.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError` if a request cannot be built or sent.
    pub async fn create_offering(
        &self,
        network: &NetworkDescription,
        scope: OfferingScope,
    ) -> Result<CreationOutcome, UseCaseError> {
        if self.is_offering_created(network).await? {
            return Ok(CreationOutcome::AlreadyExists);
        }

        let identifiers = self.deriver.derive(network);
        if !self.is_network_created(network).await? {
            self.observer.offering_blocked(&identifiers.network_id);
            return Ok(CreationOutcome::BlockedByMissingNetwork);
        }

        self.observer
            .offering_creating(&identifiers.network_id, network.source_id());

        let parts = create_offering_parts(network, &identifiers, scope);
        let response = self
            .transport
            .get(self.endpoints.admin_url(), &parts)
            .await?;

        if ResponseClassifier::offering_created(response.as_deref(), &identifiers.network_id) {
            self.observer.offering_created(&identifiers.network_id);
            Ok(CreationOutcome::Created)
        } else {
            let reason = ResponseClassifier::rejection_reason(response.as_deref());
            self.observer
                .offering_rejected(&identifiers.network_id, &reason);
            Ok(CreationOutcome::Rejected(reason))
        }
    }
}

fn create_offering_parts(
    network: &NetworkDescription,
    identifiers: &DerivedIdentifiers,
    scope: OfferingScope,
) -> Vec<HttpPart> {
    let mut parts = vec![
        HttpPart::new("request", "CreateOffering"),
        HttpPart::new("id", identifiers.network_id.as_str()),
        HttpPart::new("name", network.long_name()),
        HttpPart::new("allObservedProperties", "true"),
        HttpPart::new("allFeaturesOfInterest", "true"),
    ];

    match scope {
        OfferingScope::AllProcedures => parts.push(HttpPart::new("allProcedures", "true")),
        OfferingScope::NamedProcedure => parts.push(HttpPart::new(
            "procedures",
            identifiers.procedure_id.as_str(),
        )),
    }

    parts
}
