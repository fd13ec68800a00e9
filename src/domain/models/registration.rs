//! Registration Outcomes
//!
//! Typed results of a registration run. Remote rejections are values, not
//! errors, so callers can tell "already there" from "created" from
//! "refused".

use chrono::{DateTime, Utc};

use crate::domain::models::identifiers::DerivedIdentifiers;

/// Which procedures an offering is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferingScope {
    /// Only the network's aggregate procedure
    #[default]
    NamedProcedure,
    /// Every procedure known to the service
    AllProcedures,
}

impl OfferingScope {
    #[must_use]
    pub fn from_all_procedures(all_procedures: bool) -> Self {
        if all_procedures {
            Self::AllProcedures
        } else {
            Self::NamedProcedure
        }
    }
}

/// Result of trying to make one remote entity exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationOutcome {
    AlreadyExists,
    Created,
    /// The offering was not requested because its network does not exist
    BlockedByMissingNetwork,
    /// The service answered with something other than the success literal
    Rejected(String),
}

impl CreationOutcome {
    /// The entity exists remotely after this outcome
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyExists | Self::Created)
    }
}

/// Remote state of a network as observed by the two existence checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteNetworkState {
    Unregistered,
    NetworkOnly,
    /// Not expected in practice, an offering needs its network
    OfferingOnly,
    FullyRegistered,
}

impl RemoteNetworkState {
    #[must_use]
    pub fn observe(network_exists: bool, offering_exists: bool) -> Self {
        match (network_exists, offering_exists) {
            (false, false) => Self::Unregistered,
            (true, false) => Self::NetworkOnly,
            (false, true) => Self::OfferingOnly,
            (true, true) => Self::FullyRegistered,
        }
    }

    #[must_use]
    pub fn network_exists(self) -> bool {
        matches!(self, Self::NetworkOnly | Self::FullyRegistered)
    }

    #[must_use]
    pub fn offering_exists(self) -> bool {
        matches!(self, Self::OfferingOnly | Self::FullyRegistered)
    }
}

/// Outcome of one registration run for one network
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReport {
    pub identifiers: DerivedIdentifiers,
    pub initial_state: RemoteNetworkState,
    pub network: CreationOutcome,
    pub offering: CreationOutcome,
    pub checked_at: DateTime<Utc>,
}

impl RegistrationReport {
    /// Both the network and its offering exist remotely
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.network.is_success() && self.offering.is_success()
    }

    /// Nothing had to be created during this run
    #[must_use]
    pub fn was_noop(&self) -> bool {
        self.network == CreationOutcome::AlreadyExists
            && self.offering == CreationOutcome::AlreadyExists
    }
}
