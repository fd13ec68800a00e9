//! Identifier Derivation
//!
//! Canonical URNs under which networks, their aggregate procedure, their
//! stations and the stations' sensors are known to the SOS. The same identifiers are used to look a
//! network up and to create it, so derivation must be deterministic.

use crate::domain::models::network::{NetworkDescription, SensorDescription, StationDescription};
use crate::shared::errors::DomainError;

const NETWORK_URN_PREFIX: &str = "urn:ioos:network";
const STATION_URN_PREFIX: &str = "urn:ioos:station";
const SENSOR_URN_PREFIX: &str = "urn:ioos:sensor";
const AGGREGATE_PROCEDURE_SUFFIX: &str = "all";

/// Newtype wrapper for a network identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkId(String);

impl NetworkId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype wrapper for the "all sensors" procedure of a network
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkProcedureId(String);

impl NetworkProcedureId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NetworkProcedureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiers derived from a network description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    pub network_id: NetworkId,
    pub procedure_id: NetworkProcedureId,
}

/// Derives identifiers following the `urn:ioos:<kind>:<authority>:<label>`
/// convention.
///
/// Network identifiers depend on the authority and the network's source id
/// only.
#[derive(Debug, Clone)]
pub struct IdentifierDeriver {
    authority: String,
}

impl IdentifierDeriver {
    /// Create a deriver for a naming authority
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if the authority is empty or
    /// contains characters that would break the URN (whitespace or `:`).
    pub fn new(authority: impl Into<String>) -> Result<Self, DomainError> {
        let authority = authority.into();
        if authority.is_empty()
            || authority.contains(':')
            || authority.chars().any(char::is_whitespace)
        {
            return Err(DomainError::InvalidIdentifier(format!(
                "naming authority '{authority}' must be a non-empty URN segment"
            )));
        }
        Ok(Self { authority })
    }

    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    #[must_use]
    pub fn network_id(&self, network: &NetworkDescription) -> NetworkId {
        NetworkId(format!(
            "{NETWORK_URN_PREFIX}:{}:{}",
            self.authority,
            network.source_id()
        ))
    }

    #[must_use]
    pub fn network_procedure_id(&self, network: &NetworkDescription) -> NetworkProcedureId {
        NetworkProcedureId(format!(
            "{}:{AGGREGATE_PROCEDURE_SUFFIX}",
            self.network_id(network)
        ))
    }

    #[must_use]
    pub fn station_id(&self, station: &StationDescription) -> String {
        format!("{STATION_URN_PREFIX}:{}:{}", self.authority, station.id)
    }

    #[must_use]
    pub fn sensor_id(&self, station: &StationDescription, sensor: &SensorDescription) -> String {
        format!(
            "{SENSOR_URN_PREFIX}:{}:{}:{}",
            self.authority, station.id, sensor.id
        )
    }

    #[must_use]
    pub fn derive(&self, network: &NetworkDescription) -> DerivedIdentifiers {
        DerivedIdentifiers {
            network_id: self.network_id(network),
            procedure_id: self.network_procedure_id(network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::{Location, NetworkData, SourceReference};

    fn network(source_id: &str, long_name: &str, stations: usize) -> NetworkDescription {
        let stations = (0..stations)
            .map(|i| StationDescription {
                id: format!("st-{i}"),
                name: format!("Station {i}"),
                description: String::new(),
                feature_of_interest_name: String::new(),
                location: Location::new(60.0, -150.0),
                platform_type: Some("FIXED MET STATION".to_string()),
                moving: i % 2 == 0,
                sensors: vec![],
            })
            .collect();

        NetworkDescription::new(NetworkData {
            source_id: source_id.to_string(),
            long_name: long_name.to_string(),
            short_name: String::new(),
            description: format!("{long_name} description"),
            source: SourceReference::default(),
            stations,
        })
        .unwrap()
    }

    #[test]
    fn test_network_id_format() {
        let deriver = IdentifierDeriver::new("aoos").unwrap();
        let ids = deriver.derive(&network("nerrs", "NERRS", 0));

        assert_eq!(ids.network_id.as_str(), "urn:ioos:network:aoos:nerrs");
        assert_eq!(ids.procedure_id.as_str(), "urn:ioos:network:aoos:nerrs:all");
    }

    #[test]
    fn test_identifiers_depend_only_on_source_id() {
        let deriver = IdentifierDeriver::new("aoos").unwrap();
        let first = deriver.derive(&network("nerrs", "NERRS", 0));
        let second = deriver.derive(&network("nerrs", "Reserves, renamed", 7));

        assert_eq!(first, second);
        assert_eq!(
            first.network_id.as_str().as_bytes(),
            second.network_id.as_str().as_bytes()
        );
    }

    #[test]
    fn test_identifiers_ignore_descriptive_fields() {
        let deriver = IdentifierDeriver::new("aoos").unwrap();
        let bare = network("nerrs", "NERRS", 0);
        let decorated = NetworkDescription::new(NetworkData {
            source_id: "nerrs".to_string(),
            long_name: "National Estuarine Research Reserves".to_string(),
            short_name: "NERRS".to_string(),
            description: "Water quality and weather at estuarine reserves".to_string(),
            source: SourceReference {
                name: "NERRS CDMO".to_string(),
                country: "USA".to_string(),
                email: "cdmo@example.org".to_string(),
                web_address: "https://cdmo.example.org".to_string(),
                operator_sector: "gov_federal".to_string(),
            },
            stations: network("other", "Other", 3).stations().to_vec(),
        })
        .unwrap();

        assert_eq!(deriver.derive(&bare), deriver.derive(&decorated));
    }

    #[test]
    fn test_different_source_ids_yield_different_identifiers() {
        let deriver = IdentifierDeriver::new("aoos").unwrap();
        let first = deriver.derive(&network("nerrs", "NERRS", 0));
        let second = deriver.derive(&network("usgs", "NERRS", 0));

        assert_ne!(first.network_id, second.network_id);
        assert_ne!(first.procedure_id, second.procedure_id);
    }

    #[test]
    fn test_station_id_format() {
        let deriver = IdentifierDeriver::new("aoos").unwrap();
        let network = network("nerrs", "NERRS", 1);

        assert_eq!(
            deriver.station_id(&network.stations()[0]),
            "urn:ioos:station:aoos:st-0"
        );
    }

    #[test]
    fn test_sensor_id_format() {
        let deriver = IdentifierDeriver::new("aoos").unwrap();
        let network = network("nerrs", "NERRS", 1);
        let sensor = SensorDescription {
            id: "airtemp".to_string(),
            description: String::new(),
            phenomena: vec![],
        };

        assert_eq!(
            deriver.sensor_id(&network.stations()[0], &sensor),
            "urn:ioos:sensor:aoos:st-0:airtemp"
        );
    }

    #[test]
    fn test_rejects_invalid_authority() {
        assert!(IdentifierDeriver::new("").is_err());
        assert!(IdentifierDeriver::new("a:b").is_err());
        assert!(IdentifierDeriver::new("a b").is_err());
    }
}
