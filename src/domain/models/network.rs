//! Network Domain Model
//!
//! Describes a sensor network: the grouping of stations that is registered
//! with the SOS as a single unit.

use crate::shared::errors::DomainError;

/// Geographic position in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A sensor mounted on a station
#[derive(Debug, Clone, PartialEq)]
pub struct SensorDescription {
    pub id: String,
    pub description: String,
    /// Observed phenomena, as ontology URIs or plain names
    pub phenomena: Vec<String>,
}

/// A monitoring station that belongs to a network
#[derive(Debug, Clone, PartialEq)]
pub struct StationDescription {
    pub id: String,
    pub name: String,
    pub description: String,
    pub feature_of_interest_name: String,
    pub location: Location,
    pub platform_type: Option<String>,
    pub moving: bool,
    pub sensors: Vec<SensorDescription>,
}

/// Organisation operating the stations of a network
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceReference {
    pub name: String,
    pub country: String,
    pub email: String,
    pub web_address: String,
    pub operator_sector: String,
}

/// Data required to describe a network
#[derive(Debug, Clone)]
pub struct NetworkData {
    pub source_id: String,
    pub long_name: String,
    pub short_name: String,
    pub description: String,
    pub source: SourceReference,
    pub stations: Vec<StationDescription>,
}

/// Network description consumed by the registration workflow.
///
/// The source identifier seeds every derived identifier, so it is checked
/// once here and never changes afterwards.
#[derive(Debug, Clone)]
pub struct NetworkDescription {
    source_id: String,
    long_name: String,
    short_name: String,
    description: String,
    source: SourceReference,
    stations: Vec<StationDescription>,
}

impl NetworkDescription {
    /// Create a network description from its data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if the source identifier is
    /// empty or contains whitespace.
    pub fn new(data: NetworkData) -> Result<Self, DomainError> {
        if data.source_id.is_empty() {
            return Err(DomainError::InvalidIdentifier(
                "network source id must not be empty".to_string(),
            ));
        }
        if data.source_id.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidIdentifier(format!(
                "network source id '{}' must not contain whitespace",
                data.source_id
            )));
        }

        Ok(Self {
            source_id: data.source_id,
            long_name: data.long_name,
            short_name: data.short_name,
            description: data.description,
            source: data.source,
            stations: data.stations,
        })
    }

    // Getters

    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn source(&self) -> &SourceReference {
        &self.source
    }

    #[must_use]
    pub fn stations(&self) -> &[StationDescription] {
        &self.stations
    }

    /// Smallest lat/lon box containing every station, if there are any
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Location, Location)> {
        let mut locations = self.stations.iter().map(|s| s.location);
        let first = locations.next()?;

        Some(locations.fold((first, first), |(lower, upper), loc| {
            (
                Location::new(lower.latitude.min(loc.latitude), lower.longitude.min(loc.longitude)),
                Location::new(upper.latitude.max(loc.latitude), upper.longitude.max(loc.longitude)),
            )
        }))
    }
}
