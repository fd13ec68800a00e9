//! Network Manifest DTOs
//!
//! Data transfer objects for the JSON network manifest.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::network::{
    Location, NetworkData, NetworkDescription, SensorDescription, SourceReference,
    StationDescription,
};
use crate::shared::errors::DomainError;

lazy_static! {
    /// Characters allowed in a URN label
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[A-Za-z0-9._\-]+$").expect("valid regex");
}

/// Validates a source/station/sensor identifier
fn validate_identifier(value: &str) -> Result<(), validator::ValidationError> {
    if IDENTIFIER_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("identifier");
        error.message = Some(
            "Identifier may only contain letters, digits, '.', '_' and '-'".into(),
        );
        Err(error)
    }
}

/// Validates an optional web address (empty, or starting with http:// or https://)
fn validate_web_address(url: &str) -> Result<(), validator::ValidationError> {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("url");
        error.message = Some("Web address must start with http:// or https://".into());
        Err(error)
    }
}

/// Top-level manifest document
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ManifestDto {
    #[validate(length(min = 1, message = "manifest must list at least one network"))]
    #[validate(nested)]
    pub networks: Vec<NetworkDto>,
}

/// DTO describing one network
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDto {
    #[validate(length(min = 1, max = 100, message = "sourceId must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_identifier"))]
    pub source_id: String,

    #[validate(length(min = 1, max = 200, message = "longName must be between 1 and 200 characters"))]
    pub long_name: String,

    #[serde(default)]
    pub short_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(nested)]
    pub source: SourceDto,

    #[serde(default)]
    #[validate(nested)]
    pub stations: Vec<StationDto>,
}

/// DTO describing the organisation operating a network
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SourceDto {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_web_address"))]
    pub web_address: String,

    #[serde(default)]
    pub operator_sector: String,
}

/// DTO describing a station
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    #[validate(custom(function = "validate_identifier"))]
    pub id: String,

    #[validate(length(min = 1, message = "station name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub feature_of_interest_name: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[serde(default)]
    pub platform_type: Option<String>,

    #[serde(default)]
    pub moving: bool,

    #[serde(default)]
    #[validate(nested)]
    pub sensors: Vec<SensorDto>,
}

/// DTO describing a sensor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SensorDto {
    #[validate(custom(function = "validate_identifier"))]
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub phenomena: Vec<String>,
}

impl From<SourceDto> for SourceReference {
    fn from(dto: SourceDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
            email: dto.email,
            web_address: dto.web_address,
            operator_sector: dto.operator_sector,
        }
    }
}

impl From<SensorDto> for SensorDescription {
    fn from(dto: SensorDto) -> Self {
        Self {
            id: dto.id,
            description: dto.description,
            phenomena: dto.phenomena,
        }
    }
}

impl From<StationDto> for StationDescription {
    fn from(dto: StationDto) -> Self {
        Self {
            feature_of_interest_name: dto.feature_of_interest_name.unwrap_or_else(|| dto.name.clone()),
            id: dto.id,
            name: dto.name,
            description: dto.description,
            location: Location::new(dto.latitude, dto.longitude),
            platform_type: dto.platform_type,
            moving: dto.moving,
            sensors: dto.sensors.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<NetworkDto> for NetworkDescription {
    type Error = DomainError;

    fn try_from(dto: NetworkDto) -> Result<Self, Self::Error> {
        NetworkDescription::new(NetworkData {
            source_id: dto.source_id,
            long_name: dto.long_name,
            short_name: dto.short_name,
            description: dto.description,
            source: dto.source.into(),
            stations: dto.stations.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_json(source_id: &str, latitude: f64) -> String {
        format!(
            r#"{{
                "sourceId": "{source_id}",
                "longName": "Test Network",
                "stations": [
                    {{ "id": "st-1", "name": "Station 1", "latitude": {latitude}, "longitude": -150.0 }}
                ]
            }}"#
        )
    }

    #[test]
    fn test_valid_network_dto() {
        let dto: NetworkDto = serde_json::from_str(&network_json("aoos", 60.0)).unwrap();
        assert!(dto.validate().is_ok());

        let network = NetworkDescription::try_from(dto).unwrap();
        assert_eq!(network.source_id(), "aoos");
        assert_eq!(network.stations()[0].feature_of_interest_name, "Station 1");
        assert_eq!(network.stations()[0].location, Location::new(60.0, -150.0));
    }

    #[test]
    fn test_rejects_invalid_source_id() {
        let dto: NetworkDto = serde_json::from_str(&network_json("aoos:network", 60.0)).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        let dto: NetworkDto = serde_json::from_str(&network_json("aoos", 91.0)).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_source_web_address() {
        let dto: NetworkDto = serde_json::from_str(
            r#"{ "sourceId": "aoos", "longName": "AOOS", "source": { "name": "AOOS", "webAddress": "ftp://aoos.org" } }"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("nerrs_cdmo-1.0").is_ok());
        assert!(validate_identifier("with space").is_err());
        assert!(validate_identifier("").is_err());
    }
}
