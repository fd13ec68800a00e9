//! Common test utilities for e2e tests
//!
//! Provides a wiremock-backed SOS and a use case wired with the real
//! reqwest transport and quick-xml request builder.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sos_network_registrar::application::use_cases::networks::EnsureNetworkRegisteredUseCase;
use sos_network_registrar::domain::models::{
    IdentifierDeriver, Location, NetworkData, NetworkDescription, PublisherInfo, SensorDescription,
    SosEndpoints, SourceReference, StationDescription,
};
use sos_network_registrar::infrastructure::driven_adapters::{
    ReqwestSosTransport, TracingRegistrationObserver, XmlRequestBuilder,
};

/// Naming authority used by every test
pub const AUTHORITY: &str = "test";

/// Identifiers derived for [`test_network`]
pub const NETWORK_ID: &str = "urn:ioos:network:test:net-123";
pub const PROCEDURE_ID: &str = "urn:ioos:network:test:net-123:all";

pub const SENSOR_ML_RESPONSE: &str = r#"<sml:SensorML xmlns:sml="http://www.opengis.net/sensorML/1.0.1" version="1.0.1"/>"#;

/// Test SOS context
pub struct TestSos {
    pub server: MockServer,
    pub use_case: EnsureNetworkRegisteredUseCase,
}

impl TestSos {
    /// Start a mock SOS and wire a use case against it
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let use_case = create_use_case(&format!("{}/sos/sos", server.uri()));

        Self { server, use_case }
    }

    /// Answer every DescribeSensor request with `body`
    pub async fn describe_sensor_responds(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path("/sos/sos"))
            .and(body_string_contains("DescribeSensor"))
            .and(body_string_contains(NETWORK_ID))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer the first `times` DescribeSensor requests with `body`, taking
    /// precedence over mocks mounted with the default priority
    pub async fn describe_sensor_responds_first(&self, body: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path("/sos/sos"))
            .and(body_string_contains("DescribeSensor"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .up_to_n_times(times)
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    pub async fn register_sensor_responds(&self, body: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/sos/sos"))
            .and(body_string_contains("RegisterSensor"))
            .and(body_string_contains(NETWORK_ID))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn offering_exists_responds(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path("/sos/admin"))
            .and(query_param("request", "OfferingExists"))
            .and(query_param("id", NETWORK_ID))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer CreateOffering requests scoped to the network procedure
    pub async fn create_offering_responds(&self, body: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/sos/admin"))
            .and(query_param("request", "CreateOffering"))
            .and(query_param("id", NETWORK_ID))
            .and(query_param("name", "Test Network"))
            .and(query_param("allObservedProperties", "true"))
            .and(query_param("allFeaturesOfInterest", "true"))
            .and(query_param("procedures", PROCEDURE_ID))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Answer CreateOffering requests spanning every procedure
    pub async fn create_all_procedures_offering_responds(&self, body: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/sos/admin"))
            .and(query_param("request", "CreateOffering"))
            .and(query_param("id", NETWORK_ID))
            .and(query_param("allProcedures", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }
}

/// Wire the production adapters against `sos_url`
pub fn create_use_case(sos_url: &str) -> EnsureNetworkRegisteredUseCase {
    let transport = ReqwestSosTransport::new(Some(Duration::from_secs(5)))
        .expect("Failed to build HTTP client");

    EnsureNetworkRegisteredUseCase::new(
        Arc::new(transport),
        Arc::new(XmlRequestBuilder::new()),
        Arc::new(TracingRegistrationObserver),
        IdentifierDeriver::new(AUTHORITY).expect("valid authority"),
        SosEndpoints::from_sos_url(sos_url).expect("url with sos segment"),
    )
}

/// Acknowledgement sent by the admin endpoint after creating the offering
pub fn offering_created_ack() -> String {
    format!("\"Offering {NETWORK_ID} created\"")
}

pub fn test_network() -> NetworkDescription {
    NetworkDescription::new(NetworkData {
        source_id: "net-123".to_string(),
        long_name: "Test Network".to_string(),
        short_name: "TN".to_string(),
        description: "Network registered by the e2e tests".to_string(),
        source: SourceReference {
            name: "Test Operator".to_string(),
            country: "USA".to_string(),
            email: "operator@example.org".to_string(),
            web_address: "https://operator.example.org".to_string(),
            operator_sector: "research".to_string(),
        },
        stations: vec![StationDescription {
            id: "st-1".to_string(),
            name: "Station 1".to_string(),
            description: "Shore station".to_string(),
            feature_of_interest_name: "Station 1".to_string(),
            location: Location::new(61.2, -149.9),
            platform_type: Some("FIXED MET STATION".to_string()),
            moving: false,
            sensors: vec![SensorDescription {
                id: "airtemp".to_string(),
                description: "Air temperature".to_string(),
                phenomena: vec!["air_temperature".to_string()],
            }],
        }],
    })
    .expect("valid test network")
}

pub fn test_publisher() -> PublisherInfo {
    PublisherInfo {
        name: "Test Publisher".to_string(),
        country: "USA".to_string(),
        email: "publisher@example.org".to_string(),
        web_address: "https://publisher.example.org".to_string(),
    }
}
