//! SOS Response Classification
//!
//! The SOS answers in free text: SensorML documents, exception reports,
//! bare `true`/`false` and quoted acknowledgements. All literal matching
//! against those answers lives here. Anything unexpected, including a
//! missing or blank response, classifies as a negative answer.

use crate::domain::models::identifiers::NetworkId;

const SENSOR_ML_MARKER: &str = "sml:SensorML";
const EXCEPTION_MARKER: &str = "Exception";
const OFFERING_EXISTS: &str = "true";

/// Placeholder used in diagnostics when the transport returned no response
pub const NO_RESPONSE: &str = "<no response>";

/// Placeholder used in diagnostics when the service answered with a blank body
pub const EMPTY_RESPONSE: &str = "<empty response>";

/// Interprets raw SOS responses
pub struct ResponseClassifier;

impl ResponseClassifier {
    /// DescribeSensor answered with a SensorML document
    #[must_use]
    pub fn describes_sensor(response: Option<&str>) -> bool {
        response.is_some_and(|text| text.contains(SENSOR_ML_MARKER))
    }

    /// RegisterSensor was accepted: some acknowledgement came back and it
    /// is not an exception report.
    #[must_use]
    pub fn registration_accepted(response: Option<&str>) -> bool {
        response.is_some_and(|text| !text.trim().is_empty() && !text.contains(EXCEPTION_MARKER))
    }

    /// OfferingExists answered exactly `true`
    #[must_use]
    pub fn offering_exists(response: Option<&str>) -> bool {
        response == Some(OFFERING_EXISTS)
    }

    /// CreateOffering answered exactly `"Offering <network id> created"`,
    /// quotes included.
    #[must_use]
    pub fn offering_created(response: Option<&str>, network_id: &NetworkId) -> bool {
        response.is_some_and(|text| text == Self::offering_created_ack(network_id))
    }

    /// Acknowledgement the admin endpoint sends after creating an offering
    #[must_use]
    pub fn offering_created_ack(network_id: &NetworkId) -> String {
        format!("\"Offering {network_id} created\"")
    }

    /// Text to report for a rejected request
    #[must_use]
    pub fn rejection_reason(response: Option<&str>) -> String {
        match response {
            None => NO_RESPONSE.to_string(),
            Some(text) if text.trim().is_empty() => EMPTY_RESPONSE.to_string(),
            Some(text) => text.to_string(),
        }
    }
}
