//! Publisher Domain Model

use serde::Deserialize;
use validator::Validate;

/// Organisation registering networks with the SOS.
///
/// Only the RegisterSensor document carries it.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct PublisherInfo {
    #[validate(length(min = 1, message = "publisher name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "publisher country must not be empty"))]
    pub country: String,

    #[validate(email(message = "publisher email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub web_address: String,
}
