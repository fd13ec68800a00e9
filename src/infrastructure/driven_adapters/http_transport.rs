//! HTTP SOS Transport Implementation
//!
//! Implements the SosTransport trait using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};

use crate::domain::gateways::{HttpPart, SosTransport};
use crate::shared::errors::TransportError;

const XML_CONTENT_TYPE: &str = "text/xml; charset=UTF-8";

/// reqwest implementation of SosTransport
#[derive(Debug, Clone)]
pub struct ReqwestSosTransport {
    client: Client,
}

impl ReqwestSosTransport {
    /// Create a transport, optionally bounding every request by `timeout`
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the HTTP client cannot be built.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Create a transport around an existing client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Connection and timeout failures mean the SOS could not be reached at all
fn send_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() {
        TransportError::Unavailable(err.to_string())
    } else {
        TransportError::Http(err)
    }
}

/// Non-2xx answers carry no usable payload; their body is only logged.
async fn read_body(response: Response) -> Result<Option<String>, TransportError> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;

    if status.is_success() {
        Ok(Some(body))
    } else {
        tracing::warn!(%status, %url, body = %body, "SOS answered with an error status");
        Ok(None)
    }
}

#[async_trait]
impl SosTransport for ReqwestSosTransport {
    async fn post_xml(&self, url: &str, body: &str) -> Result<Option<String>, TransportError> {
        tracing::trace!(url, "POST SOS request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .body(body.to_owned())
            .send()
            .await
            .map_err(send_error)?;

        read_body(response).await
    }

    async fn get(&self, url: &str, parts: &[HttpPart]) -> Result<Option<String>, TransportError> {
        tracing::trace!(url, parts = parts.len(), "GET SOS request");

        let query: Vec<(&str, &str)> = parts
            .iter()
            .map(|part| (part.name.as_str(), part.value.as_str()))
            .collect();

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(send_error)?;

        read_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn should_post_xml_and_return_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sos/sos"))
            .and(header("content-type", XML_CONTENT_TYPE))
            .and(body_string("<DescribeSensor/>"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<sml:SensorML/>"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestSosTransport::new(None).unwrap();
        let response = transport
            .post_xml(&format!("{}/sos/sos", server.uri()), "<DescribeSensor/>")
            .await
            .unwrap();

        assert_eq!(response.as_deref(), Some("<sml:SensorML/>"));
    }

    #[tokio::test]
    async fn should_send_parts_as_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sos/admin"))
            .and(query_param("request", "CreateOffering"))
            .and(query_param("id", "urn:ioos:network:test:net-123"))
            .and(query_param("name", "Test Network"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestSosTransport::new(None).unwrap();
        let parts = [
            HttpPart::new("request", "CreateOffering"),
            HttpPart::new("id", "urn:ioos:network:test:net-123"),
            HttpPart::new("name", "Test Network"),
        ];
        let response = transport
            .get(&format!("{}/sos/admin", server.uri()), &parts)
            .await
            .unwrap();

        assert_eq!(response.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn should_return_none_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sos/admin"))
            .respond_with(ResponseTemplate::new(500).set_body_string("true"))
            .mount(&server)
            .await;

        let transport = ReqwestSosTransport::new(None).unwrap();
        let response = transport
            .get(&format!("{}/sos/admin", server.uri()), &[])
            .await
            .unwrap();

        assert_eq!(response, None);
    }

    #[tokio::test]
    async fn should_fail_when_service_is_unreachable() {
        let transport = ReqwestSosTransport::new(Some(Duration::from_secs(2))).unwrap();
        let result = transport
            .post_xml("http://127.0.0.1:1/sos/sos", "<DescribeSensor/>")
            .await;

        assert!(matches!(result, Err(TransportError::Unavailable(_))));
    }
}
