// --- File: src/zarinpal/http_transport.rs ---

// Only compile this module if the 'http' feature is enabled
#![cfg(feature = "http")]

use futures::future::BoxFuture;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::transport::{Payload, Transport};
use super::Mode;
use crate::config::ClientConfig;
use crate::error::TransportError;

/// [`Transport`] posting JSON to the Zarinpal REST endpoints with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Transport matching the mode and host of `config`.
    pub fn for_config(config: &ClientConfig) -> Self {
        Self::new(
            Client::new(),
            Self::base_url(config.mode(), &config.gateway_host),
        )
    }

    /// Sandbox runs the legacy WebGate API, production runs v4.
    pub fn base_url(mode: Mode, host: &str) -> String {
        match mode {
            Mode::Sandbox => format!("https://sandbox.{host}/pg/rest/WebGate"),
            Mode::Production => format!("https://api.{host}/pg/v4/payment"),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), endpoint)
    }

    async fn post(&self, endpoint: &str, payload: Payload) -> Result<Payload, TransportError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%url, "Zarinpal HTTP request");

        let res = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str::<Payload>(&body)?)
    }
}

impl Transport for HttpTransport {
    fn send_request<'a>(
        &'a self,
        endpoint: &'a str,
        payload: Payload,
    ) -> BoxFuture<'a, Result<Payload, TransportError>> {
        Box::pin(self.post(endpoint, payload))
    }
}
