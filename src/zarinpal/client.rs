// --- File: src/zarinpal/client.rs ---

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::messages;
use super::redirect::Redirect;
use super::response::ResponseShape;
use super::transport::{merge_payload, Payload, Transport};
use super::{Mode, CODE_ALREADY_VERIFIED, CODE_SUCCESS};
use crate::config::{ClientConfig, Psp};
use crate::error::TransportError;

const ALTERNATE_PORTAL_SUFFIX: &str = "AlternatePortal";

/// Normalized answer of the payment request step.
///
/// `code` is `None` when the gateway did not send one; `authority` is empty in that case too.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentRequestResult {
    pub code: Option<i64>,
    pub authority: String,
}

impl PaymentRequestResult {
    /// True when the gateway accepted the request (code 100) and issued an authority.
    pub fn is_success(&self) -> bool {
        self.code == Some(CODE_SUCCESS) && !self.authority.is_empty()
    }
}

/// Normalized answer of the verification step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentVerifyResult {
    pub code: Option<i64>,
    pub ref_id: String,
}

impl PaymentVerifyResult {
    /// True for a fresh verification (100) and for one the gateway had already done (101).
    pub fn is_paid(&self) -> bool {
        matches!(self.code, Some(CODE_SUCCESS) | Some(CODE_ALREADY_VERIFIED))
    }
}

/// Zarinpal gateway client.
///
/// Holds an immutable [`ClientConfig`] and a shared [`Transport`]; safe to share between Actix
/// workers through `web::Data`.
#[derive(Clone)]
pub struct ZarinpalClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ZarinpalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZarinpalClient")
            .field("mode", &self.mode())
            .field("language", &self.config.language)
            .finish_non_exhaustive()
    }
}

impl ZarinpalClient {
    /// Creates a client owning `transport`.
    ///
    /// # Parameters
    ///
    /// - `config`: gateway settings; the client never changes them.
    /// - `transport`: anything implementing [`Transport`], e.g. `HttpTransport` or a test double.
    ///
    /// # Returns
    ///
    /// A client ready to call [`request`](Self::request) and [`verify`](Self::verify).
    pub fn new(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client around a transport that is already shared, so several clients (for
    /// example sandbox and production) can reuse one connection pool.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Settings the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sandbox or production, from [`ClientConfig::sandbox`](crate::config::ClientConfig).
    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    /// Requests a new payment and returns its authority.
    ///
    /// The merchant identifier is injected into `payload` under the key expected by the current
    /// mode. Transport failures are returned as-is; a missing code or authority in the response
    /// is not an error (check [`PaymentRequestResult::code`]).
    pub async fn request(&self, payload: Payload) -> Result<PaymentRequestResult, TransportError> {
        let mode = self.mode();
        let response = self.send(mode.request_endpoint(), payload).await?;
        let result = ResponseShape::from(mode).request_result(&response);
        tracing::debug!(code = ?result.code, authority = %result.authority, "Zarinpal payment request response");
        Ok(result)
    }

    /// Verifies a payment after the payer returns from the gateway.
    pub async fn verify(&self, payload: Payload) -> Result<PaymentVerifyResult, TransportError> {
        let mode = self.mode();
        let response = self.send(mode.verify_endpoint(), payload).await?;
        let result = ResponseShape::from(mode).verify_result(&response);
        tracing::debug!(code = ?result.code, ref_id = %result.ref_id, "Zarinpal payment verify response");
        Ok(result)
    }

    /// Verification payload for `authority` and `amount`, keyed for the current mode.
    pub fn verification_payload(&self, authority: &str, amount: u64) -> Payload {
        let mode = self.mode();
        let mut payload = Payload::new();
        payload.insert(mode.authority_key().to_string(), Value::from(authority));
        payload.insert(mode.amount_key().to_string(), Value::from(amount));
        payload
    }

    /// Human readable message for a gateway status code in the configured language.
    pub fn code_message(&self, code: i64) -> &'static str {
        messages::lookup(self.config.language, code)
    }

    /// URL of the payment page for `authority`.
    pub fn redirect_url(&self, authority: &str) -> String {
        format!(
            "https://{}.{}/pg/StartPay/{}{}",
            self.mode().page_subdomain(),
            self.config.gateway_host,
            authority,
            self.portal_suffix()
        )
    }

    /// Redirect to the payment page for `authority`. Performing it is up to the caller.
    pub fn redirect(&self, authority: &str) -> Redirect {
        let url = self.redirect_url(authority);
        if self.config.framework_redirect {
            Redirect::framework(url)
        } else {
            Redirect::location(url)
        }
    }

    fn portal_suffix(&self) -> String {
        if !self.config.alternate_portal {
            return String::new();
        }
        match Psp::from_selector(&self.config.alternate_portal_psp) {
            Some(psp) => format!("/{}", psp.as_str()),
            None => format!("/{ALTERNATE_PORTAL_SUFFIX}"),
        }
    }

    async fn send(&self, endpoint: &str, payload: Payload) -> Result<Payload, TransportError> {
        let mode = self.mode();
        let mut merchant = Payload::new();
        merchant.insert(
            mode.merchant_key().to_string(),
            Value::String(self.config.merchant_id.clone()),
        );
        let payload = merge_payload(payload, merchant);

        tracing::debug!(endpoint, ?mode, fields = payload.len(), "Zarinpal API call");
        self.transport
            .send_request(endpoint, payload)
            .await
            .inspect_err(|e| tracing::error!(endpoint, "Zarinpal API call failed: {e}"))
    }
}
