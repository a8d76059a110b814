use futures::future::BoxFuture;
use serde_json::{Map, Value};

use crate::error::TransportError;

/// JSON object exchanged with the gateway.
pub type Payload = Map<String, Value>;

// The trait the client talks to for every outbound call
pub trait Transport: Send + Sync {
    /// Sends `payload` to the logical `endpoint` (e.g. `"request"`, `"PaymentVerification"`)
    /// and returns the decoded JSON body.
    fn send_request<'a>(
        &'a self,
        endpoint: &'a str,
        payload: Payload,
    ) -> BoxFuture<'a, Result<Payload, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send_request<'a>(
        &'a self,
        endpoint: &'a str,
        payload: Payload,
    ) -> BoxFuture<'a, Result<Payload, TransportError>> {
        (**self).send_request(endpoint, payload)
    }
}

/// Merges `overrides` into `base`. On a key collision the value from `overrides` wins; every
/// other key of `base` is kept.
pub fn merge_payload(mut base: Payload, overrides: Payload) -> Payload {
    base.extend(overrides);
    base
}
