#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use serde_json::Value;

use tiny_zarinpal::{
    config::ClientConfig,
    error::TransportError,
    zarinpal::{Payload, Transport, ZarinpalClient},
};

pub const MERCHANT_ID: &str = "00000000-1111-2222-3333-444444444444";

/// Transport replaying canned responses and recording every call.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<Payload, TransportError>>>>,
    calls: Arc<Mutex<Vec<(String, Payload)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, response: Value) -> Self {
        let payload = response.as_object().cloned().expect("response must be a JSON object");
        self.responses.lock().unwrap().push_back(Ok(payload));
        self
    }

    pub fn fail_with(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<(String, Payload)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send_request<'a>(
        &'a self,
        endpoint: &'a str,
        payload: Payload,
    ) -> BoxFuture<'a, Result<Payload, TransportError>> {
        self.calls.lock().unwrap().push((endpoint.to_string(), payload));
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Payload::new()));
        Box::pin(async move { next })
    }
}

pub fn payload(value: Value) -> Payload {
    value.as_object().cloned().expect("payload must be a JSON object")
}

pub fn sandbox_client(transport: MockTransport) -> ZarinpalClient {
    ZarinpalClient::new(ClientConfig::new(MERCHANT_ID).sandbox(true), transport)
}

pub fn production_client(transport: MockTransport) -> ZarinpalClient {
    ZarinpalClient::new(ClientConfig::new(MERCHANT_ID), transport)
}
