// Normalization of the two gateway response shapes.

use serde_json::Value;

use super::client::{PaymentRequestResult, PaymentVerifyResult};
use super::transport::Payload;
use super::Mode;

/// Layout of a gateway response body.
///
/// `Flat` (sandbox): `{"Status": 100, "Authority": "..."}`.
/// `Nested` (production): `{"data": {"code": 100, "authority": "..."}, "errors": []}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseShape {
    Flat,
    Nested,
}

impl From<Mode> for ResponseShape {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sandbox => ResponseShape::Flat,
            Mode::Production => ResponseShape::Nested,
        }
    }
}

impl ResponseShape {
    pub(crate) fn request_result(self, response: &Payload) -> PaymentRequestResult {
        match self {
            ResponseShape::Flat => flat_request(response),
            ResponseShape::Nested => nested_request(response),
        }
    }

    pub(crate) fn verify_result(self, response: &Payload) -> PaymentVerifyResult {
        match self {
            ResponseShape::Flat => flat_verify(response),
            ResponseShape::Nested => nested_verify(response),
        }
    }
}

fn flat_request(response: &Payload) -> PaymentRequestResult {
    PaymentRequestResult {
        code: code_of(response.get("Status")),
        authority: text_of(response.get("Authority")),
    }
}

fn nested_request(response: &Payload) -> PaymentRequestResult {
    let data = data_of(response);
    PaymentRequestResult {
        code: code_of(data.and_then(|d| d.get("code"))),
        authority: text_of(data.and_then(|d| d.get("authority"))),
    }
}

fn flat_verify(response: &Payload) -> PaymentVerifyResult {
    PaymentVerifyResult {
        code: code_of(response.get("Status")),
        ref_id: text_of(response.get("RefID")),
    }
}

fn nested_verify(response: &Payload) -> PaymentVerifyResult {
    let data = data_of(response);
    PaymentVerifyResult {
        code: code_of(data.and_then(|d| d.get("code"))),
        ref_id: text_of(data.and_then(|d| d.get("ref_id"))),
    }
}

// v4 sends `"data": []` alongside errors, so anything but an object counts as absent
fn data_of(response: &Payload) -> Option<&Payload> {
    response.get("data").and_then(Value::as_object)
}

fn code_of(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
