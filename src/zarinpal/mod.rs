//! # Zarinpal Module
//!
//! Client for the Zarinpal payment gateway: payment request, verification, status messages and
//! redirects to the payment page. Transport is injected through the [`Transport`] trait; a
//! `reqwest` implementation is available with the `http` feature.

pub mod client;
#[cfg(feature = "http")]
pub mod http_transport;
pub mod messages;
pub mod redirect;
mod response;
pub mod transport;
pub mod zarinpal_handlers;

pub use client::{PaymentRequestResult, PaymentVerifyResult, ZarinpalClient};
#[cfg(feature = "http")]
pub use http_transport::HttpTransport;
pub use redirect::Redirect;
pub use transport::{merge_payload, Payload, Transport};
pub use zarinpal_handlers::{payment_callback, start_payment};

/// Gateway status code for a successful request or verification.
pub const CODE_SUCCESS: i64 = 100;
/// Gateway status code for a payment that was already verified.
pub const CODE_ALREADY_VERIFIED: i64 = 101;

/// Gateway environment, derived from [`ClientConfig::sandbox`](crate::config::ClientConfig).
///
/// The sandbox still speaks the legacy WebGate API: capitalized keys and a flat response body.
/// Production speaks v4: snake_case keys and a response nested under `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sandbox,
    Production,
}

impl Mode {
    /// Logical endpoint name of the payment request step.
    pub fn request_endpoint(self) -> &'static str {
        match self {
            Mode::Sandbox => "PaymentRequest",
            Mode::Production => "request",
        }
    }

    /// Logical endpoint name of the verification step.
    pub fn verify_endpoint(self) -> &'static str {
        match self {
            Mode::Sandbox => "PaymentVerification",
            Mode::Production => "verify",
        }
    }

    /// Payload key carrying the merchant identifier.
    ///
    /// # Returns
    ///
    /// `"MerchantID"` for the sandbox, `"merchant_id"` for production.
    pub fn merchant_key(self) -> &'static str {
        match self {
            Mode::Sandbox => "MerchantID",
            Mode::Production => "merchant_id",
        }
    }

    /// Payload key of the authority sent back on verification.
    pub fn authority_key(self) -> &'static str {
        match self {
            Mode::Sandbox => "Authority",
            Mode::Production => "authority",
        }
    }

    /// Payload key of the amount sent back on verification.
    pub fn amount_key(self) -> &'static str {
        match self {
            Mode::Sandbox => "Amount",
            Mode::Production => "amount",
        }
    }

    /// Subdomain serving the StartPay payment page.
    pub fn page_subdomain(self) -> &'static str {
        match self {
            Mode::Sandbox => "sandbox",
            Mode::Production => "www",
        }
    }
}
