//! # tiny_zarinpal
//!
//! `tiny_zarinpal` is a small client for the [Zarinpal](https://www.zarinpal.com) payment gateway,
//! with optional Actix-Web routes to start a checkout and handle the gateway callback.
//!
//! ## ✅ Features
//!
//! - 💳 Payment request and verification against sandbox (WebGate) or production (v4)
//! - 🔀 Redirect values for the payment page, including ZarinGate / PSP portals
//! - 🗣️ Status code messages in English and Persian
//! - 🔌 Pluggable transport (`Transport` trait), with a `reqwest` one behind `--features http`
//!
//! ## 🔧 Usage
//!
//! ```ignore
//! use tiny_zarinpal::{config::ClientConfig, zarinpal::{HttpTransport, ZarinpalClient}};
//!
//! let config = ClientConfig::new("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx").sandbox(true);
//! let client = ZarinpalClient::new(config.clone(), HttpTransport::for_config(&config));
//! let result = client.request(payload).await?;
//! if result.is_success() {
//!     return Ok(client.redirect(&result.authority));
//! }
//! ```
//!
//! ### `.env` values
//!
//! - `ZARINPAL_MERCHANT_ID` (required)
//! - `ZARINPAL_SANDBOX=false`
//! - `ZARINPAL_ZARINGATE=false`
//! - `ZARINPAL_ZARINGATE_PSP=` (one of `Asan`, `Sep`, `Sad`, `Pec`, `Fan`, `Emz`)
//! - `ZARINPAL_LANG=fa` (`en` or `fa`)
//! - `ZARINPAL_FRAMEWORK_REDIRECT=true`
//! - `ZARINPAL_HOST=zarinpal.com`
//!
//! ## ✨ Feature Flags
//!
//! - `http`: Enables `HttpTransport` and the `tiny_zarinpal` server binary.
//!
//! ## 📚 Modules
//!
//! - [`zarinpal`](crate::zarinpal) — Gateway client, messages, redirects and handlers
//! - [`config`](crate::config) — Client configuration
//! - [`error`](crate::error) — Error types
//! - [`utils`](crate::utils) — Environment loader
//!
//! ## 📄 License
//!
//! MIT License

pub mod config;
pub mod error;
pub mod utils;
pub mod zarinpal;
