// --- File: src/config.rs ---

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::zarinpal::Mode;

/// Language used for status code messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Fa,
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fa" => Ok(Language::Fa),
            _ => Err(ConfigError::Invalid {
                key: "ZARINPAL_LANG",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Fa => f.write_str("fa"),
        }
    }
}

/// Payment service providers reachable through the ZarinGate alternate portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Psp {
    Asan,
    Sep,
    Sad,
    Pec,
    Fan,
    Emz,
}

impl Psp {
    pub const ALL: [Psp; 6] = [Psp::Asan, Psp::Sep, Psp::Sad, Psp::Pec, Psp::Fan, Psp::Emz];

    pub fn as_str(self) -> &'static str {
        match self {
            Psp::Asan => "Asan",
            Psp::Sep => "Sep",
            Psp::Sad => "Sad",
            Psp::Pec => "Pec",
            Psp::Fan => "Fan",
            Psp::Emz => "Emz",
        }
    }

    /// Matches a configured selector against the allow-list.
    ///
    /// Blank selectors never match. Matching is exact and case-sensitive, so `" Sep"` or `"sep"`
    /// are rejected.
    pub fn from_selector(selector: &str) -> Option<Psp> {
        if selector.trim().is_empty() {
            return None;
        }
        Psp::ALL.into_iter().find(|psp| psp.as_str() == selector)
    }
}

/// Settings for a [`ZarinpalClient`](crate::zarinpal::ZarinpalClient).
///
/// Build one with [`ClientConfig::new`] and the setters below, or read it from the environment
/// with [`ClientConfig::load`].
///
/// # Fields
///
/// - `merchant_id`: merchant identifier issued by Zarinpal. Only the gateway validates it.
/// - `sandbox`: talk to the sandbox host and read its flat response shape.
/// - `alternate_portal`: send payers to the ZarinGate alternate portal.
/// - `alternate_portal_psp`: optional PSP selector for the alternate portal (see [`Psp`]).
/// - `language`: language of [`code_message`](crate::zarinpal::ZarinpalClient::code_message).
/// - `framework_redirect`: prefer a framework redirect over a raw `Location` header.
/// - `gateway_host`: registrable domain of the gateway, `zarinpal.com` unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub merchant_id: String,
    pub sandbox: bool,
    pub alternate_portal: bool,
    pub alternate_portal_psp: String,
    pub language: Language,
    pub framework_redirect: bool,
    pub gateway_host: String,
}

impl ClientConfig {
    pub const DEFAULT_HOST: &'static str = "zarinpal.com";

    /// Configuration for `merchant_id` with every other field at its default: production, no
    /// alternate portal, Persian messages, framework redirects, `zarinpal.com`.
    ///
    /// # Parameters
    ///
    /// - `merchant_id`: merchant identifier issued by Zarinpal. It is not validated locally.
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            sandbox: false,
            alternate_portal: false,
            alternate_portal_psp: String::new(),
            language: Language::Fa,
            framework_redirect: true,
            gateway_host: Self::DEFAULT_HOST.to_string(),
        }
    }

    /// Switches between the sandbox and production gateway.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sends payers to the alternate (ZarinGate) portal.
    pub fn alternate_portal(mut self, enabled: bool) -> Self {
        self.alternate_portal = enabled;
        self
    }

    /// PSP selector for the alternate portal. Values outside [`Psp`] are kept but ignored when
    /// building redirect URLs.
    pub fn alternate_portal_psp(mut self, psp: impl Into<String>) -> Self {
        self.alternate_portal_psp = psp.into();
        self
    }

    /// Language of status code messages.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Chooses [`Redirect::Framework`](crate::zarinpal::Redirect) over a raw `Location` header.
    pub fn framework_redirect(mut self, enabled: bool) -> Self {
        self.framework_redirect = enabled;
        self
    }

    /// Overrides the gateway domain, e.g. for a local mock.
    pub fn gateway_host(mut self, host: impl Into<String>) -> Self {
        self.gateway_host = host.into();
        self
    }

    /// Gateway mode derived from the `sandbox` flag.
    pub fn mode(&self) -> Mode {
        if self.sandbox {
            Mode::Sandbox
        } else {
            Mode::Production
        }
    }

    /// Loads the configuration from environment variables.
    ///
    /// The dotenv file is read first (see [`ensure_dotenv_loaded`](crate::utils::ensure_dotenv_loaded)).
    /// Only `ZARINPAL_MERCHANT_ID` is required; every other variable falls back to the defaults
    /// of [`ClientConfig::new`].
    pub fn load() -> Result<Self, ConfigError> {
        crate::utils::ensure_dotenv_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let merchant_id = lookup("ZARINPAL_MERCHANT_ID")
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::Missing("ZARINPAL_MERCHANT_ID"))?;

        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(default)
        };

        let language = match lookup("ZARINPAL_LANG") {
            Some(lang) => lang.parse()?,
            None => Language::default(),
        };

        let mut config = Self::new(merchant_id)
            .sandbox(flag("ZARINPAL_SANDBOX", false))
            .alternate_portal(flag("ZARINPAL_ZARINGATE", false))
            .alternate_portal_psp(lookup("ZARINPAL_ZARINGATE_PSP").unwrap_or_default())
            .language(language)
            .framework_redirect(flag("ZARINPAL_FRAMEWORK_REDIRECT", true));

        if let Some(host) = lookup("ZARINPAL_HOST").filter(|host| !host.trim().is_empty()) {
            config = config.gateway_host(host.trim());
        }

        Ok(config)
    }
}
