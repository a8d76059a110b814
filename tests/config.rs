// tests/config.rs

use std::collections::HashMap;

use tiny_zarinpal::config::{ClientConfig, Language, Psp};
use tiny_zarinpal::error::ConfigError;
use tiny_zarinpal::zarinpal::Mode;

fn from_vars(vars: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ClientConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_match_new() {
    let config = from_vars(&[("ZARINPAL_MERCHANT_ID", "merchant")]).expect("config");
    assert_eq!(config, ClientConfig::new("merchant"));
    assert!(!config.sandbox);
    assert!(!config.alternate_portal);
    assert_eq!(config.alternate_portal_psp, "");
    assert_eq!(config.language, Language::Fa);
    assert!(config.framework_redirect);
    assert_eq!(config.gateway_host, "zarinpal.com");
    assert_eq!(config.mode(), Mode::Production);
}

#[test]
fn all_variables_are_read() {
    let config = from_vars(&[
        ("ZARINPAL_MERCHANT_ID", "merchant"),
        ("ZARINPAL_SANDBOX", "TRUE"),
        ("ZARINPAL_ZARINGATE", "true"),
        ("ZARINPAL_ZARINGATE_PSP", "Sad"),
        ("ZARINPAL_LANG", "en"),
        ("ZARINPAL_FRAMEWORK_REDIRECT", "false"),
        ("ZARINPAL_HOST", "gateway.test"),
    ])
    .expect("config");

    assert!(config.sandbox);
    assert!(config.alternate_portal);
    assert_eq!(config.alternate_portal_psp, "Sad");
    assert_eq!(config.language, Language::En);
    assert!(!config.framework_redirect);
    assert_eq!(config.gateway_host, "gateway.test");
    assert_eq!(config.mode(), Mode::Sandbox);
}

#[test]
fn missing_merchant_id_is_an_error() {
    assert_eq!(
        from_vars(&[]),
        Err(ConfigError::Missing("ZARINPAL_MERCHANT_ID"))
    );
    assert_eq!(
        from_vars(&[("ZARINPAL_MERCHANT_ID", "  ")]),
        Err(ConfigError::Missing("ZARINPAL_MERCHANT_ID"))
    );
}

#[test]
fn invalid_language_is_an_error() {
    let err = from_vars(&[("ZARINPAL_MERCHANT_ID", "merchant"), ("ZARINPAL_LANG", "de")])
        .expect_err("language should be rejected");
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: "ZARINPAL_LANG",
            value: "de".to_string()
        }
    );
}

#[test]
fn psp_selector_matching() {
    assert_eq!(Psp::from_selector("Emz"), Some(Psp::Emz));
    assert_eq!(Psp::from_selector("Asan"), Some(Psp::Asan));
    assert_eq!(Psp::from_selector("emz"), None);
    assert_eq!(Psp::from_selector(""), None);
    assert_eq!(Psp::from_selector("ZarinGate"), None);
}

#[test]
fn mode_names() {
    assert_eq!(Mode::Sandbox.request_endpoint(), "PaymentRequest");
    assert_eq!(Mode::Sandbox.verify_endpoint(), "PaymentVerification");
    assert_eq!(Mode::Production.request_endpoint(), "request");
    assert_eq!(Mode::Production.verify_endpoint(), "verify");
    assert_eq!(Mode::Sandbox.merchant_key(), "MerchantID");
    assert_eq!(Mode::Production.merchant_key(), "merchant_id");
}
