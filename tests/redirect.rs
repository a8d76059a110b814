// tests/redirect.rs

use actix_web::test as actix_test;
use actix_web::{http::header, http::StatusCode, web, App, Responder};

use tiny_zarinpal::config::ClientConfig;
use tiny_zarinpal::zarinpal::{Redirect, ZarinpalClient};

mod common;
use common::{MockTransport, MERCHANT_ID};

fn client(config: ClientConfig) -> ZarinpalClient {
    ZarinpalClient::new(config, MockTransport::new())
}

#[test]
fn sandbox_url_without_alternate_portal() {
    let client = client(ClientConfig::new(MERCHANT_ID).sandbox(true));
    assert_eq!(
        client.redirect_url("A100"),
        "https://sandbox.zarinpal.com/pg/StartPay/A100"
    );
}

#[test]
fn production_url_without_alternate_portal() {
    let client = client(ClientConfig::new(MERCHANT_ID));
    assert_eq!(
        client.redirect_url("A100"),
        "https://www.zarinpal.com/pg/StartPay/A100"
    );
}

#[test]
fn known_selector_replaces_alternate_portal_suffix() {
    let client = client(
        ClientConfig::new(MERCHANT_ID)
            .alternate_portal(true)
            .alternate_portal_psp("Sep"),
    );
    assert_eq!(
        client.redirect_url("A100"),
        "https://www.zarinpal.com/pg/StartPay/A100/Sep"
    );
}

#[test]
fn unknown_selector_falls_back_to_alternate_portal() {
    for selector in ["Unknown", "", "   ", "sep", " Sep"] {
        let client = client(
            ClientConfig::new(MERCHANT_ID)
                .alternate_portal(true)
                .alternate_portal_psp(selector),
        );
        assert_eq!(
            client.redirect_url("A100"),
            "https://www.zarinpal.com/pg/StartPay/A100/AlternatePortal",
            "selector {selector:?}"
        );
    }
}

#[test]
fn selector_is_ignored_without_alternate_portal() {
    let client = client(ClientConfig::new(MERCHANT_ID).alternate_portal_psp("Asan"));
    assert_eq!(
        client.redirect_url("A100"),
        "https://www.zarinpal.com/pg/StartPay/A100"
    );
}

#[test]
fn custom_gateway_host() {
    let client = client(
        ClientConfig::new(MERCHANT_ID)
            .sandbox(true)
            .gateway_host("gateway.test"),
    );
    assert_eq!(
        client.redirect_url("A100"),
        "https://sandbox.gateway.test/pg/StartPay/A100"
    );
}

#[test]
fn redirect_strategy_follows_config() {
    let framework = client(ClientConfig::new(MERCHANT_ID));
    assert_eq!(
        framework.redirect("A100"),
        Redirect::Framework("https://www.zarinpal.com/pg/StartPay/A100".to_string())
    );

    let header = client(ClientConfig::new(MERCHANT_ID).framework_redirect(false));
    let redirect = header.redirect("A100");
    assert_eq!(
        redirect,
        Redirect::Header {
            name: "Location",
            value: "https://www.zarinpal.com/pg/StartPay/A100".to_string()
        }
    );
    assert_eq!(redirect.url(), "https://www.zarinpal.com/pg/StartPay/A100");
}

async fn pay(client: web::Data<ZarinpalClient>) -> impl Responder {
    client.redirect("A100")
}

async fn location_of(config: ClientConfig) -> (StatusCode, String) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(client(config)))
            .route("/pay", web::get().to(pay)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/pay").to_request();
    let resp = actix_test::call_service(&app, req).await;
    let location = resp
        .headers()
        .get(header::LOCATION)
        .expect("Redirect location header missing")
        .to_str()
        .unwrap()
        .to_string();
    (resp.status(), location)
}

#[actix_web::test]
async fn framework_redirect_responds_with_found() {
    let config = ClientConfig::new(MERCHANT_ID)
        .sandbox(true)
        .alternate_portal(true)
        .alternate_portal_psp("Pec");

    let (status, location) = location_of(config).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location, "https://sandbox.zarinpal.com/pg/StartPay/A100/Pec");
}

#[actix_web::test]
async fn header_redirect_responds_with_found() {
    let config = ClientConfig::new(MERCHANT_ID).framework_redirect(false);

    let (status, location) = location_of(config).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location, "https://www.zarinpal.com/pg/StartPay/A100");
}
