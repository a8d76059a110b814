// zarinpal_handlers.rs
use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::client::ZarinpalClient;
use super::transport::Payload;
use super::CODE_SUCCESS;

#[derive(Serialize)]
struct RequestFailure {
    code: Option<i64>,
    message: &'static str,
}

/// Query string Zarinpal appends to the callback URL, plus the amount the shop put there.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    #[serde(rename = "Authority")]
    pub authority: String,
    #[serde(rename = "Status")]
    pub status: String,
    pub amount: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallbackResponse {
    pub paid: bool,
    pub code: Option<i64>,
    pub ref_id: String,
    pub message: String,
}

/// Starts a payment and sends the payer to the gateway.
///
/// The JSON body is forwarded to [`ZarinpalClient::request`] as the payload, so it must carry the
/// keys the current mode expects (`amount`, `description`, `callback_url` in production;
/// `Amount`, `Description`, `CallbackURL` in the sandbox).
///
/// # Returns
///
/// - `302 Found` to the payment page when the gateway answers with code 100 and an authority.
/// - `400 Bad Request` with `{code, message}` for any other code, or when no authority came
///   back.
/// - `502 Bad Gateway` when the gateway could not be reached.
#[post("/api/payment/request")]
pub async fn start_payment(
    payload: web::Json<Payload>,
    client: web::Data<ZarinpalClient>,
) -> HttpResponse {
    match client.request(payload.into_inner()).await {
        Ok(result) if result.is_success() => client.redirect(&result.authority).into_http_response(),
        Ok(result) => {
            tracing::warn!(code = ?result.code, "Zarinpal rejected payment request");
            // code 100 without an authority cannot be redirected either
            let message = match result.code {
                Some(code) if code != CODE_SUCCESS => client.code_message(code),
                _ => super::messages::unknown(client.config().language),
            };
            HttpResponse::BadRequest().json(RequestFailure {
                code: result.code,
                message,
            })
        }
        Err(e) => {
            tracing::error!("Zarinpal payment request failed: {e}");
            HttpResponse::BadGateway().body("Payment gateway unavailable")
        }
    }
}

/// Callback the gateway redirects the payer to. Verifies the payment unless it was cancelled.
#[get("/api/payment/callback")]
pub async fn payment_callback(
    query: web::Query<CallbackQuery>,
    client: web::Data<ZarinpalClient>,
) -> HttpResponse {
    if query.status != "OK" {
        tracing::info!(authority = %query.authority, status = %query.status, "Payment cancelled by payer");
        return HttpResponse::Ok().json(CallbackResponse {
            paid: false,
            code: None,
            ref_id: String::new(),
            message: "Payment was cancelled or failed.".to_string(),
        });
    }

    let payload = client.verification_payload(&query.authority, query.amount);
    match client.verify(payload).await {
        Ok(result) => {
            if !result.is_paid() {
                tracing::warn!(code = ?result.code, authority = %query.authority, "Zarinpal verification failed");
            }
            let message = match result.code {
                Some(code) => client.code_message(code),
                None => super::messages::unknown(client.config().language),
            };
            HttpResponse::Ok().json(CallbackResponse {
                paid: result.is_paid(),
                code: result.code,
                ref_id: result.ref_id,
                message: message.to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Zarinpal verification failed: {e}");
            HttpResponse::BadGateway().body("Payment gateway unavailable")
        }
    }
}
