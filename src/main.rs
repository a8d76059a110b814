use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use std::env;
use tiny_zarinpal::config::ClientConfig;
use tiny_zarinpal::utils;
use tiny_zarinpal::zarinpal::{payment_callback, start_payment, HttpTransport, ZarinpalClient};
use tracing_subscriber::EnvFilter;

/// The main entry point for the application.
///
/// Loads the environment (the first command-line argument, if any, names the env file; it
/// defaults to `.env`), builds the Zarinpal client with the `reqwest` transport and serves the
/// checkout routes behind a rate limiter.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 👇 Load env file from args
    if let Some(env_file) = env::args().nth(1) {
        env::set_var("DOTENV_OVERRIDE", env_file);
    }
    let env_file = utils::ensure_dotenv_loaded();
    tracing::info!("📦 Loading environment from {env_file}");

    let config = ClientConfig::load().expect("Zarinpal config failed");
    let transport = HttpTransport::for_config(&config);
    let client = web::Data::new(ZarinpalClient::new(config.clone(), transport));

    if config.sandbox {
        tracing::info!("ℹ️ Zarinpal sandbox mode is enabled.");
    }

    let server_port: u16 = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "6666".into())
        .parse()
        .expect("Invalid SERVER_PORT");

    tracing::info!("🚀 Server starting on http://127.0.0.1:{}", server_port);

    let governor_burst = env::var("GOVERNOR_BURST")
        .unwrap_or_else(|_| "5".into())
        .parse()
        .unwrap_or(5);
    let governor_per_sec = env::var("GOVERNOR_PER_SECOND")
        .unwrap_or_else(|_| "2".into())
        .parse()
        .unwrap_or(2);

    let governor_conf = GovernorConfigBuilder::default()
        .burst_size(governor_burst)
        .seconds_per_request(governor_per_sec)
        .finish()
        .expect("Failed to build governor config");

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .app_data(client.clone())
            .service(start_payment)
            .service(payment_callback)
    })
    .bind(("127.0.0.1", server_port))?
    .run()
    .await
}
