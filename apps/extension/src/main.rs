//! Dev harness: wires the service worker, popup, and fill pipeline together
//! against a pre-issued platform token so the whole flow can be exercised
//! outside a browser.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use extension::auth::identity::{StaticTokenProvider, TokenRequest};
use extension::auth::session::SessionStore;
use extension::auth::worker::spawn_worker;
use extension::backend::BackendClient;
use extension::config::Config;
use extension::fill::dispatch::handle_message;
use extension::fill::dom::TestElement;
use extension::fill::values::AutofillValues;
use extension::messages::Message;
use extension::popup::Popup;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Form-filler harness v{}", env!("CARGO_PKG_VERSION"));

    // A real deployment gets its token from the platform identity surface;
    // the harness takes a pre-issued one from the environment.
    let platform_token = std::env::var("PLATFORM_TOKEN").ok();
    let provider = Arc::new(StaticTokenProvider::new(platform_token));

    let backend = Arc::new(BackendClient::new(config.backend_base_url.clone()));
    let sessions = Arc::new(SessionStore::new());

    let (worker, _worker_task) = spawn_worker(
        provider,
        backend,
        sessions.clone(),
        TokenRequest::interactive(config.oauth_scopes.clone()),
        Duration::from_secs(config.handshake_timeout_secs),
    );

    let mut popup = Popup::new(worker, sessions.subscribe());
    let status = popup.sign_in().await;
    info!(error = status.is_error, "sign-in: {}", status.text);
    info!("popup view: {:?}", popup.view());

    // Fill a few representative fields the way the context-menu trigger does.
    let values = AutofillValues::fixture();
    for id in ["linkedin-url", "github-id", "pays", "unknown-field"] {
        let mut element = TestElement::with_id(id);
        handle_message(&Message::FillField, Some(&mut element), &values);
        info!(
            id,
            filled = !element.value.is_empty(),
            value = %element.value,
            "fill trigger processed"
        );
    }

    Ok(())
}
