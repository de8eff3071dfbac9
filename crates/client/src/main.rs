//! Constructr editor - headless entry point.
//!
//! Loads the signed-in user's roster and prints a summary. The store is the
//! same one a graphical shell would drive; this binary exists for smoke
//! testing a deployment.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use constructr_client::app::App;
use constructr_domain::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "constructr_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Constructr editor");

    let export_dir = std::env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".into());
    let app = App::from_env(export_dir);

    match std::env::var("ROSTER_USER_ID") {
        Ok(raw) => {
            let user: uuid::Uuid = raw.parse()?;
            app.auth.sign_in(UserId::from_uuid(user)).await;
        }
        Err(_) => {
            tracing::warn!("ROSTER_USER_ID not set, running without remote persistence");
        }
    }

    app.store.initialize().await;

    let active = app.store.active_id().await;
    for character in app.store.roster().await {
        let marker = if active == Some(character.id) { "*" } else { " " };
        tracing::info!(
            "{marker} {} [{}] attack={}",
            character.full_name(),
            character.quality,
            character.base_attack
        );
    }

    Ok(())
}
