//! Contacts web server entry point.

use anyhow::Context;
use contacts_core::db::{open_db, open_db_in_memory};
use contacts_core::{core_version, init_logging, seed_sample_contacts, SqliteContactRepository};
use contacts_web::{build_router, AppState, ServerConfig};
use log::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    init_logging(&config.log_level, &config.log_dir.to_string_lossy())
        .context("failed to initialize logging")?;

    let conn = match &config.db_path {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open contacts database `{}`", path.display()))?,
        None => {
            warn!("event=db_config module=web status=ok mode=memory note=contacts_are_not_persisted");
            open_db_in_memory().context("failed to open in-memory contacts database")?
        }
    };

    if config.seed {
        seed_sample_contacts(&SqliteContactRepository::new(&conn))
            .context("failed to seed sample contacts")?;
    }

    let app = build_router(AppState::new(conn)?);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        "event=server_start module=web status=ok addr={} version={}",
        listener.local_addr()?,
        core_version()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("event=server_stop module=web status=ok");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=web status=error error={err}");
        std::future::pending::<()>().await;
    }
}
