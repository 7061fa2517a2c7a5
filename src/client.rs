use tokio_postgres::{Client, NoTls};

use crate::config::DemoConfig;
use crate::error::DemoDbError;

/// Open a single connection to the demo database.
///
/// The tokio-postgres connection driver runs on a spawned task and finishes
/// on its own once the returned [`Client`] is dropped, which gives the demos
/// their cleanup-on-exit behavior without explicit close calls.
///
/// # Errors
/// Returns `DemoDbError::ConnectionError` if the server cannot be reached or
/// authentication fails.
pub async fn connect(cfg: &DemoConfig) -> Result<Client, DemoDbError> {
    cfg.validate()?;

    let (client, connection) = cfg.to_pg_config().connect(NoTls).await.map_err(|e| {
        DemoDbError::ConnectionError(format!(
            "could not connect to {}:{}/{}: {e}",
            cfg.host, cfg.port, cfg.dbname
        ))
    })?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("connection driver task failed: {e}");
        }
    });

    tracing::info!("connected to {}", cfg.describe());
    Ok(client)
}

/// Install the fmt subscriber every demo binary uses.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();
}
