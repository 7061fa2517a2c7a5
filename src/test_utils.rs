//! Embedded PostgreSQL support for the integration tests.
//!
//! Gated behind the `test-utils` feature so a plain build never downloads
//! or compiles server binaries.

use postgresql_embedded::PostgreSQL;

use crate::config::DemoConfig;

/// A running embedded PostgreSQL server with a provisioned demo database.
pub struct EmbeddedDemoDb {
    postgresql: PostgreSQL,
    pub config: DemoConfig,
}

impl EmbeddedDemoDb {
    /// Set up and start an embedded server, create the demo database, and
    /// return a [`DemoConfig`] pointing at it.
    ///
    /// # Errors
    /// Returns an error if the server cannot be set up or started, or if
    /// database creation fails.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let mut postgresql = PostgreSQL::default();
        postgresql.setup().await?;
        postgresql.start().await?;

        let db_name = "demo";
        postgresql.create_database(db_name).await?;

        let settings = postgresql.settings();
        let config = DemoConfig {
            host: settings.host.clone(),
            port: settings.port,
            dbname: db_name.to_string(),
            user: settings.username.clone(),
            password: settings.password.clone(),
        };

        Ok(Self { postgresql, config })
    }

    /// Stop the embedded server. Errors on shutdown are ignored; the
    /// temporary data directory is discarded either way.
    pub async fn stop(self) {
        let _ = self.postgresql.stop().await;
    }
}
