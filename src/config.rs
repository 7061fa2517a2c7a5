use serde::Serialize;

use crate::error::DemoDbError;

/// Connection settings for the demo database.
///
/// The defaults are the fixed development-box constants the demos assume
/// (`localhost:5432/demo`); [`DemoConfig::from_env`] lets each value be
/// overridden through `EMPLOYEES_DB_*` environment variables without
/// touching the demo source.
#[derive(Debug, Clone, Serialize)]
pub struct DemoConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    // Never logged; the Serialize impl is used for startup logging.
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "demo".to_string(),
            user: "postgres".to_string(),
            password: "password".to_string(),
        }
    }
}

impl DemoConfig {
    /// Build a config from the defaults plus any `EMPLOYEES_DB_*` overrides.
    ///
    /// # Errors
    /// Returns `DemoDbError::ConfigError` if `EMPLOYEES_DB_PORT` is set but
    /// not a valid port number.
    pub fn from_env() -> Result<Self, DemoDbError> {
        let mut cfg = Self::default();

        if let Ok(host) = std::env::var("EMPLOYEES_DB_HOST") {
            cfg.host = host;
        }
        if let Ok(port) = std::env::var("EMPLOYEES_DB_PORT") {
            cfg.port = port.parse().map_err(|_| {
                DemoDbError::ConfigError(format!("EMPLOYEES_DB_PORT is not a valid port: {port}"))
            })?;
        }
        if let Ok(dbname) = std::env::var("EMPLOYEES_DB_NAME") {
            cfg.dbname = dbname;
        }
        if let Ok(user) = std::env::var("EMPLOYEES_DB_USER") {
            cfg.user = user;
        }
        if let Ok(password) = std::env::var("EMPLOYEES_DB_PASSWORD") {
            cfg.password = password;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every required field carries a usable value.
    ///
    /// # Errors
    /// Returns `DemoDbError::ConfigError` naming the first empty field.
    pub fn validate(&self) -> Result<(), DemoDbError> {
        if self.host.is_empty() {
            return Err(DemoDbError::ConfigError("host is required".to_string()));
        }
        if self.dbname.is_empty() {
            return Err(DemoDbError::ConfigError("dbname is required".to_string()));
        }
        if self.user.is_empty() {
            return Err(DemoDbError::ConfigError("user is required".to_string()));
        }
        Ok(())
    }

    /// Convert into the driver's connection config.
    #[must_use]
    pub fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut pg = tokio_postgres::Config::new();
        pg.host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password);
        pg
    }

    /// Render for startup logging; the password is skipped by serde.
    #[must_use]
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
