use crate::error::{SchemaBuilderError, SchemaBuilderResult};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const PORT_ENV: &str = "PORT";
pub const HOST_ENV: &str = "SCHEMA_BUILDER_HOST";
pub const STORE_URI_ENV: &str = "SCHEMA_STORE_URI";

/// Configuration for the schema service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Listening port
    pub port: u16,
    /// Document store connection string, e.g. `sled:///var/lib/schemas`
    pub store_uri: String,
}

impl ServerConfig {
    pub fn new(store_uri: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store_uri: store_uri.into(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// `SCHEMA_STORE_URI` is required; `PORT` and `SCHEMA_BUILDER_HOST` are optional.
    pub fn from_env() -> SchemaBuilderResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> SchemaBuilderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_uri = lookup(STORE_URI_ENV)
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| {
                SchemaBuilderError::Config(format!("{} must be set", STORE_URI_ENV))
            })?;

        let mut config = Self::new(store_uri);
        if let Some(port) = lookup(PORT_ENV) {
            config.port = port.trim().parse().map_err(|_| {
                SchemaBuilderError::Config(format!("invalid {} value '{}'", PORT_ENV, port))
            })?;
        }
        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        Ok(config)
    }

    /// The `host:port` string the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
