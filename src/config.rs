use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Address a local client uses to reach this server.
    pub fn local_url(&self) -> String {
        let host = match self.host.trim_matches(|c| c == '[' || c == ']') {
            "0.0.0.0" | "" => "127.0.0.1".to_owned(),
            "::" => "[::1]".to_owned(),
            h if h.contains(':') => format!("[{h}]"),
            h => h.to_owned(),
        };

        format!("http://{host}:{}", self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Origin of the service that accepts contact form inquiries.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendConfig {
    #[serde(default)]
    pub base_url: String,
    /// Set when no backend was configured and `base_url` tracks the server address.
    #[serde(skip)]
    pub follows_server: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_cors_origins")]
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_cors_origins(),
        }
    }
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_owned()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (DATABASE_URL, BACKEND_URL, CORS_ORIGINS)
    /// 2. Prefixed environment variables (SEAWORTH__BACKEND__BASE_URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    ///
    /// Without an explicit backend, inquiries go to this server's own API.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:seaworth.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SEAWORTH")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        if let Some(backend_url) = env::var("BACKEND_URL")
            .or_else(|_| env::var("REACT_APP_BACKEND_URL"))
            .ok()
        {
            builder = builder.set_override("backend.base_url", backend_url)?;
        }

        if let Ok(origins) = env::var("CORS_ORIGINS") {
            builder = builder.set_override("cors.origins", split_origins(&origins))?;
        }

        let mut config: Config = builder.build()?.try_deserialize()?;
        if config.backend.base_url.is_empty() {
            config.backend.follows_server = true;
            config.backend.base_url = config.server.local_url();
        }

        Ok(config)
    }

    /// Applies `serve --host/--port`, moving a server-tracking backend along.
    pub fn override_server(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if self.backend.follows_server {
            self.backend.base_url = self.server.local_url();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let backend = url::Url::parse(&self.backend.base_url)
            .map_err(|e| format!("Invalid backend base_url {}: {e}", self.backend.base_url))?;
        if !matches!(backend.scheme(), "http" | "https") {
            return Err("Backend base_url must use http or https".to_string());
        }

        if self.cors.origins.is_empty() {
            return Err("At least one CORS origin must be configured".to_string());
        }

        Ok(())
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect()
}
