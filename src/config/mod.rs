// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, ProviderConfig,
    RoutesConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the default "config.toml".
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension),
    /// layered with `SERVER_*` environment variables and built-in defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.default_content_type", "text/html; charset=utf-8")?
            .set_default("http.server_name", "TravelInfo/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("provider.base_url", "https://query1.finance.yahoo.com")?
            .set_default(
                "provider.user_agent",
                "Mozilla/5.0 (compatible; TravelInfoServer/0.1)",
            )?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.routes.index_file, "static/index.html");
        assert!(cfg.routes.health.enabled);
        assert_eq!(cfg.provider.base_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        let addr = cfg.get_socket_addr().expect("default address should parse");
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }
}
