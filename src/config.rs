use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/ratings";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let server = ServerConfig {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: match std::env::var("APP_PORT") {
                Ok(v) => v
                    .parse()
                    .map_err(|e| anyhow::anyhow!("APP_PORT {v:?} is not a port: {e}"))?,
                Err(_) => 5000,
            },
        };
        Ok(Self {
            database_url,
            max_connections,
            server,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for key in ["DATABASE_URL", "DATABASE_MAX_CONNECTIONS", "APP_HOST", "APP_PORT"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_point_at_local_ratings_database() {
        clear();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    #[serial]
    fn reads_overrides_from_env() {
        clear();
        std::env::set_var("DATABASE_URL", "postgres://test:test@db/ratings_test");
        std::env::set_var("DATABASE_MAX_CONNECTIONS", "3");
        std::env::set_var("APP_HOST", "127.0.0.1");
        std::env::set_var("APP_PORT", "8081");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://test:test@db/ratings_test");
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        clear();
    }

    #[test]
    #[serial]
    fn rejects_non_numeric_port() {
        clear();
        std::env::set_var("APP_PORT", "http");
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
        clear();
    }
}
