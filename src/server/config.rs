use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub static DEFAULT_PORT: u16 = 3000;
pub static DEFAULT_ADMIN_TITLE: &str = "Holocron Admin";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_title: String,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let admin_title = lookup("ADMIN_TITLE").unwrap_or_else(|| DEFAULT_ADMIN_TITLE.to_string());

        Ok(Self {
            database_url,
            port,
            admin_title,
        })
    }
}
