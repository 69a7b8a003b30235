use crate::server::error::config::ConfigError;

const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 30;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Days of inactivity before a session, and the identity held in it, expires
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            session_expiry_days: session_expiry_days(std::env::var("SESSION_EXPIRY_DAYS").ok())?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn session_expiry_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_EXPIRY_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        Ok(_) => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_EXPIRY_DAYS".to_string(),
            reason: "must be a positive number of days".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_EXPIRY_DAYS".to_string(),
            reason: e.to_string(),
        }),
    }
}
