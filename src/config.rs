use crate::constants::DEFAULT_WEBHOOK_URL;
use crate::errors::{MaraiError, MaraiResult};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub request_timeout_secs: u64,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            request_timeout_secs: 30,
            log_dir: ".".to_string(),
        }
    }
}

/// Loads configuration from the environment (a `.env` file is honored).
pub fn load() -> MaraiResult<Config> {
    dotenv::dotenv().ok();

    let mut config = Config::default();
    if let Ok(url) = env::var("MARAI_WEBHOOK_URL") {
        config.webhook_url = url;
    }
    if let Ok(secs) = env::var("MARAI_TIMEOUT_SECS") {
        config.request_timeout_secs = secs
            .parse()
            .map_err(|e| MaraiError::config_error(format!("bad MARAI_TIMEOUT_SECS: {}", e)))?;
    }
    if let Ok(dir) = env::var("MARAI_LOG_DIR") {
        config.log_dir = dir;
    }

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> MaraiResult<()> {
    if config.webhook_url.is_empty() {
        return Err(MaraiError::config_error("webhook URL is required"));
    }
    if !config.webhook_url.starts_with("http") {
        return Err(MaraiError::config_error(
            "webhook URL must be an absolute http(s) URL",
        ));
    }
    if config.request_timeout_secs == 0 {
        return Err(MaraiError::config_error(
            "request timeout must be greater than 0",
        ));
    }
    Ok(())
}
