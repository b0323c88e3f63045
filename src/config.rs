use std::env;
use std::time::Duration;

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const MAX_TIMEOUT_SECS: u64 = 120;
const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` means the AI path is switched off and every request uses the rules.
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub gemini_timeout: Duration,
    pub port: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("GEMINI_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let gemini_api_url =
            lookup("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string());
        let gemini_model =
            lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());

        let timeout_secs = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("GEMINI_TIMEOUT_SECS is not a number: {}", e))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        if timeout_secs == 0 || timeout_secs > MAX_TIMEOUT_SECS {
            return Err(anyhow::anyhow!(
                "GEMINI_TIMEOUT_SECS must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                timeout_secs
            ));
        }

        Ok(Self {
            gemini_api_key,
            gemini_api_url,
            gemini_model,
            gemini_timeout: Duration::from_secs(timeout_secs),
            port,
        })
    }
}
