use std::env;
use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::Url;

pub const API_URL_ENV: &str = "API_URL";
pub const DEFAULT_API_URL: &str =
    "https://hr-assistant-rg-fkb4dxf2duguabae.centralus-01.azurewebsites.net/ask";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Endpoint of the remote HR policy question answering API
    pub api_url: Url,
    /// Upper bound on a single call to `api_url`
    pub request_timeout: Duration,
    /// Directory the chat page is served from
    pub web_ui_path: String,
    /// Sessions unused for this long are dropped
    pub session_ttl: Duration,
    /// How often to look for idle sessions
    pub session_sweep_interval: Duration,
}

impl AppConfig {
    /// Read the config from the environment, falling back to the
    /// documented defaults. The endpoint is validated here, once, so a
    /// bad `API_URL` stops the process before it starts serving.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_api_url(&api_url)
    }

    pub fn with_api_url(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url.trim())
            .map_err(|e| anyhow!("Invalid {} '{}': {}", API_URL_ENV, api_url, e))?;

        match api_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(anyhow!(
                    "Invalid {} '{}': unsupported scheme '{}'",
                    API_URL_ENV,
                    api_url,
                    scheme
                ));
            }
        }

        Ok(Self {
            api_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            web_ui_path: String::from("./web-ui"),
            session_ttl: DEFAULT_SESSION_TTL,
            session_sweep_interval: DEFAULT_SESSION_SWEEP_INTERVAL,
        })
    }
}
