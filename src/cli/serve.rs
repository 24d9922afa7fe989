use anyhow::Result;

use crate::api;
use crate::core::{AppConfig, logging};

pub async fn run(host: String, port: String) -> Result<()> {
    logging::init(logging::server_filter());
    let config = AppConfig::from_env()?;
    api::serve(host, port, config).await
}
