use anyhow::Result;

use crate::chat::{AnswerClient, SessionRegistry};
use crate::core::AppConfig;

pub struct AppState {
    // Every live chat session, one per open browser tab
    pub sessions: SessionRegistry,
    pub client: AnswerClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = AnswerClient::new(&config)?;
        Ok(Self {
            sessions: SessionRegistry::new(),
            client,
            config,
        })
    }
}
