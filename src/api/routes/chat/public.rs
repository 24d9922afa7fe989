//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::Turn;

#[derive(Serialize, Deserialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub turn: Turn,
}

#[derive(Serialize, Deserialize)]
pub struct ChatTranscriptResponse {
    pub turns: Vec<Turn>,
}
