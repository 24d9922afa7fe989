//! Public types for the about API
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "HR Policy Assistant";

#[derive(Serialize, Deserialize)]
pub struct AboutResponse {
    pub title: String,
    pub api_url: String,
}
