//! Client for the remote HR policy answer API.
//!
//! Every call is classified into an answer, an application error
//! (the API responded with something other than 200) or a transport
//! error (the exchange never completed). `ask` folds both errors into
//! the returned `Turn` so callers always get something to display.
use std::error::Error as StdError;

use anyhow::Result;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use super::models::{RequestPayload, Transcript, Turn};
use crate::core::AppConfig;

pub const NO_ANSWER: &str = "No answer returned.";

#[derive(Debug, Error)]
pub enum AskError {
    #[error("❌ Error {status}: {body}")]
    Application { status: u16, body: String },
    #[error("⚠️ Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for AskError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(describe(&err))
    }
}

/// Join an error with all of its sources, skipping causes that the
/// outer message already repeats.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !description.contains(&cause_msg) {
            description.push_str(": ");
            description.push_str(&cause_msg);
        }
        source = cause.source();
    }
    description
}

fn answer_from_body(body: Value) -> Result<String, AskError> {
    let mut fields = match body {
        Value::Object(fields) => fields,
        other => {
            return Err(AskError::Transport(format!(
                "expected a JSON object in the response, got: {}",
                other
            )));
        }
    };

    let answer = match fields.remove("answer") {
        Some(Value::String(answer)) => answer,
        None | Some(Value::Null) => NO_ANSWER.to_string(),
        Some(other) => other.to_string(),
    };
    Ok(answer)
}

#[derive(Clone, Debug)]
pub struct AnswerClient {
    api_url: Url,
    http: reqwest::Client,
}

impl AnswerClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            http,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Make exactly one call to the answer API and classify the result.
    pub async fn request(&self, payload: &RequestPayload) -> Result<String, AskError> {
        let response = self
            .http
            .post(self.api_url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(AskError::Application {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        answer_from_body(body)
    }

    /// Ask `question` in the context of `transcript`. Never fails, errors
    /// become the answer of the returned turn. The transcript is left
    /// untouched, recording the turn is up to the caller.
    pub async fn ask(&self, question: &str, transcript: &Transcript) -> Turn {
        let payload = transcript.to_payload(question);
        tracing::debug!(
            "Asking {} with {} messages",
            self.api_url,
            payload.messages.len()
        );

        let answer = match self.request(&payload).await {
            Ok(answer) => answer,
            Err(err) => {
                match &err {
                    AskError::Application { status, .. } => {
                        tracing::error!(status = *status, api_url = %self.api_url, "{}", err);
                    }
                    AskError::Transport(_) => {
                        tracing::error!(error = ?err, api_url = %self.api_url, "Answer request failed: {}", err);
                    }
                }
                err.to_string()
            }
        };

        Turn::new(question, &answer)
    }
}
