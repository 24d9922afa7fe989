//! Per-session chat state.
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use super::client::AnswerClient;
use super::models::{Transcript, Turn};

/// A single conversation. The transcript lock is held for the whole
/// exchange with the answer API, so submissions to the same session are
/// handled one at a time in the order they arrive.
#[derive(Debug)]
pub struct Session {
    transcript: Mutex<Transcript>,
    last_active: StdMutex<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            transcript: Mutex::new(Transcript::new()),
            last_active: StdMutex::new(Instant::now()),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn touch(&self) {
        let mut last_active = match self.last_active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *last_active = Instant::now();
    }

    /// Time since the session was last used.
    pub fn idle_for(&self) -> Duration {
        match self.last_active.lock() {
            Ok(guard) => guard.elapsed(),
            Err(poisoned) => poisoned.into_inner().elapsed(),
        }
    }

    /// True while a submission holds the transcript.
    pub fn is_busy(&self) -> bool {
        self.transcript.try_lock().is_err()
    }

    /// Ask `question` and record the resulting turn. Exactly one turn is
    /// appended per call whether the API answered or not.
    pub async fn submit(&self, client: &AnswerClient, question: &str) -> Turn {
        self.touch();
        let mut transcript = self.transcript.lock().await;
        let turn = client.ask(question, &transcript).await;
        transcript.append(turn.clone());
        self.touch();
        turn
    }

    pub async fn reset(&self) {
        self.touch();
        self.transcript.lock().await.reset();
    }

    /// Snapshot of the turns. Waits for an in-flight submission to finish.
    pub async fn turns(&self) -> Vec<Turn> {
        self.touch();
        self.transcript.lock().await.turns().to_vec()
    }
}

/// Sessions keyed by an opaque id handed out to the browser.
#[derive(Default, Debug)]
pub struct SessionRegistry {
    sessions: HashMap<String, Arc<Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), Arc::new(Session::new()));
        id
    }

    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.get(id).cloned()
    }

    /// Drop the session. Returns false if there was no such session.
    pub fn end(&mut self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Drop every session unused for at least `ttl`, leaving sessions
    /// with a submission in flight alone. Returns how many were dropped.
    pub fn evict_idle(&mut self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.is_busy() || session.idle_for() < ttl);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
