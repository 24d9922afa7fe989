pub mod client;
pub use client::{AnswerClient, AskError, NO_ANSWER};

pub mod models;
pub use models::{Message, RequestPayload, Role, Transcript, Turn};

pub mod session;
pub use session::{Session, SessionRegistry};
