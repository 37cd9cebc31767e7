//! Keyed in-memory session store for multi-turn chat.
//!
//! The store is an explicit object with caller-controlled lifecycle, not a
//! process-global map: whoever owns the `Arc<SessionStore>` decides when
//! sessions appear and when they are evicted. Histories live only as long
//! as the process.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::llm::{CompletionRequest, LlmClient, Message};

/// Map from session id to its ordered message history, created lazily.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Vec<Message>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a session's history, creating the session if absent.
    pub fn history(&self, session_id: &str) -> Vec<Message> {
        let mut sessions = self.sessions.lock();
        sessions.entry(session_id.to_string()).or_default().clone()
    }

    /// Append one message to a session, creating the session if absent.
    pub fn append(&self, session_id: &str, message: Message) {
        let mut sessions = self.sessions.lock();
        sessions
            .entry(session_id.to_string())
            .or_default()
            .push(message);
    }

    /// Evict a session. Returns whether it existed.
    pub fn remove(&self, session_id: &str) -> bool {
        self.sessions.lock().remove(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

/// A plain chat conversation (no tool loop) bound to one session id.
///
/// Each turn replays the persona prompt plus the stored history to the
/// model, then records the user and assistant turns in the store.
pub struct ChatSession {
    llm: Arc<dyn LlmClient>,
    store: Arc<SessionStore>,
    session_id: String,
    system_prompt: String,
    max_tokens: u32,
}

impl ChatSession {
    pub fn new(llm: Arc<dyn LlmClient>, store: Arc<SessionStore>, session_id: impl Into<String>) -> Self {
        Self {
            llm,
            store,
            session_id: session_id.into(),
            system_prompt: "You are a helpful history professor named Herodotus Junior."
                .to_string(),
            max_tokens: 100,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send one user turn and return the assistant reply.
    pub async fn send(&self, user_input: &str) -> Result<String> {
        let mut messages = vec![Message::system(&self.system_prompt)];
        messages.extend(self.store.history(&self.session_id));
        messages.push(Message::user(user_input));

        let request = CompletionRequest::new(messages)
            .with_temperature(0.0)
            .with_max_tokens(self.max_tokens);
        let reply = self.llm.complete(request).await?;

        self.store.append(&self.session_id, Message::user(user_input));
        self.store
            .append(&self.session_id, Message::assistant(reply.clone()));
        Ok(reply)
    }
}
