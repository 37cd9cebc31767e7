//! Deterministic scripted LLM client for tests and offline demo runs.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{AgentError, Result};

use super::{CompletionRequest, LlmClient, Role};

/// Scripted reply for the mock client.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return a plain assistant message.
    Text(String),
    /// Return an LLM error.
    Error(String),
}

impl MockReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// A deterministic mock LLM client driven by scripted replies.
///
/// Replies are consumed in order; once the script runs out, the client
/// echoes the last user message so unscripted calls stay observable.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    model: String,
    script: Arc<Mutex<VecDeque<MockReply>>>,
}

impl MockLlmClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn from_replies(model: impl Into<String>, replies: Vec<MockReply>) -> Self {
        Self {
            model: model.into(),
            script: Arc::new(Mutex::new(VecDeque::from(replies))),
        }
    }

    pub async fn push_reply(&self, reply: MockReply) {
        self.script.lock().await.push_back(reply);
    }

    /// Number of scripted replies not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }

    async fn next_reply(&self) -> Option<MockReply> {
        self.script.lock().await.pop_front()
    }

    fn fallback_reply(request: &CompletionRequest) -> String {
        request
            .messages
            .iter()
            .rev()
            .find(|msg| matches!(msg.role, Role::User))
            .map(|msg| format!("mock-echo: {}", msg.content))
            .unwrap_or_else(|| "mock-ok".to_string())
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        match self.next_reply().await {
            Some(MockReply::Text(content)) => Ok(content),
            Some(MockReply::Error(message)) => Err(AgentError::Llm(message)),
            None => Ok(Self::fallback_reply(&request)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Message;

    #[tokio::test]
    async fn mock_client_returns_scripted_text() {
        let client = MockLlmClient::from_replies("mock-model", vec![MockReply::text("hello")]);

        let reply = client
            .complete(CompletionRequest::new(vec![Message::user("ping")]))
            .await
            .expect("mock response should succeed");

        assert_eq!(reply, "hello");
        assert_eq!(client.remaining().await, 0);
    }

    #[tokio::test]
    async fn mock_client_surfaces_scripted_error() {
        let client =
            MockLlmClient::from_replies("mock-model", vec![MockReply::error("rate limit")]);

        let err = client
            .complete(CompletionRequest::new(vec![Message::user("ping")]))
            .await
            .expect_err("scripted error should surface");

        assert!(matches!(err, AgentError::Llm(ref m) if m == "rate limit"));
    }

    #[tokio::test]
    async fn exhausted_script_echoes_last_user_message() {
        let client = MockLlmClient::new("mock-model");

        let reply = client
            .complete(CompletionRequest::new(vec![
                Message::system("sys"),
                Message::user("first"),
                Message::user("second"),
            ]))
            .await
            .expect("fallback should succeed");

        assert_eq!(reply, "mock-echo: second");
    }
}
