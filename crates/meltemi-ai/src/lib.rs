//! Meltemi - a small text-protocol ReAct agent framework
//!
//! This crate provides:
//! - The ReAct (Thought / Action / PAUSE / Observation) loop controller
//! - An LLM client abstraction (OpenAI-compatible HTTP + deterministic mock)
//! - A tool trait and registry for named single-argument text tools
//! - A keyed in-memory session store for plain chat conversations
//! - The demo tool set (book lookups, island trip planning)

pub mod agent;
pub mod error;
pub mod llm;
pub mod session;
pub mod tools;

// Re-export commonly used types
pub use agent::{
    ActionDirective, Conversation, NullSink, ReactAgent, ReactConfig, RunOutcome, TranscriptSink,
    build_system_prompt, parse_action,
};
pub use error::{AgentError, Result};
pub use llm::{
    CompletionRequest, LlmClient, LlmRetryConfig, Message, MockLlmClient, MockReply, OpenAiClient,
    Role,
};
pub use session::{ChatSession, SessionStore};
pub use tools::{Tool, ToolRegistry, demo_registry};
