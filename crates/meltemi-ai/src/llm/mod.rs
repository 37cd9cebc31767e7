//! LLM module - chat completion client abstraction

mod client;
mod mock;
mod openai;
pub(crate) mod retry;

pub use client::{CompletionRequest, LlmClient, Message, Role};
pub use mock::{MockLlmClient, MockReply};
pub use openai::OpenAiClient;
pub use retry::LlmRetryConfig;
