//! ReAct (Reasoning + Acting) loop controller.
//!
//! One turn is: append the pending user input, call the model with the full
//! running conversation, then either dispatch the first action line to a tool
//! or treat the reply as the final answer. The loop owns its conversation and
//! never shares it; only the tool registry is shared, read-only.

mod conversation;
mod parser;
mod prompt;

pub use conversation::Conversation;
pub use parser::{ActionDirective, parse_action};
pub use prompt::build_system_prompt;

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::tools::ToolRegistry;

/// ReAct loop configuration
#[derive(Debug, Clone)]
pub struct ReactConfig {
    /// Maximum model invocations before the run is cut off
    pub max_turns: usize,
    /// Sampling temperature for the reasoning model
    pub temperature: f32,
}

impl Default for ReactConfig {
    fn default() -> Self {
        Self {
            max_turns: 5,
            temperature: 0.0,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The model produced a reply with no action directive; that reply is
    /// the final answer.
    Answered { reply: String, turns: usize },
    /// The turn budget ran out mid-reasoning. Surfaced distinctly instead
    /// of being conflated with a terminal answer.
    Truncated { turns: usize },
}

/// Observer for the running transcript.
///
/// Called synchronously as the loop progresses so a caller can render the
/// session live (the CLI prints to stdout). All methods default to no-ops.
pub trait TranscriptSink: Send + Sync {
    fn assistant_reply(&self, _turn: usize, _reply: &str) {}
    fn tool_call(&self, _name: &str, _argument: &str) {}
    fn observation(&self, _observation: &str) {}
}

/// Sink that discards everything.
pub struct NullSink;

impl TranscriptSink for NullSink {}

/// Drives the ReAct loop against an LLM and a tool registry.
pub struct ReactAgent {
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
    config: ReactConfig,
    sink: Arc<dyn TranscriptSink>,
}

impl ReactAgent {
    /// Create an agent with the default configuration
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            llm,
            tools,
            config: ReactConfig::default(),
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_config(mut self, config: ReactConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn TranscriptSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the loop for one question.
    ///
    /// The model is invoked at most `max_turns` times. An action naming an
    /// unregistered tool aborts the run with `AgentError::UnknownAction`;
    /// model failures propagate after the client's own retry policy gives up.
    pub async fn run(&self, question: &str) -> Result<RunOutcome> {
        let mut conversation = Conversation::with_system(build_system_prompt(&self.tools));
        let mut next_input = question.to_string();

        info!(
            model = self.llm.model(),
            max_turns = self.config.max_turns,
            "starting ReAct run"
        );

        for turn in 1..=self.config.max_turns {
            conversation.push(Message::user(next_input));

            let request = CompletionRequest::new(conversation.messages().to_vec())
                .with_temperature(self.config.temperature);
            let reply = self.llm.complete(request).await?;
            conversation.push(Message::assistant(reply.clone()));
            self.sink.assistant_reply(turn, &reply);

            let Some(directive) = parse_action(&reply) else {
                debug!(turn, "no action line, reply is the final answer");
                return Ok(RunOutcome::Answered { reply, turns: turn });
            };

            debug!(turn, action = %directive.name, argument = %directive.argument, "dispatching action");
            self.sink.tool_call(&directive.name, &directive.argument);
            let observation = self.tools.invoke(&directive.name, &directive.argument).await?;
            self.sink.observation(&observation);

            next_input = format!("Observation: {observation}");
        }

        info!(turns = self.config.max_turns, "turn budget exhausted");
        Ok(RunOutcome::Truncated {
            turns: self.config.max_turns,
        })
    }
}
