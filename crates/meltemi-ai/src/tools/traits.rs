//! Tool trait for agent actions

use async_trait::async_trait;

use crate::error::Result;

/// Core trait for agent tools.
///
/// A tool is a named capability that takes one text argument and returns one
/// text observation. Implementations must not mutate anything the loop can
/// see; the observation is their only output.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name (the action name the model writes)
    fn name(&self) -> &str;

    /// Human-readable description for the system prompt
    fn description(&self) -> &str;

    /// Example argument shown in the system prompt, e.g. `1984`
    fn example_argument(&self) -> &str;

    /// Run the tool with the given argument
    async fn invoke(&self, argument: &str) -> Result<String>;
}
