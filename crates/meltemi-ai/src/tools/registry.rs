//! Tool registry for managing available tools

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::tools::traits::Tool;

/// Registry mapping action names to tools.
///
/// Populated once at startup and read-only afterwards, so an
/// `Arc<ToolRegistry>` is safe to share across concurrent loop instances.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Register a tool from Arc
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names, sorted for stable prompt output
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// All tools sorted by name
    pub fn tools_sorted(&self) -> Vec<Arc<dyn Tool>> {
        let mut tools: Vec<Arc<dyn Tool>> = self.tools.values().cloned().collect();
        tools.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a tool by name.
    ///
    /// An unregistered name is fatal for the run: the error carries both the
    /// offending name and the argument the model supplied.
    pub async fn invoke(&self, name: &str, argument: &str) -> Result<String> {
        let tool = self.get(name).ok_or_else(|| AgentError::UnknownAction {
            name: name.to_string(),
            argument: argument.to_string(),
        })?;
        tool.invoke(argument).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct UpperTool;

    #[async_trait]
    impl Tool for UpperTool {
        fn name(&self) -> &str {
            "upper"
        }

        fn description(&self) -> &str {
            "Uppercases the argument."
        }

        fn example_argument(&self) -> &str {
            "hello"
        }

        async fn invoke(&self, argument: &str) -> Result<String> {
            Ok(argument.to_uppercase())
        }
    }

    #[tokio::test]
    async fn registry_invokes_registered_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(UpperTool);

        assert!(registry.has("upper"));
        assert!(!registry.has("unknown"));
        assert_eq!(registry.list(), vec!["upper"]);

        let observation = registry.invoke("upper", "hi").await.expect("tool runs");
        assert_eq!(observation, "HI");
    }

    #[tokio::test]
    async fn unknown_name_carries_name_and_argument() {
        let registry = ToolRegistry::new();

        let err = registry
            .invoke("unknown_tool", "x")
            .await
            .expect_err("lookup must fail");

        match err {
            crate::error::AgentError::UnknownAction { name, argument } => {
                assert_eq!(name, "unknown_tool");
                assert_eq!(argument, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
