//! Error types for the agent library

use thiserror::Error;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// The model asked for an action that is not in the tool registry.
    /// This is a configuration error and aborts the whole run.
    #[error("Unknown action: {name}: {argument}")]
    UnknownAction { name: String, argument: String },

    /// The model endpoint answered with a non-success status.
    #[error("{provider} returned HTTP {status}: {message}")]
    ModelInvocation {
        provider: String,
        status: u16,
        message: String,
        retry_after_secs: Option<u64>,
    },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentError {
    /// Whether the model call that produced this error is worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            AgentError::ModelInvocation { status, .. } => {
                *status == 429 || *status == 408 || *status >= 500
            }
            AgentError::Http(e) => e.is_timeout() || e.is_connect(),
            AgentError::Llm(message) => {
                let message = message.to_lowercase();
                message.contains("rate limit")
                    || message.contains("timeout")
                    || message.contains("overloaded")
            }
            _ => false,
        }
    }

    /// Server-requested retry delay, when the response carried one.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            AgentError::ModelInvocation {
                retry_after_secs, ..
            } => *retry_after_secs,
            _ => None,
        }
    }
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_reports_name_and_argument() {
        let err = AgentError::UnknownAction {
            name: "unknown_tool".to_string(),
            argument: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown action: unknown_tool: x");
        assert!(!err.is_retryable());
    }

    #[test]
    fn rate_limit_is_retryable() {
        let err = AgentError::ModelInvocation {
            provider: "openai".to_string(),
            status: 429,
            message: "rate limit".to_string(),
            retry_after_secs: Some(2),
        };
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(2));
    }

    #[test]
    fn auth_failure_is_not_retryable() {
        let err = AgentError::ModelInvocation {
            provider: "openai".to_string(),
            status: 401,
            message: "unauthorized".to_string(),
            retry_after_secs: None,
        };
        assert!(!err.is_retryable());
    }
}
