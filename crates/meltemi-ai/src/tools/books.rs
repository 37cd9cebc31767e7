//! Book lookup tools backed by a (usually smaller) LLM.
//!
//! These are the one tool family that is not a canned stub: each call runs a
//! short single-shot completion with its own system prompt and a tight token
//! cap, mirroring how a lookup service would sit behind the action name.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::tools::traits::Tool;

async fn lookup(
    llm: &dyn LlmClient,
    system_prompt: &str,
    user_prompt: String,
    max_tokens: u32,
) -> Result<String> {
    let request = CompletionRequest::new(vec![
        Message::system(system_prompt),
        Message::user(user_prompt),
    ])
    .with_temperature(0.0)
    .with_max_tokens(max_tokens);

    let reply = llm.complete(request).await?;
    Ok(reply.trim().to_string())
}

/// Returns the literary genre(s) of a book.
pub struct BookGenreTool {
    llm: Arc<dyn LlmClient>,
}

impl BookGenreTool {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Tool for BookGenreTool {
    fn name(&self) -> &str {
        "get_book_genre"
    }

    fn description(&self) -> &str {
        "Returns the genre(s) of the given book."
    }

    fn example_argument(&self) -> &str {
        "The Catcher in the Rye"
    }

    async fn invoke(&self, argument: &str) -> Result<String> {
        lookup(
            self.llm.as_ref(),
            "Return the literary genre(s) of the book mentioned.",
            format!("The book:\n{argument}"),
            40,
        )
        .await
    }
}

/// Suggests books similar to the one given.
pub struct SimilarBooksTool {
    llm: Arc<dyn LlmClient>,
}

impl SimilarBooksTool {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Tool for SimilarBooksTool {
    fn name(&self) -> &str {
        "get_similar_books"
    }

    fn description(&self) -> &str {
        "Returns a list of 3-5 books similar to the one given."
    }

    fn example_argument(&self) -> &str {
        "1984"
    }

    async fn invoke(&self, argument: &str) -> Result<String> {
        lookup(
            self.llm.as_ref(),
            "Suggest 3-5 books that are similar in theme, style, or genre to the given book.",
            format!("The book:\n{argument}"),
            100,
        )
        .await
    }
}

/// Lists notable books by an author.
pub struct BooksByAuthorTool {
    llm: Arc<dyn LlmClient>,
}

impl BooksByAuthorTool {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Tool for BooksByAuthorTool {
    fn name(&self) -> &str {
        "get_books_by_author"
    }

    fn description(&self) -> &str {
        "Returns a list of notable books written by that author."
    }

    fn example_argument(&self) -> &str {
        "Haruki Murakami"
    }

    async fn invoke(&self, argument: &str) -> Result<String> {
        lookup(
            self.llm.as_ref(),
            "List 3-5 notable books written by the given author.",
            format!("The author:\n{argument}"),
            100,
        )
        .await
    }
}
