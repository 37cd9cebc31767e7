//! Command handlers for `ask` and `chat`.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Result, bail};
use meltemi_ai::{
    ChatSession, LlmClient, MockLlmClient, MockReply, OpenAiClient, ReactAgent, ReactConfig,
    RunOutcome, SessionStore, TranscriptSink, demo_registry,
};

use crate::cli::{AskArgs, ChatArgs};

const DEMO_QUESTION: &str = "I loved reading 1984 by George Orwell. What should I read next?";

/// Prints the running transcript the way the loop produces it.
struct StdoutSink;

impl TranscriptSink for StdoutSink {
    fn assistant_reply(&self, _turn: usize, reply: &str) {
        println!("{reply}");
    }

    fn tool_call(&self, name: &str, argument: &str) {
        println!("-- running {name} {argument}");
    }

    fn observation(&self, observation: &str) {
        println!("Observation: {observation}");
    }
}

fn online_client(api_key: Option<&str>, model: &str) -> Result<Arc<dyn LlmClient>> {
    let Some(api_key) = api_key else {
        bail!("OPENAI_API_KEY is not set; pass --api-key or use --mock");
    };
    Ok(Arc::new(OpenAiClient::new(api_key).with_model(model)))
}

fn mock_reasoning_client() -> Arc<dyn LlmClient> {
    Arc::new(MockLlmClient::from_replies(
        "mock-model",
        vec![
            MockReply::text(
                "Thought: I should get similar books to 1984.\nAction: get_similar_books: 1984\nPAUSE",
            ),
            MockReply::text(
                "Answer: If you enjoyed *1984*, try *Brave New World* or *Fahrenheit 451* next.",
            ),
        ],
    ))
}

fn mock_lookup_client() -> Arc<dyn LlmClient> {
    Arc::new(MockLlmClient::from_replies(
        "mock-mini",
        vec![MockReply::text(
            "Similar books to 1984 include Brave New World, Fahrenheit 451, and We.",
        )],
    ))
}

pub async fn run_ask(args: AskArgs) -> Result<()> {
    let (reasoning, lookup): (Arc<dyn LlmClient>, Arc<dyn LlmClient>) = if args.mock {
        (mock_reasoning_client(), mock_lookup_client())
    } else {
        (
            online_client(args.api_key.as_deref(), &args.model)?,
            online_client(args.api_key.as_deref(), &args.lookup_model)?,
        )
    };

    let registry = Arc::new(demo_registry(lookup));
    let question = args.question.unwrap_or_else(|| DEMO_QUESTION.to_string());

    let agent = ReactAgent::new(reasoning, registry)
        .with_config(ReactConfig {
            max_turns: args.max_turns,
            temperature: 0.0,
        })
        .with_sink(Arc::new(StdoutSink));

    println!("Question: {question}");
    match agent.run(&question).await? {
        // The final answer was already printed as part of the transcript.
        RunOutcome::Answered { .. } => {}
        RunOutcome::Truncated { turns } => {
            println!("(stopped after {turns} turns without a final answer)");
        }
    }
    Ok(())
}

pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let llm: Arc<dyn LlmClient> = if args.mock {
        Arc::new(MockLlmClient::new("mock-model"))
    } else {
        online_client(args.api_key.as_deref(), &args.model)?
    };

    let store = Arc::new(SessionStore::new());
    let chat = ChatSession::new(llm, store, args.session.clone());

    println!("Chatting in session '{}'. Empty line or 'exit' quits.", args.session);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        write!(stdout, "you> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line == "exit" {
            break;
        }

        let reply = chat.send(line).await?;
        println!("{reply}");
    }
    Ok(())
}
