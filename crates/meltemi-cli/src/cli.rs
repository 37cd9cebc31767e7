use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "meltemi")]
#[command(version, about = "Meltemi - ReAct agent demos over mock tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer one question with the ReAct loop, printing the transcript
    Ask(AskArgs),

    /// Chat with the resident history professor, keeping per-session history
    Chat(ChatArgs),
}

#[derive(Args)]
pub struct AskArgs {
    /// Question to answer (defaults to the canned book-recommendation demo)
    pub question: Option<String>,

    /// Maximum number of model turns before the run is cut off
    #[arg(long, default_value_t = 5)]
    pub max_turns: usize,

    /// Reasoning model
    #[arg(long, default_value = "gpt-4o")]
    pub model: String,

    /// Model used by the book lookup tools
    #[arg(long, default_value = "gpt-4o-mini")]
    pub lookup_model: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Use the offline scripted model instead of the API
    #[arg(long)]
    pub mock: bool,
}

#[derive(Args)]
pub struct ChatArgs {
    /// Session identifier
    #[arg(long, default_value = "demo-1")]
    pub session: String,

    /// Chat model
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Use the offline scripted model instead of the API
    #[arg(long)]
    pub mock: bool,
}
