//! System prompt assembly for the ReAct text protocol.

use std::fmt::Write;

use crate::tools::ToolRegistry;

const LOOP_INSTRUCTIONS: &str = "\
You run in a loop of Thought, Action, PAUSE, Observation.
At the end of the loop you output an Answer.
Use Thought to describe your thoughts about the question you have been asked.
Use Action to run one of the actions available to you - then return PAUSE.
Observation will be the result of running those actions.";

const EXAMPLE_SESSION: &str = "\
Example session:

Question: I loved reading 1984 by George Orwell. What should I read next?
Thought: I should get similar books to 1984.
Action: get_similar_books: 1984
PAUSE

(Then, after being called again with...)

Observation: Similar books to 1984 include Brave New World, Fahrenheit 451, and We.

Answer: If you enjoyed *1984*, you might love *Brave New World* by Aldous Huxley or *Fahrenheit 451* by Ray Bradbury. They explore similar dystopian themes.";

/// Build the system prompt from the registered tools.
///
/// The prompt is assembled once per run and sent as the first conversation
/// entry; it is never mutated afterwards. Tools are listed in name order so
/// the prompt is stable across runs.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let mut prompt = String::from(LOOP_INSTRUCTIONS);
    prompt.push_str("\n\nYour available actions are:\n");

    for tool in tools.tools_sorted() {
        let _ = write!(
            prompt,
            "\n{name}:\ne.g. {name}: {example}\n{description}\n",
            name = tool.name(),
            example = tool.example_argument(),
            description = tool.description(),
        );
    }

    prompt.push('\n');
    prompt.push_str(EXAMPLE_SESSION);
    prompt
}
