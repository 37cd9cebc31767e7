//! Agent tools: the capability trait, the registry, and the demo tool set.

mod books;
mod island;
mod registry;
mod traits;

pub use books::{BookGenreTool, BooksByAuthorTool, SimilarBooksTool};
pub use island::{BeachesTool, LocationTool, TimeTool, TrafficTool, WeatherTool};
pub use registry::ToolRegistry;
pub use traits::Tool;

use std::sync::Arc;

use crate::llm::LlmClient;

/// Build the full demo registry: book lookups delegated to `lookup_llm`
/// plus the trip-planning stubs.
pub fn demo_registry(lookup_llm: Arc<dyn LlmClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(BookGenreTool::new(lookup_llm.clone()));
    registry.register(SimilarBooksTool::new(lookup_llm.clone()));
    registry.register(BooksByAuthorTool::new(lookup_llm));
    registry.register(LocationTool);
    registry.register(TimeTool);
    registry.register(WeatherTool);
    registry.register(TrafficTool);
    registry.register(BeachesTool);
    registry
}
