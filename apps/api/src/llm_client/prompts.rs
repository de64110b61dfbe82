// Shared prompt fragments.
// Each feature that calls the LLM keeps its own prompts.rs alongside it.

/// Appended to prompts whose output is shown verbatim in a plain text field.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Don't use markdown.";
