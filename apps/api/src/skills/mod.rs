// Skill extraction from chat messages and skill autocomplete.
// Provider calls go through llm_client; the keyword tables here are the
// fallback when no provider answers.

pub mod extractor;
pub mod handlers;
pub mod patterns;
pub mod prompts;
pub mod suggest;
