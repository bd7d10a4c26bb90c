// Shared prompt fragments.
// Each service that needs generation defines its own prompts.rs alongside it.
// This file contains the cross-cutting output-format instructions.

/// Appended to prompts whose answer is parsed as a JSON object.
pub const JSON_OBJECT_ONLY: &str = "Respond with valid JSON only: a single object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to prompts whose answer is parsed as a JSON array.
pub const JSON_ARRAY_ONLY: &str = "Respond with valid JSON only: a single array. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Tone instruction shared by the free-text prompts (roadmap, mentor chat).
pub const MENTOR_TONE: &str = "Be encouraging, specific and practical. \
    Prefer concrete actions and named resources over general advice.";
