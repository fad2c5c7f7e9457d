// Shared prompt fragments.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Appended to every prompt whose response is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY the JSON object. \
Do NOT include any text outside the JSON object. \
Do NOT wrap the JSON in markdown code fences.";
