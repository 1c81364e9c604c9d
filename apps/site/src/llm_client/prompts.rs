// Cross-cutting prompt fragments. Each service that calls the model keeps its own
// prompts.rs alongside it and pulls shared instructions from here.

/// Appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated CV content anchored to the supplied profile.
pub const GROUNDING_INSTRUCTION: &str = "\
    Only use facts present in the base profile. Do NOT invent employers, dates, \
    metrics, or technologies. Reword and reorder freely, but every claim must be \
    traceable to the profile.";
