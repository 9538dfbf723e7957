// Tailoring pipeline: prompt assembly, LLM generation, and the
// deterministic post-passes (bullet reorder + rescore).
// All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
