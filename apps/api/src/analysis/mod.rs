// Deterministic text-analysis core: tokenization, keyword extraction,
// section parsing, coverage scoring, bullet reordering, and line diffs.
// Every function here is pure, synchronous, and total — malformed input
// degrades to empty or zero results, never an error.

pub mod coverage;
pub mod diff;
pub mod keywords;
pub mod reorder;
pub mod sections;
pub mod tokenizer;
