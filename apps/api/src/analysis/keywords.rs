//! Keyword Extractor — ranks canonical tokens by frequency over a text blob.

use std::collections::HashMap;

use crate::analysis::tokenizer::tokenize;

/// Extracts the top `limit` distinct canonical tokens from `text`,
/// ordered by descending frequency. Ties resolve by first occurrence in
/// the text (stable sort), so repeated calls return identical lists.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for token in tokenize(text) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // `order` holds first-occurrence order; the stable sort preserves it
    // among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(limit);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_by_descending_frequency() {
        let text = "rust rust rust tokio tokio axum";
        assert_eq!(extract_keywords(text, 10), vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let text = "alpha beta gamma alpha beta gamma zeta";
        // alpha/beta/gamma all count 2, zeta counts 1
        assert_eq!(
            extract_keywords(text, 10),
            vec!["alpha", "beta", "gamma", "zeta"]
        );
    }

    #[test]
    fn test_respects_limit() {
        let text = "one two three four five";
        assert_eq!(extract_keywords(text, 3).len(), 3);
    }

    #[test]
    fn test_limit_zero_yields_empty() {
        assert!(extract_keywords("rust tokio axum", 0).is_empty());
    }

    #[test]
    fn test_synonyms_fold_into_one_entry() {
        let keywords = extract_keywords("I use JS and JavaScript daily", 5);
        let javascript_count = keywords.iter().filter(|k| *k == "javascript").count();
        assert_eq!(javascript_count, 1);
        assert!(!keywords.iter().any(|k| k == "js"));
    }

    #[test]
    fn test_folded_frequencies_accumulate() {
        // "js" and "javascript" both canonicalize to "javascript", so it
        // outranks "python" which appears only once.
        let keywords = extract_keywords("js javascript python", 10);
        assert_eq!(keywords[0], "javascript");
    }

    #[test]
    fn test_empty_text_yields_empty() {
        assert!(extract_keywords("", 10).is_empty());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let text = "React GraphQL rust tokio React GraphQL docker aws";
        assert_eq!(extract_keywords(text, 25), extract_keywords(text, 25));
    }
}
