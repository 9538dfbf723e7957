//! Tokenizer/Canonicalizer — normalizes raw text into canonical tokens.
//!
//! Lowercases, folds known synonyms (`js` → `javascript`), and strips
//! stopwords. Every other analysis pass builds on this, so two surface
//! forms of the same skill always compare equal downstream.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Generic filler excluded from keyword extraction: articles,
/// prepositions, and résumé boilerplate ("experience", "team", ...).
/// Membership is a curated data table, not an algorithmic invariant.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "and", "for", "with", "that", "this", "from", "into", "over", "under", "above",
        "below", "to", "of", "in", "on", "at", "by", "a", "an", "as", "is", "are", "be", "or",
        "it", "its", "their", "our", "your", "you", "we", "they", "i", "will", "can", "must",
        "should", "have", "has", "had", "was", "were", "been", "but", "not", "no", "yes", "more",
        "less", "than", "then", "so", "such", "these", "those", "there", "here", "about",
        "across", "after", "before", "between", "during", "without", "within", "while", "per",
        "via", "using", "use", "used", "experience", "years", "plus", "including", "knowledge",
        "skills", "strong", "ability", "familiarity", "proficiency", "understanding", "team",
        "work", "developer", "engineer", "senior", "junior", "mid", "level", "company", "role",
        "requirements", "responsibilities", "benefits",
    ])
});

/// Maps common variants to one canonical form so JD and résumé
/// terminology match ("node.js" and "node" both count as "nodejs").
static VARIANT_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // languages & runtimes
        ("js", "javascript"),
        ("javascript", "javascript"),
        ("react", "react"),
        ("reactjs", "react"),
        ("react.js", "react"),
        ("ts", "typescript"),
        ("typescript", "typescript"),
        ("node", "nodejs"),
        ("node.js", "nodejs"),
        ("nodejs", "nodejs"),
        ("next.js", "nextjs"),
        ("nextjs", "nextjs"),
        ("vue.js", "vue"),
        ("vue", "vue"),
        ("html", "html"),
        ("html5", "html"),
        ("css", "css"),
        ("css3", "css"),
        ("scss", "sass"),
        ("sass", "sass"),
        ("tailwindcss", "tailwind"),
        ("tailwind", "tailwind"),
        // platforms & tools
        ("aws", "aws"),
        ("amazon web services", "aws"),
        ("gcp", "gcp"),
        ("google cloud", "gcp"),
        ("azure", "azure"),
        ("docker", "docker"),
        ("docker-compose", "docker"),
        ("kubernetes", "kubernetes"),
        ("k8s", "kubernetes"),
        ("ci/cd", "cicd"),
        ("cicd", "cicd"),
        // frameworks & libs
        ("redux", "redux"),
        ("zustand", "zustand"),
        ("webpack", "webpack"),
        ("vite", "vite"),
        ("jest", "jest"),
        ("cypress", "cypress"),
        // roles/areas
        ("front-end", "frontend"),
        ("frontend", "frontend"),
        ("back-end", "backend"),
        ("backend", "backend"),
    ])
});

/// True for characters that survive normalization. The symbols `+`,
/// `#`, `.`, `-` are kept so tokens like `c++`, `c#`, and `node.js`
/// stay intact.
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.' | '-')
}

/// Lowercases and replaces every character outside `[a-z0-9+#.\-\s]`
/// with a space, turning punctuation into word boundaries.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if is_token_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Trims stray punctuation from both edges of a raw piece and folds it
/// through the synonym map. May return an empty string.
pub fn canonicalize_token(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let cleaned = lowered.trim_matches(|c: char| !is_token_char(c));
    match VARIANT_MAP.get(cleaned) {
        Some(canonical) => (*canonical).to_string(),
        None => cleaned.to_string(),
    }
}

/// True when the canonical form is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Normalizes `text` into a sequence of canonical tokens: lowercased,
/// punctuation-split, synonym-folded, stopword-filtered. Single-character
/// pieces are dropped. Always returns a (possibly empty) sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(canonicalize_token)
        .filter(|t| t.len() > 1 && !is_stopword(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        let tokens = tokenize("Built REST APIs (Python/Django)!");
        assert_eq!(tokens, vec!["built", "rest", "apis", "python", "django"]);
    }

    #[test]
    fn test_tokenize_keeps_domain_symbols() {
        let tokens = tokenize("Shipped C++ and C# services");
        assert!(tokens.contains(&"c++".to_string()));
        assert!(tokens.contains(&"c#".to_string()));
    }

    #[test]
    fn test_tokenize_folds_synonyms() {
        assert_eq!(tokenize("Node.js"), vec!["nodejs"]);
        assert_eq!(tokenize("JS"), vec!["javascript"]);
        assert_eq!(tokenize("k8s"), vec!["kubernetes"]);
    }

    #[test]
    fn test_tokenize_drops_stopwords_on_canonical_form() {
        let tokens = tokenize("the team with strong experience in Rust");
        assert_eq!(tokens, vec!["rust"]);
    }

    #[test]
    fn test_tokenize_drops_single_char_tokens() {
        let tokens = tokenize("a b c rust");
        assert_eq!(tokens, vec!["rust"]);
    }

    #[test]
    fn test_tokenize_empty_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("!!! ??? ***").is_empty());
    }

    #[test]
    fn test_canonicalize_trims_edge_punctuation() {
        assert_eq!(canonicalize_token("(react)"), "react");
        assert_eq!(canonicalize_token("  Docker,"), "docker");
    }

    #[test]
    fn test_canonicalize_folds_multiword_variants() {
        assert_eq!(canonicalize_token("Amazon Web Services"), "aws");
        assert_eq!(canonicalize_token("CI/CD"), "cicd");
    }

    #[test]
    fn test_canonicalize_unknown_token_passes_through() {
        assert_eq!(canonicalize_token("GraphQL"), "graphql");
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "React, TypeScript and Node.js on AWS with Docker";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
