//! Bullet Reorderer — re-sorts contiguous bullet runs by keyword relevance.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::analysis::sections::bullet_text;
use crate::analysis::tokenizer::{canonicalize_token, tokenize};

/// Reorders each maximal contiguous run of bullet lines by descending
/// relevance to `keywords`, preserving original order among equally
/// relevant bullets.
///
/// Structure-preserving: non-bullet lines keep their absolute positions,
/// bullets never cross a non-bullet boundary, separate runs are never
/// merged, and line content is untouched — the transform is a
/// permutation within each run.
pub fn smart_reorder(markdown: &str, keywords: &[String]) -> String {
    let keyword_set: HashSet<String> = keywords
        .iter()
        .map(|k| canonicalize_token(k))
        .filter(|k| !k.is_empty())
        .collect();

    // Split on '\n' (not `lines()`) so the output reconstructs the input
    // byte-for-byte when nothing moves, trailing newline included.
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len());

    let mut at = 0;
    while at < lines.len() {
        if bullet_text(lines[at]).is_none() {
            out.push(lines[at]);
            at += 1;
            continue;
        }
        let mut end = at;
        while end < lines.len() && bullet_text(lines[end]).is_some() {
            end += 1;
        }
        let mut run: Vec<&str> = lines[at..end].to_vec();
        // Stable sort: equal scores keep their original relative order.
        run.sort_by_key(|line| Reverse(relevance(line, &keyword_set)));
        out.extend(run);
        at = end;
    }

    out.join("\n")
}

/// How many of the bullet's canonical tokens appear in the keyword set.
fn relevance(line: &str, keywords: &HashSet<String>) -> usize {
    tokenize(line)
        .iter()
        .filter(|token| keywords.contains(*token))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_reorders_by_relevance() {
        let md = "- Vanilla JS\n- React components\n- TypeScript tooling";
        let out = smart_reorder(md, &kw(&["react", "typescript"]));
        assert_eq!(
            out,
            "- React components\n- TypeScript tooling\n- Vanilla JS"
        );
    }

    #[test]
    fn test_equal_scores_keep_original_order() {
        let md = "- First thing\n- Second thing\n- Third thing";
        let out = smart_reorder(md, &kw(&["unrelated"]));
        assert_eq!(out, md);
    }

    #[test]
    fn test_non_bullet_lines_keep_absolute_positions() {
        let md = "## Experience\n- Plain work\n- React work\n\nProse paragraph.\n- Solo bullet";
        let out = smart_reorder(md, &kw(&["react"]));
        let out_lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(out_lines[0], "## Experience");
        assert_eq!(out_lines[1], "- React work");
        assert_eq!(out_lines[2], "- Plain work");
        assert_eq!(out_lines[3], "");
        assert_eq!(out_lines[4], "Prose paragraph.");
        assert_eq!(out_lines[5], "- Solo bullet");
    }

    #[test]
    fn test_runs_are_not_merged_across_boundaries() {
        // "React run-two" outscores everything, but it must stay in the
        // second run — a blank line separates the runs.
        let md = "- Plain one\n\n- React run-two\n- Plain two";
        let out = smart_reorder(md, &kw(&["react"]));
        assert_eq!(out, "- Plain one\n\n- React run-two\n- Plain two");
    }

    #[test]
    fn test_output_is_line_permutation_of_input() {
        let md = "# H\n- b one react\n- b two\n- b three\ntail";
        let out = smart_reorder(md, &kw(&["react"]));
        let mut in_lines: Vec<&str> = md.split('\n').collect();
        let mut out_lines: Vec<&str> = out.split('\n').collect();
        in_lines.sort_unstable();
        out_lines.sort_unstable();
        assert_eq!(in_lines, out_lines);
    }

    #[test]
    fn test_keywords_are_canonicalized_before_matching() {
        // Caller passes "JS"; the bullet says "JavaScript".
        let md = "- Python scripts\n- JavaScript widgets";
        let out = smart_reorder(md, &kw(&["JS"]));
        assert_eq!(out, "- JavaScript widgets\n- Python scripts");
    }

    #[test]
    fn test_star_and_dot_markers_count_as_bullets() {
        let md = "* Plain star\n• React dot";
        let out = smart_reorder(md, &kw(&["react"]));
        assert_eq!(out, "• React dot\n* Plain star");
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        assert_eq!(smart_reorder("", &kw(&["react"])), "");
        let md = "no bullets here\njust prose";
        assert_eq!(smart_reorder(md, &[]), md);
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let md = "- React one\n- Plain two\n";
        let out = smart_reorder(md, &kw(&["react"]));
        assert!(out.ends_with('\n'));
    }
}
