//! Section Extractor — heading-delimited spans and skills parsing.
//!
//! Explicit line-oriented scanning with boundary predicates (heading
//! line, bullet line) rather than a full Markdown parser: a section runs
//! from its heading to the next heading of ANY level, which a structural
//! parser would not reproduce.

use crate::analysis::tokenizer::canonicalize_token;

/// True for an ATX heading line of any level (1–6), no leading indent.
/// Used as the universal section boundary.
pub(crate) fn is_heading(line: &str) -> bool {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    (1..=6).contains(&hashes)
        && line[hashes..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

/// True when `line` is a heading whose title starts with `name`
/// (case-insensitive, word-boundary match). Tolerates missing space
/// after the hashes and leading indent, like the editor it feeds.
fn is_named_heading(line: &str, name: &str) -> bool {
    let trimmed = line.trim();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return false;
    }
    let title = trimmed[hashes..].trim_start().to_lowercase();
    match title.strip_prefix(name) {
        Some(rest) => !rest.starts_with(|c: char| c.is_alphanumeric()),
        None => false,
    }
}

/// True when `line` contains `word` as a whole word, case-insensitive.
fn contains_word(line: &str, word: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered.match_indices(word).any(|(at, _)| {
        let boundary_before = lowered[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = lowered[at + word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        boundary_before && boundary_after
    })
}

/// Returns the text of a bullet line (`-`, `*`, or `•` marker followed
/// by whitespace), trimmed. `None` for non-bullet lines.
pub(crate) fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .or_else(|| trimmed.strip_prefix('•'))?;
    let text = rest.strip_prefix(|c: char| c == ' ' || c == '\t')?;
    Some(text.trim())
}

/// Returns the raw text between the first heading matching `name` and
/// the next heading of any level (or end of document). Empty string when
/// no heading matches.
pub fn find_section(markdown: &str, name: &str) -> String {
    let lines: Vec<&str> = markdown.lines().collect();
    let start = match lines.iter().position(|l| is_named_heading(l, name)) {
        Some(at) => at,
        None => return String::new(),
    };
    let end = lines
        .iter()
        .skip(start + 1)
        .position(|l| is_heading(l))
        .map_or(lines.len(), |offset| start + 1 + offset);
    lines[start + 1..end].join("\n")
}

/// Collects individual skill phrases from the "Skills" section: every
/// bullet line after the skills heading (up to the next heading), split
/// on commas/pipes/bullet characters, trimmed and canonicalized,
/// de-duplicated preserving order. Falls back to any line containing the
/// word "skills" when no heading matches; returns empty when neither
/// exists.
pub fn extract_skills_from_markdown(markdown: &str) -> Vec<String> {
    let lines: Vec<&str> = markdown.lines().collect();
    let start = lines
        .iter()
        .position(|l| is_named_heading(l, "skills"))
        .or_else(|| lines.iter().position(|l| contains_word(l, "skills")));
    let start = match start {
        Some(at) => at,
        None => return Vec::new(),
    };

    let mut skills: Vec<String> = Vec::new();
    for line in lines.iter().skip(start + 1) {
        if is_heading(line) {
            break;
        }
        let Some(text) = bullet_text(line) else {
            continue;
        };
        for phrase in text.split([',', '•', '|']) {
            let skill = canonicalize_token(phrase);
            if skill.len() > 1 && !skills.contains(&skill) {
                skills.push(skill);
            }
        }
    }
    skills
}
