//! Coverage Scorer — weighted ATS-style keyword coverage, 0–100.
//!
//! Builds a weighted term map from résumé sections and compares it
//! against the job description's top keywords. A heuristic proxy for
//! the keyword screening applicant-tracking systems perform.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::extract_keywords;
use crate::analysis::sections::{extract_skills_from_markdown, find_section};
use crate::analysis::tokenizer::{canonicalize_token, is_stopword};

/// Per-source weights for the résumé term map. Every recognized option
/// is enumerated here — there is no open-ended option bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageWeights {
    /// Skills-section entries. Default 3.0.
    pub skills: f64,
    /// Experience-section keywords. Default 2.0.
    pub experience: f64,
    /// Summary-section keywords. Default 1.5.
    pub summary: f64,
    /// Whole-document keywords. Default 1.0.
    pub other: f64,
}

impl Default for CoverageWeights {
    fn default() -> Self {
        Self {
            skills: 3.0,
            experience: 2.0,
            summary: 1.5,
            other: 1.0,
        }
    }
}

impl CoverageWeights {
    fn max(&self) -> f64 {
        self.skills
            .max(self.experience)
            .max(self.summary)
            .max(self.other)
    }
}

/// Tunable limits and weights for scoring.
#[derive(Debug, Clone)]
pub struct CoverageOptions {
    /// How many JD keywords participate in the score. Default 25.
    pub jd_limit: usize,
    /// Keyword limit per résumé source. Default 40 (summary uses half).
    pub resume_limit: usize,
    pub weights: CoverageWeights,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            jd_limit: 25,
            resume_limit: 40,
            weights: CoverageWeights::default(),
        }
    }
}

/// Result of scoring a résumé against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// 0–100. `round(100 × covered / (|jd_keywords| × max_weight))`.
    pub score: u32,
    pub jd_keywords: Vec<String>,
    pub resume_skills: Vec<String>,
}

/// Scores `resume_md` against `jd_text`.
///
/// A term appearing in several sources keeps the MAXIMUM weight across
/// sources, never the sum — one skill mentioned everywhere must not be
/// double-counted. Total function: empty or malformed Markdown yields a
/// low or zero score, never an error.
pub fn compute_coverage_score(
    jd_text: &str,
    resume_md: &str,
    opts: &CoverageOptions,
) -> CoverageReport {
    let jd_keywords = extract_keywords(jd_text, opts.jd_limit);
    let resume_skills = extract_skills_from_markdown(resume_md);

    let summary_text = find_section(resume_md, "summary");
    let experience_text = find_section(resume_md, "experience");

    let weights = &opts.weights;
    let max_weight = weights.max();

    let mut term_weights: HashMap<String, f64> = HashMap::new();
    add_terms(&mut term_weights, &resume_skills, weights.skills);
    add_terms(
        &mut term_weights,
        &extract_keywords(&experience_text, opts.resume_limit),
        weights.experience,
    );
    add_terms(
        &mut term_weights,
        &extract_keywords(&summary_text, opts.resume_limit / 2),
        weights.summary,
    );
    add_terms(
        &mut term_weights,
        &extract_keywords(resume_md, opts.resume_limit),
        weights.other,
    );

    let covered: f64 = jd_keywords
        .iter()
        .map(|keyword| {
            let key = canonicalize_token(keyword);
            term_weights
                .get(&key)
                .copied()
                .unwrap_or(0.0)
                .min(max_weight)
        })
        .sum();

    let denom = jd_keywords.len() as f64 * max_weight;
    let score = if denom > 0.0 {
        (covered / denom * 100.0).round() as u32
    } else {
        0
    };

    CoverageReport {
        score,
        jd_keywords,
        resume_skills,
    }
}

/// Folds `terms` into the map at `weight`, keeping the per-token maximum.
/// Tokens that are stopwords or canonicalize to empty are skipped.
fn add_terms(map: &mut HashMap<String, f64>, terms: &[String], weight: f64) {
    for term in terms {
        let key = canonicalize_token(term);
        if key.is_empty() || is_stopword(&key) {
            continue;
        }
        let entry = map.entry(key).or_insert(0.0);
        if weight > *entry {
            *entry = weight;
        }
    }
}
