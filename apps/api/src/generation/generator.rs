//! Resume tailoring — orchestrates the generation pipeline.
//!
//! Flow: baseline coverage score → LLM tailor → reorder bullets by JD
//! keywords → final coverage score.
//!
//! The model output is opaque Markdown; only the deterministic analysis
//! passes touch it afterwards, so a retry of the same request cannot
//! change the scoring semantics.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::coverage::{
    compute_coverage_score, CoverageOptions, CoverageReport, CoverageWeights,
};
use crate::analysis::reorder::smart_reorder;
use crate::errors::AppError;
use crate::generation::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM};
use crate::llm_client::TextGenerator;

/// Request body for résumé tailoring.
#[derive(Debug, Clone, Deserialize)]
pub struct TailorRequest {
    pub jd_text: String,
    pub resume_markdown: String,
    /// Optional scoring weight overrides; defaults documented on
    /// `CoverageWeights`.
    pub weights: Option<CoverageWeights>,
}

/// Response from the tailoring pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct TailorResponse {
    /// The tailored résumé after bullet reordering.
    pub tailored_markdown: String,
    /// Coverage of the canonical résumé before tailoring.
    pub baseline: CoverageReport,
    /// Coverage of the reordered tailored résumé.
    #[serde(rename = "final")]
    pub final_report: CoverageReport,
}

/// Runs the tailoring pipeline.
///
/// Steps:
/// 1. compute_coverage_score() on the canonical résumé → baseline
/// 2. LLM generate → tailored Markdown draft
/// 3. smart_reorder() the draft by the JD keyword list
/// 4. compute_coverage_score() on the reordered draft → final
///
/// Only step 2 can fail; it surfaces as `AppError::Llm` — the distinct
/// "generation failed" condition. The analysis passes are total.
pub async fn tailor_resume(
    llm: &dyn TextGenerator,
    request: TailorRequest,
) -> Result<TailorResponse, AppError> {
    let opts = CoverageOptions {
        weights: request.weights.clone().unwrap_or_default(),
        ..CoverageOptions::default()
    };

    // Step 1: Baseline score
    let baseline = compute_coverage_score(&request.jd_text, &request.resume_markdown, &opts);
    info!(
        "Baseline coverage {}/100 ({} JD keywords)",
        baseline.score,
        baseline.jd_keywords.len()
    );

    // Step 2: LLM tailoring
    let prompt = TAILOR_PROMPT_TEMPLATE
        .replace("{jd_text}", &request.jd_text)
        .replace("{resume_md}", &request.resume_markdown);
    let draft = llm
        .generate(TAILOR_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

    // Step 3: Reorder bullets by JD keyword relevance
    let tailored_markdown = smart_reorder(&draft, &baseline.jd_keywords);

    // Step 4: Final score on the reordered draft
    let final_report = compute_coverage_score(&request.jd_text, &tailored_markdown, &opts);
    info!("Final coverage {}/100", final_report.score);

    Ok(TailorResponse {
        tailored_markdown,
        baseline,
        final_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, TextGenerator};
    use async_trait::async_trait;

    /// Canned generator: returns a fixed résumé regardless of prompt.
    struct MockGenerator {
        output: &'static str,
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.output.to_string())
        }
    }

    /// Generator that always fails, for surfacing the Llm error path.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    const CANONICAL: &str = "\
## Skills
- JavaScript

## Experience
- Wrote web pages
";

    const DRAFT: &str = "\
## Skills
- React, JavaScript

## Experience
- Maintained legacy tooling
- Built React dashboards
";

    fn request() -> TailorRequest {
        TailorRequest {
            jd_text: "React dashboards developer".to_string(),
            resume_markdown: CANONICAL.to_string(),
            weights: None,
        }
    }

    #[tokio::test]
    async fn test_pipeline_reorders_and_rescores() {
        let llm = MockGenerator { output: DRAFT };
        let response = tailor_resume(&llm, request()).await.unwrap();

        // The React bullet must rise above the legacy one.
        let built = response
            .tailored_markdown
            .find("Built React dashboards")
            .unwrap();
        let legacy = response
            .tailored_markdown
            .find("Maintained legacy tooling")
            .unwrap();
        assert!(built < legacy);

        // The draft covers the JD better than the canonical résumé.
        assert!(response.final_report.score > response.baseline.score);
    }

    #[tokio::test]
    async fn test_llm_failure_surfaces_as_llm_error() {
        let err = tailor_resume(&FailingGenerator, request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_weight_overrides_flow_into_scoring() {
        let llm = MockGenerator { output: DRAFT };
        let mut req = request();
        req.weights = Some(CoverageWeights {
            skills: 1.0,
            experience: 1.0,
            summary: 1.0,
            other: 1.0,
        });
        let response = tailor_resume(&llm, req).await.unwrap();
        // Flat weights: any mention saturates, so the draft that names
        // every JD keyword scores 100.
        assert_eq!(response.final_report.score, 100);
    }
}
