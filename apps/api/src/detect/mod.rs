//! Detect - AI-likelihood scoring of arbitrary text.
//!
//! The verdict is whatever JSON the model emits, validated for shape and
//! clamped into range; there is no independent signal extraction here.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::detect::prompts::build_detect_prompt;
use crate::errors::AppError;
use crate::llm_client::GeminiClient;

pub mod handlers;
pub mod prompts;

/// Only the head of the text is scored; long inputs add cost, not signal.
pub const DETECT_INPUT_LIMIT: usize = 1000;

/// The model's verdict on a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Likelihood the text is AI-written, 0-100.
    pub score: f64,
    pub analysis: String,
    #[serde(default)]
    pub indicators: Vec<String>,
}

/// Scores `text` for likely machine authorship.
pub async fn detect_text(llm: &GeminiClient, text: &str) -> Result<DetectionReport, AppError> {
    let sample = truncate_chars(text, DETECT_INPUT_LIMIT);
    let prompt = build_detect_prompt(sample);

    let mut report: DetectionReport = llm
        .call_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("detection call failed: {e}")))?;

    report.score = clamp_score(report.score);

    info!(
        "Detection verdict: score={} indicators={}",
        report.score,
        report.indicators.len()
    );

    Ok(report)
}

/// First `max` characters of `text`, never splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_parses_model_json_unmodified() {
        let raw = r#"{
            "score": 87,
            "analysis": "Uniform sentence length and low burstiness.",
            "indicators": ["repetitive transitions", "no typos"]
        }"#;
        let report: DetectionReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.score, 87.0);
        assert_eq!(report.analysis, "Uniform sentence length and low burstiness.");
        assert_eq!(
            report.indicators,
            vec!["repetitive transitions", "no typos"]
        );
    }

    #[test]
    fn test_report_tolerates_missing_indicators() {
        let raw = r#"{"score": 12, "analysis": "Reads human."}"#;
        let report: DetectionReport = serde_json::from_str(raw).unwrap();
        assert!(report.indicators.is_empty());
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(250.0), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_truncate_chars_respects_limit() {
        let text = "abcdef";
        assert_eq!(truncate_chars(text, 3), "abc");
        assert_eq!(truncate_chars(text, 100), "abcdef");
    }

    #[test]
    fn test_truncate_chars_never_splits_a_code_point() {
        let text = "日本語のテキスト";
        assert_eq!(truncate_chars(text, 3), "日本語");
    }
}
