// Prompt constants for the detect service.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Detection prompt template. Replace `{text}` before sending.
pub const DETECT_PROMPT_TEMPLATE: &str = r#"Analyze this text for AI generation patterns.
Text: "{text}"

Determine the likelihood it is AI-written (0-100).
Respond with this JSON structure only:
{
  "score": <number>,
  "analysis": "<short explanation>",
  "indicators": ["<point 1>", "<point 2>"]
}"#;

/// Builds the full detection prompt for one sample.
pub fn build_detect_prompt(text: &str) -> String {
    let mut prompt = DETECT_PROMPT_TEMPLATE.replace("{text}", text);
    prompt.push_str("\n\n");
    prompt.push_str(JSON_ONLY_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_sample_and_schema() {
        let prompt = build_detect_prompt("Once upon a time");
        assert!(prompt.contains("Once upon a time"));
        assert!(prompt.contains(r#""score": <number>"#));
        assert!(prompt.contains("valid JSON only"));
        assert!(!prompt.contains("{text}"));
    }
}
