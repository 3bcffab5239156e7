// Prompt constants for the humanize service.

use crate::humanize::tone::Tone;

/// Humanizing prompt template.
/// Replace `{tone_instruction}` and `{text}` before sending.
pub const HUMANIZE_PROMPT_TEMPLATE: &str = r#"You are a humanizing AI. Your task is to rewrite AI-generated text to sound authentically human.

Goals:
1. Remove robotic patterns and repetition.
2. Add natural variations and subtle imperfections.
3. Maintain original meaning.

Tone: {tone_instruction}

Text to rewrite:
"{text}"

IMPORTANT: Return ONLY the rewritten text. No quotes, no intro."#;

/// Builds the full humanizing prompt for one rewrite.
pub fn build_humanize_prompt(tone: Tone, text: &str) -> String {
    HUMANIZE_PROMPT_TEMPLATE
        .replace("{tone_instruction}", tone.instruction())
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_splices_tone_and_text() {
        let prompt = build_humanize_prompt(Tone::Comedic, "The mitochondria is the powerhouse.");
        assert!(prompt.contains("humor and wit"));
        assert!(prompt.contains("The mitochondria is the powerhouse."));
        assert!(!prompt.contains("{tone_instruction}"));
        assert!(!prompt.contains("{text}"));
    }

    #[test]
    fn test_prompt_demands_bare_rewrite() {
        let prompt = build_humanize_prompt(Tone::default(), "x");
        assert!(prompt.contains("Return ONLY the rewritten text"));
    }
}
