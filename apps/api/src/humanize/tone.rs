//! Tone catalog - each tone carries the rewrite instruction spliced into
//! the humanizing prompt. Unknown tone names fall back to professional so
//! a stale client can never break a rewrite.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Emotional,
    Comedic,
    Academic,
    Casual,
    Genz,
    Formal,
    Persuasive,
    Storytelling,
}

impl Tone {
    /// Resolves a tone by its wire name, defaulting to professional.
    pub fn from_name(name: &str) -> Tone {
        match name {
            "professional" => Tone::Professional,
            "friendly" => Tone::Friendly,
            "emotional" => Tone::Emotional,
            "comedic" => Tone::Comedic,
            "academic" => Tone::Academic,
            "casual" => Tone::Casual,
            "genz" => Tone::Genz,
            "formal" => Tone::Formal,
            "persuasive" => Tone::Persuasive,
            "storytelling" => Tone::Storytelling,
            _ => Tone::Professional,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Emotional => "emotional",
            Tone::Comedic => "comedic",
            Tone::Academic => "academic",
            Tone::Casual => "casual",
            Tone::Genz => "genz",
            Tone::Formal => "formal",
            Tone::Persuasive => "persuasive",
            Tone::Storytelling => "storytelling",
        }
    }

    /// The instruction spliced into the humanizing prompt for this tone.
    pub fn instruction(&self) -> &'static str {
        match self {
            Tone::Professional => {
                "Rewrite this text in a professional, business-appropriate tone. \
                 Use clear, confident language."
            }
            Tone::Friendly => {
                "Rewrite this in a warm, friendly tone. \
                 Make it feel like a conversation with a friend."
            }
            Tone::Emotional => "Rewrite with emotional depth. Add warmth and empathy.",
            Tone::Comedic => {
                "Rewrite with humor and wit. Add light jokes while keeping the meaning."
            }
            Tone::Academic => "Rewrite in a scholarly, academic tone. Use formal language.",
            Tone::Casual => "Rewrite in a relaxed, casual tone. Make it sound natural.",
            Tone::Genz => "Rewrite in Gen-Z style. Use trendy expressions and slang.",
            Tone::Formal => "Rewrite in a highly formal and dignified tone.",
            Tone::Persuasive => "Rewrite to be persuasive and compelling.",
            Tone::Storytelling => "Rewrite in a narrative storytelling style.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TONES: [Tone; 10] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Emotional,
        Tone::Comedic,
        Tone::Academic,
        Tone::Casual,
        Tone::Genz,
        Tone::Formal,
        Tone::Persuasive,
        Tone::Storytelling,
    ];

    #[test]
    fn test_from_name_roundtrips_every_tone() {
        for tone in ALL_TONES {
            assert_eq!(Tone::from_name(tone.name()), tone);
        }
    }

    #[test]
    fn test_unknown_tone_falls_back_to_professional() {
        assert_eq!(Tone::from_name("pirate"), Tone::Professional);
        assert_eq!(Tone::from_name(""), Tone::Professional);
        // Case matters on the wire
        assert_eq!(Tone::from_name("GenZ"), Tone::Professional);
    }

    #[test]
    fn test_serde_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Tone::Genz).unwrap(), r#""genz""#);
        let tone: Tone = serde_json::from_str(r#""storytelling""#).unwrap();
        assert_eq!(tone, Tone::Storytelling);
    }

    #[test]
    fn test_every_tone_has_a_distinct_instruction() {
        let mut seen = std::collections::HashSet::new();
        for tone in ALL_TONES {
            assert!(
                seen.insert(tone.instruction()),
                "duplicate instruction for {:?}",
                tone
            );
        }
    }

    #[test]
    fn test_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }
}
