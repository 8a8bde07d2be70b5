//! Tagged morpheme fragments.

use serde::{Deserialize, Serialize};

/// Grammatical role of a fragment inside a [`Phrasal`](super::Phrasal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhrasalPartType {
    /// Text without a specific role
    Unclassified,
    /// Word separator
    Space,
    /// Punctuation mark
    Punctuation,
    /// Verb stem
    VerbBase,
    /// Tense, mood or participle affix
    VerbTenseAffix,
    /// Person/number agreement affix
    VerbPersonalAffix,
    /// Negation particle or negative word
    VerbNegation,
    /// Question particle
    QuestionParticle,
    /// Noun stem
    NounBase,
    /// Plural affix
    PluralAffix,
    /// Possessive affix
    PossessiveAffix,
    /// Case affix
    SeptikAffix,
    /// Pronoun stem
    PronounBase,
    /// Adjective stem
    AdjBase,
    /// Comparative-degree affix
    AdjCompAffix,
}

impl PhrasalPartType {
    /// Whether the fragment is a stem rather than an affix or separator.
    pub fn is_base(self) -> bool {
        matches!(
            self,
            PhrasalPartType::VerbBase
                | PhrasalPartType::NounBase
                | PhrasalPartType::PronounBase
                | PhrasalPartType::AdjBase
        )
    }
}

/// One tagged morpheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhrasalPart {
    /// Grammatical role
    pub part_type: PhrasalPartType,
    /// Surface text
    pub content: String,
    /// Whether the part was copied from a composed auxiliary verb
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub aux: bool,
}

impl PhrasalPart {
    /// Create a main-verb part.
    pub fn new(part_type: PhrasalPartType, content: impl Into<String>) -> Self {
        PhrasalPart {
            part_type,
            content: content.into(),
            aux: false,
        }
    }

    /// Same part with different text.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        PhrasalPart {
            part_type: self.part_type,
            content: content.into(),
            aux: self.aux,
        }
    }
}
