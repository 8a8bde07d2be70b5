//! Structured results: ordered, tagged morpheme sequences.
//!
//! A [`Phrasal`] is what every form operation returns. Its `raw` text is
//! always the in-order concatenation of its parts, so presentation layers can
//! either print [`Phrasal::raw`] or walk [`Phrasal::parts`] for highlighting.
//!
//! Two flags qualify a result:
//! - [`Phrasal::forbidden`]: mechanically well-formed but linguistically
//!   disallowed (e.g. "бару" with the auxiliary "тұру")
//! - [`Phrasal::alternative`]: a second accepted spelling ("аузы" / "ауызы")

mod builder;
mod part;

pub use builder::PhrasalBuilder;
pub use part::{PhrasalPart, PhrasalPartType};

use serde::Serialize;
use smallvec::SmallVec;

pub(crate) type Parts = SmallVec<[PhrasalPart; 8]>;

/// Text of the sentinel returned for unsupported combinations.
pub const NOT_SUPPORTED: &str = "<not supported>";

/// An immutable synthesized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrasal {
    parts: Parts,
    raw: String,
    forbidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternative: Option<Box<Phrasal>>,
}

impl Phrasal {
    /// Sentinel for a form that is not defined for the lexical item.
    ///
    /// Has no parts; its `raw` text is [`NOT_SUPPORTED`].
    pub fn not_supported() -> Self {
        Phrasal {
            parts: SmallVec::new(),
            raw: NOT_SUPPORTED.to_owned(),
            forbidden: false,
            alternative: None,
        }
    }

    /// Whether this is the "not supported" sentinel.
    pub fn is_not_supported(&self) -> bool {
        self.parts.is_empty() && self.raw == NOT_SUPPORTED
    }

    /// Ordered morphemes.
    #[inline]
    pub fn parts(&self) -> &[PhrasalPart] {
        &self.parts
    }

    /// Concatenated surface text.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the form is linguistically disallowed.
    #[inline]
    pub fn forbidden(&self) -> bool {
        self.forbidden
    }

    /// Second accepted form, if any. Never itself has an alternative.
    #[inline]
    pub fn alternative(&self) -> Option<&Phrasal> {
        self.alternative.as_deref()
    }

    /// Texts of all parts, in order.
    pub fn part_texts(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.content.as_str()).collect()
    }

    /// Raw text of the primary form followed by the alternative, if any.
    pub fn all_raw(&self) -> Vec<&str> {
        let mut out = vec![self.raw()];
        if let Some(alt) = self.alternative() {
            out.push(alt.raw());
        }
        out
    }
}

impl std::fmt::Display for Phrasal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_supported() {
        let phrasal = Phrasal::not_supported();
        assert!(phrasal.is_not_supported());
        assert_eq!(phrasal.raw(), NOT_SUPPORTED);
        assert!(phrasal.parts().is_empty());
    }

    #[test]
    fn test_part_texts_concatenate_to_raw() {
        let phrasal = PhrasalBuilder::new()
            .verb_base("кел")
            .negation("ме")
            .tense_affix("й")
            .personal_affix("мін")
            .build();
        assert_eq!(phrasal.part_texts().concat(), phrasal.raw());
        assert_eq!(phrasal.to_string(), "келмеймін");
    }

    #[test]
    fn test_all_raw() {
        let phrasal = PhrasalBuilder::new()
            .noun_base("аузы")
            .attach_alternative(PhrasalBuilder::new().noun_base("ауызы"))
            .build();
        assert_eq!(phrasal.all_raw(), vec!["аузы", "ауызы"]);
    }
}
