//! Fluent accumulator for [`Phrasal`] results.
//!
//! Every append method drops a part whose text is empty, so conditionally
//! empty affixes never surface as stray tokens. Use
//! [`add_part`](PhrasalBuilder::add_part) with `allow_empty` to keep one.

use smallvec::SmallVec;

use super::part::{PhrasalPart, PhrasalPartType};
use super::{Parts, Phrasal};
use crate::phonetic::{drop_last, last_char};

/// Builder accumulating tagged morphemes in order.
///
/// # Example
///
/// ```
/// use kazakh_morph::phrasal::PhrasalBuilder;
///
/// let phrasal = PhrasalBuilder::new()
///     .verb_base("ал")
///     .tense_affix("а")
///     .personal_affix("мын")
///     .build();
/// assert_eq!(phrasal.raw(), "аламын");
/// assert_eq!(phrasal.parts().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhrasalBuilder {
    parts: Parts,
    forbidden: bool,
    alternative: Option<Box<PhrasalBuilder>>,
}

impl PhrasalBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        PhrasalBuilder {
            parts: SmallVec::new(),
            forbidden: false,
            alternative: None,
        }
    }

    /// Append a part, dropping it when empty unless `allow_empty` is set.
    pub fn add_part(mut self, part: PhrasalPart, allow_empty: bool) -> Self {
        if !part.content.is_empty() || allow_empty {
            self.parts.push(part);
        }
        self
    }

    fn typed(self, part_type: PhrasalPartType, content: impl Into<String>) -> Self {
        self.add_part(PhrasalPart::new(part_type, content), false)
    }

    // ========================================================================
    // Appenders
    // ========================================================================

    /// Append untagged text.
    pub fn unclassified(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::Unclassified, content)
    }

    /// Append a single space.
    pub fn space(self) -> Self {
        self.typed(PhrasalPartType::Space, " ")
    }

    /// Append punctuation.
    pub fn punctuation(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::Punctuation, content)
    }

    /// Append a verb stem.
    pub fn verb_base(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::VerbBase, content)
    }

    /// Append a tense or mood affix.
    pub fn tense_affix(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::VerbTenseAffix, content)
    }

    /// Append a personal affix.
    pub fn personal_affix(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::VerbPersonalAffix, content)
    }

    /// Append a negation particle.
    pub fn negation(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::VerbNegation, content)
    }

    /// Append a question particle.
    pub fn question_particle(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::QuestionParticle, content)
    }

    /// Append a noun stem.
    pub fn noun_base(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::NounBase, content)
    }

    /// Append a plural affix.
    pub fn plural_affix(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::PluralAffix, content)
    }

    /// Append a possessive affix.
    pub fn possessive_affix(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::PossessiveAffix, content)
    }

    /// Append a case affix.
    pub fn septik_affix(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::SeptikAffix, content)
    }

    /// Append a pronoun stem.
    pub fn pronoun_base(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::PronounBase, content)
    }

    /// Append an adjective stem.
    pub fn adj_base(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::AdjBase, content)
    }

    /// Append a comparative affix.
    pub fn adj_comp_affix(self, content: impl Into<String>) -> Self {
        self.typed(PhrasalPartType::AdjCompAffix, content)
    }

    /// Splice in every part of a composed auxiliary, flagging each as auxiliary.
    pub fn aux_verb(mut self, phrasal: &Phrasal) -> Self {
        for part in phrasal.parts() {
            self = self.add_part(
                PhrasalPart {
                    part_type: part.part_type,
                    content: part.content.clone(),
                    aux: true,
                },
                false,
            );
        }
        self
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Mark the result as linguistically disallowed.
    pub fn set_forbidden(mut self, forbidden: bool) -> Self {
        self.forbidden = forbidden;
        self
    }

    /// Replace the last character of the last non-empty part.
    pub fn replace_last(mut self, replacement: char) -> Self {
        if let Some(index) = self.last_nonempty_index() {
            let part = &mut self.parts[index];
            let mut content = drop_last(&part.content, 1).to_owned();
            content.push(replacement);
            part.content = content;
        }
        self
    }

    /// Replace the last part as a whole.
    pub fn replace_last_part(mut self, part: PhrasalPart) -> Self {
        match self.parts.last_mut() {
            Some(last) => *last = part,
            None => self.parts.push(part),
        }
        self
    }

    /// Attach a second, equally valid form.
    ///
    /// Alternatives nest one level only: an alternative attached to
    /// `alternative` itself is discarded.
    pub fn attach_alternative(mut self, mut alternative: PhrasalBuilder) -> Self {
        alternative.alternative = None;
        self.alternative = Some(Box::new(alternative));
        self
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Whether no part has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parts appended so far.
    #[inline]
    pub fn parts(&self) -> &[PhrasalPart] {
        &self.parts
    }

    /// First part, if any.
    #[inline]
    pub fn first_part(&self) -> Option<&PhrasalPart> {
        self.parts.first()
    }

    /// Last part, if any.
    #[inline]
    pub fn last_part(&self) -> Option<&PhrasalPart> {
        self.parts.last()
    }

    /// Attached alternative, if any.
    #[inline]
    pub fn alternative(&self) -> Option<&PhrasalBuilder> {
        self.alternative.as_deref()
    }

    fn last_nonempty_index(&self) -> Option<usize> {
        self.parts.iter().rposition(|p| !p.content.is_empty())
    }

    /// Last character of the accumulated text.
    pub fn last_item(&self) -> Option<char> {
        self.last_nonempty_index()
            .and_then(|i| last_char(&self.parts[i].content))
    }

    // ========================================================================
    // Finalization
    // ========================================================================

    fn build_single(&self) -> Phrasal {
        let raw: String = self.parts.iter().map(|p| p.content.as_str()).collect();
        Phrasal {
            parts: self.parts.clone(),
            raw,
            forbidden: self.forbidden,
            alternative: None,
        }
    }

    /// Produce the immutable result, building any attached alternative too.
    ///
    /// Does not consume the builder; repeated calls yield equal results.
    pub fn build(&self) -> Phrasal {
        let mut phrasal = self.build_single();
        phrasal.alternative = self
            .alternative
            .as_ref()
            .map(|alt| Box::new(alt.build_single()));
        phrasal
    }
}
