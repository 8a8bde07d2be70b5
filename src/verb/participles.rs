//! Participles and the agent noun.
//!
//! Each form comes in two flavours: a finished [`Phrasal`] and a
//! [`PhrasalBuilder`] that a [`NounBuilder`](crate::noun::NounBuilder) can
//! decline further ("баратынның", "барғанымыз").

use super::VerbBuilder;
use crate::grammar::SentenceType;
use crate::phrasal::{Phrasal, PhrasalBuilder};
use crate::rules::affixes::{pick, USHYUSHI};
use crate::rules::gangen_kanken;

impl VerbBuilder {
    /// Present participle builder ("баратын", "бармайтын").
    pub fn present_participle_builder(&self, sentence_type: SentenceType) -> PhrasalBuilder {
        match sentence_type {
            SentenceType::Statement => self.present_participle_common_builder(),
            SentenceType::Negative => {
                let stem = self.negative_stem();
                let affix = self.past_transitive_suffix(stem.particle_last());
                stem.builder().tense_affix(affix)
            }
            SentenceType::Question => self.question_form(self.present_participle_common_builder()),
        }
    }

    /// Present participle (осы шақ есімше).
    pub fn present_participle(&self, sentence_type: SentenceType) -> Phrasal {
        self.present_participle_builder(sentence_type).build()
    }

    /// Past participle builder ("барған", "бармаған").
    pub fn past_participle_builder(&self, sentence_type: SentenceType) -> PhrasalBuilder {
        match sentence_type {
            SentenceType::Statement => self.remote_past_common_builder(),
            SentenceType::Negative => {
                let stem = self.negative_stem();
                let affix = gangen_kanken(stem.particle_last(), self.harmony);
                stem.builder().tense_affix(affix)
            }
            SentenceType::Question => self.question_form(self.remote_past_common_builder()),
        }
    }

    /// Past participle (өткен шақ есімше).
    pub fn past_participle(&self, sentence_type: SentenceType) -> Phrasal {
        self.past_participle_builder(sentence_type).build()
    }

    /// Future participle builder ("барар", "бармас").
    pub fn future_participle_builder(&self, sentence_type: SentenceType) -> PhrasalBuilder {
        match sentence_type {
            SentenceType::Statement => self.possible_future_common_builder(),
            SentenceType::Negative => self.negative_stem().builder().tense_affix("с"),
            SentenceType::Question => self.question_form(self.possible_future_common_builder()),
        }
    }

    /// Future participle (келер шақ есімше).
    pub fn future_participle(&self, sentence_type: SentenceType) -> Phrasal {
        self.future_participle_builder(sentence_type).build()
    }

    fn ushy_common_builder(&self) -> PhrasalBuilder {
        PhrasalBuilder::new()
            .verb_base(self.verb_base.as_str())
            .tense_affix(pick(USHYUSHI, self.harmony))
    }

    /// Agent noun builder ("барушы", "бармаушы").
    pub fn ushy_form_builder(&self, sentence_type: SentenceType) -> PhrasalBuilder {
        match sentence_type {
            SentenceType::Statement => self.ushy_common_builder(),
            SentenceType::Negative => self
                .negative_stem()
                .builder()
                .tense_affix(pick(USHYUSHI, self.harmony)),
            SentenceType::Question => self.question_form(self.ushy_common_builder()),
        }
    }

    /// Agent noun in -ушы/-уші.
    pub fn ushy_form(&self, sentence_type: SentenceType) -> Phrasal {
        self.ushy_form_builder(sentence_type).build()
    }
}
