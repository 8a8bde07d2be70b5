//! Conditional, imperative and optative moods.

use super::{BaseModifier, VerbBuilder};
use crate::grammar::{GrammarNumber, GrammarPerson, SentenceType};
use crate::phrasal::{Phrasal, PhrasalBuilder};
use crate::rules::affixes::{pick, SASE};
use crate::rules::personal::{lookup, VERB_PERS_AFFIXES2, VERB_WANT_PERS_AFFIXES};
use crate::rules::{gygi_kyki, imperative_affix};

impl VerbBuilder {
    fn conditional_common_builder(&self) -> PhrasalBuilder {
        let base = self.base_modifier(BaseModifier::NegativeConsonant);
        PhrasalBuilder::new()
            .verb_base(base.base)
            .tense_affix(pick(SASE, self.harmony))
    }

    /// Conditional mood (шартты рай): "барсам", "бармасам", "барсам ба?".
    pub fn conditional_mood(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let pers_affix = lookup(&VERB_PERS_AFFIXES2, person, number, self.harmony);
        match sentence_type {
            SentenceType::Statement => self
                .conditional_common_builder()
                .personal_affix(pers_affix)
                .build(),
            SentenceType::Negative => self
                .negative_stem()
                .builder()
                .tense_affix(pick(SASE, self.harmony))
                .personal_affix(pers_affix)
                .build(),
            SentenceType::Question => self
                .question_form(self.conditional_common_builder().personal_affix(pers_affix))
                .build(),
        }
    }

    fn imperative_common_builder(&self, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        // the bare second singular and the third person attach a consonant
        let consonant_affix = (person == GrammarPerson::Second && number == GrammarNumber::Singular)
            || person == GrammarPerson::Third;
        let base = if consonant_affix {
            self.base_modifier(BaseModifier::NegativeConsonant)
        } else {
            self.unchanged_base()
        };
        let affix = imperative_affix(person, number, base.last, self.harmony);
        Self::merge_base_with_vowel_affix(&base.base, &affix)
    }

    /// Imperative mood (бұйрық рай): "алайын", "ал", "алыңыз", "алсын".
    pub fn imperative_mood(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement => self.imperative_common_builder(person, number).build(),
            SentenceType::Negative => {
                let stem = self.negative_stem();
                let affix = imperative_affix(person, number, stem.particle_last(), self.harmony);
                stem.builder().tense_affix(affix).build()
            }
            SentenceType::Question => self
                .question_form(self.imperative_common_builder(person, number))
                .build(),
        }
    }

    /// "-ғым" stem of the optative, without the auxiliary.
    pub(super) fn optative_stem_builder(&self, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        let base = self.base_modifier(BaseModifier::NegativeConsonant);
        let affix = gygi_kyki(base.last, self.harmony);
        PhrasalBuilder::new()
            .verb_base(base.base)
            .tense_affix(affix)
            .personal_affix(lookup(&VERB_WANT_PERS_AFFIXES, person, number, self.harmony))
    }

    /// Optative mood (қалау рай) with "келу" in present transitive: "барғым келеді".
    ///
    /// Only the auxiliary carries the sentence type: "барғым келмейді".
    pub fn optative_mood(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let aux = self.optative_aux().present_transitive_form(
            GrammarPerson::Third,
            GrammarNumber::Singular,
            sentence_type,
        );
        self.optative_stem_builder(person, number)
            .space()
            .aux_verb(&aux)
            .build()
    }

    /// Optative mood with "келу" in simple past: "барғым келді".
    pub fn optative_mood_in_past_tense(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let aux = self
            .optative_aux()
            .past_form(GrammarPerson::Third, GrammarNumber::Singular, sentence_type);
        self.optative_stem_builder(person, number)
            .space()
            .aux_verb(&aux)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GrammarNumber::*;
    use GrammarPerson::*;
    use SentenceType::*;

    fn verb(dict_form: &str) -> VerbBuilder {
        VerbBuilder::new(dict_form).unwrap()
    }

    #[test]
    fn test_conditional() {
        let baru = verb("бару");
        assert_eq!(baru.conditional_mood(First, Singular, Statement).raw(), "барсам");
        assert_eq!(baru.conditional_mood(First, Plural, Negative).raw(), "бармасақ");
        assert_eq!(baru.conditional_mood(Third, Singular, Question).raw(), "барса ма?");
        assert_eq!(verb("келу").conditional_mood(Second, Plural, Statement).raw(), "келсеңдер");
    }

    #[test]
    fn test_imperative() {
        let alu = verb("алу");
        assert_eq!(alu.imperative_mood(First, Singular, Statement).raw(), "алайын");
        assert_eq!(alu.imperative_mood(Second, Singular, Statement).raw(), "ал");
        assert_eq!(alu.imperative_mood(SecondPolite, Singular, Statement).raw(), "алыңыз");
        assert_eq!(alu.imperative_mood(Third, Singular, Statement).raw(), "алсын");
        assert_eq!(alu.imperative_mood(First, Singular, Negative).raw(), "алмайын");
        assert_eq!(alu.imperative_mood(Second, Singular, Negative).raw(), "алма");
        assert_eq!(alu.imperative_mood(Third, Plural, Negative).raw(), "алмасын");

        let oku = verb("оқу");
        assert_eq!(oku.imperative_mood(First, Singular, Statement).raw(), "оқиын");
        assert_eq!(oku.imperative_mood(Second, Singular, Statement).raw(), "оқы");
    }

    #[test]
    fn test_optative() {
        let baru = verb("бару");
        assert_eq!(baru.optative_mood(First, Singular, Statement).raw(), "барғым келеді");
        assert_eq!(baru.optative_mood(First, Singular, Negative).raw(), "барғым келмейді");
        assert_eq!(baru.optative_mood(Third, Plural, Question).raw(), "барғылары келе ме?");
        assert_eq!(verb("ішу").optative_mood(Third, Singular, Statement).raw(), "ішкісі келеді");
        assert_eq!(
            baru.optative_mood_in_past_tense(Second, Singular, Statement).raw(),
            "барғың келді"
        );
    }

    #[test]
    fn test_optative_aux_is_flagged() {
        let phrasal = verb("бару").optative_mood(First, Singular, Statement);
        let aux_parts: Vec<_> = phrasal.parts().iter().filter(|p| p.aux).collect();
        assert_eq!(aux_parts.len(), 3);
        assert_eq!(aux_parts[0].content, "кел");
    }
}
