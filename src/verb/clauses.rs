//! Constructions composing a second, fully conjugated verb.
//!
//! The main verb contributes a non-finite form; the auxiliary contributes a
//! finite [`Phrasal`] spliced in with every part flagged
//! [`aux`](crate::phrasal::PhrasalPart::aux).

use super::VerbBuilder;
use crate::grammar::{GrammarNumber, GrammarPerson, SentenceType, VerbShak, VerbTense};
use crate::phrasal::Phrasal;

impl VerbBuilder {
    fn form_by_shak(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        shak: VerbShak,
        cont_aux: &VerbBuilder,
    ) -> Phrasal {
        match shak {
            VerbShak::PresentTransitive => self.present_transitive_form(person, number, sentence_type),
            VerbShak::PresentContinuous => {
                self.present_continuous_form(person, number, sentence_type, cont_aux, false)
            }
        }
    }

    fn want_aux(&self, sentence_type: SentenceType, shak: VerbShak) -> Phrasal {
        let kelu = self.optative_aux();
        let jatu = self.default_continuous_aux();
        if shak == VerbShak::PresentContinuous && sentence_type != SentenceType::Negative {
            let cont = jatu.present_simple_continuous_form(
                GrammarPerson::Third,
                GrammarNumber::Singular,
                sentence_type,
            );
            return kelu.converb_builder().space().aux_verb(&cont).build();
        }
        kelu.form_by_shak(
            GrammarPerson::Third,
            GrammarNumber::Singular,
            sentence_type,
            shak,
            jatu,
        )
    }

    /// Optative with the auxiliary "келу" in the requested aspect.
    ///
    /// "көргім келеді" in present transitive, "көргім келіп жатыр" in present
    /// continuous, "көргім келмей жатыр" for its negative.
    pub fn want_clause(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        shak: VerbShak,
    ) -> Phrasal {
        let aux = self.want_aux(sentence_type, shak);
        self.optative_stem_builder(person, number)
            .space()
            .aux_verb(&aux)
            .build()
    }

    /// Ability with "алу" in present transitive: "бара аламын".
    pub fn can_clause(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let aux = self.can_aux().present_transitive_form(person, number, sentence_type);
        self.present_transitive_common_builder()
            .space()
            .aux_verb(&aux)
            .build()
    }

    /// Ability with "алу" in simple past: "бара алдым".
    pub fn can_clause_in_past_tense(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let aux = self.can_aux().past_form(person, number, sentence_type);
        self.present_transitive_common_builder()
            .space()
            .aux_verb(&aux)
            .build()
    }

    /// Ability with "алу" in present continuous: "бара алып жатырмын".
    pub fn can_clause_in_present_continuous(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        aux_builder: &VerbBuilder,
    ) -> Phrasal {
        let aux = self
            .can_aux()
            .present_continuous_form(person, number, sentence_type, aux_builder, false);
        self.present_transitive_common_builder()
            .space()
            .aux_verb(&aux)
            .build()
    }

    /// Attempt with "көру": "жазып көремін", "жазып көрдім", "жазып көргім келеді".
    pub fn koru_clause_of_tense(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        tense: VerbTense,
    ) -> Phrasal {
        let koru = self.koru_aux();
        let aux = match tense {
            VerbTense::PresentTransitive => koru.present_transitive_form(person, number, sentence_type),
            VerbTense::Past => koru.past_form(person, number, sentence_type),
            VerbTense::Optative => koru.optative_mood(person, number, sentence_type),
        };
        self.converb_builder().space().aux_verb(&aux).build()
    }

    /// "Almost" construction with "жаздау": "құлап қала жаздадым".
    ///
    /// `aux_builder` supplies the middle verb in its bare present form.
    pub fn jazdau_clause(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        aux_builder: &VerbBuilder,
    ) -> Phrasal {
        let middle = aux_builder.present_transitive_common_builder().build();
        let last = self
            .jazdau_aux()
            .past_form(person, number, SentenceType::Statement);
        self.converb_builder()
            .space()
            .aux_verb(&middle)
            .space()
            .aux_verb(&last)
            .build()
    }
}
