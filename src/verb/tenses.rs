//! Finite tenses.

use super::{BaseModifier, BaseTransform, VerbBuilder};
use crate::grammar::{GrammarNumber, GrammarPerson, SentenceType};
use crate::phonetic::{drop_last, is_genuine_vowel, last_letter, Harmony};
use crate::phrasal::{Phrasal, PhrasalBuilder};
use crate::rules::affixes::{pick, ATYNETYN, DYDI, YAT, YATYN, YATYR, YI, YTYNYTIN};
use crate::rules::lexicon::VERB_PRESENT_CONT_AE_AUX_ENABLED;
use crate::rules::personal::{lookup, VERB_PERS_AFFIXES1, VERB_PERS_AFFIXES2};
use crate::rules::{
    colloquial_negation, dydi_tyti, gangen_kanken, intention_future_affix, pers_affix1,
    pers_affix3, ypip,
};

/// "жоқ" ends in қ and is hard; personal endings after it are keyed on that.
const JOK: &str = "жоқ";
const JOK_LAST: char = 'қ';

/// "емес" ends in с and is soft.
const EMES: &str = "емес";
const EMES_LAST: char = 'с';

impl VerbBuilder {
    fn present_transitive_suffix(&self) -> &'static str {
        if self.base_transform == BaseTransform::YaSuffix {
            "я"
        } else if is_genuine_vowel(self.base_last) {
            "й"
        } else {
            match self.harmony {
                Harmony::Soft => "е",
                Harmony::Hard => "а",
            }
        }
    }

    /// Personal affix outside the third person; the third person is bare.
    fn pers_affix1_except_third(
        person: GrammarPerson,
        number: GrammarNumber,
        harmony: Harmony,
    ) -> &'static str {
        match person {
            GrammarPerson::Third => "",
            _ => lookup(&VERB_PERS_AFFIXES1, person, number, harmony),
        }
    }

    fn append_present_transitive_pers_affix(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        builder: PhrasalBuilder,
    ) -> PhrasalBuilder {
        let affix = if sentence_type == SentenceType::Question && person == GrammarPerson::Third {
            ""
        } else {
            lookup(&VERB_PERS_AFFIXES1, person, number, self.harmony)
        };
        builder.personal_affix(affix)
    }

    /// Base plus the present transitive vowel, without a personal affix ("ала", "оқи").
    pub(crate) fn present_transitive_common_builder(&self) -> PhrasalBuilder {
        Self::merge_base_with_vowel_affix(&self.verb_base, self.present_transitive_suffix())
    }

    // ========================================================================
    // Present
    // ========================================================================

    /// Present transitive (ауыспалы осы шақ): "аламын", "алмаймын", "аламын ба?".
    pub fn present_transitive_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement => self
                .append_present_transitive_pers_affix(
                    person,
                    number,
                    sentence_type,
                    self.present_transitive_common_builder(),
                )
                .build(),
            SentenceType::Negative => {
                let builder = self.negative_stem().builder().tense_affix("й");
                self.append_present_transitive_pers_affix(person, number, sentence_type, builder)
                    .build()
            }
            SentenceType::Question => {
                let builder = self.append_present_transitive_pers_affix(
                    person,
                    number,
                    sentence_type,
                    self.present_transitive_common_builder(),
                );
                self.question_form(builder).build()
            }
        }
    }

    fn present_simple_continuous_builder(
        &self,
        root: &'static str,
        person: GrammarPerson,
        number: GrammarNumber,
    ) -> PhrasalBuilder {
        PhrasalBuilder::new()
            .verb_base(root)
            .personal_affix(Self::pers_affix1_except_third(person, number, self.harmony))
    }

    /// Bare continuous of the posture verbs: "жатырмын", "тұрсың".
    ///
    /// Returns [`Phrasal::not_supported`] for verbs without a continuous root.
    pub fn present_simple_continuous_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let Some(root) = self.cont_context else {
            return Phrasal::not_supported();
        };
        match sentence_type {
            SentenceType::Statement => self
                .present_simple_continuous_builder(root, person, number)
                .build(),
            SentenceType::Negative => PhrasalBuilder::new()
                .verb_base(self.verb_base.as_str())
                .tense_affix(gangen_kanken(self.base_last, self.harmony))
                .space()
                .negation(JOK)
                .personal_affix(pers_affix1(person, number, JOK_LAST, Harmony::Hard))
                .build(),
            SentenceType::Question => self
                .question_form(self.present_simple_continuous_builder(root, person, number))
                .build(),
        }
    }

    /// Periphrastic continuous with a posture auxiliary: "жазып отырмын".
    ///
    /// With `negate_aux` the negation falls on the auxiliary
    /// ("жазып отырған жоқпын"); without it on the main verb ("жазбай отырмын").
    /// "бару"/"келу" style verbs combine only with "жату"; other auxiliaries
    /// still build but are marked forbidden.
    pub fn present_continuous_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        aux_builder: &VerbBuilder,
        negate_aux: bool,
    ) -> Phrasal {
        if aux_builder.cont_context.is_none() {
            return Phrasal::not_supported();
        }
        let forbidden = self.is_cont_exception_ae()
            && aux_builder.dict_form != VERB_PRESENT_CONT_AE_AUX_ENABLED;

        if sentence_type != SentenceType::Negative || negate_aux {
            let aux = aux_builder.present_simple_continuous_form(person, number, sentence_type);
            PhrasalBuilder::new()
                .verb_base(self.present_continuous_base())
                .tense_affix(self.present_continuous_affix())
                .space()
                .aux_verb(&aux)
                .set_forbidden(forbidden)
                .build()
        } else {
            let aux =
                aux_builder.present_simple_continuous_form(person, number, SentenceType::Statement);
            self.negative_stem()
                .builder()
                .tense_affix("й")
                .space()
                .aux_verb(&aux)
                .set_forbidden(forbidden)
                .build()
        }
    }

    /// Negative continuous with the negation on the main verb: "жазбай отырсың".
    pub fn present_continuous_simple_negative_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        aux_builder: &VerbBuilder,
    ) -> Phrasal {
        self.present_continuous_form(person, number, SentenceType::Negative, aux_builder, false)
    }

    fn present_colloquial_suffix(&self, person: GrammarPerson) -> String {
        let long = matches!(person, GrammarPerson::First | GrammarPerson::Third);
        if self.is_cont_exception_ae() {
            let suffix = if long { YATYR } else { YAT };
            return suffix.to_owned();
        }
        let ending = if long { "ватыр" } else { "ват" };
        if is_genuine_vowel(self.base_last) {
            ending.to_owned()
        } else {
            format!("{}{}", pick(YI, self.harmony), ending)
        }
    }

    fn present_colloquial_builder(&self, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        PhrasalBuilder::new()
            .verb_base(self.present_continuous_base())
            .tense_affix(self.present_colloquial_suffix(person))
            .personal_affix(Self::pers_affix1_except_third(person, number, Harmony::Hard))
    }

    /// Spoken contracted continuous: "барятырмын", "оқыватырсың".
    ///
    /// Personal endings and the question particle are always hard.
    pub fn present_colloquial_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement => self.present_colloquial_builder(person, number).build(),
            SentenceType::Negative => {
                let base = self.base_modifier(BaseModifier::NegativeConsonant);
                let suffix = match person {
                    GrammarPerson::First | GrammarPerson::Third => YATYR,
                    _ => YAT,
                };
                PhrasalBuilder::new()
                    .verb_base(base.base)
                    .negation(colloquial_negation(base.last))
                    .tense_affix(suffix)
                    .personal_affix(Self::pers_affix1_except_third(person, number, Harmony::Hard))
                    .build()
            }
            SentenceType::Question => self
                .question_form_with(self.present_colloquial_builder(person, number), Harmony::Hard)
                .build(),
        }
    }

    // ========================================================================
    // Past
    // ========================================================================

    fn past_common_builder(&self) -> PhrasalBuilder {
        let base = self.base_modifier(BaseModifier::NegativeConsonant);
        let affix = dydi_tyti(base.last, self.harmony);
        PhrasalBuilder::new().verb_base(base.base).tense_affix(affix)
    }

    /// Simple past (жедел өткен шақ): "алдым", "алмадым", "алдым ба?".
    pub fn past_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let pers_affix = lookup(&VERB_PERS_AFFIXES2, person, number, self.harmony);
        match sentence_type {
            SentenceType::Statement => self.past_common_builder().personal_affix(pers_affix).build(),
            SentenceType::Negative => self
                .negative_stem()
                .builder()
                .tense_affix(pick(DYDI, self.harmony))
                .personal_affix(pers_affix)
                .build(),
            SentenceType::Question => self
                .question_form(self.past_common_builder().personal_affix(pers_affix))
                .build(),
        }
    }

    pub(crate) fn remote_past_common_builder(&self) -> PhrasalBuilder {
        let base = self.base_modifier(BaseModifier::NegativeConsonant);
        let affix = gangen_kanken(base.last, self.harmony);
        PhrasalBuilder::new().verb_base(base.base).tense_affix(affix)
    }

    fn remote_past_with_pers_affix(&self, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        let builder = self.remote_past_common_builder();
        let affix_last = builder.last_item().unwrap_or(self.base_last);
        builder.personal_affix(pers_affix1(person, number, affix_last, self.harmony))
    }

    /// Remote past (бұрынғы өткен шақ): "барғанмын".
    ///
    /// With `negate_aux` the negative is analytic ("барған жоқпын"), otherwise
    /// synthetic ("бармағанмын").
    pub fn remote_past_tense(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
        negate_aux: bool,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement => self.remote_past_with_pers_affix(person, number).build(),
            SentenceType::Negative if negate_aux => self
                .remote_past_common_builder()
                .space()
                .negation(JOK)
                .personal_affix(pers_affix1(person, number, JOK_LAST, Harmony::Hard))
                .build(),
            SentenceType::Negative => {
                let stem = self.negative_stem();
                let affix = gangen_kanken(stem.particle_last(), self.harmony);
                stem.builder()
                    .tense_affix(affix)
                    .personal_affix(pers_affix1(person, number, last_letter(affix), self.harmony))
                    .build()
            }
            SentenceType::Question => self
                .question_form(self.remote_past_with_pers_affix(person, number))
                .build(),
        }
    }

    fn past_uncertain_common_builder(&self) -> PhrasalBuilder {
        let base = self.base_modifier(BaseModifier::RestoreU);
        let affix = ypip(base.last, self.harmony);
        PhrasalBuilder::new().verb_base(base.base).tense_affix(affix)
    }

    /// Evidential past (күмәнді өткен шақ): "барыппын", "барыпты".
    pub fn past_uncertain_tense(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        let pers_affix = pers_affix3(person, number, self.harmony);
        match sentence_type {
            SentenceType::Statement => self
                .past_uncertain_common_builder()
                .personal_affix(pers_affix)
                .build(),
            SentenceType::Negative => {
                let stem = self.negative_stem();
                let affix = ypip(stem.particle_last(), self.harmony);
                stem.builder()
                    .tense_affix(affix)
                    .personal_affix(pers_affix)
                    .build()
            }
            SentenceType::Question => self
                .question_form(self.past_uncertain_common_builder().personal_affix(pers_affix))
                .build(),
        }
    }

    /// "-атын" suffix after `prev`.
    pub(crate) fn past_transitive_suffix(&self, prev: char) -> &'static str {
        if self.base_transform == BaseTransform::YaSuffix {
            YATYN
        } else if is_genuine_vowel(prev) {
            pick(YTYNYTIN, self.harmony)
        } else {
            pick(ATYNETYN, self.harmony)
        }
    }

    pub(crate) fn present_participle_common_builder(&self) -> PhrasalBuilder {
        Self::merge_base_with_vowel_affix(&self.verb_base, self.past_transitive_suffix(self.base_last))
    }

    fn past_transitive_with_pers_affix(&self, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        let builder = self.present_participle_common_builder();
        let affix_last = builder.last_item().unwrap_or(self.base_last);
        builder.personal_affix(pers_affix1(person, number, affix_last, self.harmony))
    }

    /// Habitual past (ауыспалы өткен шақ): "баратынмын", "бармайтынмын".
    pub fn past_transitive_tense(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement => self.past_transitive_with_pers_affix(person, number).build(),
            SentenceType::Negative => {
                let stem = self.negative_stem();
                let affix = self.past_transitive_suffix(stem.particle_last());
                stem.builder()
                    .tense_affix(affix)
                    .personal_affix(pers_affix1(person, number, last_letter(affix), self.harmony))
                    .build()
            }
            SentenceType::Question => self
                .question_form(self.past_transitive_with_pers_affix(person, number))
                .build(),
        }
    }

    // ========================================================================
    // Future
    // ========================================================================

    pub(crate) fn possible_future_common_builder(&self) -> PhrasalBuilder {
        let affix = if is_genuine_vowel(self.base_last) {
            "р"
        } else {
            match self.harmony {
                Harmony::Soft => "ер",
                Harmony::Hard => "ар",
            }
        };
        if self.base_last == 'й' && affix == "ар" {
            return PhrasalBuilder::new()
                .verb_base(drop_last(&self.verb_base, 1))
                .tense_affix("яр");
        }
        PhrasalBuilder::new()
            .verb_base(self.verb_base.as_str())
            .tense_affix(affix)
    }

    fn possible_future_with_pers_affix(&self, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        let builder = self.possible_future_common_builder();
        let affix_last = builder.last_item().unwrap_or(self.base_last);
        builder.personal_affix(pers_affix1(person, number, affix_last, self.harmony))
    }

    /// Possible future (болжалды келер шақ): "барармын", "бармаспын".
    pub fn possible_future_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement => self.possible_future_with_pers_affix(person, number).build(),
            SentenceType::Negative => self
                .negative_stem()
                .builder()
                .tense_affix("с")
                .personal_affix(pers_affix1(person, number, 'с', self.harmony))
                .build(),
            SentenceType::Question => self
                .question_form(self.possible_future_with_pers_affix(person, number))
                .build(),
        }
    }

    fn intention_future_common_builder(&self) -> PhrasalBuilder {
        let base = self.base_modifier(BaseModifier::NegativeConsonant);
        let affix = intention_future_affix(base.last, self.harmony);
        PhrasalBuilder::new().verb_base(base.base).tense_affix(affix)
    }

    /// Intention future (мақсатты келер шақ): "бармақпын", "бармақ емеспін".
    pub fn intention_future_form(
        &self,
        person: GrammarPerson,
        number: GrammarNumber,
        sentence_type: SentenceType,
    ) -> Phrasal {
        match sentence_type {
            SentenceType::Statement | SentenceType::Question => {
                let builder = self.intention_future_common_builder();
                let affix_last = builder.last_item().unwrap_or(self.base_last);
                let builder =
                    builder.personal_affix(pers_affix1(person, number, affix_last, self.harmony));
                if sentence_type == SentenceType::Question {
                    self.question_form(builder).build()
                } else {
                    builder.build()
                }
            }
            SentenceType::Negative => self
                .intention_future_common_builder()
                .space()
                .negation(EMES)
                .personal_affix(pers_affix1(person, number, EMES_LAST, Harmony::Soft))
                .build(),
        }
    }
}
