//! Noun declension.
//!
//! A [`NounBuilder`] wraps a stem (a plain noun, or a participle produced by
//! a [`VerbBuilder`](crate::verb::VerbBuilder)) and produces plural,
//! possessive and case forms in any combination.
//!
//! The stem's letter case is preserved ("АУЫЗ" → "АУЗы"); affixes are always
//! lowercase and every phonetic test uses the lowercased final character.
//!
//! # Example
//!
//! ```
//! use kazakh_morph::prelude::*;
//!
//! let noun = NounBuilder::of_noun("ауыз");
//! let phrasal = noun.possessive_form(GrammarPerson::Third, GrammarNumber::Singular);
//! assert_eq!(phrasal.raw(), "аузы");
//! assert_eq!(phrasal.alternative().map(|alt| alt.raw()), Some("ауызы"));
//! ```

mod possessive;
mod septik;

pub use possessive::possessive_affix;
pub use septik::{belongs_affix, locative_adjective_affix, septik_affix, SeptikContext};

use crate::grammar::{GrammarNumber, GrammarPerson, Septik};
use crate::phonetic::{last_word, lower_char, word_harmony, Harmony};
use crate::phrasal::{Phrasal, PhrasalBuilder};
use crate::rules::affixes::{DARDER, LARLER, TARTER};
use crate::rules::lexicon::drop_vowel_type;
use crate::rules::{choose_ldt, DropVowelType};
use possessive::{modify_base, ModifiedBase};

/// Decliner for a single noun stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounBuilder {
    base: PhrasalBuilder,
    harmony: Harmony,
    drop_vowel: DropVowelType,
}

impl NounBuilder {
    /// Builder for a dictionary-form noun.
    pub fn of_noun(dict_form: &str) -> Self {
        Self::of_phrasal(PhrasalBuilder::new().noun_base(dict_form))
    }

    /// Builder for an arbitrary stem, typically a participle.
    pub fn of_phrasal(base: PhrasalBuilder) -> Self {
        let text: String = base.parts().iter().map(|p| p.content.as_str()).collect();
        let lowered = text.to_lowercase();
        let last = last_word(&lowered);
        NounBuilder {
            harmony: word_harmony(last),
            drop_vowel: drop_vowel_type(last),
            base,
        }
    }

    /// Harmony of the stem.
    pub fn harmony(&self) -> Harmony {
        self.harmony
    }

    /// Possessive stem class of the noun.
    pub fn drop_vowel_type(&self) -> DropVowelType {
        self.drop_vowel
    }

    fn last_lower(builder: &PhrasalBuilder) -> char {
        builder.last_item().map(lower_char).unwrap_or('\0')
    }

    fn with_septik(&self, builder: PhrasalBuilder, septik: Septik, context: SeptikContext) -> PhrasalBuilder {
        let affix = septik_affix(septik, Self::last_lower(&builder), self.harmony, context);
        builder.septik_affix(affix)
    }

    // ========================================================================
    // Plural
    // ========================================================================

    fn plural_builder(&self) -> PhrasalBuilder {
        let affix = choose_ldt(Self::last_lower(&self.base), self.harmony, LARLER, DARDER, TARTER);
        self.base.clone().plural_affix(affix)
    }

    /// Plural: "кітаптар", "балалар", "үйлер".
    pub fn pluralize(&self) -> Phrasal {
        self.plural_builder().build()
    }

    // ========================================================================
    // Cases
    // ========================================================================

    /// Case form of the bare noun: "кітаптың", "балаға".
    pub fn septik_form(&self, septik: Septik) -> Phrasal {
        self.with_septik(self.base.clone(), septik, SeptikContext::Bare)
            .build()
    }

    /// Case form of the plural: "кітаптардың".
    pub fn plural_septik_form(&self, septik: Septik) -> Phrasal {
        self.with_septik(self.plural_builder(), septik, SeptikContext::Bare)
            .build()
    }

    // ========================================================================
    // Possessive
    // ========================================================================

    fn append_possessive(&self, stem: ModifiedBase, person: GrammarPerson, number: GrammarNumber) -> PhrasalBuilder {
        let affix = possessive_affix(person, number, stem.ends_in_vowel, self.harmony);
        stem.builder.possessive_affix(affix)
    }

    /// Possessive builders: the primary form and the accepted alternative, if any.
    ///
    /// Plural possessors other than the first person attach to the plural
    /// stem, which never changes and never has an alternative.
    fn possessive_builders(&self, person: GrammarPerson, number: GrammarNumber) -> (PhrasalBuilder, Option<PhrasalBuilder>) {
        if number == GrammarNumber::Plural && person != GrammarPerson::First {
            let stem = ModifiedBase {
                builder: self.plural_builder(),
                ends_in_vowel: false,
            };
            return (self.append_possessive(stem, person, number), None);
        }
        let (primary, alternative) = modify_base(&self.base, self.drop_vowel);
        (
            self.append_possessive(primary, person, number),
            alternative.map(|alt| self.append_possessive(alt, person, number)),
        )
    }

    /// Possessive form: "кітабым", "кітаптарың", "аузы" (alternative "ауызы").
    pub fn possessive_form(&self, person: GrammarPerson, number: GrammarNumber) -> Phrasal {
        self.possessive_septik_form(person, number, Septik::Atau)
    }

    /// Possessive plus case: "кітабымның", "кітабына", "аузынан".
    ///
    /// An alternative stem yields an alternative form.
    pub fn possessive_septik_form(&self, person: GrammarPerson, number: GrammarNumber, septik: Septik) -> Phrasal {
        let context = SeptikContext::of_possessor(person, number);
        let (primary, alternative) = self.possessive_builders(person, number);
        let mut builder = self.with_septik(primary, septik, context);
        if let Some(alt) = alternative {
            builder = builder.attach_alternative(self.with_septik(alt, septik, context));
        }
        builder.build()
    }

    /// Plural possessed noun with possessive and case: "кітаптарымның".
    pub fn plural_possessive_septik_form(&self, person: GrammarPerson, number: GrammarNumber, septik: Septik) -> Phrasal {
        let stem = ModifiedBase {
            builder: self.plural_builder(),
            ends_in_vowel: false,
        };
        let builder = self.append_possessive(stem, person, number);
        self.with_septik(builder, septik, SeptikContext::of_possessor(person, number))
            .build()
    }

    // ========================================================================
    // Derivations
    // ========================================================================

    /// "Belonging to" form: "Асандікі", "баланікі", "кітаптікі".
    pub fn belongs_form(&self) -> Phrasal {
        let affix = belongs_affix(Self::last_lower(&self.base), self.harmony);
        self.base.clone().septik_affix(affix).build()
    }

    /// Locative adjective: "үстелдегі", "қаладағы", "кітаптағы".
    pub fn locative_adjective_form(&self) -> Phrasal {
        let affix = locative_adjective_affix(Self::last_lower(&self.base), self.harmony, SeptikContext::Bare);
        self.base.clone().septik_affix(affix).build()
    }

    /// Locative adjective of a possessive form: "қаласындағы", "үйіміздегі".
    pub fn possessive_locative_adjective_form(&self, person: GrammarPerson, number: GrammarNumber) -> Phrasal {
        let context = SeptikContext::of_possessor(person, number);
        let attach = |builder: PhrasalBuilder| {
            let affix = locative_adjective_affix(Self::last_lower(&builder), self.harmony, context);
            builder.septik_affix(affix)
        };
        let (primary, alternative) = self.possessive_builders(person, number);
        let mut builder = attach(primary);
        if let Some(alt) = alternative {
            builder = builder.attach_alternative(attach(alt));
        }
        builder.build()
    }
}
