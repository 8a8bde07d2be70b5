//! Possessive stems and endings.
//!
//! Before a vowel-initial possessive ending some stems change:
//! - a final п/к/қ voices to б/г/ғ ("кітап" → "кітабы")
//! - listed nouns lose the vowel of their last syllable ("орын" → "орны")
//! - a few nouns accept both ("ауыз" → "аузы", "ауызы")

use crate::grammar::{GrammarNumber, GrammarPerson};
use crate::phonetic::{drop_last, is_genuine_vowel, lower_char, Harmony};
use crate::phrasal::PhrasalBuilder;
use crate::rules::affixes::{pick, YI};
use crate::rules::lexicon::base_replacement_pkkh;
use crate::rules::personal::{lookup, NOUN_POSSESSIVE_AFFIXES};
use crate::rules::DropVowelType;

/// A stem prepared for a possessive ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ModifiedBase {
    pub(crate) builder: PhrasalBuilder,
    pub(crate) ends_in_vowel: bool,
}

fn drop_last_vowel(builder: PhrasalBuilder) -> PhrasalBuilder {
    let Some(last) = builder.last_part() else {
        return builder;
    };
    let content = &last.content;
    if content.chars().count() < 2 {
        return builder;
    }
    let mut modified = drop_last(content, 2).to_owned();
    modified.extend(content.chars().next_back());
    let part = last.with_content(modified);
    builder.replace_last_part(part)
}

fn with_drop(base: &PhrasalBuilder) -> ModifiedBase {
    ModifiedBase {
        builder: drop_last_vowel(base.clone()),
        ends_in_vowel: false,
    }
}

fn with_replacement(base: &PhrasalBuilder) -> ModifiedBase {
    let builder = match base.last_item() {
        Some(c) => match base_replacement_pkkh(lower_char(c)) {
            Some(r) if c.is_uppercase() => base.clone().replace_last(r.to_uppercase().next().unwrap_or(r)),
            Some(r) => base.clone().replace_last(r),
            None => base.clone(),
        },
        None => base.clone(),
    };
    let ends_in_vowel = builder
        .last_item()
        .is_some_and(|c| is_genuine_vowel(lower_char(c)));
    ModifiedBase { builder, ends_in_vowel }
}

/// Stem for a singular possessive, with the accepted alternative if any.
pub(crate) fn modify_base(
    base: &PhrasalBuilder,
    drop_vowel: DropVowelType,
) -> (ModifiedBase, Option<ModifiedBase>) {
    match drop_vowel {
        DropVowelType::Regular => (with_replacement(base), None),
        DropVowelType::DropLast => (with_drop(base), None),
        DropVowelType::OptionallyDropLast => (with_drop(base), Some(with_replacement(base))),
    }
}

/// Possessive ending for a stem, including its linking vowel.
pub fn possessive_affix(
    person: GrammarPerson,
    number: GrammarNumber,
    ends_in_vowel: bool,
    harmony: Harmony,
) -> String {
    let affix = lookup(&NOUN_POSSESSIVE_AFFIXES, person, number, harmony);
    match (person, ends_in_vowel) {
        (GrammarPerson::Third, true) => format!("с{}", affix),
        (GrammarPerson::Third, false) | (_, true) => affix.to_owned(),
        (_, false) => format!("{}{}", pick(YI, harmony), affix),
    }
}
