//! Case affix selection.
//!
//! The affix depends on three things: the case, the lowercased final
//! character of the stem, and whether the stem already carries a possessive
//! ending that changes the rules ("кітабына", "кітабыма" vs "кітапқа").

use crate::grammar::{GrammarNumber, GrammarPerson, Septik};
use crate::phonetic::{in_any_group, in_group, is_vowel, Harmony, LetterGroup};
use crate::rules::affixes::*;
use crate::rules::gangen_compatible;

/// Possessive ending the stem already carries, as far as case selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeptikContext {
    /// No possessive, or one that behaves like a plain stem (-ымыз, -ыңыз)
    Bare,
    /// First person singular or second person familiar (-ым, -ың): dative -а/-е
    ShortDative,
    /// Third person (-ы, -сы): the н-initial case set
    ThirdPossessive,
}

impl SeptikContext {
    /// Context after a possessive ending of the given possessor.
    pub fn of_possessor(person: GrammarPerson, number: GrammarNumber) -> Self {
        match (person, number) {
            (GrammarPerson::Third, _) => SeptikContext::ThirdPossessive,
            (GrammarPerson::First, GrammarNumber::Singular) | (GrammarPerson::Second, _) => {
                SeptikContext::ShortDative
            }
            _ => SeptikContext::Bare,
        }
    }
}

fn ilik(c: char, harmony: Harmony) -> &'static str {
    if in_any_group(
        c,
        &[LetterGroup::VowelsGroup1, LetterGroup::Sonorant, LetterGroup::Sibilant],
    ) {
        pick(DYNGDING, harmony)
    } else if is_vowel(c) || in_group(c, LetterGroup::Nasal) {
        pick(NYNGNING, harmony)
    } else {
        pick(TYNGTING, harmony)
    }
}

fn barys(c: char, harmony: Harmony, context: SeptikContext) -> &'static str {
    match context {
        SeptikContext::ShortDative => pick(AE, harmony),
        SeptikContext::ThirdPossessive => pick(NANE, harmony),
        SeptikContext::Bare if gangen_compatible(c) => pick(GAGE, harmony),
        SeptikContext::Bare => pick(KAKE, harmony),
    }
}

fn tabys(c: char, harmony: Harmony, context: SeptikContext) -> &'static str {
    if context == SeptikContext::ThirdPossessive {
        "н"
    } else if in_any_group(c, &[LetterGroup::VowelsGroup1, LetterGroup::SonorantOrVoiced]) {
        pick(DYDI, harmony)
    } else if is_vowel(c) {
        pick(NYNI, harmony)
    } else {
        pick(TYTI, harmony)
    }
}

fn jatys(c: char, harmony: Harmony, context: SeptikContext) -> &'static str {
    if context == SeptikContext::ThirdPossessive {
        pick(NDANDE, harmony)
    } else if gangen_compatible(c) {
        pick(DADE, harmony)
    } else {
        pick(TATE, harmony)
    }
}

fn shygys(c: char, harmony: Harmony, context: SeptikContext) -> &'static str {
    if context == SeptikContext::ThirdPossessive || in_group(c, LetterGroup::Nasal) {
        pick(NANNEN, harmony)
    } else if is_vowel(c) || in_any_group(c, &[LetterGroup::Sonorant, LetterGroup::Sibilant]) {
        pick(DANDEN, harmony)
    } else {
        pick(TANTEN, harmony)
    }
}

fn komektes(c: char) -> &'static str {
    if is_vowel(c) || in_any_group(c, &[LetterGroup::Sonorant, LetterGroup::Nasal]) {
        MENBEN_M
    } else if in_group(c, LetterGroup::Sibilant) {
        MENBEN_B
    } else {
        MENBEN_P
    }
}

/// Case affix after `c` (already lowercased). Empty for the nominative.
pub fn septik_affix(septik: Septik, c: char, harmony: Harmony, context: SeptikContext) -> &'static str {
    match septik {
        Septik::Atau => "",
        Septik::Ilik => ilik(c, harmony),
        Septik::Barys => barys(c, harmony, context),
        Septik::Tabys => tabys(c, harmony, context),
        Septik::Jatys => jatys(c, harmony, context),
        Septik::Shygys => shygys(c, harmony, context),
        Septik::Komektes => komektes(c),
    }
}

/// "-дағы" locative adjective affix after `c`.
pub fn locative_adjective_affix(c: char, harmony: Harmony, context: SeptikContext) -> &'static str {
    if context == SeptikContext::ThirdPossessive {
        pick(NDAGYNDEGI, harmony)
    } else if gangen_compatible(c) {
        pick(DAGYDEGI, harmony)
    } else {
        pick(TAGYTEGI, harmony)
    }
}

/// "-дікі" possession affix after `c`.
pub fn belongs_affix(c: char, harmony: Harmony) -> &'static str {
    if is_vowel(c) {
        pick(NIKI, harmony)
    } else if in_group(c, LetterGroup::SonorantOrVoiced) {
        pick(DIKI, harmony)
    } else {
        pick(TIKI, harmony)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Harmony::*;
    use SeptikContext::*;

    #[test]
    fn test_bare_cases() {
        assert_eq!(septik_affix(Septik::Ilik, 'п', Hard, Bare), "тың");
        assert_eq!(septik_affix(Septik::Ilik, 'а', Hard, Bare), "ның");
        assert_eq!(septik_affix(Septik::Ilik, 'й', Soft, Bare), "дің");
        assert_eq!(septik_affix(Septik::Barys, 'п', Hard, Bare), "қа");
        assert_eq!(septik_affix(Septik::Barys, 'а', Hard, Bare), "ға");
        assert_eq!(septik_affix(Septik::Tabys, 'а', Hard, Bare), "ны");
        assert_eq!(septik_affix(Septik::Tabys, 'м', Hard, Bare), "ды");
        assert_eq!(septik_affix(Septik::Jatys, 'т', Soft, Bare), "те");
        assert_eq!(septik_affix(Septik::Shygys, 'м', Hard, Bare), "нан");
        assert_eq!(septik_affix(Septik::Shygys, 'з', Hard, Bare), "дан");
        assert_eq!(septik_affix(Septik::Komektes, 'з', Hard, Bare), "бен");
        assert_eq!(septik_affix(Septik::Komektes, 'п', Hard, Bare), "пен");
        assert_eq!(septik_affix(Septik::Atau, 'п', Hard, Bare), "");
    }

    #[test]
    fn test_possessive_contexts() {
        assert_eq!(septik_affix(Septik::Barys, 'м', Hard, ShortDative), "а");
        assert_eq!(septik_affix(Septik::Barys, 'ы', Hard, ThirdPossessive), "на");
        assert_eq!(septik_affix(Septik::Tabys, 'ы', Hard, ThirdPossessive), "н");
        assert_eq!(septik_affix(Septik::Jatys, 'і', Soft, ThirdPossessive), "нде");
        assert_eq!(septik_affix(Septik::Shygys, 'ы', Hard, ThirdPossessive), "нан");
        assert_eq!(
            SeptikContext::of_possessor(GrammarPerson::First, GrammarNumber::Plural),
            Bare
        );
        assert_eq!(
            SeptikContext::of_possessor(GrammarPerson::Second, GrammarNumber::Plural),
            ShortDative
        );
    }

    #[test]
    fn test_derivations() {
        assert_eq!(belongs_affix('а', Hard), "нікі");
        assert_eq!(belongs_affix('н', Hard), "дікі");
        assert_eq!(belongs_affix('т', Soft), "тікі");
        assert_eq!(locative_adjective_affix('а', Hard, Bare), "дағы");
        assert_eq!(locative_adjective_affix('п', Hard, Bare), "тағы");
        assert_eq!(locative_adjective_affix('ы', Hard, ThirdPossessive), "ндағы");
    }
}
