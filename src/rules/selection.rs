//! Affix selection keyed on the class of the preceding character.
//!
//! Each selector takes the character an affix attaches to and the harmony of
//! the word, and returns the concrete spelling.

use super::affixes::*;
use super::personal::{lookup, IMPERATIVE_AFFIXES};
use crate::grammar::{GrammarNumber, GrammarPerson};
use crate::phonetic::{in_any_group, in_group, is_genuine_vowel, is_vowel, Harmony, LetterGroup};

// ============================================================================
// м/б/п and л/д/т families
// ============================================================================

/// Three-way choice between м-, б- and п-initial affixes.
///
/// Vowels and р у й л take the м-form, ж з м н ң the б-form, the rest the п-form.
pub fn choose_mbp(
    c: char,
    harmony: Harmony,
    m: AffixPair,
    b: AffixPair,
    p: AffixPair,
) -> &'static str {
    if is_vowel(c) || in_group(c, LetterGroup::Sonorant) {
        pick(m, harmony)
    } else if in_group(c, LetterGroup::Voiced) {
        pick(b, harmony)
    } else {
        pick(p, harmony)
    }
}

/// Three-way choice between л-, д- and т-initial affixes.
///
/// Vowels and р у й take the л-form, ж з л м н ң the д-form, the rest the т-form.
pub fn choose_ldt(
    c: char,
    harmony: Harmony,
    l: AffixPair,
    d: AffixPair,
    t: AffixPair,
) -> &'static str {
    if is_vowel(c) || in_group(c, LetterGroup::Glide) {
        pick(l, harmony)
    } else if in_group(c, LetterGroup::VoicedNonGlide) {
        pick(d, harmony)
    } else {
        pick(t, harmony)
    }
}

/// Negation particle (and general question particle) after `c`.
#[inline]
pub fn question_particle(c: char, harmony: Harmony) -> &'static str {
    choose_mbp(c, harmony, MAME, BABE, PAPE)
}

/// Bare м/б/п negation consonant of the colloquial continuous.
pub fn colloquial_negation(c: char) -> &'static str {
    if is_vowel(c) || in_group(c, LetterGroup::Sonorant) {
        "м"
    } else if in_group(c, LetterGroup::Voiced) {
        "б"
    } else {
        "п"
    }
}

/// Intention future affix (-мақ/-бақ/-пақ) after `c`.
#[inline]
pub fn intention_future_affix(c: char, harmony: Harmony) -> &'static str {
    choose_mbp(c, harmony, MAKMEK, BAKBEK, PAKPEK)
}

// ============================================================================
// Voicing-driven selectors
// ============================================================================

/// Whether a г/ғ-initial affix can follow `c`.
#[inline]
pub fn gangen_compatible(c: char) -> bool {
    is_vowel(c) || in_group(c, LetterGroup::SonorantOrVoiced)
}

/// Past participle affix (-ған/-қан) after `c`.
pub fn gangen_kanken(c: char, harmony: Harmony) -> &'static str {
    if gangen_compatible(c) {
        pick(GANGEN, harmony)
    } else {
        pick(KANKEN, harmony)
    }
}

#[inline]
fn kyki_compatible(c: char) -> bool {
    in_any_group(c, &[LetterGroup::Unvoiced, LetterGroup::VoicedStop])
}

/// Optative affix (-ғы/-қы) after `c`.
pub fn gygi_kyki(c: char, harmony: Harmony) -> &'static str {
    if kyki_compatible(c) {
        pick(KYKI, harmony)
    } else {
        pick(GYGI, harmony)
    }
}

/// Simple past affix (-ды/-ты) after `c`.
pub fn dydi_tyti(c: char, harmony: Harmony) -> &'static str {
    if kyki_compatible(c) {
        pick(TYTI, harmony)
    } else {
        pick(DYDI, harmony)
    }
}

/// Perfect participle affix (-п/-ып) after `c`.
pub fn ypip(c: char, harmony: Harmony) -> &'static str {
    if is_genuine_vowel(c) {
        "п"
    } else {
        pick(YPIP, harmony)
    }
}

// ============================================================================
// Imperative
// ============================================================================

fn imperative_vowel(
    person: GrammarPerson,
    number: GrammarNumber,
    c: char,
    harmony: Harmony,
) -> &'static str {
    match person {
        GrammarPerson::First if !is_genuine_vowel(c) => pick(AE, harmony),
        GrammarPerson::Second if number == GrammarNumber::Plural && !is_genuine_vowel(c) => {
            pick(YI, harmony)
        }
        GrammarPerson::SecondPolite if !is_genuine_vowel(c) => pick(YI, harmony),
        _ => "",
    }
}

/// Imperative ending including its linking vowel.
pub fn imperative_affix(
    person: GrammarPerson,
    number: GrammarNumber,
    c: char,
    harmony: Harmony,
) -> String {
    let vowel = imperative_vowel(person, number, c, harmony);
    let affix = lookup(&IMPERATIVE_AFFIXES, person, number, harmony);
    format!("{}{}", vowel, affix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_particle() {
        assert_eq!(question_particle('а', Harmony::Hard), "ма");
        assert_eq!(question_particle('р', Harmony::Soft), "ме");
        assert_eq!(question_particle('з', Harmony::Hard), "ба");
        assert_eq!(question_particle('т', Harmony::Soft), "пе");
        assert_eq!(question_particle('б', Harmony::Hard), "па");
    }

    #[test]
    fn test_ldt() {
        assert_eq!(choose_ldt('а', Harmony::Hard, LARLER, DARDER, TARTER), "лар");
        assert_eq!(choose_ldt('з', Harmony::Hard, LARLER, DARDER, TARTER), "дар");
        assert_eq!(choose_ldt('л', Harmony::Soft, LARLER, DARDER, TARTER), "дер");
        assert_eq!(choose_ldt('қ', Harmony::Hard, LARLER, DARDER, TARTER), "тар");
    }

    #[test]
    fn test_voicing_selectors() {
        assert_eq!(gangen_kanken('р', Harmony::Hard), "ған");
        assert_eq!(gangen_kanken('т', Harmony::Soft), "кен");
        assert_eq!(gygi_kyki('р', Harmony::Soft), "гі");
        assert_eq!(gygi_kyki('п', Harmony::Hard), "қы");
        assert_eq!(dydi_tyti('з', Harmony::Hard), "ды");
        assert_eq!(dydi_tyti('ш', Harmony::Soft), "ті");
        assert_eq!(ypip('а', Harmony::Hard), "п");
        assert_eq!(ypip('у', Harmony::Hard), "ып");
    }

    #[test]
    fn test_imperative() {
        use GrammarNumber::*;
        use GrammarPerson::*;
        assert_eq!(imperative_affix(First, Singular, 'з', Harmony::Hard), "айын");
        assert_eq!(imperative_affix(First, Singular, 'а', Harmony::Hard), "йын");
        assert_eq!(imperative_affix(Second, Singular, 'з', Harmony::Hard), "");
        assert_eq!(imperative_affix(Second, Plural, 'з', Harmony::Hard), "ыңдар");
        assert_eq!(imperative_affix(SecondPolite, Singular, 'л', Harmony::Soft), "іңіз");
        assert_eq!(imperative_affix(Third, Plural, 'з', Harmony::Hard), "сын");
    }

    #[test]
    fn test_colloquial_negation() {
        assert_eq!(colloquial_negation('р'), "м");
        assert_eq!(colloquial_negation('з'), "б");
        assert_eq!(colloquial_negation('қ'), "п");
    }
}
