//! Person/number affix tables.
//!
//! Tables are fixed-size arrays indexed by `[person][number]` in enum order,
//! so every combination is present by construction.

use super::affixes::{pick, AffixPair};
use crate::grammar::{GrammarNumber, GrammarPerson};
use crate::phonetic::{in_any_group, in_group, Harmony, LetterGroup};

/// Affix pairs for every person and number.
pub type PersonalTable = [[AffixPair; 2]; 4];

/// Lookup in a person/number table.
#[inline]
pub fn lookup(
    table: &PersonalTable,
    person: GrammarPerson,
    number: GrammarNumber,
    harmony: Harmony,
) -> &'static str {
    pick(table[person.index()][number.index()], harmony)
}

/// Personal endings of the present transitive tense.
pub const VERB_PERS_AFFIXES1: PersonalTable = [
    [["мын", "мін"], ["мыз", "міз"]],
    [["сың", "сің"], ["сыңдар", "сіңдер"]],
    [["сыз", "сіз"], ["сыздар", "сіздер"]],
    [["ды", "ді"], ["ды", "ді"]],
];

/// Personal endings of the simple past and the conditional mood.
pub const VERB_PERS_AFFIXES2: PersonalTable = [
    [["м", "м"], ["қ", "к"]],
    [["ң", "ң"], ["ңдар", "ңдер"]],
    [["ңыз", "ңіз"], ["ңыздар", "ңіздер"]],
    [["", ""], ["", ""]],
];

/// Possessive endings of the optative mood.
pub const VERB_WANT_PERS_AFFIXES: PersonalTable = [
    [["м", "м"], ["мыз", "міз"]],
    [["ң", "ң"], ["ларың", "лерің"]],
    [["ңыз", "ңіз"], ["ларыңыз", "леріңіз"]],
    [["сы", "сі"], ["лары", "лері"]],
];

/// Endings of the imperative mood, without the linking vowel.
pub const IMPERATIVE_AFFIXES: PersonalTable = [
    [["йын", "йін"], ["йық", "йік"]],
    [["", ""], ["ңдар", "ңдер"]],
    [["ңыз", "ңіз"], ["ңыздар", "ңіздер"]],
    [["сын", "сін"], ["сын", "сін"]],
];

/// Noun possessive endings, without the linking vowel.
pub const NOUN_POSSESSIVE_AFFIXES: PersonalTable = [
    [["м", "м"], ["мыз", "міз"]],
    [["ң", "ң"], ["ң", "ң"]],
    [["ңыз", "ңіз"], ["ңыз", "ңіз"]],
    [["ы", "і"], ["ы", "і"]],
];

const SECOND_PERS_AFFIXES1: [AffixPair; 2] = [["сың", "сің"], ["сыңдар", "сіңдер"]];
const SECOND_POLITE_PERS_AFFIXES1: [AffixPair; 2] = [["сыз", "сіз"], ["сыздар", "сіздер"]];
const THIRD_PERS_AFFIXES3: [AffixPair; 2] = [["ты", "ті"], ["ты", "ті"]];

/// Class of the sound preceding a first person ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirstPersonGroup {
    /// Vowels and sonorants: -мын/-мыз
    Default,
    /// ж з: -бын/-быз
    Sibilant,
    /// м н ң: -мын/-быз
    Nasal,
    /// Stops and unvoiced consonants: -пын/-пыз
    Unvoiced,
}

impl FirstPersonGroup {
    /// Group of the preceding character.
    pub fn of_char(c: char) -> Self {
        if in_group(c, LetterGroup::Sibilant) {
            FirstPersonGroup::Sibilant
        } else if in_any_group(c, &[LetterGroup::Unvoiced, LetterGroup::VoicedStop]) {
            FirstPersonGroup::Unvoiced
        } else if in_group(c, LetterGroup::Nasal) {
            FirstPersonGroup::Nasal
        } else {
            FirstPersonGroup::Default
        }
    }

    fn affixes(self, number: GrammarNumber) -> AffixPair {
        match (self, number) {
            (FirstPersonGroup::Default, GrammarNumber::Singular) => ["мын", "мін"],
            (FirstPersonGroup::Default, GrammarNumber::Plural) => ["мыз", "міз"],
            (FirstPersonGroup::Sibilant, GrammarNumber::Singular) => ["бын", "бін"],
            (FirstPersonGroup::Sibilant, GrammarNumber::Plural) => ["быз", "біз"],
            (FirstPersonGroup::Nasal, GrammarNumber::Singular) => ["мын", "мін"],
            (FirstPersonGroup::Nasal, GrammarNumber::Plural) => ["быз", "біз"],
            (FirstPersonGroup::Unvoiced, GrammarNumber::Singular) => ["пын", "пін"],
            (FirstPersonGroup::Unvoiced, GrammarNumber::Plural) => ["пыз", "піз"],
        }
    }
}

/// Predicative personal ending keyed on the preceding character.
///
/// Used after participles ("барғанмын", "жоқпын"); the third person is empty.
pub fn pers_affix1(
    person: GrammarPerson,
    number: GrammarNumber,
    prev: char,
    harmony: Harmony,
) -> &'static str {
    match person {
        GrammarPerson::First => pick(FirstPersonGroup::of_char(prev).affixes(number), harmony),
        GrammarPerson::Second => pick(SECOND_PERS_AFFIXES1[number.index()], harmony),
        GrammarPerson::SecondPolite => pick(SECOND_POLITE_PERS_AFFIXES1[number.index()], harmony),
        GrammarPerson::Third => "",
    }
}

/// Personal ending after the "-ып" converb of the evidential past.
pub fn pers_affix3(person: GrammarPerson, number: GrammarNumber, harmony: Harmony) -> &'static str {
    match person {
        GrammarPerson::First => pick(FirstPersonGroup::Unvoiced.affixes(number), harmony),
        GrammarPerson::Second => pick(SECOND_PERS_AFFIXES1[number.index()], harmony),
        GrammarPerson::SecondPolite => pick(SECOND_POLITE_PERS_AFFIXES1[number.index()], harmony),
        GrammarPerson::Third => pick(THIRD_PERS_AFFIXES3[number.index()], harmony),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GrammarNumber::*;
    use GrammarPerson::*;

    #[test]
    fn test_first_person_groups() {
        assert_eq!(pers_affix1(First, Singular, 'қ', Harmony::Hard), "пын");
        assert_eq!(pers_affix1(First, Plural, 'н', Harmony::Hard), "быз");
        assert_eq!(pers_affix1(First, Singular, 'н', Harmony::Soft), "мін");
        assert_eq!(pers_affix1(First, Singular, 'з', Harmony::Hard), "бын");
        assert_eq!(pers_affix1(First, Plural, 'р', Harmony::Soft), "міз");
    }

    #[test]
    fn test_third_person_is_empty_in_predicative() {
        for number in GrammarNumber::ALL {
            assert_eq!(pers_affix1(Third, number, 'н', Harmony::Soft), "");
        }
    }

    #[test]
    fn test_pers_affix3() {
        assert_eq!(pers_affix3(First, Singular, Harmony::Hard), "пын");
        assert_eq!(pers_affix3(Third, Plural, Harmony::Soft), "ті");
    }

    #[test]
    fn test_tables_complete() {
        for table in [
            &VERB_PERS_AFFIXES1,
            &VERB_PERS_AFFIXES2,
            &VERB_WANT_PERS_AFFIXES,
            &IMPERATIVE_AFFIXES,
            &NOUN_POSSESSIVE_AFFIXES,
        ] {
            for person in GrammarPerson::ALL {
                for number in GrammarNumber::ALL {
                    // every cell is reachable and harmony only changes vowels
                    let hard = lookup(table, person, number, Harmony::Hard);
                    let soft = lookup(table, person, number, Harmony::Soft);
                    assert_eq!(hard.chars().count(), soft.chars().count());
                }
            }
        }
    }
}
