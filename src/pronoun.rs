//! Personal pronoun declension.
//!
//! Personal pronouns are irregular enough ("маған", "оның", "онымен") that
//! their case forms come from a fixed table instead of the noun rules. Each
//! entry is split into base, plural affix and case affix so that the result
//! carries the same part structure as a declined noun.
//!
//! The reflexive "өз" is regular and goes through
//! [`NounBuilder`](crate::noun::NounBuilder): "өзім", "өздеріңіз", "өзіне".

use crate::grammar::{GrammarForm, GrammarNumber, GrammarPerson, Septik};
use crate::noun::NounBuilder;
use crate::phrasal::{Phrasal, PhrasalBuilder};

/// Base, plural affix and case affix of one table entry.
type PronounParts = [&'static str; 3];

/// Indexed by person, number, case.
const PRONOUN_PARTS: [[[PronounParts; 7]; 2]; 4] = [
    [
        [
            ["мен", "", ""],
            ["мен", "", "ің"],
            ["маған", "", ""],
            ["мен", "", "і"],
            ["мен", "", "де"],
            ["мен", "", "ен"],
            ["мен", "", "імен"],
        ],
        [
            ["біз", "", ""],
            ["біз", "", "дің"],
            ["біз", "", "ге"],
            ["біз", "", "ді"],
            ["біз", "", "де"],
            ["біз", "", "ден"],
            ["біз", "", "бен"],
        ],
    ],
    [
        [
            ["сен", "", ""],
            ["сен", "", "ің"],
            ["саған", "", ""],
            ["сен", "", "і"],
            ["сен", "", "де"],
            ["сен", "", "ен"],
            ["сен", "", "імен"],
        ],
        [
            ["сен", "дер", ""],
            ["сен", "дер", "дің"],
            ["сен", "дер", "ге"],
            ["сен", "дер", "ді"],
            ["сен", "дер", "де"],
            ["сен", "дер", "ден"],
            ["сен", "дер", "мен"],
        ],
    ],
    [
        [
            ["Сіз", "", ""],
            ["Сіз", "", "дің"],
            ["Сіз", "", "ге"],
            ["Сіз", "", "ді"],
            ["Сіз", "", "де"],
            ["Сіз", "", "ден"],
            ["Сіз", "", "бен"],
        ],
        [
            ["Сіз", "дер", ""],
            ["Сіз", "дер", "дің"],
            ["Сіз", "дер", "ге"],
            ["Сіз", "дер", "ді"],
            ["Сіз", "дер", "де"],
            ["Сіз", "дер", "ден"],
            ["Сіз", "дер", "мен"],
        ],
    ],
    [
        [
            ["ол", "", ""],
            ["о", "", "ның"],
            ["оған", "", ""],
            ["он", "", "ы"],
            ["он", "", "да"],
            ["о", "", "дан"],
            ["оны", "", "мен"],
        ],
        [
            ["олар", "", ""],
            ["олар", "", "дың"],
            ["олар", "", "ға"],
            ["олар", "", "ды"],
            ["олар", "", "да"],
            ["олар", "", "дан"],
            ["олар", "", "мен"],
        ],
    ],
];

const OZ: &str = "өз";

fn parts_of(person: GrammarPerson, number: GrammarNumber, septik: Septik) -> PronounParts {
    PRONOUN_PARTS[person.index()][number.index()][septik.index()]
}

/// Case form of a personal pronoun: "менің", "оған", "Сіздермен".
pub fn pronoun_form(form: GrammarForm, septik: Septik) -> Phrasal {
    let [base, plural, affix] = parts_of(form.person(), form.number(), septik);
    PhrasalBuilder::new()
        .pronoun_base(base)
        .plural_affix(plural)
        .septik_affix(affix)
        .build()
}

/// Reflexive "өз" with the possessive of `form`: "өзім", "өздеріңіз".
pub fn oz_form(form: GrammarForm) -> Phrasal {
    oz_septik_form(form, Septik::Atau)
}

/// Reflexive "өз" with possessive and case: "өзіме", "өзінің".
pub fn oz_septik_form(form: GrammarForm, septik: Septik) -> Phrasal {
    NounBuilder::of_noun(OZ).possessive_septik_form(form.person(), form.number(), septik)
}
