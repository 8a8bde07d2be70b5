//! Adjective comparison.
//!
//! Two comparative degrees are supported: the "-рақ" form ("тазарақ",
//! "үлкенірек") and the moderating "-лау" form ("жақсылау", "үлкендеу").

use crate::phonetic::{is_genuine_vowel, last_letter, lower_char, replace_last, word_harmony, Harmony};
use crate::phrasal::{Phrasal, PhrasalBuilder};
use crate::rules::affixes::{pick, DAUDEU, LAULEU, RAKREK, TAUTEU, YRAKIREK};
use crate::rules::choose_ldt;
use crate::rules::lexicon::base_replacement_pkkh;

/// Comparative forms of a dictionary-form adjective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjBuilder {
    dict_form: String,
    harmony: Harmony,
    last: char,
}

impl AdjBuilder {
    /// Builder for `dict_form`.
    pub fn new(dict_form: impl Into<String>) -> Self {
        let dict_form = dict_form.into();
        let lowered = dict_form.to_lowercase();
        AdjBuilder {
            harmony: word_harmony(&lowered),
            last: lower_char(last_letter(&dict_form)),
            dict_form,
        }
    }

    /// The adjective as given.
    pub fn dict_form(&self) -> &str {
        &self.dict_form
    }

    /// Harmony of the adjective.
    pub fn harmony(&self) -> Harmony {
        self.harmony
    }

    fn rak_base(&self) -> String {
        match base_replacement_pkkh(self.last) {
            Some(replacement) => replace_last(&self.dict_form, replacement),
            None => self.dict_form.clone(),
        }
    }

    /// "-рақ/-рек" after a vowel, "-ырақ/-ірек" otherwise: "тазарақ", "көбірек".
    pub fn rak_form(&self) -> Phrasal {
        let affix = if is_genuine_vowel(self.last) {
            pick(RAKREK, self.harmony)
        } else {
            pick(YRAKIREK, self.harmony)
        };
        PhrasalBuilder::new()
            .adj_base(self.rak_base())
            .adj_comp_affix(affix)
            .build()
    }

    /// "-лау/-дау/-тау": "жақсылау", "үлкендеу", "көптеу".
    pub fn lau_form(&self) -> Phrasal {
        let affix = choose_ldt(self.last, self.harmony, LAULEU, DAUDEU, TAUTEU);
        PhrasalBuilder::new()
            .adj_base(self.dict_form.as_str())
            .adj_comp_affix(affix)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rak_form() {
        let cases = [
            ("таза", "тазарақ"),
            ("жаман", "жаманырақ"),
            ("жуан", "жуанырақ"),
            ("төмен", "төменірек"),
            ("биік", "биігірек"),
            ("ақ", "ағырақ"),
            ("көп", "көбірек"),
            ("толық", "толығырақ"),
        ];
        for (adj, expected) in cases {
            assert_eq!(AdjBuilder::new(adj).rak_form().raw(), expected, "{}", adj);
        }
    }

    #[test]
    fn test_rak_parts() {
        let phrasal = AdjBuilder::new("биік").rak_form();
        assert_eq!(phrasal.part_texts(), vec!["биіг", "ірек"]);
    }

    #[test]
    fn test_lau_form() {
        assert_eq!(AdjBuilder::new("жақсы").lau_form().raw(), "жақсылау");
        assert_eq!(AdjBuilder::new("үлкен").lau_form().raw(), "үлкендеу");
        assert_eq!(AdjBuilder::new("көп").lau_form().raw(), "көптеу");
        assert_eq!(AdjBuilder::new("жаман").lau_form().raw(), "жамандау");
    }
}
