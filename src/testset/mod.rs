//! Regression datasets for conjugation and declension.
//!
//! A verb dataset lists, for every verb, the expected part sequence of each
//! person/number form in fifteen tenses and three sentence types. A noun
//! dataset lists surface forms with their case and possessive coordinates.
//! Runners evaluate a dataset against the builders and return
//! [`TestsetStats`] instead of stopping at the first difference.
//!
//! # Example
//!
//! ```no_run
//! use kazakh_morph::testset::{load_jsonl, VerbTestsetRow, VerbTestsetRunner};
//!
//! let rows: Vec<VerbTestsetRow> = load_jsonl("verb_testset.jsonl")?;
//! let stats = VerbTestsetRunner::new()?.run(&rows)?;
//! println!("{}", stats);
//! # Ok::<(), kazakh_morph::MorphError>(())
//! ```

mod row;
mod runner;

pub use row::{
    load_jsonl, parse_jsonl, split_parts, NounForm, NounFormsRow, PlusFormSet, VerbTestsetRow,
    PART_SEPARATOR,
};
pub use runner::{Mismatch, NounTestsetRunner, TestsetStats, VerbTestsetRunner};

use std::fmt;

use crate::error::{MorphError, Result};

/// Position of a tense in a verb dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TenseIndex {
    /// Present transitive
    PresentTransitive,
    /// Present continuous with жату
    PresentContinuousJatu,
    /// Present continuous with жүру
    PresentContinuousJuru,
    /// Present continuous with отыру
    PresentContinuousOtyru,
    /// Present continuous with тұру
    PresentContinuousTuru,
    /// Present continuous with жату, negating the auxiliary
    PresentContinuousJatuNegateAux,
    /// Present continuous with жүру, negating the auxiliary
    PresentContinuousJuruNegateAux,
    /// Present continuous with отыру, negating the auxiliary
    PresentContinuousOtyruNegateAux,
    /// Present continuous with тұру, negating the auxiliary
    PresentContinuousTuruNegateAux,
    /// Simple past
    PastSimple,
    /// Remote past
    RemotePast,
    /// Remote past, negating the auxiliary
    RemotePastNegateAux,
    /// Conditional mood
    ConditionalMood,
    /// Imperative mood
    ImperativeMood,
    /// Optative mood
    OptativeMood,
}

impl TenseIndex {
    /// All tenses in row order.
    pub const ALL: [TenseIndex; 15] = [
        TenseIndex::PresentTransitive,
        TenseIndex::PresentContinuousJatu,
        TenseIndex::PresentContinuousJuru,
        TenseIndex::PresentContinuousOtyru,
        TenseIndex::PresentContinuousTuru,
        TenseIndex::PresentContinuousJatuNegateAux,
        TenseIndex::PresentContinuousJuruNegateAux,
        TenseIndex::PresentContinuousOtyruNegateAux,
        TenseIndex::PresentContinuousTuruNegateAux,
        TenseIndex::PastSimple,
        TenseIndex::RemotePast,
        TenseIndex::RemotePastNegateAux,
        TenseIndex::ConditionalMood,
        TenseIndex::ImperativeMood,
        TenseIndex::OptativeMood,
    ];

    /// Tense at a row position.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::UnsupportedTenseIndex`] past the last tense.
    pub fn of_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(MorphError::UnsupportedTenseIndex(index))
    }

    /// Row position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether negation goes on the auxiliary verb.
    pub fn is_negate_aux(self) -> bool {
        matches!(
            self,
            TenseIndex::PresentContinuousJatuNegateAux
                | TenseIndex::PresentContinuousJuruNegateAux
                | TenseIndex::PresentContinuousOtyruNegateAux
                | TenseIndex::PresentContinuousTuruNegateAux
                | TenseIndex::RemotePastNegateAux
        )
    }

    /// Whether the tense is a present continuous.
    pub fn is_present_continuous(self) -> bool {
        self.aux_dict_form().is_some()
    }

    /// Auxiliary verb of a present continuous tense.
    pub fn aux_dict_form(self) -> Option<&'static str> {
        match self {
            TenseIndex::PresentContinuousJatu | TenseIndex::PresentContinuousJatuNegateAux => {
                Some("жату")
            }
            TenseIndex::PresentContinuousJuru | TenseIndex::PresentContinuousJuruNegateAux => {
                Some("жүру")
            }
            TenseIndex::PresentContinuousOtyru | TenseIndex::PresentContinuousOtyruNegateAux => {
                Some("отыру")
            }
            TenseIndex::PresentContinuousTuru | TenseIndex::PresentContinuousTuruNegateAux => {
                Some("тұру")
            }
            _ => None,
        }
    }
}

impl fmt::Display for TenseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
