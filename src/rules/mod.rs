//! Affix tables and selection rules.
//!
//! # Modules
//!
//! - [`affixes`] - two-variant affix constants and [`pick`]
//! - [`personal`] - person/number tables and first-person letter groups
//! - [`selection`] - selectors keyed on the preceding character
//! - [`lexicon`] - lexical exception lists

pub mod affixes;
pub mod lexicon;
pub mod personal;
pub mod selection;

pub use affixes::{pick, AffixPair};
pub use lexicon::DropVowelType;
pub use personal::{lookup, pers_affix1, pers_affix3, FirstPersonGroup, PersonalTable};
pub use selection::{
    choose_ldt, choose_mbp, colloquial_negation, dydi_tyti, gangen_compatible, gangen_kanken,
    gygi_kyki, imperative_affix, intention_future_affix, question_particle, ypip,
};
