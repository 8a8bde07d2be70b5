//! # kazakh-morph
//!
//! Rule-based morphological synthesis for Kazakh.
//!
//! Given a dictionary form and grammatical coordinates, the builders produce
//! the inflected surface form as a [`Phrasal`]: an ordered sequence of tagged
//! morphemes (base, tense affix, personal affix, negation, question particle,
//! auxiliary verb, ...) whose concatenation is the final text.
//!
//! - [`VerbBuilder`](verb::VerbBuilder): tenses, moods, participles and
//!   auxiliary-verb constructions
//! - [`NounBuilder`](noun::NounBuilder): plural, possessive and case forms
//! - [`AdjBuilder`](adj::AdjBuilder): comparative degrees
//! - [`pronoun`]: personal pronoun declension
//!
//! Vowel harmony, consonant assimilation and the irregular stems are handled
//! by the [`phonetic`] classifier and the [`rules`] tables.
//!
//! ## Example
//!
//! ```rust
//! use kazakh_morph::prelude::*;
//!
//! let builder = VerbBuilder::new("алу")?;
//! let phrasal = builder.present_transitive_form(
//!     GrammarPerson::First,
//!     GrammarNumber::Singular,
//!     SentenceType::Statement,
//! );
//! assert_eq!(phrasal.raw(), "аламын");
//!
//! let noun = NounBuilder::of_noun("кітап");
//! assert_eq!(noun.septik_form(Septik::Barys).raw(), "кітапқа");
//! # Ok::<(), MorphError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adj;
pub mod error;
pub mod grammar;
pub mod noun;
pub mod phonetic;
pub mod phrasal;
pub mod pronoun;
pub mod rules;
pub mod testset;
pub mod verb;

/// Command-line interface and persistent configuration
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{MorphError, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::adj::AdjBuilder;
    pub use crate::error::{MorphError, Result};
    pub use crate::grammar::{
        GrammarForm, GrammarNumber, GrammarPerson, SentenceType, Septik, VerbShak, VerbTense,
    };
    pub use crate::noun::NounBuilder;
    pub use crate::phonetic::Harmony;
    pub use crate::phrasal::{Phrasal, PhrasalBuilder, PhrasalPart, PhrasalPartType};
    pub use crate::pronoun::{oz_form, pronoun_form};
    pub use crate::verb::VerbBuilder;
}
