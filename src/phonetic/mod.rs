//! Phonetic classification for Kazakh Cyrillic orthography.
//!
//! Every affix choice in the crate reduces to two questions about a word:
//!
//! 1. **Harmony**: does it take the hard or the soft variant of an affix?
//!    Answered by [`word_harmony`] / [`word_is_soft`].
//! 2. **Letter class**: which group does the character an affix attaches to
//!    belong to? Answered by [`in_group`] with a [`LetterGroup`].
//!
//! # Usage
//!
//! ```
//! use kazakh_morph::phonetic::{in_group, word_harmony, Harmony, LetterGroup};
//!
//! assert_eq!(word_harmony("кітап"), Harmony::Hard);
//! assert!(in_group('з', LetterGroup::Sibilant));
//! ```
//!
//! # Modules
//!
//! - [`types`] - character inventories, [`Harmony`], [`LetterGroup`]
//! - [`matching`] - membership predicates and char-safe string helpers
//! - [`harmony`] - the harmony scan
//! - [`exceptions`] - words whose harmony contradicts their vowels

pub mod exceptions;
pub mod harmony;
pub mod matching;
pub mod types;

#[cfg(test)]
mod properties;

pub use harmony::{
    is_harmony_vowel, is_hard_vowel, is_soft_vowel, vowel_class, word_harmony, word_is_soft,
};
pub use matching::{
    drop_last, in_any_group, in_group, is_genuine_vowel, is_vowel, last_char, last_letter,
    last_word, lower_char, replace_last,
};
pub use types::{Harmony, LetterGroup, VowelClass, HARD_OFFSET, SOFT_OFFSET};
