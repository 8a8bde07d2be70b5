//! Vowel-harmony classifier.
//!
//! A word's harmony is decided by its last harmony-relevant vowel: the scan
//! runs from the end, skips consonants and the neutral vowels "у"/"ю", and
//! stops at the first soft or hard vowel. Words without any deciding vowel are
//! hard. The exception lexicon is consulted before scanning.
//!
//! # Examples
//!
//! ```
//! use kazakh_morph::phonetic::{word_harmony, Harmony};
//!
//! assert_eq!(word_harmony("келу"), Harmony::Soft);
//! assert_eq!(word_harmony("алу"), Harmony::Hard);
//! // "ю" and "у" are skipped, "ә" decides
//! assert_eq!(word_harmony("дәус"), Harmony::Soft);
//! ```

use super::exceptions::harmony_exception;
use super::types::{Harmony, VowelClass};

/// Harmony class of a vowel letter, `None` for anything else.
#[inline]
pub fn vowel_class(c: char) -> Option<VowelClass> {
    match c {
        'ә' | 'е' | 'ө' | 'ү' | 'і' => Some(VowelClass::SoftStrong),
        'и' => Some(VowelClass::SoftWeak),
        'ю' | 'у' => Some(VowelClass::Neutral),
        'а' | 'о' | 'ұ' | 'ы' | 'я' => Some(VowelClass::HardStrong),
        _ => None,
    }
}

/// Check if a vowel makes a word soft.
#[inline]
pub fn is_soft_vowel(c: char) -> bool {
    matches!(
        vowel_class(c),
        Some(VowelClass::SoftStrong) | Some(VowelClass::SoftWeak)
    )
}

/// Check if a vowel makes a word hard.
#[inline]
pub fn is_hard_vowel(c: char) -> bool {
    vowel_class(c) == Some(VowelClass::HardStrong)
}

/// Check if a character takes part in the harmony scan at all.
#[inline]
pub fn is_harmony_vowel(c: char) -> bool {
    vowel_class(c).is_some()
}

/// Whether a word takes soft affixes.
///
/// The input is lowercased before lookup, so capitalized nouns classify the
/// same way as their lowercase spelling.
pub fn word_is_soft(word: &str) -> bool {
    let lowered = word.to_lowercase();
    if let Some(soft) = harmony_exception(&lowered) {
        return soft;
    }
    for c in lowered.chars().rev() {
        match vowel_class(c) {
            Some(VowelClass::SoftStrong) | Some(VowelClass::SoftWeak) => return true,
            Some(VowelClass::HardStrong) => return false,
            Some(VowelClass::Neutral) | None => continue,
        }
    }
    false
}

/// Harmony of a word as a [`Harmony`] value.
#[inline]
pub fn word_harmony(word: &str) -> Harmony {
    Harmony::of_soft(word_is_soft(word))
}
