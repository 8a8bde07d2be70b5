//! Property-based tests for the harmony classifier and string helpers.

use super::harmony::{vowel_class, word_is_soft};
use super::matching::{drop_last, last_word, replace_last};
use super::types::VowelClass;
use proptest::prelude::*;

// ========================================================================
// Proptest Generators
// ========================================================================

const ALPHABET: &[char] = &[
    'а', 'ә', 'б', 'в', 'г', 'ғ', 'д', 'е', 'ж', 'з', 'и', 'й', 'к', 'қ', 'л', 'м', 'н', 'ң',
    'о', 'ө', 'п', 'р', 'с', 'т', 'у', 'ұ', 'ү', 'ф', 'х', 'һ', 'ц', 'ч', 'ш', 'щ', 'ы', 'і',
    'э', 'ю', 'я',
];

/// Generate lowercase words over the Kazakh alphabet
fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 1..12)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generate consonant-only suffixes
fn arb_consonants() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(ALPHABET).prop_filter("consonant", |c| vowel_class(*c).is_none()),
        0..4,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    // ====================================================================
    // Harmony scan
    // ====================================================================

    /// Appending consonants never changes harmony
    #[test]
    fn prop_consonant_suffix_keeps_harmony(word in arb_word(), tail in arb_consonants()) {
        let extended = format!("{}{}", word, tail);
        // exceptions are whole-word lookups and may not survive extension
        prop_assume!(super::exceptions::harmony_exception(&word).is_none());
        prop_assume!(super::exceptions::harmony_exception(&extended).is_none());
        prop_assert_eq!(word_is_soft(&word), word_is_soft(&extended));
    }

    /// A trailing strong vowel decides harmony on its own
    #[test]
    fn prop_last_strong_vowel_decides(word in arb_word(), soft in any::<bool>()) {
        let vowel = if soft { 'е' } else { 'а' };
        let extended = format!("{}{}", word, vowel);
        prop_assume!(super::exceptions::harmony_exception(&extended).is_none());
        prop_assert_eq!(word_is_soft(&extended), soft);
    }

    /// Lowercasing the input is transparent
    #[test]
    fn prop_case_insensitive(word in arb_word()) {
        prop_assert_eq!(word_is_soft(&word), word_is_soft(&word.to_uppercase()));
    }

    /// Only listed vowels are classified
    #[test]
    fn prop_vowel_class_total_on_vowels(c in prop::sample::select(ALPHABET)) {
        let classified = vowel_class(c).is_some();
        prop_assert_eq!(classified, "аәеиоөуүұыіюя".contains(c));
        if let Some(class) = vowel_class(c) {
            prop_assert_eq!(class == VowelClass::Neutral, c == 'у' || c == 'ю');
        }
    }

    // ====================================================================
    // String helpers
    // ====================================================================

    /// replace_last keeps the char count and sets the final char
    #[test]
    fn prop_replace_last(word in arb_word(), c in prop::sample::select(ALPHABET)) {
        let replaced = replace_last(&word, c);
        prop_assert_eq!(replaced.chars().count(), word.chars().count());
        prop_assert_eq!(replaced.chars().last(), Some(c));
        prop_assert_eq!(drop_last(&replaced, 1), drop_last(&word, 1));
    }

    /// last_word never contains a separator
    #[test]
    fn prop_last_word_has_no_separator(a in arb_word(), b in arb_word(), hyphen in any::<bool>()) {
        let sep = if hyphen { '-' } else { ' ' };
        let joined = format!("{}{}{}", a, sep, b);
        prop_assert_eq!(last_word(&joined), b.as_str());
    }
}
