//! Membership tests and small string helpers.
//!
//! All predicates are pure lookups against the fixed inventories in
//! [`types`](super::types). String helpers operate on `char` boundaries,
//! never bytes, since every letter of the alphabet is multi-byte in UTF-8.

use super::types::{LetterGroup, GENUINE_VOWELS, VOWELS};

// ============================================================================
// Character predicates
// ============================================================================

/// Check if a character is any vowel letter.
#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Check if a character is a vowel other than "у" and "и".
#[inline]
pub fn is_genuine_vowel(c: char) -> bool {
    GENUINE_VOWELS.contains(c)
}

/// Check if a character belongs to a letter group.
#[inline]
pub fn in_group(c: char, group: LetterGroup) -> bool {
    group.letters().contains(c)
}

/// Check if a character belongs to any of the listed groups.
#[inline]
pub fn in_any_group(c: char, groups: &[LetterGroup]) -> bool {
    groups.iter().any(|&g| in_group(c, g))
}

// ============================================================================
// String helpers
// ============================================================================

/// Last character of a string.
#[inline]
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Last character of a string, or NUL for an empty one.
///
/// NUL belongs to no letter group, so selectors fall through to their
/// consonant default.
#[inline]
pub fn last_letter(s: &str) -> char {
    last_char(s).unwrap_or('\0')
}

/// Lowercase form of a single character.
///
/// Every letter of the alphabet lowercases to exactly one character.
#[inline]
pub fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// String without its last `n` characters.
pub fn drop_last(s: &str, n: usize) -> &str {
    let mut end = s.len();
    for (taken, (idx, _)) in s.char_indices().rev().enumerate() {
        if taken == n {
            break;
        }
        end = idx;
    }
    &s[..end]
}

/// String with its last character replaced.
pub fn replace_last(s: &str, replacement: char) -> String {
    let mut out = String::with_capacity(s.len() + replacement.len_utf8());
    out.push_str(drop_last(s, 1));
    out.push(replacement);
    out
}

/// Text after the last space or hyphen.
pub fn last_word(s: &str) -> &str {
    match s.rfind([' ', '-']) {
        Some(idx) => &s[idx + 1..],
        None => s,
    }
}
