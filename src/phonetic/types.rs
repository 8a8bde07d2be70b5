//! Type definitions for the phonetic classifier.
//!
//! Two families of types live here:
//! - [`Harmony`] and [`VowelClass`] describe the vowel-harmony axis
//! - [`LetterGroup`] names the fixed consonant (and vowel) groups that every
//!   affix-selection rule is keyed on
//!
//! The groups overlap on purpose: "ж" and "з" belong both to the voiced group
//! [`LetterGroup::Voiced`] and to the sibilant group [`LetterGroup::Sibilant`].
//! Rules always name the group they test, never a derived partition.

// ============================================================================
// Character inventories
// ============================================================================

/// Every vowel letter of the alphabet.
pub const VOWELS: &str = "аәеиоөуүұыіэюя";

/// Vowels that are always syllabic.
///
/// "у" and "и" are excluded: after them affixes behave as after a consonant.
pub const GENUINE_VOWELS: &str = "аәеоөүұыіэюя";

// ============================================================================
// Harmony
// ============================================================================

/// Vowel-harmony class of a word.
///
/// The numeric [`offset`](Harmony::offset) indexes every two-variant affix table:
/// `0` selects the hard variant, `1` the soft one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Harmony {
    /// Back-vowel harmony (offset 0)
    Hard,
    /// Front-vowel harmony (offset 1)
    Soft,
}

/// Offset of the hard variant in a two-variant affix table.
pub const HARD_OFFSET: usize = 0;
/// Offset of the soft variant in a two-variant affix table.
pub const SOFT_OFFSET: usize = 1;

impl Harmony {
    /// Harmony from a soft/hard flag.
    #[inline]
    pub fn of_soft(soft: bool) -> Self {
        if soft {
            Harmony::Soft
        } else {
            Harmony::Hard
        }
    }

    /// Harmony from a table offset; anything but `1` is hard.
    #[inline]
    pub fn of_offset(offset: usize) -> Self {
        Self::of_soft(offset == SOFT_OFFSET)
    }

    /// Index into a two-variant affix table.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Harmony::Hard => HARD_OFFSET,
            Harmony::Soft => SOFT_OFFSET,
        }
    }

    /// Whether this is front-vowel harmony.
    #[inline]
    pub fn is_soft(self) -> bool {
        self == Harmony::Soft
    }
}

impl std::fmt::Display for Harmony {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Harmony::Hard => write!(f, "hard"),
            Harmony::Soft => write!(f, "soft"),
        }
    }
}

/// Harmony behavior of a single vowel letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelClass {
    /// ә е ө ү і
    SoftStrong,
    /// и
    SoftWeak,
    /// у ю; skipped when scanning for harmony
    Neutral,
    /// а о ұ ы я
    HardStrong,
}

// ============================================================================
// Letter groups
// ============================================================================

/// Named letter groups used by affix selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGroup {
    /// и ю: vowels behaving like sonorants before case affixes
    VowelsGroup1,
    /// р у й л
    Sonorant,
    /// ж з м н ң
    Voiced,
    /// ж з
    Sibilant,
    /// к қ п с т ф х ц ч ш щ
    Unvoiced,
    /// б в г ғ д
    VoicedStop,
    /// м н ң
    Nasal,
    /// р у й
    Glide,
    /// ж з л м н ң
    VoicedNonGlide,
    /// Union of [`LetterGroup::Sonorant`] and [`LetterGroup::Voiced`]
    SonorantOrVoiced,
}

impl LetterGroup {
    /// Letters of the group.
    pub const fn letters(self) -> &'static str {
        match self {
            LetterGroup::VowelsGroup1 => "ию",
            LetterGroup::Sonorant => "руйл",
            LetterGroup::Voiced => "жзмнң",
            LetterGroup::Sibilant => "жз",
            LetterGroup::Unvoiced => "кқпстфхцчшщ",
            LetterGroup::VoicedStop => "бвгғд",
            LetterGroup::Nasal => "мнң",
            LetterGroup::Glide => "руй",
            LetterGroup::VoicedNonGlide => "жзлмнң",
            LetterGroup::SonorantOrVoiced => "руйлжзмнң",
        }
    }
}
