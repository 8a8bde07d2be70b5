//! Two-variant affix constants.
//!
//! Each [`AffixPair`] holds the hard variant at index 0 and the soft variant at
//! index 1, matching [`Harmony::offset`].

use crate::phonetic::Harmony;

/// Hard and soft spelling of one affix.
pub type AffixPair = [&'static str; 2];

/// Variant of an affix for the given harmony.
#[inline]
pub fn pick(pair: AffixPair, harmony: Harmony) -> &'static str {
    pair[harmony.offset()]
}

// ============================================================================
// Vowels inserted between base and affix
// ============================================================================

/// а/е
pub const AE: AffixPair = ["а", "е"];
/// ы/і
pub const YI: AffixPair = ["ы", "і"];

// ============================================================================
// Negation and question particles
// ============================================================================

/// ма/ме
pub const MAME: AffixPair = ["ма", "ме"];
/// ба/бе
pub const BABE: AffixPair = ["ба", "бе"];
/// па/пе
pub const PAPE: AffixPair = ["па", "пе"];

// ============================================================================
// Verb tense and mood affixes
// ============================================================================

/// Past participle after vowels and voiced consonants
pub const GANGEN: AffixPair = ["ған", "ген"];
/// Past participle after unvoiced consonants
pub const KANKEN: AffixPair = ["қан", "кен"];
/// Optative after vowels and sonorants
pub const GYGI: AffixPair = ["ғы", "гі"];
/// Optative after stops
pub const KYKI: AffixPair = ["қы", "кі"];
/// ды/ді
pub const DYDI: AffixPair = ["ды", "ді"];
/// ты/ті
pub const TYTI: AffixPair = ["ты", "ті"];
/// Perfect participle after consonants
pub const YPIP: AffixPair = ["ып", "іп"];
/// Intention future after vowels and sonorants
pub const MAKMEK: AffixPair = ["мақ", "мек"];
/// Intention future after voiced consonants
pub const BAKBEK: AffixPair = ["бақ", "бек"];
/// Intention future after unvoiced consonants
pub const PAKPEK: AffixPair = ["пақ", "пек"];
/// Conditional mood
pub const SASE: AffixPair = ["са", "се"];
/// Present participle after genuine vowels
pub const YTYNYTIN: AffixPair = ["йтын", "йтін"];
/// Present participle after consonants
pub const ATYNETYN: AffixPair = ["атын", "етін"];
/// Present participle of hard "-ию" verbs
pub const YATYN: &str = "ятын";
/// Agent noun
pub const USHYUSHI: AffixPair = ["ушы", "уші"];
/// Colloquial continuous of "бару"/"келу" style verbs, first and third person
pub const YATYR: &str = "ятыр";
/// Colloquial continuous of "бару"/"келу" style verbs, second persons
pub const YAT: &str = "ят";

// ============================================================================
// Noun affixes
// ============================================================================

/// Plural after vowels and р у й
pub const LARLER: AffixPair = ["лар", "лер"];
/// Plural after unvoiced consonants
pub const TARTER: AffixPair = ["тар", "тер"];
/// Plural after ж з л м н ң
pub const DARDER: AffixPair = ["дар", "дер"];

/// Ablative
pub const DANDEN: AffixPair = ["дан", "ден"];
/// Ablative after unvoiced consonants
pub const TANTEN: AffixPair = ["тан", "тен"];
/// Ablative after nasals and third person possessive
pub const NANNEN: AffixPair = ["нан", "нен"];

/// Locative
pub const DADE: AffixPair = ["да", "де"];
/// Locative after unvoiced consonants
pub const TATE: AffixPair = ["та", "те"];
/// Locative after third person possessive
pub const NDANDE: AffixPair = ["нда", "нде"];

/// Locative adjective
pub const DAGYDEGI: AffixPair = ["дағы", "дегі"];
/// Locative adjective after unvoiced consonants
pub const TAGYTEGI: AffixPair = ["тағы", "тегі"];
/// Locative adjective after third person possessive
pub const NDAGYNDEGI: AffixPair = ["ндағы", "ндегі"];

/// Dative after third person possessive
pub const NANE: AffixPair = ["на", "не"];
/// Dative after vowels and voiced consonants
pub const GAGE: AffixPair = ["ға", "ге"];
/// Dative after unvoiced consonants
pub const KAKE: AffixPair = ["қа", "ке"];

/// Genitive
pub const DYNGDING: AffixPair = ["дың", "дің"];
/// Genitive after unvoiced consonants
pub const TYNGTING: AffixPair = ["тың", "тің"];
/// Genitive after vowels and nasals
pub const NYNGNING: AffixPair = ["ның", "нің"];

/// Accusative after vowels
pub const NYNI: AffixPair = ["ны", "ні"];

/// Instrumental after vowels, sonorants and nasals
pub const MENBEN_M: &str = "мен";
/// Instrumental after ж з
pub const MENBEN_B: &str = "бен";
/// Instrumental after everything else
pub const MENBEN_P: &str = "пен";

/// "Belongs to" after vowels
pub const NIKI: AffixPair = ["нікі", "нікі"];
/// "Belongs to" after voiced consonants
pub const DIKI: AffixPair = ["дікі", "дікі"];
/// "Belongs to" after unvoiced consonants
pub const TIKI: AffixPair = ["тікі", "тікі"];

// ============================================================================
// Adjective affixes
// ============================================================================

/// Comparative after genuine vowels
pub const RAKREK: AffixPair = ["рақ", "рек"];
/// Comparative after consonants
pub const YRAKIREK: AffixPair = ["ырақ", "ірек"];
/// Diminutive comparative after vowels and р у й
pub const LAULEU: AffixPair = ["лау", "леу"];
/// Diminutive comparative after ж з л м н ң
pub const DAUDEU: AffixPair = ["дау", "деу"];
/// Diminutive comparative after unvoiced consonants
pub const TAUTEU: AffixPair = ["тау", "теу"];
