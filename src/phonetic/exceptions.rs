//! Lexical exceptions to the harmony scan.
//!
//! Words listed here take hard harmony regardless of their vowels. Almost all
//! of them are "-ию" verbs whose only harmony-relevant vowel is the weak "и".

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Words that are hard despite what a scan of their vowels would say.
pub const HARD_WORDS: &[&str] = &[
    "ағжию", "ақсию", "ақшию", "аңқию", "апсию", "арбию",
    "арсию", "аусию", "бағбию", "бағжию", "бажбию", "бақшию",
    "балпию", "балшию", "барбию", "баржию", "бартию", "баттию",
    "божбию", "болбию", "болпию", "борбию", "боржию", "борпию",
    "борсию", "бортию", "бұқию", "бұқшию", "бұлтию", "бұртию",
    "былқию", "былпию", "былшию", "бырбию", "быржию", "бырсию",
    "быртию", "быттию", "далдию", "дарбию", "дардию", "дорбию",
    "дырдию", "жалпию", "жампию", "жарбию", "жию", "жылмию",
    "жылтию", "жымию", "жымпию", "жымсию", "жыртию", "қаздию",
    "қайқию", "қаймию", "қақию", "қақшию", "қалбию", "қалқию",
    "қалтию", "қалшию", "қампию", "қаңқию", "қаудию", "қаужию",
    "қауқию", "қаупию", "қиқию", "қитию", "қию", "қоқию",
    "қомпию", "қонжию", "қоңқию", "қорбию", "қоржию", "қушию",
    "құдию", "құнжию", "құнтию", "құржию", "қыдию", "қылжию",
    "қылмию", "қылтию", "қыржию", "қыртию", "лықию", "маңқию",
    "миқию", "монтию", "мықию", "мықшию", "мыржию", "оқшию",
    "сақию", "сақсию", "саңқию", "сапсию", "сидию", "сойдию",
    "соқию", "солпию", "сомпию", "сопию", "состию", "сұстию",
    "сықию", "сықсию", "сылқию", "сымпию", "сыптию", "сырию",
    "тайқию", "тайпию", "талпию", "талтию", "таңқию", "тарбию",
    "тарпию", "тойтию", "томпию", "тоңқию", "торсию", "тортию",
    "тостию", "тотию", "тұғжию", "тұқию", "тұқшию", "тұштию",
    "тылтию", "тымпию", "тыңқию", "тырбию", "тыржию", "тырию",
    "тырқию", "тырсию", "тыртию", "шақшию", "шалжию", "шалқию",
    "шанжию", "шаңқию", "шартию", "шойқию", "шоқию", "шоқшию",
    "шолжию", "шолтию", "шоңқию", "шұқию", "шұқшию", "шұнтию",
    "шықию", "шылқию", "ыздию", "ыңқию", "ыржию", "ырсию",
    "ми",
];

fn hard_words() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| HARD_WORDS.iter().copied().collect())
}

/// Harmony override for a lowercased word, if it is an exception.
///
/// Returns `Some(false)` (hard) for listed words and `None` otherwise.
#[inline]
pub fn harmony_exception(word: &str) -> Option<bool> {
    if hard_words().contains(word) {
        Some(false)
    } else {
        None
    }
}
