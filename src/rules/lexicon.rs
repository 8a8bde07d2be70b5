//! Lexical exception lists.
//!
//! Verb lists are keyed on the last word of the dictionary form unless noted;
//! noun lists on the lowercased last word of the stem.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};

// ============================================================================
// Verbs
// ============================================================================

/// Verbs whose present-tense base gains ы/і ("оқу" → "оқи", "есту" → "естімеймін").
pub const VERB_PRESENT_TRANSITIVE_EXCEPTIONS1: &[&str] = &[
    "абыржу", "ағайынсу", "адалсу", "адамсу", "айну", "ақылгөйсу",
    "ақылсу", "ақынсу", "алжу", "аңду", "аңқаусу", "аңқу",
    "апшу", "арзу", "ару", "аршу", "астамсу", "атқу",
    "аунақшу", "ауытқу", "аярсу", "аяқсу", "әзілдегенсу", "әкімсу",
    "әсемсу", "әспенсу", "балқу", "балуансу", "батпансу", "батырсу",
    "батырымсу", "баулу", "баяусу", "бәлсу", "бәсеңсу", "бейкүнәмсу",
    "бейқамсу", "беку", "берегенсу", "берку", "болғансу", "боржу",
    "борсу", "босаңсу", "бөлексу", "бөтенсу", "буазу", "бұлқу",
    "бұлықсу", "быжу", "бықсу", "бықу", "бықырсу", "былқу",
    "быршу", "білгенсу", "білгірсу", "білгішсу", "білдіргенсу", "даму",
    "данагөйсу", "данасу", "дандайсу", "данышпансу", "даңғойсу", "дардайсу",
    "дарқансу", "дару", "дәнсу", "дәусу", "дегду", "дөңбекшу",
    "дөрекпу", "дүмпу", "дүңку", "ділмарсу", "діндарсу", "елегенсу",
    "елту", "емексу", "еркексу", "еркесу", "еркінсу", "ерсу",
    "есту", "есіркегенсу", "жағымсу", "жадыгөйсу", "жайбарақатсу", "жайдақсу",
    "жақынсу", "жалғызсу", "жалқаусу", "жалқу", "жаншу", "жасу",
    "жаталақшу", "жеку", "желпу", "жеңілгенсу", "жеру", "жиду",
    "жомартсу", "жору", "жосу", "жөңку", "жуасу", "жұлқу",
    "жүйтку", "жүнжу", "жыбыршу", "жылжу", "жылу", "жылымсу",
    "жылымшу", "жібу", "жігітсу", "жіпсу", "зеку", "зеңгу",
    "зырғу", "кеберсу", "кебірсу", "кебіртексу", "кедейсу", "кему",
    "кеңу", "кепсу", "кербезсу", "кергу", "кереметсу", "керсу",
    "көбеңсу", "көгілжу", "көлгірсу", "көлку", "көнсу", "көншу",
    "көңірсу", "көпсу", "көпіршу", "көсемсу", "күлімсу", "күмілжу",
    "күнсу", "күпсу", "күпу", "кілку", "кінәзсу", "кісімсу",
    "қабаржу", "қағып-сілку", "қағылжу", "қажу", "қаймақшу", "қақсу",
    "қақшу", "қалғу", "қалқу", "қамқорсу", "қамту", "қаңғу",
    "қаңсу", "қарбу", "қарғу", "қарпу", "қару", "қасаңсу",
    "қасу", "қобалжу", "қожайынсу", "қоқсу", "қоқу", "қоқырсу",
    "қоңылтақсу", "қору", "құбылжу", "құдайсу", "құйқылжу", "құлазу",
    "құрғақсу", "қылғу", "қылпу", "қылымсу", "қымқу", "қымту",
    "қыңсу", "қырпу", "қыршу", "қышу", "ләйлу", "леку",
    "лоблу", "лоқсу", "лықсу", "лықу", "лыпу", "малту",
    "малшу", "манду", "маңғазсу", "марғаусу", "мардамсу", "мәңгу",
    "менменсу", "меңіреусу", "мойынсу", "момақансу", "мұжу", "мүжу",
    "мүләйімсу", "мүлгу", "мүңку", "мүсәпірсу", "мығымсу", "мыжу",
    "мызғу", "мылқаусу", "мырзасу", "мытқу", "мыту", "міндетсу",
    "налу", "нұқу", "обалсу", "ойнақшу", "оқу", "орғу",
    "ортқу", "оршу", "өгейсу", "өзімсу", "өксу", "өкімсу",
    "өрбу", "өрекпу", "өрекшу", "өршу", "өсту", "өсіп-өрбу",
    "пақырсу", "палуансу", "паңсу", "пысықсу", "ренжу", "салақсу",
    "салғансу", "салғыртсу", "салқамсу", "салқынсу", "самарқаусу", "самсу",
    "саңғу", "сапсу", "сараңсу", "сарқу", "сарсу", "сару",
    "саябырсу", "саяқсу", "сәнсу", "сәуегейсу", "сенгенсу", "сепсу",
    "сергексу", "сергу", "серпу", "серімсу", "сету", "сирексу",
    "сорғу", "сусу", "суу", "сүңгу", "сылту", "сылу",
    "сыңсу", "сыпайысу", "сырғақсу", "сырғу", "сыру", "сілку",
    "тайқақсу", "тайқу", "талмаусу", "талықсу", "тамылжу", "танту",
    "тарпу", "тартқансу", "тасу", "тәкаппарсу", "тәлімсу", "тәңірсу",
    "тәуелжу", "тәуірсу", "телу", "тепшу", "терлеп-тепшу", "тершу",
    "тетку", "тобарсу", "тоқмейілсу", "тоқу", "толқу", "толықсу",
    "тоңазу", "тору", "төменсу", "тұшу", "түйткілжу", "түйткілсу",
    "түлежу", "тықыршу", "тыншу", "тыпыршу", "тілмарсу", "уылжу",
    "ұйтқу", "ұлу", "ұлықсу", "ұңғу", "үлкенсу", "үңгу",
    "үстемсу", "үсу", "шалқу", "шанду", "шаншу", "шапшу",
    "шарпу", "шеку", "шешенсу", "шоқу", "шоршу", "шошу",
    "шөжу", "шөку", "шөпшу", "шұқу", "шұлғу", "шүйгу",
    "шүленсу", "шыжу", "шылқу", "шымшу", "шыпшу", "шырпу",
    "шіру", "ыбылжу", "ыбырсу", "ызғу", "ыңырсу", "ырғу",
    "ыршу", "ытқу", "ілбу", "іру",
];

/// Verbs with two readings; the second inserts ы/і like the list above.
///
/// Each entry carries Russian glosses of the regular and the exceptional reading.
pub const OPT_EXCEPT_VERB_MEANINGS: &[(&str, [&[&str]; 2])] = &[
    ("ашу", [&["открывать", "выявлять"], &["киснуть", "сквашиваться"]]),
    ("еру", [&["следовать", "внимать"], &["таять", "растворяться"]]),
    ("жану", [&["гореть", "пылать"], &["точить", "править", "оттачивать"]]),
    ("жару", [&["колоть", "разрывать"], &["быть обеспеченным"]]),
    ("жуу", [&["мыть", "обмывать"], &["быть близким"]]),
    ("ию", [&["гнуть", "сгибать"], &["спускать молоко", "раздобриться"]]),
    ("қабу", [&["хватать", "ловить"], &["стегать", "простёгивать"]]),
    ("құру", [&["строить", "устанавливать"], &["вымирать", "пропадать"]]),
    ("пысу", [&["пугаться", "страшиться"], &["крепнуть", "скручиваться"]]),
    ("сасу", [&["суетиться", "теряться"], &["вонять", "протухать"]]),
    ("тану", [&["отказываться", "отрекаться"], &["узнавать", "знакомиться"]]),
    ("тату", [&["отведывать", "есть", "испытывать"], &["приобретать вкус", "заслуживать"]]),
    ("ысу", [&["тереть", "натирать"], &["нагреваться", "теплеть"]]),
];

/// Verbs whose base gains й plus ы/і ("баю" → "байиды").
pub const VERB_PRESENT_TRANSITIVE_EXCEPTIONS2: &[&str] = &["баю", "кею", "қаю", "мою", "ұю"];

/// Posture verbs with a bare continuous root, keyed on the full dictionary form.
pub const VERB_PRESENT_CONT_BASE: &[(&str, &str)] = &[
    ("тұру", "тұр"),
    ("жүру", "жүр"),
    ("отыру", "отыр"),
    ("жату", "жатыр"),
];

/// Verbs taking -а before a continuous auxiliary.
pub const VERB_PRESENT_CONT_EXCEPTION_A: &[&str] = &["бару", "апару"];

/// Verbs taking -е before a continuous auxiliary.
pub const VERB_PRESENT_CONT_EXCEPTION_E: &[&str] = &["келу", "әкелу"];

/// The only auxiliary the -а/-е verbs combine with.
pub const VERB_PRESENT_CONT_AE_AUX_ENABLED: &str = "жату";

/// "-бу" verbs whose converb restores у ("жабу" → "жауып").
pub const VERB_PRESENT_CONT_EXCEPTION_U: &[&str] =
    &["жабу", "қабу", "кебу", "себу", "тебу", "табу", "шабу"];

/// Verbs whose negative base regains a dropped vowel.
pub const VERB_EXCEPTION_ADD_VOWEL: &[(&str, &str)] = &[
    ("қорқу", "қорық"),
    ("қырқу", "қырық"),
    ("ірку", "ірік"),
    ("бүрку", "бүрік"),
];

/// Devoicing of a base-final consonant before a consonant-initial affix.
#[inline]
pub fn negative_conversion(c: char) -> Option<char> {
    match c {
        'б' => Some('п'),
        'г' => Some('к'),
        'ғ' => Some('қ'),
        _ => None,
    }
}

// ============================================================================
// Nouns
// ============================================================================

/// Nouns that always drop their last vowel before a possessive ending.
pub const DROP_LAST_VOWEL_NOUNS: &[&str] = &[
    "әріп", "бөрік", "ғұрып", "дәріп", "ерік", "ерін",
    "зауық", "кейіп", "қаріп", "қауіп", "құлық", "құлып",
    "мойын", "мүлік", "мұрын", "орын", "парық", "сиық",
    "сұрық", "халық", "шырық", "ырық",
];

/// Nouns that may either drop their last vowel or voice their last consonant.
pub const OPTIONALLY_DROP_LAST_VOWEL_NOUNS: &[&str] =
    &["ауыз", "дауыс", "көрік", "қалып", "қарын", "қойын", "нарық", "тұрық"];

/// Voicing of a stem-final stop before a vowel-initial ending.
#[inline]
pub fn base_replacement_pkkh(c: char) -> Option<char> {
    match c {
        'п' => Some('б'),
        'к' => Some('г'),
        'қ' => Some('ғ'),
        _ => None,
    }
}

// ============================================================================
// Indexed views
// ============================================================================

/// Hashed views over the lists above, built on first use.
struct Lexicon {
    exceptions1: FxHashSet<&'static str>,
    exceptions2: FxHashSet<&'static str>,
    optional: FxHashMap<&'static str, [&'static [&'static str]; 2]>,
    cont_base: FxHashMap<&'static str, &'static str>,
    add_vowel: FxHashMap<&'static str, &'static str>,
    drop_vowel: FxHashSet<&'static str>,
    optional_drop_vowel: FxHashSet<&'static str>,
}

fn lexicon() -> &'static Lexicon {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    LEXICON.get_or_init(|| Lexicon {
        exceptions1: VERB_PRESENT_TRANSITIVE_EXCEPTIONS1.iter().copied().collect(),
        exceptions2: VERB_PRESENT_TRANSITIVE_EXCEPTIONS2.iter().copied().collect(),
        optional: OPT_EXCEPT_VERB_MEANINGS.iter().copied().collect(),
        cont_base: VERB_PRESENT_CONT_BASE.iter().copied().collect(),
        add_vowel: VERB_EXCEPTION_ADD_VOWEL.iter().copied().collect(),
        drop_vowel: DROP_LAST_VOWEL_NOUNS.iter().copied().collect(),
        optional_drop_vowel: OPTIONALLY_DROP_LAST_VOWEL_NOUNS.iter().copied().collect(),
    })
}

/// Whether the verb's present base always gains ы/і.
#[inline]
pub fn is_verb_exception(last_word: &str) -> bool {
    lexicon().exceptions1.contains(last_word)
}

/// Whether the verb's present base gains й plus ы/і.
#[inline]
pub fn is_verb_exception2(last_word: &str) -> bool {
    lexicon().exceptions2.contains(last_word)
}

/// Whether the verb has a second, exceptional reading.
#[inline]
pub fn is_optional_exception(last_word: &str) -> bool {
    lexicon().optional.contains_key(last_word)
}

/// Glosses of both readings of a two-reading verb.
pub fn optional_exception_meanings(last_word: &str) -> Option<[&'static [&'static str]; 2]> {
    lexicon().optional.get(last_word).copied()
}

/// Bare continuous root of a posture verb.
#[inline]
pub fn present_cont_base(dict_form: &str) -> Option<&'static str> {
    lexicon().cont_base.get(dict_form).copied()
}

/// Whether the verb takes -а before a continuous auxiliary.
#[inline]
pub fn is_cont_exception_a(dict_form: &str) -> bool {
    VERB_PRESENT_CONT_EXCEPTION_A.iter().any(|&w| w == dict_form)
}

/// Whether the verb takes -е before a continuous auxiliary.
#[inline]
pub fn is_cont_exception_e(dict_form: &str) -> bool {
    VERB_PRESENT_CONT_EXCEPTION_E.iter().any(|&w| w == dict_form)
}

/// Whether the verb restores у in its converb.
#[inline]
pub fn is_cont_exception_u(dict_form: &str) -> bool {
    VERB_PRESENT_CONT_EXCEPTION_U.iter().any(|&w| w == dict_form)
}

/// Negative base with a regained vowel, if the verb has one.
#[inline]
pub fn add_vowel_base(dict_form: &str) -> Option<&'static str> {
    lexicon().add_vowel.get(dict_form).copied()
}

/// How a noun stem changes before a possessive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropVowelType {
    /// Voice a final п/к/қ, otherwise unchanged
    Regular,
    /// Drop the last vowel ("орын" → "орны")
    DropLast,
    /// Both strategies are accepted ("ауыз" → "аузы", "ауызы")
    OptionallyDropLast,
}

/// Classification of a lowercased noun (last word of the stem).
pub fn drop_vowel_type(last_word: &str) -> DropVowelType {
    let lex = lexicon();
    if lex.drop_vowel.contains(last_word) {
        DropVowelType::DropLast
    } else if lex.optional_drop_vowel.contains(last_word) {
        DropVowelType::OptionallyDropLast
    } else {
        DropVowelType::Regular
    }
}
