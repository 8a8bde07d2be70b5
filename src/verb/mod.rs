//! Verb conjugation.
//!
//! A [`VerbBuilder`] is created once per dictionary-form verb ("алу", "келу",
//! "оқу") and then queried for any tense, mood, clause or participle. All
//! per-form operations are total: they return a [`Phrasal`](crate::phrasal::Phrasal)
//! directly, and the only failure is construction from a malformed form.
//!
//! # Construction
//!
//! 1. Validate: lowercase letters, space or hyphen only, 2 to 100
//!    characters, ending in "у" or "ю".
//! 2. Harmony is taken from the last space/hyphen-delimited word.
//! 3. The final "у"/"ю" is stripped to obtain the regular base.
//! 4. The first matching [`BaseTransform`] rewrites the working base.
//! 5. Posture verbs record their bare continuous root ("жатыр", "тұр").
//!
//! # Example
//!
//! ```
//! use kazakh_morph::prelude::*;
//!
//! let verb = VerbBuilder::new("алу")?;
//! let phrasal = verb.present_transitive_form(
//!     GrammarPerson::First,
//!     GrammarNumber::Singular,
//!     SentenceType::Statement,
//! );
//! assert_eq!(phrasal.raw(), "аламын");
//! # Ok::<(), kazakh_morph::MorphError>(())
//! ```
//!
//! # Modules
//!
//! - `tenses` - present, past and future finite tenses
//! - `moods` - conditional, imperative, optative
//! - `clauses` - constructions composing a second verb
//! - `participles` - non-finite forms usable as nouns

mod clauses;
mod moods;
mod participles;
mod tenses;

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{MorphError, Result};
use crate::phonetic::{drop_last, last_char, last_letter, last_word, word_harmony, Harmony};
use crate::phrasal::PhrasalBuilder;
use crate::rules::affixes::{pick, YI};
use crate::rules::lexicon::{
    add_vowel_base, is_cont_exception_a, is_cont_exception_e, is_cont_exception_u,
    is_optional_exception, is_verb_exception, is_verb_exception2, negative_conversion,
    present_cont_base,
};
use crate::rules::{question_particle, ypip};

/// Longest accepted dictionary form, in characters.
pub const MAX_VERB_LENGTH: usize = 100;

/// Shortest accepted dictionary form, in characters.
pub const MIN_VERB_LENGTH: usize = 2;

// ============================================================================
// Validation
// ============================================================================

fn invalid(form: &str, reason: &'static str) -> MorphError {
    MorphError::InvalidVerbDictForm {
        form: form.to_owned(),
        reason,
    }
}

/// Check that a string is a well-formed verb dictionary form.
///
/// # Errors
///
/// [`MorphError::InvalidVerbDictForm`] naming the first violated rule.
pub fn validate_verb(dict_form: &str) -> Result<()> {
    let mut count = 0;
    for c in dict_form.chars() {
        count += 1;
        if count > MAX_VERB_LENGTH {
            return Err(invalid(dict_form, "too long"));
        }
        if c != ' ' && c != '-' && !c.is_lowercase() {
            return Err(invalid(dict_form, "not lowercase"));
        }
    }
    if count < MIN_VERB_LENGTH {
        return Err(invalid(dict_form, "too short"));
    }
    match last_char(dict_form) {
        Some('у') | Some('ю') => Ok(()),
        _ => Err(invalid(dict_form, "must end in у or ю")),
    }
}

// ============================================================================
// Base transforms
// ============================================================================

/// How the working base differs from the regular (dictionary minus last letter) base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseTransform {
    /// Append ы/і ("ашу" → "ашы")
    InsertVowel,
    /// Append й plus ы/і ("ұю" → "ұйы")
    InsertGlideVowel,
    /// Hard "-ию" verb; vowel-initial affixes are spelled with я ("жию" → "жияды")
    YaSuffix,
    /// Append й ("қою" → "қой")
    AppendGlide,
    /// No change
    Regular,
}

impl BaseTransform {
    fn resolve(dict_form: &str, last_word: &str, harmony: Harmony, force_exceptional: bool) -> Self {
        // Lists hold both single verbs and hyphenated compounds ("қағып-сілку").
        let listed = |lookup: fn(&str) -> bool| lookup(dict_form) || lookup(last_word);
        if listed(is_verb_exception) || (force_exceptional && listed(is_optional_exception)) {
            BaseTransform::InsertVowel
        } else if listed(is_verb_exception2) {
            BaseTransform::InsertGlideVowel
        } else if dict_form.ends_with("ию") {
            match harmony {
                Harmony::Hard => BaseTransform::YaSuffix,
                Harmony::Soft => BaseTransform::Regular,
            }
        } else if dict_form.ends_with('ю') {
            BaseTransform::AppendGlide
        } else {
            BaseTransform::Regular
        }
    }

    fn apply(self, regular_base: &str, harmony: Harmony) -> String {
        match self {
            BaseTransform::InsertVowel => format!("{}{}", regular_base, pick(YI, harmony)),
            BaseTransform::InsertGlideVowel => format!("{}й{}", regular_base, pick(YI, harmony)),
            BaseTransform::AppendGlide => format!("{}й", regular_base),
            BaseTransform::YaSuffix | BaseTransform::Regular => regular_base.to_owned(),
        }
    }
}

impl fmt::Display for BaseTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BaseTransform::InsertVowel => "insert-vowel",
            BaseTransform::InsertGlideVowel => "insert-glide-vowel",
            BaseTransform::YaSuffix => "ya-suffix",
            BaseTransform::AppendGlide => "append-glide",
            BaseTransform::Regular => "regular",
        };
        f.write_str(name)
    }
}

/// Which stem rewrite an operation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BaseModifier {
    /// Stem before a consonant-initial affix: regained vowel or devoiced final
    NegativeConsonant,
    /// Stem of the "-ып" converb: restores "у" for a few verbs
    RestoreU,
}

/// A rewritten stem with its final character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BaseAndLast {
    pub(crate) base: String,
    pub(crate) last: char,
}

impl BaseAndLast {
    fn of_base(base: &str) -> Self {
        BaseAndLast {
            base: base.to_owned(),
            last: last_letter(base),
        }
    }

    fn with_last_replaced(base: &str, last: char) -> Self {
        let mut out = drop_last(base, 1).to_owned();
        out.push(last);
        BaseAndLast { base: out, last }
    }
}

/// Negative stem plus its negation particle.
pub(crate) struct NegativeStem {
    base: String,
    particle: &'static str,
}

impl NegativeStem {
    fn particle_last(&self) -> char {
        last_letter(self.particle)
    }

    fn builder(&self) -> PhrasalBuilder {
        PhrasalBuilder::new()
            .verb_base(self.base.as_str())
            .negation(self.particle)
    }
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug, Clone, Default)]
struct AuxBuilders {
    optative: OnceLock<Box<VerbBuilder>>,
    can: OnceLock<Box<VerbBuilder>>,
    koru: OnceLock<Box<VerbBuilder>>,
    jazdau: OnceLock<Box<VerbBuilder>>,
    continuous: OnceLock<Box<VerbBuilder>>,
}

fn memoized<'a>(slot: &'a OnceLock<Box<VerbBuilder>>, dict_form: &'static str) -> &'a VerbBuilder {
    slot.get_or_init(|| Box::new(VerbBuilder::construct(dict_form, false)))
}

/// Conjugator for a single verb.
///
/// Cloning is cheap relative to conjugation; auxiliary builders ("келу",
/// "алу", "көру", "жаздау", "жату") are created lazily on first use and are
/// safe to initialize from several threads.
#[derive(Debug, Clone)]
pub struct VerbBuilder {
    dict_form: String,
    force_exceptional: bool,
    verb_base: String,
    regular_verb_base: String,
    harmony: Harmony,
    base_transform: BaseTransform,
    base_last: char,
    cont_context: Option<&'static str>,
    aux: AuxBuilders,
}

impl VerbBuilder {
    /// Create a builder for a dictionary-form verb.
    ///
    /// # Errors
    ///
    /// [`MorphError::InvalidVerbDictForm`] if the form fails [`validate_verb`].
    pub fn new(dict_form: &str) -> Result<Self> {
        Self::with_force_exceptional(dict_form, false)
    }

    /// Create a builder, optionally selecting the exceptional reading of a
    /// two-reading verb ("ашу" as "to be sour" rather than "to open").
    pub fn with_force_exceptional(dict_form: &str, force_exceptional: bool) -> Result<Self> {
        validate_verb(dict_form)?;
        Ok(Self::construct(dict_form, force_exceptional))
    }

    fn construct(dict_form: &str, force_exceptional: bool) -> Self {
        let last_word = last_word(dict_form);
        let harmony = word_harmony(last_word);
        let regular_verb_base = drop_last(dict_form, 1).to_owned();
        let base_transform =
            BaseTransform::resolve(dict_form, last_word, harmony, force_exceptional);
        let verb_base = base_transform.apply(&regular_verb_base, harmony);
        if base_transform != BaseTransform::Regular {
            debug!(
                verb = dict_form,
                transform = %base_transform,
                base = %verb_base,
                "resolved irregular verb base"
            );
        }
        let base_last = last_letter(&verb_base);
        VerbBuilder {
            dict_form: dict_form.to_owned(),
            force_exceptional,
            verb_base,
            regular_verb_base,
            harmony,
            base_transform,
            base_last,
            cont_context: present_cont_base(dict_form),
            aux: AuxBuilders::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Dictionary form the builder was created from.
    pub fn dict_form(&self) -> &str {
        &self.dict_form
    }

    /// Harmony of the verb.
    pub fn harmony(&self) -> Harmony {
        self.harmony
    }

    /// Affix-table column for the verb's harmony (0 hard, 1 soft).
    pub fn soft_offset(&self) -> usize {
        self.harmony.offset()
    }

    /// Whether the verb takes soft affixes.
    pub fn is_soft(&self) -> bool {
        self.harmony.is_soft()
    }

    /// Working base after the irregular-base transform.
    pub fn verb_base(&self) -> &str {
        &self.verb_base
    }

    /// Which irregular-base rule, if any, applied.
    pub fn base_transform(&self) -> BaseTransform {
        self.base_transform
    }

    /// Whether the exceptional reading was requested.
    pub fn force_exceptional(&self) -> bool {
        self.force_exceptional
    }

    /// Whether the verb has a bare continuous form ("жатыр", "отыр").
    pub fn has_continuous_root(&self) -> bool {
        self.cont_context.is_some()
    }

    // ========================================================================
    // Auxiliaries
    // ========================================================================

    fn optative_aux(&self) -> &VerbBuilder {
        memoized(&self.aux.optative, "келу")
    }

    fn can_aux(&self) -> &VerbBuilder {
        memoized(&self.aux.can, "алу")
    }

    fn koru_aux(&self) -> &VerbBuilder {
        memoized(&self.aux.koru, "көру")
    }

    fn jazdau_aux(&self) -> &VerbBuilder {
        memoized(&self.aux.jazdau, "жаздау")
    }

    fn default_continuous_aux(&self) -> &VerbBuilder {
        memoized(&self.aux.continuous, "жату")
    }

    // ========================================================================
    // Shared helpers
    // ========================================================================

    fn unchanged_base(&self) -> BaseAndLast {
        BaseAndLast {
            base: self.verb_base.clone(),
            last: self.base_last,
        }
    }

    fn restores_u(&self) -> bool {
        is_cont_exception_u(&self.dict_form) && !self.force_exceptional
    }

    fn is_cont_exception_ae(&self) -> bool {
        is_cont_exception_a(&self.dict_form) || is_cont_exception_e(&self.dict_form)
    }

    pub(crate) fn base_modifier(&self, modifier: BaseModifier) -> BaseAndLast {
        match modifier {
            BaseModifier::NegativeConsonant => {
                if let Some(base) = add_vowel_base(&self.dict_form) {
                    return BaseAndLast::of_base(base);
                }
                match negative_conversion(self.base_last) {
                    Some(voiceless) => BaseAndLast::with_last_replaced(&self.verb_base, voiceless),
                    None => self.unchanged_base(),
                }
            }
            BaseModifier::RestoreU if self.restores_u() => {
                BaseAndLast::with_last_replaced(&self.regular_verb_base, 'у')
            }
            BaseModifier::RestoreU => self.unchanged_base(),
        }
    }

    fn negative_stem(&self) -> NegativeStem {
        let BaseAndLast { base, last } = self.base_modifier(BaseModifier::NegativeConsonant);
        NegativeStem {
            base,
            particle: question_particle(last, self.harmony),
        }
    }

    /// Stem for converbs feeding continuous and "try" constructions.
    fn present_continuous_base(&self) -> String {
        if self.restores_u() {
            let mut base = drop_last(&self.verb_base, 1).to_owned();
            base.push('у');
            base
        } else {
            self.verb_base.clone()
        }
    }

    fn perfect_participle_affix(&self) -> &'static str {
        ypip(self.base_last, self.harmony)
    }

    fn present_continuous_affix(&self) -> &'static str {
        if is_cont_exception_a(&self.dict_form) {
            "а"
        } else if is_cont_exception_e(&self.dict_form) {
            "е"
        } else {
            self.perfect_participle_affix()
        }
    }

    /// "-ып" converb ("көріп", "оқып"), the first half of most compound clauses.
    fn converb_builder(&self) -> PhrasalBuilder {
        PhrasalBuilder::new()
            .verb_base(self.present_continuous_base())
            .tense_affix(self.perfect_participle_affix())
    }

    /// Join a stem and a vowel-initial affix, respelling the seam.
    ///
    /// "й" + "а…" becomes "я…"; "ы"/"і" + "й…" becomes "и…".
    fn merge_base_with_vowel_affix(base: &str, affix: &str) -> PhrasalBuilder {
        let mut affix_chars = affix.chars();
        let (base, affix) = match (last_char(base), affix_chars.next()) {
            (Some('й'), Some('а')) => (drop_last(base, 1), format!("я{}", affix_chars.as_str())),
            (Some('ы' | 'і'), Some('й')) => (drop_last(base, 1), format!("и{}", affix_chars.as_str())),
            _ => (base, affix.to_owned()),
        };
        PhrasalBuilder::new().verb_base(base).tense_affix(affix)
    }

    fn question_form(&self, builder: PhrasalBuilder) -> PhrasalBuilder {
        self.question_form_with(builder, self.harmony)
    }

    fn question_form_with(&self, builder: PhrasalBuilder, harmony: Harmony) -> PhrasalBuilder {
        let last = builder.last_item().unwrap_or(self.base_last);
        let particle = question_particle(last, harmony);
        builder.space().question_particle(particle).punctuation("?")
    }
}
