//! Dataset evaluation.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rustc_hash::FxHashMap;
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::row::{load_jsonl, NounForm, NounFormsRow, VerbTestsetRow, PART_SEPARATOR};
use super::TenseIndex;
use crate::error::{MorphError, Result};
use crate::grammar::{GrammarNumber, GrammarPerson, SentenceType, Septik};
use crate::noun::NounBuilder;
use crate::phrasal::Phrasal;
use crate::verb::VerbBuilder;

const PROGRESS_INTERVAL: usize = 1000;

/// A generated form that differs from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Verb or noun of the row
    pub item: String,
    /// Grammatical coordinates of the form
    pub location: String,
    /// Expected text, parts joined by `+` for verbs
    pub expected: String,
    /// Generated text in the same notation
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: expected {:?}, got {:?}",
            self.item, self.location, self.expected, self.actual
        )
    }
}

/// Outcome of evaluating a dataset or a single row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestsetStats {
    /// Rows evaluated
    pub rows: usize,
    /// Rows with at least one mismatch
    pub mismatched_rows: usize,
    /// Forms compared
    pub forms_checked: usize,
    /// Forms that differed
    pub mismatched_forms: usize,
    /// Forms whose coordinates no builder operation covers
    pub skipped_forms: usize,
    /// First difference found, in row order
    pub first_mismatch: Option<Mismatch>,
}

impl TestsetStats {
    /// True when every compared form matched.
    pub fn is_clean(&self) -> bool {
        self.mismatched_forms == 0
    }

    /// Add the counts of `other`, keeping the earlier first mismatch.
    pub fn merge(&mut self, other: TestsetStats) {
        self.rows += other.rows;
        self.mismatched_rows += other.mismatched_rows;
        self.forms_checked += other.forms_checked;
        self.mismatched_forms += other.mismatched_forms;
        self.skipped_forms += other.skipped_forms;
        if self.first_mismatch.is_none() {
            self.first_mismatch = other.first_mismatch;
        }
    }

    fn record(&mut self, mismatch: Mismatch) {
        warn!("{}", mismatch);
        self.mismatched_forms += 1;
        if self.first_mismatch.is_none() {
            self.first_mismatch = Some(mismatch);
        }
    }

    fn finish_row(&mut self) {
        self.rows += 1;
        if self.mismatched_forms > 0 {
            self.mismatched_rows += 1;
        }
    }
}

impl fmt::Display for TestsetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows: {} ({} with mismatches), forms: {} checked, {} mismatched, {} skipped",
            self.rows, self.mismatched_rows, self.forms_checked, self.mismatched_forms, self.skipped_forms
        )?;
        if let Some(mismatch) = &self.first_mismatch {
            write!(f, "\nfirst mismatch: {}", mismatch)?;
        }
        Ok(())
    }
}

/// Rows finished so far, shared across worker threads.
#[derive(Debug)]
struct Progress {
    done: AtomicUsize,
    total: usize,
    interval: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self::with_interval(total, PROGRESS_INTERVAL)
    }

    fn with_interval(total: usize, interval: usize) -> Self {
        Progress {
            done: AtomicUsize::new(0),
            total,
            interval: interval.max(1),
        }
    }

    /// Count one finished row. Returns whether a progress event was logged.
    fn tick(&self) -> bool {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.interval == 0 {
            info!(rows = done, total = self.total, "testset progress");
            true
        } else {
            false
        }
    }
}

fn summarize(results: Vec<TestsetStats>) -> TestsetStats {
    let mut total = TestsetStats::default();
    for row in results {
        total.merge(row);
    }
    info!(
        rows = total.rows,
        forms = total.forms_checked,
        mismatches = total.mismatched_forms,
        "testset finished"
    );
    total
}

// ============================================================================
// Verbs
// ============================================================================

/// Evaluates verb datasets.
///
/// Present continuous tenses need an auxiliary builder per tense; [`new`](Self::new)
/// registers жату, жүру, отыру and тұру.
#[derive(Debug, Clone)]
pub struct VerbTestsetRunner {
    aux_builders: FxHashMap<TenseIndex, VerbBuilder>,
}

impl VerbTestsetRunner {
    /// Runner with the standard continuous auxiliaries.
    pub fn new() -> Result<Self> {
        let mut runner = Self::without_aux_builders();
        for tense in TenseIndex::ALL {
            if let Some(dict_form) = tense.aux_dict_form() {
                runner = runner.with_aux_builder(tense, VerbBuilder::new(dict_form)?);
            }
        }
        Ok(runner)
    }

    /// Runner with no auxiliaries; continuous tenses fail until one is added.
    pub fn without_aux_builders() -> Self {
        VerbTestsetRunner {
            aux_builders: FxHashMap::default(),
        }
    }

    /// Register the auxiliary for a continuous tense.
    pub fn with_aux_builder(mut self, tense: TenseIndex, builder: VerbBuilder) -> Self {
        self.aux_builders.insert(tense, builder);
        self
    }

    fn aux_builder(&self, tense: TenseIndex) -> Result<&VerbBuilder> {
        self.aux_builders
            .get(&tense)
            .ok_or(MorphError::MissingAuxiliaryVerbBuilder(tense))
    }

    /// All eight person/number forms of a tense, person-major.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::MissingAuxiliaryVerbBuilder`] for a continuous
    /// tense without a registered auxiliary.
    pub fn generate_forms(
        &self,
        tense: TenseIndex,
        builder: &VerbBuilder,
        sentence_type: SentenceType,
    ) -> Result<Vec<Phrasal>> {
        let aux = if tense.is_present_continuous() {
            Some(self.aux_builder(tense)?)
        } else {
            None
        };
        let negate_aux = tense.is_negate_aux();
        let mut forms = Vec::with_capacity(8);
        for person in GrammarPerson::ALL {
            for number in GrammarNumber::ALL {
                let phrasal = match (tense, aux) {
                    (_, Some(aux)) => {
                        builder.present_continuous_form(person, number, sentence_type, aux, negate_aux)
                    }
                    (TenseIndex::PresentTransitive, None) => {
                        builder.present_transitive_form(person, number, sentence_type)
                    }
                    (TenseIndex::PastSimple, None) => builder.past_form(person, number, sentence_type),
                    (TenseIndex::RemotePast | TenseIndex::RemotePastNegateAux, None) => {
                        builder.remote_past_tense(person, number, sentence_type, negate_aux)
                    }
                    (TenseIndex::ConditionalMood, None) => {
                        builder.conditional_mood(person, number, sentence_type)
                    }
                    (TenseIndex::ImperativeMood, None) => {
                        builder.imperative_mood(person, number, sentence_type)
                    }
                    (TenseIndex::OptativeMood, None) => builder.optative_mood(person, number, sentence_type),
                    (_, None) => return Err(MorphError::MissingAuxiliaryVerbBuilder(tense)),
                };
                forms.push(phrasal);
            }
        }
        Ok(forms)
    }

    fn compare(
        stats: &mut TestsetStats,
        item: &str,
        tense: TenseIndex,
        sentence_type: SentenceType,
        generated: &[Phrasal],
        expected: &[String],
    ) {
        if generated.len() != expected.len() {
            stats.forms_checked += 1;
            stats.record(Mismatch {
                item: item.to_owned(),
                location: format!("{} {} form count", tense, sentence_type),
                expected: expected.len().to_string(),
                actual: generated.len().to_string(),
            });
            return;
        }
        for (index, (phrasal, expected)) in generated.iter().zip(expected).enumerate() {
            stats.forms_checked += 1;
            let expected_parts = super::split_parts(expected);
            if phrasal.part_texts() != expected_parts {
                stats.record(Mismatch {
                    item: item.to_owned(),
                    location: format!("{} {} #{}", tense, sentence_type, index + 1),
                    expected: expected_parts.join(&PART_SEPARATOR.to_string()),
                    actual: phrasal.part_texts().join(&PART_SEPARATOR.to_string()),
                });
            }
        }
    }

    /// Evaluate one row.
    ///
    /// # Errors
    ///
    /// Fails on an invalid verb, a row with fewer than fifteen tenses, or a
    /// missing auxiliary.
    pub fn check_row(&self, row: &VerbTestsetRow) -> Result<TestsetStats> {
        if row.tenses.len() < TenseIndex::ALL.len() {
            return Err(MorphError::TestsetShape {
                verb: row.verb.clone(),
                actual: row.tenses.len(),
                expected: TenseIndex::ALL.len(),
            });
        }
        let builder = VerbBuilder::with_force_exceptional(&row.verb, row.force_exceptional)?;
        let mut stats = TestsetStats::default();
        for tense in TenseIndex::ALL {
            let form_set = &row.tenses[tense.index()];
            for sentence_type in SentenceType::ALL {
                let generated = self.generate_forms(tense, &builder, sentence_type)?;
                Self::compare(
                    &mut stats,
                    &row.verb,
                    tense,
                    sentence_type,
                    &generated,
                    form_set.forms(sentence_type),
                );
            }
        }
        stats.finish_row();
        Ok(stats)
    }

    /// Evaluate all rows, in parallel with the `parallel` feature.
    pub fn run(&self, rows: &[VerbTestsetRow]) -> Result<TestsetStats> {
        let progress = Progress::new(rows.len());
        let check = |row: &VerbTestsetRow| {
            let stats = self.check_row(row);
            progress.tick();
            stats
        };
        #[cfg(feature = "parallel")]
        let results = rows.par_iter().map(check).collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let results = rows.iter().map(check).collect::<Result<Vec<_>>>()?;
        Ok(summarize(results))
    }

    /// Load a dataset file and evaluate it.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<TestsetStats> {
        let rows: Vec<VerbTestsetRow> = load_jsonl(path)?;
        self.run(&rows)
    }
}

// ============================================================================
// Nouns
// ============================================================================

/// Evaluates noun datasets, comparing surface forms case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounTestsetRunner;

impl NounTestsetRunner {
    /// Create a runner.
    pub fn new() -> Self {
        NounTestsetRunner
    }

    /// Generate the form at the coordinates of `form`, if an operation covers them.
    ///
    /// Forms without a case, plural possessives and incomplete possessor
    /// coordinates are not covered.
    pub fn generate(builder: &NounBuilder, form: &NounForm) -> Option<Phrasal> {
        let septik = Septik::of_index(form.septik?)?;
        let number = GrammarNumber::of_index(form.number?)?;
        let poss_person = match form.poss_person {
            Some(index) => Some(GrammarPerson::of_index(index)?),
            None => None,
        };
        let poss_number = match form.poss_number {
            Some(index) => Some(GrammarNumber::of_index(index)?),
            None => None,
        };
        match (number, poss_person, poss_number) {
            (GrammarNumber::Singular, Some(person), Some(poss_number)) => {
                Some(builder.possessive_septik_form(person, poss_number, septik))
            }
            (GrammarNumber::Singular, None, None) => Some(builder.septik_form(septik)),
            (GrammarNumber::Plural, None, None) => Some(builder.plural_septik_form(septik)),
            _ => None,
        }
    }

    /// Evaluate one row.
    pub fn check_row(&self, row: &NounFormsRow) -> TestsetStats {
        let builder = NounBuilder::of_noun(&row.base);
        let mut stats = TestsetStats::default();
        for form in &row.forms {
            let Some(phrasal) = Self::generate(&builder, form) else {
                stats.skipped_forms += 1;
                continue;
            };
            stats.forms_checked += 1;
            let actual = phrasal.raw().to_lowercase();
            if actual != form.form.to_lowercase() {
                stats.record(Mismatch {
                    item: row.base.clone(),
                    location: format!(
                        "number {:?} septik {:?} possessor {:?}/{:?}",
                        form.number, form.septik, form.poss_person, form.poss_number
                    ),
                    expected: form.form.clone(),
                    actual,
                });
            }
        }
        stats.finish_row();
        stats
    }

    /// Evaluate all rows.
    pub fn run(&self, rows: &[NounFormsRow]) -> TestsetStats {
        let progress = Progress::new(rows.len());
        let results = rows
            .iter()
            .map(|row| {
                let stats = self.check_row(row);
                progress.tick();
                stats
            })
            .collect();
        summarize(results)
    }

    /// Load a dataset file and evaluate it.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<TestsetStats> {
        let rows: Vec<NounFormsRow> = load_jsonl(path)?;
        Ok(self.run(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testset::PlusFormSet;

    fn form_set(statement: &[&str]) -> PlusFormSet {
        PlusFormSet {
            statement: statement.iter().map(|s| s.to_string()).collect(),
            negative: Vec::new(),
            question: Vec::new(),
        }
    }

    #[test]
    fn test_generate_present_transitive() {
        let runner = VerbTestsetRunner::new().unwrap();
        let alu = VerbBuilder::new("алу").unwrap();
        let forms = runner
            .generate_forms(TenseIndex::PresentTransitive, &alu, SentenceType::Statement)
            .unwrap();
        assert_eq!(forms.len(), 8);
        assert_eq!(forms[0].raw(), "аламын");
    }

    #[test]
    fn test_missing_aux() {
        let runner = VerbTestsetRunner::without_aux_builders();
        let alu = VerbBuilder::new("алу").unwrap();
        let err = runner
            .generate_forms(TenseIndex::PresentContinuousOtyru, &alu, SentenceType::Statement)
            .unwrap_err();
        assert!(matches!(
            err,
            MorphError::MissingAuxiliaryVerbBuilder(TenseIndex::PresentContinuousOtyru)
        ));
    }

    #[test]
    fn test_row_shape() {
        let runner = VerbTestsetRunner::new().unwrap();
        let row = VerbTestsetRow {
            verb: "алу".into(),
            force_exceptional: false,
            tenses: vec![form_set(&[])],
        };
        assert!(matches!(
            runner.check_row(&row),
            Err(MorphError::TestsetShape { actual: 1, expected: 15, .. })
        ));
    }

    #[test]
    fn test_mismatch_is_counted() {
        let runner = VerbTestsetRunner::new().unwrap();
        let row = VerbTestsetRow {
            verb: "алу".into(),
            force_exceptional: false,
            tenses: vec![form_set(&["ал+а+мын"]); 15],
        };
        let stats = runner.check_row(&row).unwrap();
        assert_eq!(stats.rows, 1);
        assert_eq!(stats.mismatched_rows, 1);
        assert!(!stats.is_clean());
        let first = stats.first_mismatch.unwrap();
        assert_eq!(first.item, "алу");
        assert!(first.location.contains("PresentTransitive"));
    }

    #[test]
    fn test_noun_row() {
        let row = NounFormsRow {
            pos: "NOUN".into(),
            base: "кітап".into(),
            forms: vec![
                NounForm {
                    form: "Кітаптың".into(),
                    weight: 1.0,
                    number: Some(0),
                    septik: Some(1),
                    poss_person: None,
                    poss_number: None,
                    wordgen: None,
                },
                NounForm {
                    form: "кітабымның".into(),
                    weight: 1.0,
                    number: Some(0),
                    septik: Some(1),
                    poss_person: Some(0),
                    poss_number: Some(0),
                    wordgen: None,
                },
                NounForm {
                    form: "кітап".into(),
                    weight: 1.0,
                    number: None,
                    septik: None,
                    poss_person: None,
                    poss_number: None,
                    wordgen: None,
                },
            ],
        };
        let stats = NounTestsetRunner::new().check_row(&row);
        assert_eq!(stats.forms_checked, 2);
        assert_eq!(stats.skipped_forms, 1);
        assert!(stats.is_clean());
        assert_eq!(stats.mismatched_rows, 0);
    }

    #[test]
    fn test_merge_keeps_first() {
        let mut total = TestsetStats::default();
        let mut a = TestsetStats::default();
        a.record(Mismatch {
            item: "a".into(),
            location: String::new(),
            expected: "x".into(),
            actual: "y".into(),
        });
        a.finish_row();
        let mut b = a.clone();
        b.first_mismatch.as_mut().unwrap().item = "b".into();
        total.merge(a);
        total.merge(b);
        assert_eq!(total.rows, 2);
        assert_eq!(total.mismatched_forms, 2);
        assert_eq!(total.first_mismatch.unwrap().item, "a");
    }

    #[test]
    fn test_progress_logs_every_interval() {
        let progress = Progress::with_interval(5, 2);
        let logged: Vec<bool> = (0..5).map(|_| progress.tick()).collect();
        assert_eq!(logged, vec![false, true, false, true, false]);
        assert_eq!(progress.done.load(Ordering::Relaxed), 5);
        assert!(!Progress::new(3).tick());
    }

    #[test]
    fn test_progress_counts_every_row() {
        let rows: Vec<NounFormsRow> = (0..3)
            .map(|_| NounFormsRow {
                pos: "NOUN".into(),
                base: "үй".into(),
                forms: Vec::new(),
            })
            .collect();
        let stats = NounTestsetRunner::new().run(&rows);
        assert_eq!(stats.rows, 3);
    }
}
