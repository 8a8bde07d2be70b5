//! Dataset rows and the JSONL loader.
//!
//! # Format
//!
//! One JSON object per line. Verb rows:
//!
//! ```text
//! {"verb": "алу", "forceExceptional": false, "tenses": [{"Statement": ["ал+а+мын", ...], "Negative": [...], "Question": [...]}, ...]}
//! ```
//!
//! Each expected form lists its parts separated by `+`. Noun rows:
//!
//! ```text
//! {"pos": "NOUN", "base": "кітап", "forms": [{"form": "кітабымның", "weight": 1.0, "number": 0, "septik": 1, "possPerson": 0, "possNumber": 0}]}
//! ```
//!
//! Unknown keys are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::grammar::SentenceType;

/// Separator between parts of an expected form.
pub const PART_SEPARATOR: char = '+';

/// Expected forms of one tense, eight per sentence type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlusFormSet {
    /// Statement forms
    #[serde(rename = "Statement", default)]
    pub statement: Vec<String>,
    /// Negative forms
    #[serde(rename = "Negative", default)]
    pub negative: Vec<String>,
    /// Question forms
    #[serde(rename = "Question", default)]
    pub question: Vec<String>,
}

impl PlusFormSet {
    /// Forms listed for a sentence type.
    pub fn forms(&self, sentence_type: SentenceType) -> &[String] {
        match sentence_type {
            SentenceType::Statement => &self.statement,
            SentenceType::Negative => &self.negative,
            SentenceType::Question => &self.question,
        }
    }

    /// Forms split into their non-empty parts.
    pub fn expected_parts(&self, sentence_type: SentenceType) -> Vec<Vec<&str>> {
        self.forms(sentence_type)
            .iter()
            .map(|form| split_parts(form))
            .collect()
    }
}

/// Non-empty parts of a `+`-separated form. An empty form has no parts.
pub fn split_parts(form: &str) -> Vec<&str> {
    form.split(PART_SEPARATOR).filter(|p| !p.is_empty()).collect()
}

/// Expected conjugation of one verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbTestsetRow {
    /// Dictionary form
    pub verb: String,
    /// Whether the exceptional reading is requested
    #[serde(default)]
    pub force_exceptional: bool,
    /// Forms per tense, in tense index order
    pub tenses: Vec<PlusFormSet>,
}

/// One expected noun form with its grammatical coordinates.
///
/// Indices follow the enum ordinals of [`GrammarNumber`](crate::grammar::GrammarNumber),
/// [`Septik`](crate::grammar::Septik) and [`GrammarPerson`](crate::grammar::GrammarPerson).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NounForm {
    /// Surface form
    pub form: String,
    /// Corpus weight
    #[serde(default)]
    pub weight: f64,
    /// Number of the noun
    #[serde(default)]
    pub number: Option<usize>,
    /// Case
    #[serde(default)]
    pub septik: Option<usize>,
    /// Possessor person
    #[serde(default)]
    pub poss_person: Option<usize>,
    /// Possessor number
    #[serde(default)]
    pub poss_number: Option<usize>,
    /// Word-formation tag
    #[serde(default)]
    pub wordgen: Option<String>,
}

/// Expected forms of one noun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NounFormsRow {
    /// Part of speech tag
    #[serde(default)]
    pub pos: String,
    /// Dictionary form
    pub base: String,
    /// Forms to check
    pub forms: Vec<NounForm>,
}

/// Load a JSONL dataset. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`MorphError::Io`] if the file cannot be read and
/// [`MorphError::Json`] with the 1-based line number if a line does not decode.
pub fn load_jsonl<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let reader = BufReader::new(File::open(path)?);
    parse_jsonl(reader)
}

/// Parse JSONL rows from any reader.
pub fn parse_jsonl<T: DeserializeOwned, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let row = serde_json::from_str(trimmed).map_err(|source| MorphError::Json {
            line: index + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_parts() {
        assert_eq!(split_parts("ал+а+мын"), vec!["ал", "а", "мын"]);
        assert_eq!(split_parts("ала ма?"), vec!["ала ма?"]);
        assert!(split_parts("").is_empty());
    }

    #[test]
    fn test_parse_verb_row() {
        let line = r#"{"verb": "алу", "forceExceptional": true, "tenses": [{"Statement": ["ал+а+мын"], "Negative": [], "Question": [""]}], "extra": 1}"#;
        let rows: Vec<VerbTestsetRow> = parse_jsonl(line.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].verb, "алу");
        assert!(rows[0].force_exceptional);
        let set = &rows[0].tenses[0];
        assert_eq!(set.expected_parts(SentenceType::Statement), vec![vec!["ал", "а", "мын"]]);
        assert_eq!(set.expected_parts(SentenceType::Question), vec![Vec::<&str>::new()]);
        assert!(set.forms(SentenceType::Negative).is_empty());
    }

    #[test]
    fn test_parse_noun_row() {
        let text = "\n{\"pos\": \"NOUN\", \"base\": \"кітап\", \"forms\": [{\"form\": \"кітаптың\", \"weight\": 0.5, \"number\": 0, \"septik\": 1}]}\n\n";
        let rows: Vec<NounFormsRow> = parse_jsonl(text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        let form = &rows[0].forms[0];
        assert_eq!(form.septik, Some(1));
        assert_eq!(form.poss_person, None);
    }

    #[test]
    fn test_decode_error_line() {
        let text = "{\"verb\": \"алу\", \"tenses\": []}\nnot json\n";
        let err = parse_jsonl::<VerbTestsetRow, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MorphError::Json { line: 2, .. }));
    }
}
