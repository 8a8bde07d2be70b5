//! Dataset runners reading JSONL files from disk.

use std::fs;
use std::io::Write;

use kazakh_morph::prelude::*;
use kazakh_morph::testset::{
    NounTestsetRunner, PlusFormSet, TenseIndex, VerbTestsetRow, VerbTestsetRunner, PART_SEPARATOR,
};
use tempfile::TempDir;

fn joined(phrasal: &Phrasal) -> String {
    phrasal.part_texts().join(&PART_SEPARATOR.to_string())
}

/// A row whose expectations are whatever the runner currently generates.
fn generated_row(runner: &VerbTestsetRunner, verb: &str) -> VerbTestsetRow {
    let builder = VerbBuilder::new(verb).unwrap();
    let tenses = TenseIndex::ALL
        .iter()
        .map(|&tense| {
            let forms = |st| {
                runner
                    .generate_forms(tense, &builder, st)
                    .unwrap()
                    .iter()
                    .map(joined)
                    .collect::<Vec<_>>()
            };
            PlusFormSet {
                statement: forms(SentenceType::Statement),
                negative: forms(SentenceType::Negative),
                question: forms(SentenceType::Question),
            }
        })
        .collect();
    VerbTestsetRow {
        verb: verb.to_owned(),
        force_exceptional: false,
        tenses,
    }
}

#[test]
fn test_verb_file_round_trip() {
    let runner = VerbTestsetRunner::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verbs.jsonl");

    let mut file = fs::File::create(&path).unwrap();
    for verb in ["алу", "келу", "бару", "жазу"] {
        let row = generated_row(&runner, verb);
        writeln!(file, "{}", serde_json::to_string(&row).unwrap()).unwrap();
        writeln!(file).unwrap();
    }
    drop(file);

    let stats = runner.run_file(&path).unwrap();
    assert_eq!(stats.rows, 4);
    assert!(stats.is_clean(), "{}", stats);
    assert_eq!(stats.forms_checked, 4 * 15 * 3 * 8);
}

#[test]
fn test_verb_file_reports_mismatch() {
    let runner = VerbTestsetRunner::new().unwrap();
    let mut row = generated_row(&runner, "алу");
    let past = &mut row.tenses[TenseIndex::PastSimple.index()].statement[0];
    let generated = past.clone();
    *past = "ал+ған+мын".to_owned();

    let stats = runner.run(&[row]).unwrap();
    assert_eq!(stats.mismatched_rows, 1);
    assert_eq!(stats.mismatched_forms, 1);
    let mismatch = stats.first_mismatch.unwrap();
    assert_eq!(mismatch.item, "алу");
    assert_eq!(mismatch.expected, "ал+ған+мын");
    assert_eq!(mismatch.actual, generated);
}

#[test]
fn test_noun_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nouns.jsonl");
    let contents = r#"{"pos": "NOUN", "base": "кітап", "forms": [{"form": "кітаптың", "weight": 1.0, "number": 0, "septik": 1}, {"form": "Кітабыма", "number": 0, "septik": 2, "possPerson": 0, "possNumber": 0}, {"form": "кітаптарда", "number": 1, "septik": 4}, {"form": "кітаптарымның", "number": 1, "septik": 1, "possPerson": 0, "possNumber": 0}]}
{"pos": "NOUN", "base": "ауыз", "forms": [{"form": "аузынан", "number": 0, "septik": 5, "possPerson": 3, "possNumber": 0}, {"form": "ауыз", "wordgen": "base"}]}
"#;
    fs::write(&path, contents).unwrap();

    let stats = NounTestsetRunner::new().run_file(&path).unwrap();
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.forms_checked, 4);
    assert_eq!(stats.skipped_forms, 2);
    assert!(stats.is_clean(), "{}", stats);
}

#[test]
fn test_bad_line_is_located() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jsonl");
    fs::write(
        &path,
        "{\"pos\": \"NOUN\", \"base\": \"үй\", \"forms\": []}\n\n{\"base\": 5}\n",
    )
    .unwrap();

    let err = NounTestsetRunner::new().run_file(&path).unwrap_err();
    assert!(matches!(err, MorphError::Json { line: 3, .. }), "{:?}", err);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = VerbTestsetRunner::new()
        .unwrap()
        .run_file(dir.path().join("absent.jsonl"))
        .unwrap_err();
    assert!(matches!(err, MorphError::Io(_)), "{:?}", err);
}
