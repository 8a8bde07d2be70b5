//! Error types for morphological synthesis and dataset evaluation.

use thiserror::Error;

use crate::testset::TenseIndex;

/// Errors produced by the synthesis engine and the regression harness.
///
/// Per-form operations on a constructed builder never fail; the only
/// user-facing failure of the engine itself is a malformed dictionary form.
/// Inconsistent stem rewrites are ruled out by the `BaseTransform` and
/// `BaseModifier` enums, so there is no internal-error variant.
#[derive(Debug, Error)]
pub enum MorphError {
    /// The verb dictionary form cannot be conjugated.
    ///
    /// A valid form is 2 to 100 characters long, consists of lowercase
    /// letters, spaces and hyphens, and ends with "у" or "ю".
    #[error("invalid verb dictionary form {form:?}: {reason}")]
    InvalidVerbDictForm {
        /// The rejected input
        form: String,
        /// Which check failed
        reason: &'static str,
    },

    /// A testset tense requires an auxiliary verb builder that was not supplied.
    #[error("no auxiliary verb builder registered for tense {0:?}")]
    MissingAuxiliaryVerbBuilder(TenseIndex),

    /// A testset references a tense index outside the known range.
    #[error("unsupported tense index {0}")]
    UnsupportedTenseIndex(usize),

    /// A testset row does not carry the expected number of tense entries.
    #[error("testset row for {verb:?} has {actual} tense entries, expected {expected}")]
    TestsetShape {
        /// Lexical item of the row
        verb: String,
        /// Number of tense entries found
        actual: usize,
        /// Number of tense entries required
        expected: usize,
    },

    /// A dataset line is not valid JSON for the expected row type.
    #[error("failed to decode line {line}: {source}")]
    Json {
        /// 1-based line number in the dataset file
        line: usize,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Reading a dataset failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for morphology operations.
pub type Result<T> = std::result::Result<T, MorphError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn is_dataset_error(err: &MorphError) -> bool {
        match err {
            MorphError::InvalidVerbDictForm { .. } => false,
            MorphError::MissingAuxiliaryVerbBuilder(_)
            | MorphError::UnsupportedTenseIndex(_)
            | MorphError::TestsetShape { .. }
            | MorphError::Json { .. }
            | MorphError::Io(_) => true,
        }
    }

    #[test]
    fn test_only_construction_fails_in_engine() {
        let err = crate::verb::VerbBuilder::new("ал").unwrap_err();
        assert!(!is_dataset_error(&err));
        assert!(err.to_string().contains("\"ал\""));
        assert!(is_dataset_error(&MorphError::UnsupportedTenseIndex(15)));
        assert_eq!(MorphError::UnsupportedTenseIndex(15).to_string(), "unsupported tense index 15");
    }
}
