//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Top-level command line.
#[derive(Parser)]
#[command(name = "kazakh-morph")]
#[command(about = "Kazakh verb conjugation, noun declension and adjective comparison")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Conjugate a verb
    Conjugate {
        /// Verb in dictionary form, e.g. "бару"
        verb: String,

        /// Only this tense (all tenses if not specified)
        #[arg(short, long)]
        tense: Option<TenseArg>,

        /// Use the exceptional reading of a homonymous verb
        #[arg(short = 'x', long, conflicts_with = "no_exceptional")]
        exceptional: bool,

        /// Use the regular reading even if the config enables the exceptional one
        #[arg(long)]
        no_exceptional: bool,

        /// Auxiliary verb for continuous tenses
        #[arg(short, long)]
        aux: Option<String>,

        /// Show forms split into parts
        #[arg(short, long)]
        parts: bool,
    },

    /// Decline a noun
    Decline {
        /// Noun in dictionary form, e.g. "кітап"
        noun: String,

        /// Show forms split into parts
        #[arg(short, long)]
        parts: bool,
    },

    /// Show comparative forms of an adjective
    Compare {
        /// Adjective in dictionary form, e.g. "үлкен"
        adjective: String,
    },

    /// Run a regression dataset
    Testset {
        /// Dataset kind and file
        #[command(subcommand)]
        kind: TestsetKind,
    },

    /// Show or update user settings
    Config {
        /// What to do with the settings
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Kind of regression dataset.
#[derive(Subcommand)]
pub enum TestsetKind {
    /// Verb dataset (JSONL)
    Verbs {
        /// Dataset file
        path: PathBuf,
    },
    /// Noun dataset (JSONL)
    Nouns {
        /// Dataset file
        path: PathBuf,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path and current settings
    Show,
    /// Update one setting
    Set {
        /// force_exceptional, color, show_parts or default_aux
        key: String,
        /// New value
        value: String,
    },
}

/// Exceptional-reading override from `--exceptional` / `--no-exceptional`.
///
/// `None` leaves the configured value in effect.
pub fn exceptional_override(exceptional: bool, no_exceptional: bool) -> Option<bool> {
    match (exceptional, no_exceptional) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Tenses and constructions printed by `conjugate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TenseArg {
    /// Present transitive (ауыспалы осы шақ)
    PresentTransitive,
    /// Present continuous with the auxiliary (нақ осы шақ)
    PresentContinuous,
    /// Simple past (жедел өткен шақ)
    Past,
    /// Remote past (бұрынғы өткен шақ)
    RemotePast,
    /// Evidential past
    PastUncertain,
    /// Habitual past (ауыспалы өткен шақ)
    PastTransitive,
    /// Possible future (болжалды келер шақ)
    PossibleFuture,
    /// Intention future (мақсатты келер шақ)
    IntentionFuture,
    /// Conditional mood
    Conditional,
    /// Imperative mood
    Imperative,
    /// Optative mood
    Optative,
    /// Optative mood in past tense
    OptativePast,
    /// Ability with алу
    Can,
    /// Desire with келу
    Want,
}

impl TenseArg {
    /// Every value in display order.
    pub const ALL: [TenseArg; 14] = [
        TenseArg::PresentTransitive,
        TenseArg::PresentContinuous,
        TenseArg::Past,
        TenseArg::RemotePast,
        TenseArg::PastUncertain,
        TenseArg::PastTransitive,
        TenseArg::PossibleFuture,
        TenseArg::IntentionFuture,
        TenseArg::Conditional,
        TenseArg::Imperative,
        TenseArg::Optative,
        TenseArg::OptativePast,
        TenseArg::Can,
        TenseArg::Want,
    ];
}

impl fmt::Display for TenseArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TenseArg::PresentTransitive => "present transitive",
            TenseArg::PresentContinuous => "present continuous",
            TenseArg::Past => "past",
            TenseArg::RemotePast => "remote past",
            TenseArg::PastUncertain => "past uncertain",
            TenseArg::PastTransitive => "past transitive",
            TenseArg::PossibleFuture => "possible future",
            TenseArg::IntentionFuture => "intention future",
            TenseArg::Conditional => "conditional",
            TenseArg::Imperative => "imperative",
            TenseArg::Optative => "optative",
            TenseArg::OptativePast => "optative past",
            TenseArg::Can => "can",
            TenseArg::Want => "want",
        };
        f.write_str(name)
    }
}
