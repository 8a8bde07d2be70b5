//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::adj::AdjBuilder;
use crate::grammar::{GrammarForm, SentenceType, Septik, VerbShak};
use crate::noun::NounBuilder;
use crate::phrasal::Phrasal;
use crate::testset::{NounTestsetRunner, TestsetStats, VerbTestsetRunner};
use crate::verb::VerbBuilder;

use super::args::{exceptional_override, Commands, ConfigAction, TenseArg, TestsetKind};
use super::config::{config_file_path_with_override, PersistentConfig};

/// Marker appended to forms flagged as forbidden
pub const FORBIDDEN_MARK: &str = "*";

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.as_deref();
    let config = PersistentConfig::load_from(config_path)?;
    if !config.color() {
        colored::control::set_override(false);
    }

    match command {
        Commands::Conjugate {
            verb,
            tense,
            exceptional,
            no_exceptional,
            aux,
            parts,
        } => {
            let config = config.merge_with_cli(
                exceptional_override(exceptional, no_exceptional),
                parts.then_some(true),
                aux,
            );
            cmd_conjugate(&verb, tense, &config)
        }
        Commands::Decline { noun, parts } => {
            let config = config.merge_with_cli(None, parts.then_some(true), None);
            cmd_decline(&noun, &config)
        }
        Commands::Compare { adjective } => cmd_compare(&adjective, &config),
        Commands::Testset { kind } => cmd_testset(kind),
        Commands::Config { action } => cmd_config(action, config, config_path),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Text of a form: raw, or parts joined with `+`, followed by the alternative.
pub fn render_phrasal(phrasal: &Phrasal, show_parts: bool) -> String {
    let mut out = if show_parts {
        phrasal.part_texts().join("+")
    } else {
        phrasal.raw().to_owned()
    };
    if phrasal.forbidden() {
        out.push_str(FORBIDDEN_MARK);
    }
    if let Some(alternative) = phrasal.alternative() {
        out.push_str(" / ");
        out.push_str(&render_phrasal(alternative, show_parts));
    }
    out
}

fn print_row(cells: &[String]) {
    let line = cells
        .iter()
        .map(|cell| format!("{:<28}", cell))
        .collect::<Vec<_>>()
        .join("");
    println!("  {}", line.trim_end());
}

fn print_header(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

// ============================================================================
// Conjugation
// ============================================================================

/// One form of `tense` for the given pronoun and sentence type.
pub fn conjugate_form(
    builder: &VerbBuilder,
    aux: &VerbBuilder,
    tense: TenseArg,
    form: GrammarForm,
    sentence_type: SentenceType,
) -> Phrasal {
    let (person, number) = (form.person(), form.number());
    match tense {
        TenseArg::PresentTransitive => builder.present_transitive_form(person, number, sentence_type),
        TenseArg::PresentContinuous => {
            builder.present_continuous_form(person, number, sentence_type, aux, false)
        }
        TenseArg::Past => builder.past_form(person, number, sentence_type),
        TenseArg::RemotePast => builder.remote_past_tense(person, number, sentence_type, false),
        TenseArg::PastUncertain => builder.past_uncertain_tense(person, number, sentence_type),
        TenseArg::PastTransitive => builder.past_transitive_tense(person, number, sentence_type),
        TenseArg::PossibleFuture => builder.possible_future_form(person, number, sentence_type),
        TenseArg::IntentionFuture => builder.intention_future_form(person, number, sentence_type),
        TenseArg::Conditional => builder.conditional_mood(person, number, sentence_type),
        TenseArg::Imperative => builder.imperative_mood(person, number, sentence_type),
        TenseArg::Optative => builder.optative_mood(person, number, sentence_type),
        TenseArg::OptativePast => builder.optative_mood_in_past_tense(person, number, sentence_type),
        TenseArg::Can => builder.can_clause(person, number, sentence_type),
        TenseArg::Want => {
            builder.want_clause(person, number, sentence_type, VerbShak::PresentTransitive)
        }
    }
}

/// Rows of pronoun, statement, negative and question for one tense.
pub fn conjugation_table(
    builder: &VerbBuilder,
    aux: &VerbBuilder,
    tense: TenseArg,
    show_parts: bool,
) -> Vec<[String; 4]> {
    GrammarForm::ALL
        .iter()
        .map(|&form| {
            let cell = |st| render_phrasal(&conjugate_form(builder, aux, tense, form, st), show_parts);
            [
                form.pronoun().to_owned(),
                cell(SentenceType::Statement),
                cell(SentenceType::Negative),
                cell(SentenceType::Question),
            ]
        })
        .collect()
}

fn cmd_conjugate(verb: &str, tense: Option<TenseArg>, config: &PersistentConfig) -> Result<()> {
    let builder = VerbBuilder::with_force_exceptional(verb, config.force_exceptional())
        .with_context(|| format!("Cannot conjugate {:?}", verb))?;
    let aux = VerbBuilder::new(config.default_aux())
        .with_context(|| format!("Invalid auxiliary verb {:?}", config.default_aux()))?;
    debug!(verb, aux = config.default_aux(), "conjugating");

    let tenses = match tense {
        Some(tense) => vec![tense],
        None => TenseArg::ALL.to_vec(),
    };

    println!("{} {}", "Verb:".bold(), verb.green());
    let mut forbidden_seen = false;
    for tense in tenses {
        print_header(&tense.to_string());
        for row in conjugation_table(&builder, &aux, tense, config.show_parts()) {
            forbidden_seen |= row.iter().any(|cell| cell.contains(FORBIDDEN_MARK));
            print_row(&row);
        }
    }
    if forbidden_seen {
        println!();
        println!("{} forbidden combination", FORBIDDEN_MARK.yellow());
    }
    Ok(())
}

// ============================================================================
// Declension
// ============================================================================

/// Rows of case name, bare, plural and first person possessive forms.
pub fn declension_table(noun: &NounBuilder, show_parts: bool) -> Vec<[String; 4]> {
    Septik::ALL
        .iter()
        .map(|&septik| {
            [
                septik.kazakh_name().to_owned(),
                render_phrasal(&noun.septik_form(septik), show_parts),
                render_phrasal(&noun.plural_septik_form(septik), show_parts),
                render_phrasal(
                    &noun.possessive_septik_form(
                        GrammarForm::Men.person(),
                        GrammarForm::Men.number(),
                        septik,
                    ),
                    show_parts,
                ),
            ]
        })
        .collect()
}

fn cmd_decline(noun: &str, config: &PersistentConfig) -> Result<()> {
    if noun.trim().is_empty() {
        bail!("Noun must not be empty");
    }
    let builder = NounBuilder::of_noun(noun);
    let show_parts = config.show_parts();

    println!("{} {}", "Noun:".bold(), noun.green());
    print_header("cases");
    print_row(&["".into(), "singular".into(), "plural".into(), "possessive (мен)".into()]);
    for row in declension_table(&builder, show_parts) {
        print_row(&row);
    }

    print_header("possessive");
    for form in GrammarForm::ALL {
        let phrasal = builder.possessive_form(form.person(), form.number());
        print_row(&[form.poss().to_owned(), render_phrasal(&phrasal, show_parts)]);
    }
    Ok(())
}

// ============================================================================
// Adjectives
// ============================================================================

fn cmd_compare(adjective: &str, config: &PersistentConfig) -> Result<()> {
    if adjective.trim().is_empty() {
        bail!("Adjective must not be empty");
    }
    let builder = AdjBuilder::new(adjective);
    println!("{} {}", "Adjective:".bold(), adjective.green());
    print_row(&["-рақ".into(), render_phrasal(&builder.rak_form(), config.show_parts())]);
    print_row(&["-лау".into(), render_phrasal(&builder.lau_form(), config.show_parts())]);
    Ok(())
}

// ============================================================================
// Testsets and configuration
// ============================================================================

fn report(stats: &TestsetStats) -> Result<()> {
    println!("{}", stats);
    if stats.is_clean() {
        println!("{}", "All forms match".green().bold());
        Ok(())
    } else {
        bail!(
            "{} of {} forms did not match",
            stats.mismatched_forms,
            stats.forms_checked
        )
    }
}

fn cmd_testset(kind: TestsetKind) -> Result<()> {
    let stats = match kind {
        TestsetKind::Verbs { path } => VerbTestsetRunner::new()?
            .run_file(&path)
            .with_context(|| format!("Failed to evaluate {}", path.display()))?,
        TestsetKind::Nouns { path } => NounTestsetRunner::new()
            .run_file(&path)
            .with_context(|| format!("Failed to evaluate {}", path.display()))?,
    };
    report(&stats)
}

fn print_config(config: &PersistentConfig) {
    println!("{}", "Current Configuration:".bold());
    println!("  force_exceptional: {}", config.force_exceptional().to_string().green());
    println!("  color:             {}", config.color().to_string().green());
    println!("  show_parts:        {}", config.show_parts().to_string().green());
    println!("  default_aux:       {}", config.default_aux().green());
}

fn cmd_config(action: ConfigAction, mut config: PersistentConfig, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let path = config_file_path_with_override(config_path)?;
            println!("Config file: {}", path.display().to_string().cyan());
            println!();
            print_config(&config);
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            let path = config.save_to(config_path)?;
            println!("  Set {}: {}", key, value.green());
            println!();
            println!(
                "{} {}",
                "Configuration saved to".green().bold(),
                path.display().to_string().cyan()
            );
        }
    }
    Ok(())
}
