use std::path::Path;

use intake_core::{QuestionnaireDocument, SubmitterIdentity};
use intake_rules::{FullReport, GateError, Step, ValidationContext, Violation, Wizard};
use intake_storage::{MemoryStore, RecordSummary, SubmitError, submit};
use tracing::info;

use crate::config::{self, IntakeConfig};

/// Whether a command found its input acceptable. Drives the exit status.
pub type Clean = bool;

pub fn read_document(path: &Path) -> eyre::Result<QuestionnaireDocument> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    let document = QuestionnaireDocument::from_json(&contents)
        .map_err(|e| eyre::eyre!("{} is not a questionnaire document: {e}", path.display()))?;
    Ok(document)
}

pub fn template() -> eyre::Result<Clean> {
    println!("{}", QuestionnaireDocument::empty().to_json_pretty()?);
    Ok(true)
}

pub fn validate(
    path: &Path,
    step: Option<Step>,
    json: bool,
    ctx: &ValidationContext,
) -> eyre::Result<Clean> {
    let document = read_document(path)?;

    match step {
        Some(step) => {
            let violations = intake_rules::validate(step, &document, ctx);
            info!(%step, count = violations.len(), "validated step");
            if json {
                println!("{}", serde_json::to_string_pretty(&violations)?);
            } else if violations.is_empty() {
                println!("{step}: ok");
            } else {
                println!("{step}:");
                print_violations(&violations);
            }
            Ok(violations.is_empty())
        }
        None => {
            let report = intake_rules::full_validate(&document, ctx);
            info!(count = report.total(), "validated document");
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(report.is_clean())
        }
    }
}

pub fn walk(path: &Path, ctx: ValidationContext) -> eyre::Result<Clean> {
    let mut wizard = Wizard::with_document(read_document(path)?, ctx);
    let reached = wizard.advance_while_clean();

    for step in Step::ALL.iter().take_while(|s| **s < reached) {
        println!("✓ {step}");
    }

    if reached != Step::Review || !wizard.can_advance() {
        println!("✗ {reached}");
        print_violations(&wizard.violations());
        return Ok(false);
    }

    match wizard.ready_for_submit() {
        Ok(_) => {
            println!("✓ {reached}: ready to submit");
            Ok(true)
        }
        Err(e) => {
            println!("✗ {reached}: {e}");
            if let GateError::Incomplete(report) = &e {
                print_report(report);
            }
            Ok(false)
        }
    }
}

pub fn check_identity(identity: &SubmitterIdentity) -> Clean {
    let problems = identity.problems();
    if problems.is_empty() {
        println!("identity ok");
    }
    for problem in &problems {
        println!("  • {problem}");
    }
    problems.is_empty()
}

pub async fn submit_document(
    path: &Path,
    identity: &SubmitterIdentity,
    ctx: ValidationContext,
) -> eyre::Result<Clean> {
    let mut wizard = Wizard::with_document(read_document(path)?, ctx);
    wizard.advance_while_clean();

    let store = MemoryStore::new();
    match submit(&store, &wizard, identity).await {
        Ok(record) => {
            println!("stored record {} ({})", record.id, RecordSummary::of(&record.data));
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(true)
        }
        Err(SubmitError::InvalidIdentity { problems }) => {
            println!("identity rejected:");
            for problem in &problems {
                println!("  • {problem}");
            }
            Ok(false)
        }
        Err(SubmitError::NotReady(e)) => {
            println!("not submitted: {e}");
            match e {
                GateError::Incomplete(report) => print_report(&report),
                _ => print_violations(&wizard.violations()),
            }
            Ok(false)
        }
        Err(e @ SubmitError::Store(_)) => Err(e.into()),
    }
}

pub fn show_config(path: &Path, config: &IntakeConfig) -> eyre::Result<Clean> {
    let source = if path.exists() { "file" } else { "defaults" };
    println!("# {} ({source})", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(true)
}

pub fn init_config(path: &Path, config: &IntakeConfig) -> eyre::Result<Clean> {
    config::save_config(path, config)?;
    println!("wrote {}", path.display());
    Ok(true)
}

fn print_violations(violations: &[Violation]) {
    for violation in violations {
        println!("  • [{}] {}", violation.scope.label(), violation.message);
    }
}

fn print_report(report: &FullReport) {
    for section in &report.sections {
        if section.violations.is_empty() {
            println!("✓ {}", section.scope.label());
        } else {
            println!("✗ {}", section.scope.label());
            print_violations(&section.violations);
        }
    }
}
