use crate::questionnaire::Questionnaire;
use chrono::Local;
use clap::Args;
use risk_auditor::classification::{assess, assess_payload, ClassificationResult, RiskTier};
use risk_auditor::error::AppError;
use risk_auditor::inventory::{InventoryEntry, InventoryImporter};
use risk_auditor::report::{render_text_report, ReportOptions};
use serde_json::Value;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON request file to classify instead of running the console questionnaire
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Write the plain-text assessment report to this path
    #[arg(long)]
    pub(crate) report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct InventoryArgs {
    /// CSV export with systemName, systemPurpose and questionnaire answer columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { input, report } = args;

    let result = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            assess_payload(&parse_request(&path, &raw)?)?
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let answers = Questionnaire::new(stdin.lock(), stdout.lock()).run()?;
            assess(&answers)
        }
    };

    let stdout = io::stdout();
    render_console_result(&mut stdout.lock(), &result)?;

    if let Some(path) = report {
        let options = ReportOptions {
            assessed_on: Some(Local::now().date_naive()),
        };
        std::fs::write(&path, render_text_report(&result, &options))?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn parse_request(path: &Path, raw: &str) -> Result<Value, AppError> {
    serde_json::from_str(raw).map_err(|source| AppError::RequestFile {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn run_inventory(args: InventoryArgs) -> Result<(), AppError> {
    let entries = InventoryImporter::from_path(&args.csv)?;
    let stdout = io::stdout();
    render_inventory(&mut stdout.lock(), &entries)?;
    Ok(())
}

fn render_console_result<W: Write>(out: &mut W, result: &ClassificationResult) -> io::Result<()> {
    writeln!(out, "\n===============================================")?;
    writeln!(out, "System: {}", result.system_name)?;
    writeln!(out, "Purpose: {}", result.system_purpose)?;
    writeln!(out, "EU AI Act Classification: {}", result.risk_category)?;
    writeln!(out, "\n{}", result.risk_category.explanation())?;

    writeln!(out, "\nRecommendations")?;
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, recommendation)?;
    }
    Ok(())
}

fn render_inventory<W: Write>(out: &mut W, entries: &[InventoryEntry]) -> io::Result<()> {
    writeln!(out, "AI system inventory ({} rows)", entries.len())?;

    let mut rejected = 0;
    let mut counts = [0usize; 4];
    for entry in entries {
        let name = if entry.system_name.is_empty() {
            "<unnamed>"
        } else {
            entry.system_name.as_str()
        };

        match &entry.outcome {
            Ok(result) => {
                counts[result.risk_category as usize] += 1;
                writeln!(
                    out,
                    "- line {}: {} | {} | {} recommendation(s)",
                    entry.line,
                    name,
                    result.risk_category,
                    result.recommendations.len()
                )?;
            }
            Err(err) => {
                rejected += 1;
                writeln!(out, "- line {}: {} | rejected: {}", entry.line, name, err)?;
            }
        }
    }

    writeln!(out, "\nSummary")?;
    for tier in RiskTier::ordered() {
        writeln!(out, "- {}: {}", tier, counts[tier as usize])?;
    }
    writeln!(out, "- Rejected: {rejected}")?;
    Ok(())
}
