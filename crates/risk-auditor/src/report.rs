//! Plain-text rendering of a classification result for download or CLI export.

use crate::classification::ClassificationResult;
use chrono::NaiveDate;
use std::fmt::Write;

pub const DEFAULT_REPORT_FILE_NAME: &str = "EUAIAct_Results.txt";

const BANNER: &str = "=================================================";

const DISCLAIMER: [&str; 3] = [
    "DISCLAIMER: This assessment is provided for informational purposes only",
    "and should not be considered legal advice. Consult with legal experts",
    "for a comprehensive compliance assessment with the EU AI Act.",
];

/// Presentation switches for [`render_text_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub assessed_on: Option<NaiveDate>,
}

pub fn render_text_report(result: &ClassificationResult, options: &ReportOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write_report(&mut out, result, options);
    out
}

fn write_report(
    out: &mut String,
    result: &ClassificationResult,
    options: &ReportOptions,
) -> std::fmt::Result {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "EU AI ACT RISK CLASSIFICATION ASSESSMENT")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;

    writeln!(out, "SYSTEM INFORMATION")?;
    writeln!(out, "------------------")?;
    writeln!(out, "System Name: {}", result.system_name)?;
    writeln!(out, "System Purpose: {}", result.system_purpose)?;
    if let Some(date) = options.assessed_on {
        writeln!(out, "Assessment Date: {}", date.format("%Y-%m-%d"))?;
    }
    writeln!(out)?;

    writeln!(out, "CLASSIFICATION RESULT")?;
    writeln!(out, "---------------------")?;
    writeln!(out, "EU AI Act Classification: {}", result.risk_category)?;
    writeln!(out)?;
    writeln!(out, "Risk Category Explanation:")?;
    writeln!(out, "{}", result.risk_category.explanation())?;
    writeln!(out)?;

    writeln!(out, "COMPLIANCE RECOMMENDATIONS")?;
    writeln!(out, "--------------------------")?;
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, recommendation)?;
    }
    writeln!(out)?;

    writeln!(out, "{BANNER}")?;
    for line in DISCLAIMER {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{BANNER}")?;
    Ok(())
}

/// Reduces a caller-supplied download name to a safe `Content-Disposition` filename.
pub fn sanitize_file_name(requested: Option<&str>) -> String {
    let Some(requested) = requested else {
        return DEFAULT_REPORT_FILE_NAME.to_string();
    };

    let base = requested
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && !matches!(c, '"' | ';'))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.');

    if cleaned.is_empty() {
        DEFAULT_REPORT_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}
