//! Plain-text renderings of an analysis report.

use std::fmt::Write;

use crate::domain::questionnaire::Dimension;

use super::AnalysisReport;

/// Renders the report as a markdown document, suitable for saving to disk.
pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Your Ikigai Analysis");
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out, "{}", report.summary);
    let _ = writeln!(out, "## Fun Insight");
    let _ = writeln!(out, "{}", report.fun_insight);

    let _ = writeln!(out, "## Scores");
    for dimension in Dimension::ALL {
        let _ = writeln!(out, "- {}: {}%", dimension, report.scores.get(dimension));
    }

    let _ = writeln!(out, "## Insights");
    for dimension in Dimension::ALL {
        let _ = writeln!(out, "### {}", dimension);
        let _ = writeln!(out, "{}", report.insights.get(dimension));
    }

    let _ = writeln!(out, "## Career Matches");
    for career_match in &report.career_matches {
        let _ = writeln!(out, "### {}", career_match.title);
        let _ = writeln!(out, "Why it fits: {}", career_match.why_it_fits);
        let _ = writeln!(out, "Next step: {}", career_match.next_step);
    }

    let _ = writeln!(out, "## Recommendations");
    for recommendation in &report.recommendations {
        let _ = writeln!(out, "- {}", recommendation);
    }

    out
}

/// Renders the short share text (summary, per-dimension insights, fun insight).
pub fn share_text(report: &AnalysisReport) -> String {
    let insights = Dimension::ALL
        .iter()
        .map(|&d| format!("{}: {}", d, report.insights.get(d)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "My Ikigai Analysis:\n{}\n\nKey Insights:\n{}\n\nFun Insight: {}",
        report.summary, insights, report.fun_insight
    )
}
