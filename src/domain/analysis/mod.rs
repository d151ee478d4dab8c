//! Analysis module - the normalized analysis result and its renderings.

mod render;
mod report;

pub use render::{share_text, to_markdown};
pub use report::{
    AnalysisFailure, AnalysisOutcome, AnalysisReport, CareerMatch, DimensionInsights,
    DimensionScores,
};

#[cfg(test)]
pub(crate) use report::sample_report;
