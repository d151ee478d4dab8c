//! The normalized analysis result and its terminal failure shape.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::Dimension;

/// Per-dimension scores in `[0, 100]` after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub passion: f64,
    pub skills: f64,
    pub impact: f64,
    pub career: f64,
}

impl DimensionScores {
    /// Returns the score for a dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Passion => self.passion,
            Dimension::Skills => self.skills,
            Dimension::Impact => self.impact,
            Dimension::Career => self.career,
        }
    }
}

/// Per-dimension descriptive insights.
///
/// The response contract only requires the `insights` object to be present,
/// so individual entries default to empty rather than failing the whole
/// report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionInsights {
    #[serde(default)]
    pub passion: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub career: String,
}

impl DimensionInsights {
    /// Returns the insight for a dimension.
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Passion => &self.passion,
            Dimension::Skills => &self.skills,
            Dimension::Impact => &self.impact,
            Dimension::Career => &self.career,
        }
    }
}

/// One suggested career with its justification and a concrete next step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    #[serde(rename = "whyItFits")]
    pub why_it_fits: String,
    #[serde(rename = "nextStep")]
    pub next_step: String,
}

/// The validated, normalized analysis returned to the presentation layer.
///
/// Field names on the wire match the schema embedded in the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub scores: DimensionScores,
    pub insights: DimensionInsights,
    pub recommendations: Vec<String>,
    #[serde(rename = "careerMatches")]
    pub career_matches: Vec<CareerMatch>,
    #[serde(rename = "funInsight")]
    pub fun_insight: String,
    pub summary: String,
}

/// Terminal failure shape consumed by the presentation layer.
///
/// Serializes as `{"error": true, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: bool,
    pub message: String,
}

impl AnalysisFailure {
    /// Creates a failure with the given user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

/// What the pipeline hands back to its caller. Never an escaping error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Failed(AnalysisFailure),
}

impl AnalysisOutcome {
    /// Returns true if the analysis succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Report(_))
    }
}

/// Fully populated report used across unit tests.
#[cfg(test)]
pub(crate) fn sample_report() -> AnalysisReport {
    AnalysisReport {
        scores: DimensionScores {
            passion: 75.0,
            skills: 65.0,
            impact: 55.0,
            career: 40.0,
        },
        insights: DimensionInsights {
            passion: "You light up around creative work".to_string(),
            skills: "People lean on your patience".to_string(),
            impact: "Fairness drives you".to_string(),
            career: "You want autonomy".to_string(),
        },
        recommendations: vec![
            "UX designer".to_string(),
            "Take a design systems course".to_string(),
            "Start that side project already".to_string(),
        ],
        career_matches: vec![
            CareerMatch {
                title: "Product Designer".to_string(),
                why_it_fits: "Combines visual craft with user empathy".to_string(),
                next_step: "Build a small portfolio".to_string(),
            },
            CareerMatch {
                title: "Developer Advocate".to_string(),
                why_it_fits: "You teach easily".to_string(),
                next_step: "Write one tutorial".to_string(),
            },
            CareerMatch {
                title: "Design Engineer".to_string(),
                why_it_fits: "Bridges coding and aesthetics".to_string(),
                next_step: "Ship a component library".to_string(),
            },
        ],
        fun_insight: "You answered 'coding' before your coffee kicked in".to_string(),
        summary: "A maker pulled toward design.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_with_wire_field_names() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("careerMatches").is_some());
        assert!(json.get("funInsight").is_some());
        assert!(json["careerMatches"][0].get("whyItFits").is_some());
        assert!(json["careerMatches"][0].get("nextStep").is_some());

        let back: AnalysisReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn missing_insight_entries_default_to_empty() {
        let insights: DimensionInsights =
            serde_json::from_str(r#"{"passion": "only one"}"#).unwrap();
        assert_eq!(insights.passion, "only one");
        assert_eq!(insights.skills, "");
    }

    #[test]
    fn failure_serializes_with_error_flag() {
        let failure = AnalysisFailure::new("boom");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "boom");
    }

    #[test]
    fn scores_lookup_by_dimension() {
        let report = sample_report();
        assert_eq!(report.scores.get(Dimension::Passion), 75.0);
        assert_eq!(report.scores.get(Dimension::Career), 40.0);
    }
}
