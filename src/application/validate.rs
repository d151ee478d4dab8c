//! Structural validation and normalization of parsed model replies.
//!
//! Validation is the sole gate between the model's untyped reply and the
//! typed [`AnalysisReport`]: the checks run in a fixed order and all must
//! hold. Failures are collected rather than short-circuited so a retry log
//! shows everything wrong with a reply at once.

use serde_json::Value;
use thiserror::Error;

use crate::domain::analysis::AnalysisReport;
use crate::domain::questionnaire::Dimension;

use super::extract::{extract_json, ExtractError};

/// Required top-level fields, checked in this order.
const REQUIRED_FIELDS: [&str; 6] = [
    "scores",
    "insights",
    "recommendations",
    "careerMatches",
    "funInsight",
    "summary",
];

const MIN_RECOMMENDATIONS: usize = 3;
const MIN_CAREER_MATCHES: usize = 3;

/// One violated validation check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid score for '{0}'")]
    InvalidScore(Dimension),

    #[error("recommendations must have at least {MIN_RECOMMENDATIONS} entries, got {0}")]
    TooFewRecommendations(usize),

    #[error("careerMatches must have at least {MIN_CAREER_MATCHES} entries, got {0}")]
    TooFewCareerMatches(usize),

    #[error("career match #{0} is missing title, whyItFits or nextStep")]
    IncompleteCareerMatch(usize),

    #[error("field '{0}' must be a non-empty string")]
    EmptyField(&'static str),

    #[error("unexpected shape: {0}")]
    UnexpectedShape(String),
}

/// Outcome of one reply's extraction + validation cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The reply passed every check; here is the normalized report.
    Parsed(AnalysisReport),
    /// No brace-delimited span was found in the reply.
    ExtractionFailed,
    /// A span was found but is not strict JSON even after cleanup.
    ParseFailed(String),
    /// The JSON parsed but violated the response contract.
    ValidationFailed(Vec<Violation>),
}

/// Runs the full extract → validate → normalize cycle on a raw reply.
pub fn parse_reply(raw: &str) -> ParseOutcome {
    let value = match extract_json(raw) {
        Ok(value) => value,
        Err(ExtractError::NoJsonFound) => return ParseOutcome::ExtractionFailed,
        Err(ExtractError::InvalidJson(detail)) => return ParseOutcome::ParseFailed(detail),
    };

    let violations = validate(&value);
    if !violations.is_empty() {
        return ParseOutcome::ValidationFailed(violations);
    }

    match normalize(value) {
        Ok(report) => ParseOutcome::Parsed(report),
        Err(violation) => ParseOutcome::ValidationFailed(vec![violation]),
    }
}

/// Checks the parsed value against the response contract.
///
/// Returns every violated check, in check order. Empty means valid.
pub fn validate(value: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    let Some(object) = value.as_object() else {
        return vec![Violation::NotAnObject];
    };

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            violations.push(Violation::MissingField(field));
        }
    }

    for dimension in Dimension::ALL {
        let score = value.get("scores").and_then(|s| s.get(dimension.key()));
        let valid = score
            .and_then(coerce_score)
            .is_some_and(|n| (0.0..=100.0).contains(&n));
        if !valid {
            violations.push(Violation::InvalidScore(dimension));
        }
    }

    match value.get("recommendations").and_then(Value::as_array) {
        Some(recommendations) if recommendations.len() >= MIN_RECOMMENDATIONS => {}
        Some(recommendations) => {
            violations.push(Violation::TooFewRecommendations(recommendations.len()))
        }
        None => violations.push(Violation::TooFewRecommendations(0)),
    }

    match value.get("careerMatches").and_then(Value::as_array) {
        Some(matches) if matches.len() >= MIN_CAREER_MATCHES => {
            for (index, entry) in matches.iter().enumerate() {
                let complete = ["title", "whyItFits", "nextStep"].iter().all(|key| {
                    entry
                        .get(key)
                        .and_then(Value::as_str)
                        .is_some_and(|s| !s.is_empty())
                });
                if !complete {
                    violations.push(Violation::IncompleteCareerMatch(index));
                }
            }
        }
        Some(matches) => violations.push(Violation::TooFewCareerMatches(matches.len())),
        None => violations.push(Violation::TooFewCareerMatches(0)),
    }

    for field in ["funInsight", "summary"] {
        let present = value
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        // Absence is already reported by the required-field check above.
        if !present && object.contains_key(field) {
            violations.push(Violation::EmptyField(field));
        }
    }

    violations
}

/// Interprets a score value the way the contract allows: a JSON number, or a
/// numeric string.
fn coerce_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

/// Parses the leading float out of a numeric-ish string (`"0.75"`, `"0.75 "`).
fn parse_leading_float(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let end = trimmed
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    trimmed[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Rewrites scores to plain numbers and builds the typed report.
///
/// A score that arrived as a number passes through unchanged; a score that
/// arrived as a string is treated as a fraction, multiplied by 100 and
/// rounded.
pub fn normalize(mut value: Value) -> Result<AnalysisReport, Violation> {
    let scores = value
        .get_mut("scores")
        .and_then(Value::as_object_mut)
        .ok_or(Violation::MissingField("scores"))?;

    for dimension in Dimension::ALL {
        if let Some(score) = scores.get_mut(dimension.key()) {
            if let Value::String(s) = score {
                let parsed = parse_leading_float(s).ok_or(Violation::InvalidScore(dimension))?;
                let rounded = (parsed * 100.0).round();
                *score = serde_json::json!(rounded);
            }
        }
    }

    serde_json::from_value(value).map_err(|e| Violation::UnexpectedShape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_value() -> Value {
        json!({
            "scores": {"passion": 75, "skills": 65, "impact": 55, "career": 40},
            "insights": {
                "passion": "p", "skills": "s", "impact": "i", "career": "c"
            },
            "recommendations": ["one", "two", "three"],
            "careerMatches": [
                {"title": "A", "whyItFits": "fits", "nextStep": "step"},
                {"title": "B", "whyItFits": "fits", "nextStep": "step"},
                {"title": "C", "whyItFits": "fits", "nextStep": "step"}
            ],
            "funInsight": "fun",
            "summary": "sum"
        })
    }

    #[test]
    fn valid_value_has_no_violations() {
        assert!(validate(&valid_value()).is_empty());
    }

    #[test]
    fn non_object_is_rejected_outright() {
        assert_eq!(validate(&json!([1, 2])), vec![Violation::NotAnObject]);
        assert_eq!(validate(&Value::Null), vec![Violation::NotAnObject]);
    }

    #[test]
    fn missing_career_matches_fails_even_when_rest_is_valid() {
        let mut value = valid_value();
        value.as_object_mut().unwrap().remove("careerMatches");

        let violations = validate(&value);
        assert!(violations.contains(&Violation::MissingField("careerMatches")));
        assert!(violations.contains(&Violation::TooFewCareerMatches(0)));
    }

    #[test]
    fn score_out_of_range_is_invalid() {
        let mut value = valid_value();
        value["scores"]["passion"] = json!(140);

        assert_eq!(
            validate(&value),
            vec![Violation::InvalidScore(Dimension::Passion)]
        );
    }

    #[test]
    fn numeric_string_score_passes_validation() {
        let mut value = valid_value();
        value["scores"]["impact"] = json!("0.75");

        assert!(validate(&value).is_empty());
    }

    #[test]
    fn non_numeric_string_score_is_invalid() {
        let mut value = valid_value();
        value["scores"]["impact"] = json!("plenty");

        assert_eq!(
            validate(&value),
            vec![Violation::InvalidScore(Dimension::Impact)]
        );
    }

    #[test]
    fn too_few_recommendations_is_invalid() {
        let mut value = valid_value();
        value["recommendations"] = json!(["only", "two"]);

        assert_eq!(validate(&value), vec![Violation::TooFewRecommendations(2)]);
    }

    #[test]
    fn career_match_with_blank_next_step_is_invalid() {
        let mut value = valid_value();
        value["careerMatches"][1]["nextStep"] = json!("");

        assert_eq!(validate(&value), vec![Violation::IncompleteCareerMatch(1)]);
    }

    #[test]
    fn empty_summary_is_invalid() {
        let mut value = valid_value();
        value["summary"] = json!("");

        assert_eq!(validate(&value), vec![Violation::EmptyField("summary")]);
    }

    #[test]
    fn normalize_keeps_numeric_scores_unchanged() {
        let report = normalize(valid_value()).unwrap();
        assert_eq!(report.scores.passion, 75.0);
    }

    #[test]
    fn normalize_scales_fractional_string_scores() {
        let mut value = valid_value();
        value["scores"]["passion"] = json!("0.75");

        let report = normalize(value).unwrap();
        assert_eq!(report.scores.passion, 75.0);
    }

    #[test]
    fn normalize_rounds_scaled_strings() {
        let mut value = valid_value();
        value["scores"]["skills"] = json!("0.666");

        let report = normalize(value).unwrap();
        assert_eq!(report.scores.skills, 67.0);
    }

    #[test]
    fn parse_reply_runs_the_full_cycle() {
        let raw = format!("Here it is: {} enjoy!", valid_value());
        match parse_reply(&raw) {
            ParseOutcome::Parsed(report) => assert_eq!(report.summary, "sum"),
            other => panic!("expected Parsed, got {:?}", other),
        }
    }

    #[test]
    fn parse_reply_reports_extraction_failure() {
        assert_eq!(parse_reply("no json here"), ParseOutcome::ExtractionFailed);
    }

    #[test]
    fn parse_reply_reports_parse_failure() {
        assert!(matches!(
            parse_reply("{ definitely: not json }"),
            ParseOutcome::ParseFailed(_)
        ));
    }

    #[test]
    fn parse_reply_reports_validation_failure() {
        let raw = r#"{"scores": {"passion": 75}}"#;
        match parse_reply(raw) {
            ParseOutcome::ValidationFailed(violations) => {
                assert!(violations.contains(&Violation::MissingField("summary")));
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }
}
