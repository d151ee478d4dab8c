//! Prompt Builder - turns a completed answer set into the analysis prompt.
//!
//! Pure and deterministic: same answers, same prompt. The schema block must
//! stay in sync with the validation checks in `validate.rs`.

use std::fmt::Write;

use crate::domain::questionnaire::{group_by_dimension, AnswerSet, Dimension};

const PREAMBLE: &str = "You're not just an Ikigai analyst - you're a career matchmaker \
with a sense of humor! Analyze these responses and create a JSON object that's specific, \
actionable, and occasionally funny. Return ONLY the JSON object, no additional text.";

/// The exact response schema the model is instructed to follow.
const SCHEMA_BLOCK: &str = r#"Required JSON structure (follow this EXACTLY):
{
  "scores": {
    "passion": 75,
    "skills": 65,
    "impact": 55,
    "career": 40
  },
  "insights": {
    "passion": "Short, specific insight with personality",
    "skills": "Clear statement about unique abilities",
    "impact": "How they want to change the world",
    "career": "What they need in a work environment"
  },
  "recommendations": [
    "3-5 SPECIFIC job titles or roles that match their profile",
    "A specific learning path or certification to pursue",
    "A fun, slightly cheeky suggestion related to their answers"
  ],
  "careerMatches": [
    {
      "title": "Specific job title #1",
      "whyItFits": "Explanation connecting to multiple answers",
      "nextStep": "Immediate action they could take"
    },
    {
      "title": "Specific job title #2",
      "whyItFits": "Different reasoning",
      "nextStep": "Different specific action"
    },
    {
      "title": "Specific job title #3",
      "whyItFits": "Another unique match reason",
      "nextStep": "Another concrete step"
    }
  ],
  "funInsight": "A humorous observation about their answers that's still respectful",
  "summary": "Concise, personality-filled summary with specific direction"
}"#;

/// Builds the single natural-language instruction string for one attempt.
///
/// Answers are grouped by dimension in fixed order; each block carries the
/// uppercased dimension header and 1-based ordinals. A dimension with no
/// answers still emits its header, so the model scores it anyway.
pub fn build_analysis_prompt(answers: &AnswerSet) -> String {
    let grouped = group_by_dimension(answers);

    let blocks = Dimension::ALL
        .iter()
        .map(|dimension| {
            let mut block = format!("{}:", dimension.key().to_uppercase());
            for (ordinal, answer) in grouped[dimension].iter().enumerate() {
                let _ = write!(block, "\n{}. \"{}\"", ordinal + 1, answer);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\nUser's responses:\n{}\n{}",
        PREAMBLE, blocks, SCHEMA_BLOCK
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_set(entries: &[(usize, &str)]) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (index, text) in entries {
            answers.record(*index, *text).unwrap();
        }
        answers
    }

    #[test]
    fn prompt_is_deterministic() {
        let answers = answer_set(&[(0, "painting"), (3, "teaching"), (5, "pollution")]);
        assert_eq!(build_analysis_prompt(&answers), build_analysis_prompt(&answers));
    }

    #[test]
    fn prompt_groups_answers_with_ordinals() {
        let answers = answer_set(&[(0, "painting"), (1, "writing"), (2, "coding")]);
        let prompt = build_analysis_prompt(&answers);

        assert!(prompt.contains("PASSION:\n1. \"painting\"\n2. \"writing\"\n3. \"coding\""));
    }

    #[test]
    fn empty_dimension_still_emits_header() {
        let answers = answer_set(&[(0, "painting")]);
        let prompt = build_analysis_prompt(&answers);

        assert!(prompt.contains("CAREER:"));
        assert!(!prompt.contains("CAREER:\n1."));
    }

    #[test]
    fn prompt_demands_json_only() {
        let prompt = build_analysis_prompt(&answer_set(&[(0, "a")]));
        assert!(prompt.contains("Return ONLY the JSON object"));
        assert!(prompt.contains("Required JSON structure (follow this EXACTLY):"));
    }

    #[test]
    fn schema_block_names_all_required_fields() {
        for field in [
            "\"scores\"",
            "\"insights\"",
            "\"recommendations\"",
            "\"careerMatches\"",
            "\"funInsight\"",
            "\"summary\"",
        ] {
            assert!(SCHEMA_BLOCK.contains(field), "schema missing {field}");
        }
    }

    #[test]
    fn dimensions_appear_in_fixed_order() {
        let prompt = build_analysis_prompt(&answer_set(&[(0, "a"), (3, "b"), (5, "c"), (7, "d")]));
        let passion = prompt.find("PASSION:").unwrap();
        let skills = prompt.find("SKILLS:").unwrap();
        let impact = prompt.find("IMPACT:").unwrap();
        let career = prompt.find("CAREER:").unwrap();

        assert!(passion < skills && skills < impact && impact < career);
    }
}
