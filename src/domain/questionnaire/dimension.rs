//! The four Ikigai dimensions and the question-to-dimension mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::AnswerSet;

/// One of the four thematic axes used for both prompt grouping and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Passion,
    Skills,
    Impact,
    Career,
}

impl Dimension {
    /// All dimensions in the fixed prompt/scoring order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Passion,
        Dimension::Skills,
        Dimension::Impact,
        Dimension::Career,
    ];

    /// Question indices feeding this dimension, in answer order.
    pub fn question_indices(&self) -> &'static [usize] {
        match self {
            Dimension::Passion => &[0, 1, 2],
            Dimension::Skills => &[3, 4],
            Dimension::Impact => &[5, 6],
            Dimension::Career => &[7, 8],
        }
    }

    /// Lowercase wire name, matching the response schema.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Passion => "passion",
            Dimension::Skills => "skills",
            Dimension::Impact => "impact",
            Dimension::Career => "career",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Groups an answer set by dimension using the fixed index table.
///
/// Every dimension is present in the result; missing question indices are
/// filtered out rather than padded with placeholders. Recomputed fresh on
/// every call, so the grouping has no identity of its own.
pub fn group_by_dimension(answers: &AnswerSet) -> BTreeMap<Dimension, Vec<String>> {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            let grouped = dimension
                .question_indices()
                .iter()
                .filter_map(|&index| answers.get(index).map(str::to_string))
                .collect();
            (*dimension, grouped)
        })
        .collect()
}
