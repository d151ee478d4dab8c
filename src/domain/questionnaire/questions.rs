//! The fixed question catalog.

/// Number of questions in the quiz.
pub const QUESTION_COUNT: usize = 9;

/// A single quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Prompt shown to the user.
    pub text: &'static str,
    /// Category label shown alongside the question.
    pub category: &'static str,
    /// Example answers shown as a hint.
    pub placeholder: &'static str,
}

/// The nine quiz questions, in presentation order.
///
/// Positions in this array are the question indices used by the
/// dimension-grouping table.
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        text: "What activity makes you forget to check your phone?",
        category: "Passion",
        placeholder: "e.g., painting, coding, writing...",
    },
    Question {
        text: "What do friends always ask you to help with?",
        category: "Skills",
        placeholder: "e.g., tech support, advice, cooking...",
    },
    Question {
        text: "What injustice makes you angry to see?",
        category: "Impact",
        placeholder: "e.g., environmental issues, inequality...",
    },
    Question {
        text: "What job could you see yourself doing for years?",
        category: "Career",
        placeholder: "e.g., teacher, developer, artist...",
    },
    Question {
        text: "What would you do all day if money didn't matter?",
        category: "Passion+Impact",
        placeholder: "e.g., volunteer, create art...",
    },
    Question {
        text: "What's something you learned easily that others struggle with?",
        category: "Skills",
        placeholder: "e.g., math, languages...",
    },
    Question {
        text: "If you had to volunteer next weekend, where would you go?",
        category: "Impact",
        placeholder: "e.g., animal shelter, teaching...",
    },
    Question {
        text: "What's a hobby you'd love to turn into a job?",
        category: "Passion+Career",
        placeholder: "e.g., photography, gaming...",
    },
    Question {
        text: "What skill do you wish more people would pay you for?",
        category: "Skills+Career",
        placeholder: "e.g., design, writing...",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_questions() {
        assert_eq!(QUESTIONS.len(), QUESTION_COUNT);
    }

    #[test]
    fn every_question_has_text_and_placeholder() {
        for question in &QUESTIONS {
            assert!(!question.text.is_empty());
            assert!(!question.category.is_empty());
            assert!(!question.placeholder.is_empty());
        }
    }
}
