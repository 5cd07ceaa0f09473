use serde::{Deserialize, Serialize};

/// One multiple-choice question as produced by the model. Wire names are
/// camelCase to match the browser UI.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

pub const OPTIONS_PER_QUESTION: usize = 4;

impl QuizQuestion {
    /// `correct` must index into `options`, which must hold exactly four
    /// entries; `question` must be non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.len() == OPTIONS_PER_QUESTION
            && (0..OPTIONS_PER_QUESTION as i64).contains(&self.correct)
    }
}

/// Per-answer feedback, order-correlated with the submitted question list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizFeedbackItem {
    pub question_index: i64,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizFeedback {
    pub feedback: Vec<QuizFeedbackItem>,
    pub total_score: String,
    pub suggestions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: i64, options: usize) -> QuizQuestion {
        QuizQuestion {
            question: "What is the powerhouse of the cell?".to_string(),
            options: (0..options).map(|i| format!("option {}", i)).collect(),
            correct,
            explanation: None,
        }
    }

    #[test]
    fn well_formed_question_passes() {
        assert!(question(0, 4).is_well_formed());
        assert!(question(3, 4).is_well_formed());
    }

    #[test]
    fn out_of_range_correct_index_fails() {
        assert!(!question(4, 4).is_well_formed());
        assert!(!question(-1, 4).is_well_formed());
    }

    #[test]
    fn wrong_option_count_fails() {
        assert!(!question(0, 3).is_well_formed());
        assert!(!question(0, 5).is_well_formed());
    }

    #[test]
    fn empty_question_text_fails() {
        let mut q = question(1, 4);
        q.question = "   ".to_string();
        assert!(!q.is_well_formed());
    }

    #[test]
    fn feedback_uses_camel_case_wire_names() {
        let feedback = QuizFeedback {
            feedback: vec![QuizFeedbackItem {
                question_index: 0,
                is_correct: true,
                explanation: "Right answer".to_string(),
            }],
            total_score: "1/1".to_string(),
            suggestions: "Keep going".to_string(),
        };

        let json = serde_json::to_value(&feedback).expect("feedback should serialize");
        assert_eq!(json["totalScore"], "1/1");
        assert_eq!(json["feedback"][0]["questionIndex"], 0);
        assert_eq!(json["feedback"][0]["isCorrect"], true);
    }
}
