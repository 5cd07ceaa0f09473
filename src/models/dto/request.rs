use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ScheduleType, StudyTopic};

pub const MAX_SUMMARY_TEXT_LENGTH: u64 = 10000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizAction {
    Generate,
    Feedback,
}

/// One graded answer as the quiz UI submits it back for feedback.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    /// Required for question generation, unused for feedback.
    pub difficulty: Option<String>,

    /// Defaults to generation when absent.
    pub action: Option<QuizAction>,

    pub user_answers: Option<Vec<AnsweredQuestion>>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerRequest {
    #[validate(length(min = 1), nested)]
    pub topics: Vec<StudyTopic>,

    pub schedule_type: ScheduleType,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(
        min = 1,
        max = 10000,
        message = "Text is required and must be 10000 characters or less"
    ))]
    pub text: String,
}
