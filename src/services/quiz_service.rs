use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::{
        domain::{QuizFeedback, QuizQuestion},
        dto::request::AnsweredQuestion,
    },
    services::{model_service::ModelClient, response_normalizer, response_validator},
};

pub const QUESTIONS_PER_QUIZ: usize = 5;

pub struct QuizService {
    model: Arc<dyn ModelClient>,
}

impl QuizService {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Generates a quiz of exactly [`QUESTIONS_PER_QUIZ`] validated
    /// questions; a reply with any malformed entry or the wrong count is
    /// rejected whole, never returned partially.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: &str,
    ) -> AppResult<Vec<QuizQuestion>> {
        let prompt = prompts::quiz_generation_prompt(topic, difficulty);
        let raw = self.model.generate(&prompt).await?;
        let normalized = response_normalizer::strip_code_fences(&raw);
        let questions = response_validator::parse_quiz_questions(&normalized)?;

        if questions.len() != QUESTIONS_PER_QUIZ {
            return Err(AppError::Shape(format!(
                "expected {} questions, model returned {}",
                QUESTIONS_PER_QUIZ,
                questions.len()
            )));
        }

        log::info!("generated quiz with {} questions on '{}'", questions.len(), topic);
        Ok(questions)
    }

    /// Asks the model to explain each graded answer and suggest next steps.
    pub async fn grade_answers(
        &self,
        topic: &str,
        answers: &[AnsweredQuestion],
    ) -> AppResult<QuizFeedback> {
        let answers_json = serde_json::to_string(answers)
            .map_err(|err| AppError::Validation(format!("Failed to encode answers: {}", err)))?;

        let prompt = prompts::quiz_feedback_prompt(topic, &answers_json);
        let raw = self.model.generate(&prompt).await?;
        let normalized = response_normalizer::strip_code_fences(&raw);
        response_validator::parse_quiz_feedback(&normalized)
    }
}
