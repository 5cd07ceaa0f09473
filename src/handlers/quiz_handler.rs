use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{QuizAction, QuizRequest},
};

/// Two modes behind one endpoint, selected by the `action` discriminator:
/// question generation (the default) and feedback on graded answers.
#[post("/quiz")]
pub async fn quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    match request.action {
        Some(QuizAction::Feedback) => {
            let answers = request
                .user_answers
                .as_deref()
                .filter(|answers| !answers.is_empty())
                .ok_or_else(|| {
                    AppError::Validation(
                        "userAnswers is required for feedback".to_string(),
                    )
                })?;

            let feedback = state
                .quiz_service
                .grade_answers(&request.topic, answers)
                .await?;
            Ok(HttpResponse::Ok().json(feedback))
        }
        _ => {
            let difficulty = request
                .difficulty
                .as_deref()
                .map(str::trim)
                .filter(|difficulty| !difficulty.is_empty())
                .ok_or_else(|| {
                    AppError::Validation(
                        "difficulty is required to generate a quiz".to_string(),
                    )
                })?;

            let questions = state
                .quiz_service
                .generate_quiz(&request.topic, difficulty)
                .await?;
            // The UI consumes the bare question array.
            Ok(HttpResponse::Ok().json(questions))
        }
    }
}
