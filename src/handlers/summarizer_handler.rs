use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SummarizeRequest, response::SummaryResponse},
};

/// Input validation runs before the rate limiter, so a malformed request is
/// rejected with a 400 without consuming the window or calling the model.
#[post("/summarizer")]
pub async fn summarizer(
    state: web::Data<AppState>,
    request: web::Json<SummarizeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let summary = state.summarizer_service.summarize(&request.text).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}
