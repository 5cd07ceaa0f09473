use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::SchedulerRequest};

#[post("/scheduler")]
pub async fn scheduler(
    state: web::Data<AppState>,
    request: web::Json<SchedulerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let schedule = state
        .scheduler_service
        .generate_schedule(&request.topics, request.schedule_type)
        .await?;
    Ok(HttpResponse::Ok().json(schedule))
}
