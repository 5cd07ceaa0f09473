use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{Schedule, ScheduleType, StudyTopic},
    services::{model_service::ModelClient, response_normalizer, response_validator},
};

pub struct SchedulerService {
    model: Arc<dyn ModelClient>,
}

impl SchedulerService {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Builds a weekly or monthly study plan for the given topics. The
    /// topic list is embedded into the prompt as pretty-printed JSON so the
    /// model sees deadlines and difficulties exactly as submitted.
    pub async fn generate_schedule(
        &self,
        topics: &[StudyTopic],
        schedule_type: ScheduleType,
    ) -> AppResult<Schedule> {
        let topics_json = serde_json::to_string_pretty(topics)
            .map_err(|err| AppError::Validation(format!("Failed to encode topics: {}", err)))?;

        let prompt = prompts::schedule_prompt(&topics_json, &schedule_type.to_string());
        let raw = self.model.generate(&prompt).await?;
        let normalized = response_normalizer::strip_code_fences(&raw);
        let schedule = response_validator::parse_schedule(&normalized)?;

        log::info!(
            "generated {} schedule with {} blocks for {} topics",
            schedule_type,
            schedule.blocks.len(),
            topics.len()
        );
        Ok(schedule)
    }
}
