use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        summarizer_service::MIN_REQUEST_INTERVAL, EnvAccessTokenProvider, ModelClient,
        QuizService, RateLimiter, SchedulerService, SummarizerService, VertexAiClient,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub scheduler_service: Arc<SchedulerService>,
    pub summarizer_service: Arc<SummarizerService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let model: Arc<dyn ModelClient> = Arc::new(VertexAiClient::new(
            config.clone(),
            Arc::new(EnvAccessTokenProvider),
        ));
        Self::with_model(config, model)
    }

    /// Wires the services around an explicit model client; tests inject a
    /// stub here.
    pub fn with_model(config: Arc<Config>, model: Arc<dyn ModelClient>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(model.clone())),
            scheduler_service: Arc::new(SchedulerService::new(model.clone())),
            summarizer_service: Arc::new(SummarizerService::new(
                model,
                RateLimiter::new(MIN_REQUEST_INTERVAL),
            )),
            config,
        }
    }
}
