pub mod model_service;
pub mod quiz_service;
pub mod rate_limit;
pub mod response_normalizer;
pub mod response_validator;
pub mod scheduler_service;
pub mod summarizer_service;

pub use model_service::{
    AccessTokenProvider, EnvAccessTokenProvider, ModelClient, VertexAiClient,
};
pub use quiz_service::QuizService;
pub use rate_limit::RateLimiter;
pub use scheduler_service::SchedulerService;
pub use summarizer_service::SummarizerService;
