use std::sync::Arc;
use std::time::Duration;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    services::{model_service::ModelClient, rate_limit::RateLimiter, response_normalizer},
};

/// Minimum spacing between accepted summarization requests.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Suggested client wait when the upstream model itself reports quota
/// exhaustion.
const UPSTREAM_RETRY_HINT_MS: u64 = 2000;

pub struct SummarizerService {
    model: Arc<dyn ModelClient>,
    limiter: RateLimiter,
}

impl SummarizerService {
    pub fn new(model: Arc<dyn ModelClient>, limiter: RateLimiter) -> Self {
        Self { model, limiter }
    }

    /// Summarizes `text`, which the handler has already validated. A
    /// request arriving inside the rate window is rejected before the model
    /// is ever invoked; an upstream 429 is re-surfaced as a local rate
    /// limit so the client backs off instead of treating it as a failure.
    pub async fn summarize(&self, text: &str) -> AppResult<String> {
        if let Err(remaining) = self.limiter.try_acquire() {
            return Err(AppError::RateLimited {
                retry_after_ms: remaining.as_millis() as u64,
            });
        }

        let prompt = prompts::summarization_prompt(text);
        let raw = match self.model.generate(&prompt).await {
            Ok(raw) => raw,
            Err(AppError::Upstream {
                status: Some(429), ..
            }) => {
                return Err(AppError::RateLimited {
                    retry_after_ms: UPSTREAM_RETRY_HINT_MS,
                });
            }
            Err(err) => return Err(err),
        };

        Ok(response_normalizer::clean_summary(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockModelClient;

    fn service_with_reply(reply: &str) -> SummarizerService {
        let mut model = MockModelClient::new();
        let reply = reply.to_string();
        model
            .expect_generate()
            .returning(move |_| Ok(reply.clone()));
        SummarizerService::new(Arc::new(model), RateLimiter::new(MIN_REQUEST_INTERVAL))
    }

    #[actix_web::test]
    async fn summarizes_and_cleans_the_reply() {
        let service = service_with_reply("Summary: Plants convert light into energy.");

        let summary = service
            .summarize("A long article about photosynthesis.")
            .await
            .expect("summary should succeed");
        assert_eq!(summary, "Plants convert light into energy.");
    }

    #[actix_web::test]
    async fn second_call_inside_the_window_is_rate_limited() {
        let service = service_with_reply("A short summary.");

        service
            .summarize("First request.")
            .await
            .expect("first request should succeed");

        let err = service
            .summarize("Second request.")
            .await
            .expect_err("second request should be rate limited");
        match err {
            AppError::RateLimited { retry_after_ms } => {
                assert!(retry_after_ms <= 1000);
            }
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn rate_limited_request_never_reaches_the_model() {
        let mut model = MockModelClient::new();
        // Exactly one upstream call: the second request must be rejected
        // before the model is invoked.
        model
            .expect_generate()
            .times(1)
            .returning(|_| Ok("A short summary.".to_string()));
        let service =
            SummarizerService::new(Arc::new(model), RateLimiter::new(MIN_REQUEST_INTERVAL));

        service
            .summarize("First request.")
            .await
            .expect("first request should succeed");
        let _ = service
            .summarize("Second request.")
            .await
            .expect_err("second request should be rate limited");
    }

    #[actix_web::test]
    async fn upstream_quota_exhaustion_surfaces_as_rate_limit() {
        let mut model = MockModelClient::new();
        model.expect_generate().returning(|_| {
            Err(AppError::Upstream {
                status: Some(429),
                message: "RESOURCE_EXHAUSTED".to_string(),
            })
        });
        let service =
            SummarizerService::new(Arc::new(model), RateLimiter::new(MIN_REQUEST_INTERVAL));

        let err = service
            .summarize("Some text.")
            .await
            .expect_err("quota exhaustion should surface");
        assert!(matches!(err, AppError::RateLimited { retry_after_ms: 2000 }));
    }

    #[actix_web::test]
    async fn other_upstream_failures_stay_upstream_errors() {
        let mut model = MockModelClient::new();
        model.expect_generate().returning(|_| {
            Err(AppError::Upstream {
                status: Some(500),
                message: "internal".to_string(),
            })
        });
        let service =
            SummarizerService::new(Arc::new(model), RateLimiter::new(MIN_REQUEST_INTERVAL));

        let err = service
            .summarize("Some text.")
            .await
            .expect_err("upstream failure should propagate");
        assert!(matches!(err, AppError::Upstream { status: Some(500), .. }));
    }
}
