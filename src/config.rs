use std::env;

pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL_ID: &str = "gemini-1.5-flash-002";

#[derive(Clone, Debug)]
pub struct Config {
    /// Absent values are reported per-request by the model client, not at
    /// startup, so the server still boots without cloud credentials.
    pub google_cloud_project: Option<String>,
    pub google_application_credentials: Option<String>,
    pub google_cloud_location: String,
    pub model_id: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            google_cloud_project: env::var("GOOGLE_CLOUD_PROJECT").ok(),
            google_application_credentials: env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
            google_cloud_location: env::var("GOOGLE_CLOUD_LOCATION")
                .unwrap_or_else(|_| DEFAULT_LOCATION.to_string()),
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            google_cloud_project: Some("test-project".to_string()),
            google_application_credentials: Some("/tmp/test-credentials.json".to_string()),
            google_cloud_location: DEFAULT_LOCATION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
