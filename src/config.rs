use std::env;

#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("ACERVO_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            timeout_secs: env::var("ACERVO_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}
