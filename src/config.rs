use std::env;
use std::sync::OnceLock;

use dotenvy::dotenv;

const DEFAULT_PROVIDER_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium";

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub provider_url: String,
    /// 없으면 외부 해석을 건너뛰고 항상 로컬 해석을 쓴다.
    pub provider_api_key: Option<String>,
    pub provider_timeout_secs: u64,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        dotenv().ok();

        Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("PORT must be a number"),
            provider_url: env::var("PROVIDER_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string()),
            provider_api_key: env::var("HUGGING_FACE_API_KEY").ok(),
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("PROVIDER_TIMEOUT_SECS must be a number"),
        }
    })
}
