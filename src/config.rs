use std::{env, net::SocketAddr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub http_bind: Option<SocketAddr>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let max_tokens = env::var("MODEL_MAX_TOKENS").unwrap_or_else(|_| "500".to_owned());
        let temperature = env::var("MODEL_TEMPERATURE").unwrap_or_else(|_| "0.7".to_owned());
        let http_bind = match env::var("HTTP_BIND") {
            Ok(value) => Some(value.parse()?),
            Err(_) => None,
        };

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_owned()),
            max_tokens: max_tokens.parse()?,
            temperature: temperature.parse()?,
            http_bind,
        })
    }
}
