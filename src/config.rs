use std::env;

use crate::ai::config::AiConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub ai: Option<AiConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let ai = AiConfig::from_env();
        Self { bind_addr, ai }
    }
}
