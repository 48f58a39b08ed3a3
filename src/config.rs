use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        jina_api_key: get_env_opt("JINA_API_KEY"),
        listen_addr: get_env_or_default("GLEANER_ADDR", "127.0.0.1:3000"),
    }
});

pub struct Config {
    /// Bearer credential for the Jina endpoints. Absent means requests go
    /// out unauthenticated, which Jina accepts at a lower rate limit.
    pub jina_api_key: Option<String>,
    pub listen_addr: String,
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
