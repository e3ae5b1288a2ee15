use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_host: String,
    pub backend_port: u16,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            backend_host: env::var("BACKEND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            backend_port: env::var("BACKEND_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(30),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.backend_host, self.backend_port)
    }
}
