/// Posts longer than this are truncated, not rejected.
pub const MAX_POST_CHARS: usize = 280;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
}

impl Config {
    /// Loads `.env` if present, then reads `RUST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self { log_filter }
    }
}
