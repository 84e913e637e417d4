use moodhue_llm::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use moodhue_llm::{OpenAiSettings, PaletteMode};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// the API key, which must be provided for generation to succeed.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Completion API connection settings.
    pub openai: OpenAiSettings,
    /// Generation strategy (default: structured function calling).
    pub palette_mode: PaletteMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`      |
    /// | `OPENAI_API_KEY`       | *(empty)*                    |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1`  |
    /// | `OPENAI_MODEL`         | `gpt-4o-mini`                |
    /// | `OPENAI_TIMEOUT_SECS`  | `60`                         |
    /// | `PALETTE_MODE`         | `structured`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("OPENAI_API_KEY is not set; palette generation will fail upstream");
        }

        let openai = OpenAiSettings {
            api_key,
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            timeout_secs: std::env::var("OPENAI_TIMEOUT_SECS")
                .map(|v| v.parse().expect("OPENAI_TIMEOUT_SECS must be a valid u64"))
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let palette_mode: PaletteMode = std::env::var("PALETTE_MODE")
            .map(|v| v.parse().unwrap_or_else(|e| panic!("PALETTE_MODE: {e}")))
            .unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
            openai,
            palette_mode,
        }
    }
}
