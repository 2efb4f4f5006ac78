use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub vision: VisionConfig,
    pub llm: LlmConfig,
    pub catalog: CatalogConfig,
    pub photos: PhotoSourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the analysis cache persists. Local file by default; `libsql://`
/// and `https://` URLs select a remote database.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub url: String,
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

/// Text-generation service used for song recommendations and stories.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

/// Music catalog search plus its client-credentials token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub base_url: Option<String>,
    pub token_url: Option<String>,
    pub timeout_secs: u64,
}

/// OAuth photo source that supplies image URLs to analyze.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSourceConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub base_url: Option<String>,
    pub authorize_url: Option<String>,
    pub scopes: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("AURA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("AURA_PORT", 8080),
            },
            cache: CacheConfig {
                url: env::var("CACHE_DB_URL").unwrap_or_else(|_| "file:aura.db".to_string()),
                auth_token: env::var("CACHE_DB_AUTH_TOKEN").ok(),
            },
            vision: VisionConfig {
                api_key: env::var("VISION_API_KEY").ok(),
                base_url: env::var("VISION_BASE_URL").ok(),
                timeout_secs: parse_env_or("VISION_TIMEOUT", 30),
            },
            llm: LlmConfig {
                model: env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
                api_key: env::var("LLM_API_KEY").ok(),
                base_url: env::var("LLM_BASE_URL").ok(),
                timeout_secs: parse_env_or("LLM_TIMEOUT", 60),
            },
            catalog: CatalogConfig {
                client_id: env::var("CATALOG_CLIENT_ID").ok(),
                client_secret: env::var("CATALOG_CLIENT_SECRET").ok(),
                base_url: env::var("CATALOG_BASE_URL").ok(),
                token_url: env::var("CATALOG_TOKEN_URL").ok(),
                timeout_secs: parse_env_or("CATALOG_TIMEOUT", 30),
            },
            photos: PhotoSourceConfig {
                client_id: env::var("PHOTOS_CLIENT_ID").ok(),
                client_secret: env::var("PHOTOS_CLIENT_SECRET").ok(),
                redirect_uri: env::var("PHOTOS_REDIRECT_URI").ok(),
                base_url: env::var("PHOTOS_BASE_URL").ok(),
                authorize_url: env::var("PHOTOS_AUTHORIZE_URL").ok(),
                scopes: env::var("PHOTOS_SCOPES")
                    .unwrap_or_else(|_| "user_accounts:read,pins:read,boards:read".to_string()),
                timeout_secs: parse_env_or("PHOTOS_TIMEOUT", 30),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
