use crate::error::{AppError, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    /// Pin the Stable API v1 on the client. Only set for assembled Atlas URIs.
    pub stable_api: bool,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub token_ttl_secs: i64,
}

// Keeps the signing secret out of logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "10485760".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig {
                secret: env::var("ACCESS_TOKEN_SECRET").map_err(|_| {
                    AppError::ConfigError("ACCESS_TOKEN_SECRET not set".to_string())
                })?,
                token_ttl_secs: env::var("TOKEN_TTL_SECS")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid TOKEN_TTL_SECS value".to_string()))?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ORIGINS")
                    .map(|origins| parse_origins(&origins))
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self> {
        let name = env::var("DB_NAME").unwrap_or_else(|_| "Shopery".to_string());

        if let Ok(uri) = env::var("MONGODB_URI") {
            return Ok(Self {
                uri,
                name,
                stable_api: false,
            });
        }

        let user = env::var("DB_USER")
            .map_err(|_| AppError::ConfigError("DB_USER not set".to_string()))?;
        let password = env::var("DB_PASS")
            .map_err(|_| AppError::ConfigError("DB_PASS not set".to_string()))?;
        let host = env::var("DB_HOST")
            .map_err(|_| AppError::ConfigError("DB_HOST not set".to_string()))?;

        Ok(Self {
            uri: atlas_uri(&user, &password, &host)?,
            name,
            stable_api: true,
        })
    }
}

/// Builds a `mongodb+srv` connection string with percent-encoded credentials.
pub fn atlas_uri(user: &str, password: &str, host: &str) -> Result<String> {
    let invalid = || AppError::ConfigError(format!("Invalid DB_HOST value: {}", host));

    let mut url = Url::parse(&format!("mongodb+srv://{}/", host)).map_err(|_| invalid())?;
    url.set_username(user).map_err(|_| invalid())?;
    url.set_password(Some(password)).map_err(|_| invalid())?;
    url.set_query(Some("retryWrites=true&w=majority"));

    Ok(url.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
