//! Environment Configuration
//!
//! Reads `.env` / process environment into the typed configs of each crate.
//! Debug builds fall back to development values where production would
//! refuse to start.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::domain::AdminIdentity;
use axum::http::HeaderValue;
use catalog::CatalogConfig;
use platform::crypto::{SealKey, from_base64};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// Where uploaded images go
#[derive(Debug, Clone)]
pub enum BlobSettings {
    /// Files on disk, served by this process under `/blobs`
    Local {
        dir: PathBuf,
        public_base_url: String,
    },
    /// Hosted blob service
    Http { api_url: String, token: String },
}

/// Everything the server needs at startup
#[derive(Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
    pub blob: BlobSettings,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = var_or("FRONTEND_ORIGINS", DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let mut catalog = CatalogConfig::default();
        if let Ok(raw) = env::var("MAX_UPLOAD_BYTES") {
            catalog.max_upload_bytes = raw
                .trim()
                .parse()
                .context("MAX_UPLOAD_BYTES must be a byte count")?;
        }

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            auth: auth_from_env()?,
            catalog,
            blob: blob_from_env()?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn auth_from_env() -> anyhow::Result<AuthConfig> {
    let username = var_or("ADMIN_USERNAME", "admin");

    let admin = match env::var("ADMIN_PASSWORD_HASH") {
        Ok(phc) => AdminIdentity::from_phc(username, phc.trim())
            .context("ADMIN_PASSWORD_HASH must be an Argon2 PHC string")?,
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!(
                "ADMIN_PASSWORD_HASH not set; using the development credential admin/admin"
            );
            AuthConfig::development()?.admin
        }
        Err(_) => bail!("ADMIN_PASSWORD_HASH must be set in production"),
    };

    let mut config = match env::var("SESSION_SECRET") {
        Ok(raw) => AuthConfig::new(admin, parse_session_secrets(&raw)?)?,
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set; sessions will not survive a restart");
            AuthConfig::with_random_secret(admin)
        }
        Err(_) => bail!("SESSION_SECRET must be set in production"),
    };

    config.cookie_secure = match env::var("COOKIE_SECURE") {
        Ok(raw) => parse_bool(&raw).context("COOKIE_SECURE must be true or false")?,
        Err(_) => !cfg!(debug_assertions),
    };

    Ok(config.with_pepper(
        env::var("PASSWORD_PEPPER")
            .ok()
            .filter(|p| !p.is_empty())
            .map(String::into_bytes),
    ))
}

fn blob_from_env() -> anyhow::Result<BlobSettings> {
    match var_or("BLOB_BACKEND", "local").trim() {
        "local" => {
            let public_base_url = format!(
                "{}/blobs",
                var_or("PUBLIC_BASE_URL", "http://localhost:31113").trim_end_matches('/')
            );
            Ok(BlobSettings::Local {
                dir: PathBuf::from(var_or("BLOB_LOCAL_DIR", "./blobs")),
                public_base_url,
            })
        }
        "http" => Ok(BlobSettings::Http {
            api_url: env::var("BLOB_API_URL")
                .context("BLOB_API_URL must be set for the http blob backend")?,
            token: env::var("BLOB_READ_WRITE_TOKEN")
                .context("BLOB_READ_WRITE_TOKEN must be set for the http blob backend")?,
        }),
        other => bail!("BLOB_BACKEND must be `local` or `http`, got `{other}`"),
    }
}

/// Comma-separated base64 keys, 32 bytes each. The first one seals.
pub fn parse_session_secrets(raw: &str) -> anyhow::Result<Vec<SealKey>> {
    let keys = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, encoded)| {
            let bytes = from_base64(encoded)
                .with_context(|| format!("SESSION_SECRET entry {i} is not valid base64"))?;
            SealKey::try_from(bytes.as_slice()).map_err(|_| {
                anyhow::anyhow!(
                    "SESSION_SECRET entry {i} must decode to 32 bytes (got {})",
                    bytes.len()
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if keys.is_empty() {
        bail!("SESSION_SECRET is empty");
    }
    Ok(keys)
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::{random_key, to_base64};

    #[test]
    fn test_parse_session_secrets() {
        let a = random_key();
        let b = random_key();
        let raw = format!("{}, {}", to_base64(&a), to_base64(&b));

        let keys = parse_session_secrets(&raw).unwrap();
        assert_eq!(keys, vec![a, b]);
    }

    #[test]
    fn test_parse_session_secrets_rejects_bad_input() {
        assert!(parse_session_secrets("").is_err());
        assert!(parse_session_secrets("not base64!").is_err());
        assert!(parse_session_secrets(&to_base64(&[0u8; 16])).is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool(" off ").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
