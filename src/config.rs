use std::{env, str::FromStr, time::Duration};

use anyhow::Context;
use dotenvy::dotenv;
use tracing::warn;

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub server_addr: String,
    /// Seconds; also the hard lifetime of a server-side session.
    pub access_token_ttl: usize,
    pub session_idle_timeout: Duration,

    /// Delay applied before every store access.
    pub simulated_latency: Duration,

    pub zip_lookup_url: String,
    pub contact_url: Option<String>,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
}

/// Parses `key`, falling back to `default` when unset or malformed.
fn parsed<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring malformed setting");
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            access_token_ttl: parsed("ACCESS_TOKEN_TTL", 28_800), // default 8 h
            session_idle_timeout: Duration::from_secs(parsed("SESSION_IDLE_SECS", 900)),

            simulated_latency: Duration::from_millis(parsed("SIMULATED_LATENCY_MS", 250)),

            zip_lookup_url: env::var("ZIP_LOOKUP_URL")
                .unwrap_or_else(|_| "https://api.zippopotam.us/us".to_string()),
            contact_url: env::var("CONTACT_URL").ok().filter(|u| !u.trim().is_empty()),

            rate_login_per_min: parsed("RATE_LOGIN_PER_MIN", 60),
            rate_protected_per_min: parsed("RATE_PROTECTED_PER_MIN", 1000),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        })
    }
}
