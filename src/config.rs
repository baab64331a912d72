use std::fmt;

use anyhow::{bail, Context, Result};

pub const ENDPOINT: &str = "https://models.inference.ai.azure.com";
pub const MODEL_NAME: &str = "gpt-4o";
pub const BIND_ADDR: &str = "127.0.0.1:5000";

const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Process-wide settings, loaded once in `main` and shared read-only.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub endpoint: String,
    pub model: String,
    pub bind_addr: String,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            bail!("{TOKEN_VAR} is set but empty");
        }

        Ok(Self {
            token,
            endpoint: ENDPOINT.to_string(),
            model: MODEL_NAME.to_string(),
            bind_addr: BIND_ADDR.to_string(),
        })
    }

    /// Reads the bearer credential from the environment (or a `.env` file).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| dotenvy::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, dotenvy::Error>,
    {
        let token = lookup(TOKEN_VAR)
            .with_context(|| format!("{TOKEN_VAR} must be set to reach the completion API"))?;
        Self::new(token)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected() {
        assert!(Config::new("").is_err());
        assert!(Config::new("   ").is_err());
    }

    #[test]
    fn missing_token_variable_is_rejected() {
        let err = Config::from_lookup(|_| {
            Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent))
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("GITHUB_TOKEN"), "unexpected error: {err:#}");
    }

    #[test]
    fn token_is_read_from_lookup() {
        let cfg = Config::from_lookup(|name| {
            assert_eq!(name, "GITHUB_TOKEN");
            Ok("ghp_from_env".to_string())
        })
        .unwrap();
        assert_eq!(cfg.token, "ghp_from_env");
    }

    #[test]
    fn fixed_endpoint_and_model() {
        let cfg = Config::new("ghp_test").unwrap();
        assert_eq!(cfg.endpoint, ENDPOINT);
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.bind_addr, BIND_ADDR);
    }

    #[test]
    fn debug_hides_token() {
        let cfg = Config::new("ghp_secret_value").unwrap();
        let out = format!("{cfg:?}");
        assert!(!out.contains("ghp_secret_value"));
        assert!(out.contains("<redacted>"));
    }
}
