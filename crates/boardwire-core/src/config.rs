//! Upstream configuration for Boardwire.
//!
//! The bearer credential is read once at process start and carried as an
//! explicit value into every component that talks to the remote API.

use std::fmt;

use crate::error::{Error, Result};

/// Default remote API origin.
pub const DEFAULT_API_BASE: &str = "https://lichess.org";

/// Bearer credential for the remote API.
///
/// `Debug` output is redacted so the token never reaches the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Build a credential from a raw value, rejecting missing or blank tokens.
    pub fn new(raw: Option<&str>) -> Result<Self> {
        let token = raw.map(str::trim).unwrap_or_default();
        if token.is_empty() {
            return Err(Error::Config("LICHESS_TOKEN not found in environment".into()));
        }
        Ok(Self(token.to_string()))
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where and how to reach the remote API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// API origin (e.g., "<https://lichess.org>"), without trailing slash.
    pub api_base: String,
    /// Bearer credential forwarded on every outbound request.
    pub credential: Credential,
}

impl UpstreamConfig {
    /// Create a config, normalising the API base.
    pub fn new(api_base: &str, credential: Credential) -> Result<Self> {
        let api_base = api_base.trim().trim_end_matches('/');
        if api_base.is_empty() {
            return Err(Error::Config("api base is empty".into()));
        }
        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            return Err(Error::Config(format!(
                "api base must be an http(s) URL: {api_base}"
            )));
        }
        Ok(Self {
            api_base: api_base.to_string(),
            credential,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_config_error() {
        let err = Credential::new(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("LICHESS_TOKEN"));
    }

    #[test]
    fn blank_token_is_config_error() {
        assert!(matches!(Credential::new(Some("  ")), Err(Error::Config(_))));
    }

    #[test]
    fn credential_debug_is_redacted() {
        let cred = Credential::new(Some("lip_secret")).unwrap();
        assert_eq!(format!("{cred:?}"), "Credential(***)");
        assert_eq!(cred.bearer(), "Bearer lip_secret");
    }

    #[test]
    fn api_base_trailing_slash_stripped() {
        let cred = Credential::new(Some("tok")).unwrap();
        let cfg = UpstreamConfig::new("https://lichess.org/", cred).unwrap();
        assert_eq!(cfg.api_base, "https://lichess.org");
    }

    #[test]
    fn api_base_without_scheme_rejected() {
        let cred = Credential::new(Some("tok")).unwrap();
        assert!(UpstreamConfig::new("lichess.org", cred).is_err());
    }
}
