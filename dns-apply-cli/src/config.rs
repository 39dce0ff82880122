//! Runtime configuration
//!
//! Built once from the process environment at startup and passed down
//! immutably; nothing reads ambient state after this point.

use std::env;
use std::path::PathBuf;

use crate::error::{ApplyError, ApplyResult};

/// Environment variable holding the deSEC API token.
const ENV_TOKEN: &str = "DESEC_TOKEN";
/// Environment variable overriding the target zone.
const ENV_DOMAIN: &str = "DNS_APPLY_DOMAIN";
/// Environment variable overriding the declarations directory.
const ENV_RECORDS_DIR: &str = "DNS_APPLY_RECORDS_DIR";

/// Zone the declarations are written under when not overridden.
const DEFAULT_DOMAIN: &str = "is-dev.me";
/// Directory scanned for declaration files when not overridden.
const DEFAULT_RECORDS_DIR: &str = "./records";

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for declaration files.
    pub records_dir: PathBuf,
    /// Zone the subnames are applied under.
    pub domain: String,
    /// deSEC API token.
    pub api_token: String,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Config`] when the token variable is missing or
    /// empty.
    pub fn from_env() -> ApplyResult<Self> {
        Self::from_vars(
            env::var(ENV_TOKEN).ok(),
            env::var(ENV_DOMAIN).ok(),
            env::var(ENV_RECORDS_DIR).ok(),
        )
    }

    fn from_vars(
        token: Option<String>,
        domain: Option<String>,
        records_dir: Option<String>,
    ) -> ApplyResult<Self> {
        let api_token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApplyError::Config(format!("{ENV_TOKEN} is not set")))?;

        Ok(Self {
            records_dir: PathBuf::from(
                records_dir.unwrap_or_else(|| DEFAULT_RECORDS_DIR.to_string()),
            ),
            domain: domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            api_token,
        })
    }
}
