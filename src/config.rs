use std::env;
use std::time::Duration;

use crate::providers::porkbun::client::{DEFAULT_TIMEOUT, PorkbunConfig};

#[derive(Clone, Debug)]
pub struct Config {
    pub domain_filter: Vec<String>,
    pub dry_run: bool,
    pub porkbun: PorkbunConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_vars(|key| env::var(key))
    }

    fn from_vars<F>(var: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let mut porkbun =
            PorkbunConfig::new(var("PORKBUN_API_KEY")?, var("PORKBUN_SECRET_API_KEY")?);
        if let Ok(api_url) = var("PORKBUN_API_URL") {
            porkbun.api_url = api_url;
        }
        porkbun.timeout = var("PORKBUN_TIMEOUT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Config {
            domain_filter: parse_list(&var("DOMAIN_FILTER")?),
            dry_run: parse_flag(var("DRY_RUN").ok().as_deref()),
            porkbun,
        })
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}
