use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

use crate::models::RecordKind;
use crate::record_set::DEFAULT_PAGE_SIZE;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Initial state for one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDefaults {
    pub page_size: usize,
    /// Initial `status` filter; `None` shows every status.
    pub status_filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub page_size: usize,
    pub request_timeout_secs: u64,
    pub status_filters: HashMap<RecordKind, String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            status_filters: default_status_filters(),
        }
    }
}

impl ConsoleConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the process environment
    /// in `load`).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("HRCONSOLE_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_token = lookup("HRCONSOLE_API_TOKEN").filter(|token| !token.trim().is_empty());

        let page_size = match lookup("HRCONSOLE_PAGE_SIZE") {
            Some(raw) => {
                let parsed: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid HRCONSOLE_PAGE_SIZE value: {}", raw))?;
                if parsed == 0 {
                    return Err(anyhow!("HRCONSOLE_PAGE_SIZE must be at least 1"));
                }
                parsed
            }
            None => DEFAULT_PAGE_SIZE,
        };

        let request_timeout_secs = match lookup("HRCONSOLE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("Invalid HRCONSOLE_REQUEST_TIMEOUT_SECS value: {}", raw)
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let mut status_filters = default_status_filters();
        for kind in RecordKind::ALL {
            let key = format!(
                "HRCONSOLE_{}_STATUS_FILTER",
                kind.envelope_key().to_ascii_uppercase()
            );
            if let Some(value) = lookup(&key) {
                status_filters.insert(kind, value.trim().to_ascii_lowercase());
            }
        }

        Ok(ConsoleConfig {
            api_base_url,
            api_token,
            page_size,
            request_timeout_secs,
            status_filters,
        })
    }

    pub fn screen_defaults(&self, kind: RecordKind) -> ScreenDefaults {
        let status_filter = self
            .status_filters
            .get(&kind)
            .filter(|value| !value.is_empty() && value.as_str() != crate::record_set::SHOW_ALL)
            .cloned();
        ScreenDefaults {
            page_size: self.page_size,
            status_filter,
        }
    }
}

/// Approval screens open on pending requests; everything else shows all.
fn default_status_filters() -> HashMap<RecordKind, String> {
    RecordKind::ALL
        .into_iter()
        .map(|kind| {
            let value = if kind.is_approval_kind() {
                "pending"
            } else {
                crate::record_set::SHOW_ALL
            };
            (kind, value.to_string())
        })
        .collect()
}
