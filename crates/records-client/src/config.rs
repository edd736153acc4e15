//! Endpoint Configuration
//!
//! A browser bundle has no process environment, so overrides are baked in at
//! build time via `option_env!`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ClientError, ClientResult};

pub const DEFAULT_PEOPLE_ENDPOINT: &str = "/api";
pub const DEFAULT_TODO_ENDPOINT: &str = "http://localhost:8000/api/todo";

/// Where the two apps talk to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub people_endpoint: String,
    pub todo_endpoint: String,
    /// Poll interval for the todo list; `None` or `0` disables polling
    #[serde(default)]
    pub todo_refresh_interval_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            people_endpoint: DEFAULT_PEOPLE_ENDPOINT.to_string(),
            todo_endpoint: DEFAULT_TODO_ENDPOINT.to_string(),
            todo_refresh_interval_ms: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `RECORDS_PEOPLE_ENDPOINT`, `RECORDS_TODO_ENDPOINT`
    /// and `RECORDS_TODO_REFRESH_MS` as seen by the compiler
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("RECORDS_PEOPLE_ENDPOINT"),
            option_env!("RECORDS_TODO_ENDPOINT"),
            option_env!("RECORDS_TODO_REFRESH_MS"),
        )
    }

    fn with_overrides(people: Option<&str>, todo: Option<&str>, refresh_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(people) = people.filter(|s| !s.trim().is_empty()) {
            config.people_endpoint = people.trim().to_string();
        }
        if let Some(todo) = todo.filter(|s| !s.trim().is_empty()) {
            config.todo_endpoint = todo.trim().to_string();
        }
        if let Some(raw) = refresh_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.todo_refresh_interval_ms = Some(ms),
                Err(e) => log::warn!("[config] ignoring RECORDS_TODO_REFRESH_MS={raw:?}: {e}"),
            }
        }
        config
    }

    pub fn todo_refresh_interval(&self) -> Option<Duration> {
        self.todo_refresh_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Absolute URL for `endpoint`; relative paths are joined onto `origin`
    pub fn resolve(endpoint: &str, origin: &str) -> ClientResult<Url> {
        if let Ok(url) = Url::parse(endpoint) {
            return Ok(url);
        }
        Url::parse(origin)
            .and_then(|base| base.join(endpoint))
            .map_err(|source| ClientError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}
