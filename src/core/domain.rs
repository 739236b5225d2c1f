use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const BRANCH_ID_VAR: &str = "LIBRARY_BRANCH_ID";
pub const LOG_LEVEL_VAR: &str = "LIBRARY_LOG_LEVEL";
pub const JSON_LOGS_VAR: &str = "LIBRARY_JSON_LOGS";

// Configuration abstracts config options for the book inventory
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Builds the configuration from `LIBRARY_*` environment variables, falling
    /// back to the defaults of [`Configuration::new`] for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let branch_id = lookup(BRANCH_ID_VAR).unwrap_or_else(|| "main".to_string());
        let mut config = Configuration::new(branch_id.as_str());
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level.to_lowercase();
        }
        if let Some(json) = lookup(JSON_LOGS_VAR) {
            config.json_logs = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}
