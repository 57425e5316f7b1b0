//! Host configuration: the ordered list of hosts sources.
//!
//! Only one entry in this list is ever managed by the bundle selector. Every
//! other entry, and every top-level field this crate does not know about, is
//! carried through load and save untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::types::EntryState;

/// One hosts source in the configuration list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub state: EntryState,
}

impl HostEntry {
    pub fn new(title: impl Into<String>, location: impl Into<String>, state: EntryState) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            state,
        }
    }
}

/// Complete host configuration as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfiguration {
    /// Hosts sources, in priority order
    #[serde(default)]
    pub hosts: Vec<HostEntry>,
    /// Fields owned by other parts of the host application
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HostConfiguration {
    pub fn new(hosts: Vec<HostEntry>) -> Self {
        Self {
            hosts,
            extra: serde_json::Map::new(),
        }
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse configuration JSON in {:?}", path.as_ref()))?;

        debug!("Loaded {} host entries from {:?}", config.hosts.len(), path.as_ref());
        Ok(config)
    }

    /// Load configuration, treating a missing file as an empty list
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            info!("No configuration at {:?}, starting empty", path.as_ref());
            Ok(Self::default())
        }
    }

    /// Pretty JSON, as written to disk
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_config() -> HostConfiguration {
        HostConfiguration::new(vec![
            HostEntry::new("Local blocklist", "file:///etc/blocked", EntryState::Deny),
            HostEntry::new("Allowed", "https://example.com/allow", EntryState::Allow),
        ])
    }

    #[test]
    fn test_load_json_config() {
        let config = sample_config();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", config.to_json().unwrap()).unwrap();

        let loaded = HostConfiguration::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = HostConfiguration::load_from_file("/nonexistent/path/hosts.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfiguration::load_or_default(dir.path().join("hosts.json")).unwrap();
        assert!(config.hosts.is_empty());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{ not json").unwrap();
        assert!(HostConfiguration::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let json = r#"{
            "autoStart": true,
            "hosts": [
                { "title": "A", "location": "https://a", "state": "ignore" }
            ],
            "dnsServers": { "enabled": false, "items": [] }
        }"#;
        let config: HostConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.hosts.len(), 1);
        assert_eq!(config.hosts[0].state, EntryState::Ignore);
        assert_eq!(config.extra["autoStart"], serde_json::json!(true));

        let reparsed: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(reparsed["dnsServers"]["enabled"], serde_json::json!(false));
        assert_eq!(reparsed["hosts"][0]["location"], "https://a");
    }

    #[test]
    fn test_missing_state_defaults_to_deny() {
        let entry: HostEntry =
            serde_json::from_str(r#"{ "title": "T", "location": "L" }"#).unwrap();
        assert_eq!(entry.state, EntryState::Deny);
    }

    #[test]
    fn test_load_json_wrong_type_fails() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{ "hosts": {{ "title": "x" }} }}"#).unwrap();
        assert!(HostConfiguration::load_from_file(temp_file.path()).is_err());
    }
}
