//! Console configuration.
//!
//! The defaults are embedded as TOML and parsed once on first access.

use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::shared::components::data_table::state::TableConfig;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Port of the REST backend on the page's host
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 4000,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig { port: 3000 },
            table: TableConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[table]
page_sizes = [10, 20, 50, 100]
default_page_size = 10
search_debounce_ms = 500

[notifications]
dismiss_after_ms = 4000
"#;

static CONFIG: Lazy<ConsoleConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("invalid embedded configuration, using defaults: {:#}", e);
        ConsoleConfig::default()
    }
});

pub fn config() -> &'static ConsoleConfig {
    &CONFIG
}

pub fn load_config() -> anyhow::Result<ConsoleConfig> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(source: &str) -> anyhow::Result<ConsoleConfig> {
    let config: ConsoleConfig = toml::from_str(source).context("failed to parse config")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConsoleConfig) -> anyhow::Result<()> {
    let table = &config.table;
    if table.page_sizes.is_empty() || table.page_sizes.contains(&0) {
        bail!("table.page_sizes must list positive sizes");
    }
    if !table.page_sizes.contains(&table.default_page_size) {
        bail!(
            "table.default_page_size {} is not one of {:?}",
            table.default_page_size,
            table.page_sizes
        );
    }
    if table.search_debounce_ms == 0 {
        bail!("table.search_debounce_ms must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.table.search_debounce_ms, 500);
    }

    #[test]
    fn test_partial_table_section_uses_defaults() {
        let config = parse_config("[api]\nport = 8080\n[table]\ndefault_page_size = 20\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.table.page_sizes, vec![10, 20, 50, 100]);
        assert_eq!(config.table.default_page_size, 20);
    }

    #[test]
    fn test_default_page_size_must_be_offered() {
        let err = parse_config("[api]\nport = 3000\n[table]\ndefault_page_size = 15\n")
            .unwrap_err();
        assert!(err.to_string().contains("default_page_size"));
    }
}
