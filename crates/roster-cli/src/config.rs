//! Dashboard configuration loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roster_model::{ColumnStrictness, DashboardConfig};
use tracing::info;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub nationality_column: Option<String>,
    pub citizen_value: Option<String>,
    pub strict: bool,
}

/// Reads `path` as TOML, or returns the defaults when no path is given.
///
/// Keys missing from the file keep their default values. A path that does
/// not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: DashboardConfig =
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

pub fn apply_overrides(mut config: DashboardConfig, overrides: &ConfigOverrides) -> DashboardConfig {
    if let Some(column) = &overrides.nationality_column {
        config.population.column.clone_from(column);
    }
    if let Some(value) = &overrides.citizen_value {
        config.population.value.clone_from(value);
    }
    if overrides.strict {
        config.strictness = ColumnStrictness::Strict;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn overrides_replace_population_rule() {
        let overrides = ConfigOverrides {
            nationality_column: Some("Nationality".to_string()),
            citizen_value: None,
            strict: true,
        };
        let config = apply_overrides(DashboardConfig::default(), &overrides);
        assert_eq!(config.population.column, "Nationality");
        assert_eq!(
            config.population.value,
            DashboardConfig::default().population.value
        );
        assert_eq!(config.strictness, ColumnStrictness::Strict);
    }
}
