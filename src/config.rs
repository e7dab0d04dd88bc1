//! Configuration loader — merges config.toml and environment variables.

use std::collections::BTreeSet;
use std::path::Path;

use calculation_engine::TableSize;
use common::{Error, ServiceItemCode};
use serde::Deserialize;

/// Tool configuration. Everything has a default; a config file and
/// environment variables layer on top.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// "small" or "large".
    pub table_size: String,
    /// Override for the codes that render a pricing breakdown. Empty
    /// means the engine's built-in allow-list.
    pub allowed_codes: Vec<ServiceItemCode>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_size: "large".to_string(),
            allowed_codes: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn table_size(&self) -> TableSize {
        if self.table_size.eq_ignore_ascii_case("small") {
            TableSize::Small
        } else {
            TableSize::Large
        }
    }

    pub fn allowed_codes(&self) -> Option<BTreeSet<ServiceItemCode>> {
        if self.allowed_codes.is_empty() {
            None
        } else {
            Some(self.allowed_codes.iter().copied().collect())
        }
    }
}

fn parse_code(raw: &str) -> Result<ServiceItemCode, Error> {
    let trimmed = raw.trim().to_ascii_uppercase();
    // Lenient deserialization maps unrecognized codes to Unknown; that is
    // wrong for config, where a typo should be loud.
    let code: ServiceItemCode = serde_json::from_value(serde_json::Value::String(trimmed))
        .map_err(|_| Error::Config(format!("unrecognized service item code: {raw}")))?;
    if code == ServiceItemCode::Unknown {
        return Err(Error::Config(format!(
            "unrecognized service item code: {raw}"
        )));
    }
    Ok(code)
}

fn validate_config(config: &AppConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    let size = config.table_size.trim().to_ascii_lowercase();
    if size != "small" && size != "large" {
        issues.push("table_size must be \"small\" or \"large\"".into());
    }

    for code in &config.allowed_codes {
        if matches!(
            code,
            ServiceItemCode::MS | ServiceItemCode::CS | ServiceItemCode::Unknown
        ) {
            issues.push(format!(
                "allowed_codes: {} has no calculation plan",
                code.as_str()
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Load configuration from an optional config file plus environment
/// overrides (highest priority).
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, Error> {
    let mut config = AppConfig::default();

    let default_path = Path::new("config.toml");
    let config_path = path.unwrap_or(default_path);
    if config_path.exists() {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;
        config = toml::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", config_path.display(), e))
        })?;
    } else if path.is_some() {
        return Err(Error::Config(format!(
            "Config file not found: {}",
            config_path.display()
        )));
    }

    if let Ok(size) = std::env::var("PAYMENT_REVIEW_TABLE_SIZE") {
        config.table_size = size;
    }
    if let Ok(raw) = std::env::var("PAYMENT_REVIEW_ALLOWED_CODES") {
        config.allowed_codes = raw
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(parse_code)
            .collect::<Result<Vec<_>, _>>()?;
    }

    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.table_size(), TableSize::Large);
        assert_eq!(config.allowed_codes(), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let config: AppConfig = toml::from_str(
            r#"
            table_size = "small"
            allowed_codes = ["DLH", "FSC"]
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.table_size(), TableSize::Small);
        let allowed = config.allowed_codes().unwrap();
        assert!(allowed.contains(&ServiceItemCode::DLH));
        assert!(allowed.contains(&ServiceItemCode::FSC));
        assert_eq!(allowed.len(), 2);
    }

    #[test]
    fn test_bad_table_size_is_rejected() {
        let config = AppConfig {
            table_size: "medium".into(),
            ..Default::default()
        };
        assert!(matches!(validate_config(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_basic_codes_are_rejected_in_allow_list() {
        let config = AppConfig {
            allowed_codes: vec![ServiceItemCode::MS],
            ..Default::default()
        };
        assert!(matches!(validate_config(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_code_normalizes_case() {
        assert_eq!(parse_code(" dlh ").unwrap(), ServiceItemCode::DLH);
        assert!(parse_code("NOPE-").is_err());
    }
}
