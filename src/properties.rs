//! Chart property definitions with defaults from chart.json
//!
//! chart.json is embedded at compile time and parsed once into a registry of
//! property definitions. Defaults are declared there and nowhere else; readers
//! fall back to them whenever a user value is absent or invalid.

use crate::chart::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// chart.json embedded at compile time
const CHART_JSON: &str = include_str!("../chart.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PropertyKind {
    #[serde(rename = "StringProperty")]
    String,
    #[serde(rename = "EnumeratedProperty")]
    Enumerated,
}

/// Property definition from chart.json
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub kind: PropertyKind,
    #[serde(rename = "defaultValue", default)]
    pub default_value: String,
    #[serde(default)]
    pub description: String,
    /// For EnumeratedProperty, the valid values
    #[serde(rename = "values")]
    pub valid_values: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ChartManifest {
    properties: Vec<PropertyDef>,
}

/// Registry of all chart properties with their defaults
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    properties: HashMap<String, PropertyDef>,
}

impl PropertyRegistry {
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: ChartManifest = serde_json::from_str(json)?;
        let properties = manifest
            .properties
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Ok(Self { properties })
    }

    /// Get the default value for a property
    pub fn get_default(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.default_value.as_str())
    }

    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.get(name)
    }

    /// Check if a value is valid for an enumerated property
    pub fn is_valid_enum_value(&self, name: &str, value: &str) -> bool {
        self.properties
            .get(name)
            .and_then(|p| p.valid_values.as_ref())
            .map(|values| values.iter().any(|v| v.eq_ignore_ascii_case(value)))
            .unwrap_or(true) // Non-enumerated properties accept any value
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

static REGISTRY: std::sync::OnceLock<PropertyRegistry> = std::sync::OnceLock::new();

/// Get the global property registry
pub fn registry() -> &'static PropertyRegistry {
    REGISTRY.get_or_init(|| {
        PropertyRegistry::from_json(CHART_JSON).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load chart.json");
            PropertyRegistry::default()
        })
    })
}

/// User-set property values, e.g. from a JSON override file
#[derive(Debug, Clone, Default)]
pub struct PropertyOverrides {
    values: HashMap<String, String>,
}

impl PropertyOverrides {
    /// Parse a flat JSON object of property values
    ///
    /// Strings, numbers and booleans are accepted; other values are skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut overrides = Self::default();
        for (key, value) in map {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => {
                    tracing::warn!(property = %key, value = %other, "ignoring non-scalar property value");
                    continue;
                }
            };
            overrides.set(key, value);
        }
        Ok(overrides)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set a value; empty strings count as not set
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&name);
        } else {
            self.values.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Typed property reader: user value when valid, chart.json default otherwise
pub struct PropertyReader<'a> {
    overrides: Option<&'a PropertyOverrides>,
}

impl<'a> PropertyReader<'a> {
    pub fn new(overrides: Option<&'a PropertyOverrides>) -> Self {
        Self { overrides }
    }

    fn user_value(&self, name: &str) -> Option<&str> {
        self.overrides.and_then(|o| o.get(name))
    }

    /// Get string property (user value or default from chart.json)
    pub fn get_string(&self, name: &str) -> String {
        if let Some(value) = self.user_value(name) {
            return value.to_string();
        }
        registry().get_default(name).unwrap_or("").to_string()
    }

    /// Get optional string property (None if empty)
    pub fn get_optional_string(&self, name: &str) -> Option<String> {
        let value = self.get_string(name);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Get enumerated property, falling back to the default on invalid values
    pub fn get_enum(&self, name: &str) -> String {
        let reg = registry();
        let default = reg.get_default(name).unwrap_or("");

        if let Some(value) = self.user_value(name) {
            if reg.is_valid_enum_value(name, value) {
                return value.to_lowercase();
            }
            let valid_values = reg
                .get_property(name)
                .and_then(|p| p.valid_values.as_ref())
                .map(|v| v.join(", "))
                .unwrap_or_default();
            tracing::warn!(
                property = name,
                value,
                valid = %valid_values,
                default,
                "invalid enumerated value, using default"
            );
        }

        default.to_string()
    }

    /// Get a parsed property, falling back to the default if parsing fails
    pub fn get_parsed<T>(&self, name: &str) -> Option<T>
    where
        T: FromStr + Display,
    {
        let default = registry()
            .get_default(name)
            .and_then(|s| s.trim().parse::<T>().ok());

        let Some(value) = self.user_value(name) else {
            return default;
        };

        match value.trim().parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(
                    property = name,
                    value,
                    default = %default.as_ref().map(ToString::to_string).unwrap_or_default(),
                    "invalid numeric value, using default"
                );
                default
            }
        }
    }

    /// Get a comma separated list, trimming entries and dropping empty ones
    pub fn get_list(&self, name: &str) -> Vec<String> {
        self.get_string(name)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let reg = registry();
        assert!(!reg.is_empty());
        assert!(reg.get_property("layout.mode").is_some());
        assert!(reg.get_property("data.sectors").is_some());
        assert_eq!(
            reg.get_property("layout.mode").map(|p| p.kind),
            Some(PropertyKind::Enumerated)
        );
    }

    #[test]
    fn test_registry_defaults() {
        let reg = registry();
        assert_eq!(reg.get_default("layout.mode"), Some("stacked"));
        assert_eq!(reg.get_default("data.year.min"), Some("1990"));
        assert_eq!(reg.get_default("data.year.max"), Some(""));
        assert_eq!(reg.get_default("bumps.periods"), Some("31"));
    }

    #[test]
    fn test_enum_validation() {
        let reg = registry();
        assert!(reg.is_valid_enum_value("layout.mode", "stacked"));
        assert!(reg.is_valid_enum_value("layout.mode", "Grouped"));
        assert!(!reg.is_valid_enum_value("layout.mode", "bumps"));
        assert!(reg.is_valid_enum_value("data.path", "anything.json"));
    }

    #[test]
    fn test_reader_defaults() {
        let reader = PropertyReader::new(None);
        assert_eq!(reader.get_enum("layout.mode"), "stacked");
        assert_eq!(reader.get_parsed::<i32>("data.year.min"), Some(1990));
        assert_eq!(reader.get_parsed::<i32>("data.year.max"), None);
        assert_eq!(reader.get_optional_string("data.year.max"), None);
        assert_eq!(reader.get_list("data.sectors").len(), 9);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides = PropertyOverrides::from_json(
            r#"{"layout.mode": "grouped", "data.year.min": 2000, "data.sectors": " Buildings , Transport ,", "nested": {"a": 1}}"#,
        )
        .unwrap();
        assert_eq!(overrides.get("nested"), None);

        let reader = PropertyReader::new(Some(&overrides));
        assert_eq!(reader.get_enum("layout.mode"), "grouped");
        assert_eq!(reader.get_parsed::<i32>("data.year.min"), Some(2000));
        assert_eq!(reader.get_list("data.sectors"), vec!["Buildings", "Transport"]);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let mut overrides = PropertyOverrides::default();
        overrides.set("layout.mode", "sideways");
        overrides.set("bumps.seed", "abc");

        let reader = PropertyReader::new(Some(&overrides));
        assert_eq!(reader.get_enum("layout.mode"), "stacked");
        assert_eq!(reader.get_parsed::<u64>("bumps.seed"), Some(42));
    }

    #[test]
    fn test_empty_override_unsets() {
        let mut overrides = PropertyOverrides::default();
        overrides.set("data.path", "other.json");
        overrides.set("data.path", "");
        assert_eq!(overrides.get("data.path"), None);
    }
}
