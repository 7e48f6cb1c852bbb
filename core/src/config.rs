//! Configuration for nullsort.toml

use std::path::Path;

use nullsort_types::{Dialect, DialectDescriptor, EmulationStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hints::NullsHints;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Null-ordering configuration
///
/// ```toml
/// dialect = "mysql"
/// emulation = "case"
///
/// [nulls]
/// "p.firstname" = "NULLS FIRST"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Target dialect (sqlite, postgresql, mysql)
    #[serde(default)]
    pub dialect: Dialect,
    /// Overrides the dialect's native `NULLS FIRST/LAST` support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_nulls: Option<bool>,
    /// Overrides the dialect's emulation strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emulation: Option<EmulationStrategy>,
    /// Per-field placements keyed by `"<alias>.<field>"`
    #[serde(default, skip_serializing_if = "NullsHints::is_empty")]
    pub nulls: NullsHints,
}

impl SortConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Dialect capabilities with the overrides applied
    #[must_use]
    pub fn descriptor(&self) -> DialectDescriptor {
        let base = self.dialect.descriptor();
        DialectDescriptor::new(
            self.native_nulls.unwrap_or(base.supports_native_nulls),
            self.emulation.unwrap_or(base.emulation),
        )
    }

    #[must_use]
    pub fn hints(&self) -> &NullsHints {
        &self.nulls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullsort_types::NullPlacement;

    #[test]
    fn test_parse_full_config() {
        let config = SortConfig::parse(
            r#"
            dialect = "mysql"

            [nulls]
            "p.firstname" = "NULLS FIRST"
            "p.lastname" = "NULLS LAST"
            "#,
        )
        .unwrap();

        assert_eq!(config.dialect, Dialect::MySQL);
        assert_eq!(config.descriptor(), DialectDescriptor::CASE_EMULATED);
        assert_eq!(config.hints().placement("p", "firstname"), NullPlacement::First);
        assert_eq!(config.hints().placement("p", "lastname"), NullPlacement::Last);
    }

    #[test]
    fn test_overrides() {
        let config = SortConfig::parse(
            r#"
            dialect = "mysql"
            emulation = "none"
            "#,
        )
        .unwrap();
        assert_eq!(config.descriptor(), DialectDescriptor::LITERAL);

        let config = SortConfig::parse(r#"dialect = "sqlite""#).unwrap();
        assert_eq!(config.descriptor(), DialectDescriptor::NATIVE);
        assert!(config.hints().is_empty());

        let config = SortConfig::parse(
            r#"
            dialect = "postgresql"
            native_nulls = false
            emulation = "case"
            "#,
        )
        .unwrap();
        assert_eq!(config.descriptor(), DialectDescriptor::CASE_EMULATED);
    }

    #[test]
    fn test_values_accept_parse_spellings() {
        let config = SortConfig::parse(
            r#"
            dialect = "MySQL"

            [nulls]
            "p.id" = "nulls first"
            "p.name" = "Last"
            "p.age" = "nulls_last"
            "#,
        )
        .unwrap();

        assert_eq!(config.dialect, Dialect::MySQL);
        assert_eq!(config.hints().placement("p", "id"), NullPlacement::First);
        assert_eq!(config.hints().placement("p", "name"), NullPlacement::Last);
        assert_eq!(config.hints().placement("p", "age"), NullPlacement::Last);

        let config = SortConfig::parse(r#"dialect = "MariaDB""#).unwrap();
        assert_eq!(config.descriptor(), DialectDescriptor::CASE_EMULATED);
    }

    #[test]
    fn test_round_trip() {
        let config = SortConfig {
            dialect: Dialect::PostgreSQL,
            native_nulls: Some(false),
            emulation: Some(EmulationStrategy::CaseExpressionWrap),
            nulls: NullsHints::new().with("p.id", NullPlacement::First),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SortConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_defaults() {
        let config = SortConfig::parse("").unwrap();
        assert_eq!(config, SortConfig::default());
        assert_eq!(config.dialect, Dialect::SQLite);
    }

    #[test]
    fn test_parse_errors() {
        let err = SortConfig::parse(r#"dialect = "oracle""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let err = SortConfig::parse(
            r#"
            [nulls]
            "p.id" = "sideways"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let err = SortConfig::from_file(Path::new("/nonexistent/nullsort.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
