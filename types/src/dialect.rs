//! SQL dialects and their null-ordering capabilities
//!
//! [`DialectDescriptor`] is what the formatter actually consults. [`Dialect`] is a
//! convenience for the engines nullsort knows about, each mapping to a descriptor.

/// How a dialect without a native `NULLS FIRST` / `NULLS LAST` clause gets null ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmulationStrategy {
    /// Emit the directive as written; nothing is rewritten
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoneRequired,

    /// Prefix the term with `CASE WHEN (<expr>) IS NULL THEN 1 ELSE 0 END`
    #[cfg_attr(feature = "serde", serde(rename = "case", alias = "case_expression"))]
    CaseExpressionWrap,
}

/// Null-ordering capabilities of a SQL engine
///
/// # Examples
///
/// ```
/// use nullsort_types::{Dialect, DialectDescriptor};
///
/// assert_eq!(Dialect::PostgreSQL.descriptor(), DialectDescriptor::NATIVE);
/// assert!(Dialect::MySQL.descriptor().emulates_nulls());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DialectDescriptor {
    /// Engine accepts `NULLS FIRST` / `NULLS LAST` after a sort key
    pub supports_native_nulls: bool,
    /// Fallback used when the native clause is unavailable
    #[cfg_attr(feature = "serde", serde(default))]
    pub emulation: EmulationStrategy,
}

impl DialectDescriptor {
    /// Native `NULLS FIRST` / `NULLS LAST` support (PostgreSQL, SQLite >= 3.30)
    pub const NATIVE: Self = Self {
        supports_native_nulls: true,
        emulation: EmulationStrategy::NoneRequired,
    };

    /// No native clause; null placement is emulated with a `CASE` sort key
    pub const CASE_EMULATED: Self = Self {
        supports_native_nulls: false,
        emulation: EmulationStrategy::CaseExpressionWrap,
    };

    /// No native clause and no emulation: the directive text is appended as-is
    pub const LITERAL: Self = Self {
        supports_native_nulls: false,
        emulation: EmulationStrategy::NoneRequired,
    };

    /// Create a descriptor from its parts
    #[must_use]
    pub const fn new(supports_native_nulls: bool, emulation: EmulationStrategy) -> Self {
        Self {
            supports_native_nulls,
            emulation,
        }
    }

    /// Returns `true` if a non-default null placement is rewritten into a `CASE` key
    #[inline]
    #[must_use]
    pub const fn emulates_nulls(&self) -> bool {
        !self.supports_native_nulls
            && matches!(self.emulation, EmulationStrategy::CaseExpressionWrap)
    }
}

impl Default for DialectDescriptor {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl From<Dialect> for DialectDescriptor {
    fn from(dialect: Dialect) -> Self {
        dialect.descriptor()
    }
}

/// SQL dialect for null-ordering behavior
///
/// # Examples
///
/// ```
/// use nullsort_types::Dialect;
///
/// let dialect = Dialect::PostgreSQL;
/// assert!(dialect.supports_native_nulls());
///
/// let mysql = Dialect::MySQL;
/// assert!(!mysql.supports_native_nulls());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - native `NULLS FIRST/LAST` since 3.30.0
    ///
    /// Compatible with: rusqlite, libsql, turso
    #[default]
    SQLite,

    /// PostgreSQL - native `NULLS FIRST/LAST`
    PostgreSQL,

    /// MySQL / MariaDB - no native clause, nulls sort as the smallest value
    MySQL,
}

impl Dialect {
    /// Returns the null-ordering capabilities of this dialect
    #[must_use]
    pub const fn descriptor(&self) -> DialectDescriptor {
        match self {
            Dialect::SQLite | Dialect::PostgreSQL => DialectDescriptor::NATIVE,
            Dialect::MySQL => DialectDescriptor::CASE_EMULATED,
        }
    }

    /// Returns `true` if this dialect accepts `NULLS FIRST` / `NULLS LAST`
    #[inline]
    #[must_use]
    pub const fn supports_native_nulls(&self) -> bool {
        self.descriptor().supports_native_nulls
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    ///
    /// # Examples
    ///
    /// ```
    /// use nullsort_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("MariaDB"), Some(Dialect::MySQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite")
            || s.eq_ignore_ascii_case("turso")
            || s.eq_ignore_ascii_case("libsql")
        {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else {
            None
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dialect {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serde_helpers::from_parsed(deserializer, Dialect::parse, "sqlite, postgresql or mysql")
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parse() {
        assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("SQLite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("turso"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("libsql"), Some(Dialect::SQLite));

        assert_eq!(Dialect::parse("postgresql"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::parse("postgres"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::parse("PG"), Some(Dialect::PostgreSQL));

        assert_eq!(Dialect::parse("mysql"), Some(Dialect::MySQL));
        assert_eq!(Dialect::parse("mariadb"), Some(Dialect::MySQL));

        assert_eq!(Dialect::parse("unknown"), None);
        assert_eq!(Dialect::parse(""), None);
        assert_eq!("oracle".parse::<Dialect>(), Err(DialectParseError));
    }

    #[test]
    fn test_dialect_descriptors() {
        assert_eq!(Dialect::SQLite.descriptor(), DialectDescriptor::NATIVE);
        assert_eq!(Dialect::PostgreSQL.descriptor(), DialectDescriptor::NATIVE);
        assert_eq!(Dialect::MySQL.descriptor(), DialectDescriptor::CASE_EMULATED);
        assert_eq!(DialectDescriptor::from(Dialect::MySQL), DialectDescriptor::CASE_EMULATED);
    }

    #[test]
    fn test_emulates_nulls() {
        assert!(!DialectDescriptor::NATIVE.emulates_nulls());
        assert!(DialectDescriptor::CASE_EMULATED.emulates_nulls());
        assert!(!DialectDescriptor::LITERAL.emulates_nulls());
        // native support wins over a configured strategy
        let both = DialectDescriptor::new(true, EmulationStrategy::CaseExpressionWrap);
        assert!(!both.emulates_nulls());
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(format!("{}", Dialect::SQLite), "sqlite");
        assert_eq!(format!("{}", Dialect::PostgreSQL), "postgresql");
        assert_eq!(format!("{}", Dialect::MySQL), "mysql");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_descriptor_serde() {
        let json = serde_json::to_string(&DialectDescriptor::CASE_EMULATED).unwrap();
        assert_eq!(json, r#"{"supportsNativeNulls":false,"emulation":"case"}"#);

        let parsed: DialectDescriptor =
            serde_json::from_str(r#"{"supportsNativeNulls":true}"#).unwrap();
        assert_eq!(parsed, DialectDescriptor::NATIVE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dialect_serde_uses_parse() {
        for (text, dialect) in [
            ("MySQL", Dialect::MySQL),
            ("MariaDB", Dialect::MySQL),
            ("PG", Dialect::PostgreSQL),
            ("libsql", Dialect::SQLite),
        ] {
            let parsed: Dialect = serde_json::from_str(&format!("\"{text}\"")).unwrap();
            assert_eq!(parsed, dialect);
        }
        assert_eq!(serde_json::to_string(&Dialect::PostgreSQL).unwrap(), r#""postgresql""#);
        assert!(serde_json::from_str::<Dialect>(r#""oracle""#).is_err());
    }
}
