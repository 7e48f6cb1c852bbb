//! Sort terms and sort specifications

#[allow(unused_imports)]
use crate::alloc_prelude::*;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

/// Sort direction for ORDER BY terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SortDirection {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ASC"))]
    Asc,
    #[cfg_attr(feature = "serde", serde(rename = "DESC"))]
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// The opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Parse a direction (case-insensitive, `asc`/`ascending`/`desc`/`descending`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") || s.eq_ignore_ascii_case("ascending") {
            Some(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") || s.eq_ignore_ascii_case("descending") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }
}

impl core::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SortDirection {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortDirection::parse(s).ok_or(DirectionParseError)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SortDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serde_helpers::from_parsed(deserializer, SortDirection::parse, "ASC or DESC")
    }
}

/// Error returned when parsing an unknown sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionParseError;

impl core::fmt::Display for DirectionParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown sort direction")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DirectionParseError {}

/// Where rows with a NULL sort key go, independent of the sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NullPlacement {
    /// Leave it to the engine
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "DEFAULT"))]
    Default,
    #[cfg_attr(feature = "serde", serde(rename = "NULLS FIRST"))]
    First,
    #[cfg_attr(feature = "serde", serde(rename = "NULLS LAST"))]
    Last,
}

impl NullPlacement {
    /// The native SQL directive, `None` for [`NullPlacement::Default`]
    #[must_use]
    pub const fn clause(&self) -> Option<&'static str> {
        match self {
            NullPlacement::Default => None,
            NullPlacement::First => Some("NULLS FIRST"),
            NullPlacement::Last => Some("NULLS LAST"),
        }
    }

    /// Returns `true` unless this is [`NullPlacement::Default`]
    #[inline]
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, NullPlacement::Default)
    }

    /// Parse a placement (case-insensitive)
    ///
    /// Accepts the SQL directive (`"NULLS FIRST"`), the snake-case form
    /// (`"nulls_last"`), the bare word (`"first"`) and `"default"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nullsort_types::NullPlacement;
    ///
    /// assert_eq!(NullPlacement::parse("NULLS FIRST"), Some(NullPlacement::First));
    /// assert_eq!(NullPlacement::parse("nulls_last"), Some(NullPlacement::Last));
    /// assert_eq!(NullPlacement::parse("sideways"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let word = match s.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("nulls") => {
                let rest = &s[5..];
                let word = rest.trim_start_matches([' ', '_']);
                // "nullsfirst" is not a directive
                if word.len() == rest.len() {
                    return None;
                }
                word
            }
            _ => s,
        };

        if word.eq_ignore_ascii_case("first") {
            Some(NullPlacement::First)
        } else if word.eq_ignore_ascii_case("last") {
            Some(NullPlacement::Last)
        } else if word.eq_ignore_ascii_case("default") {
            Some(NullPlacement::Default)
        } else {
            None
        }
    }
}

impl core::fmt::Display for NullPlacement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.clause().unwrap_or("DEFAULT"))
    }
}

impl core::str::FromStr for NullPlacement {
    type Err = NullPlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NullPlacement::parse(s).ok_or(NullPlacementParseError)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NullPlacement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serde_helpers::from_parsed(
            deserializer,
            NullPlacement::parse,
            "NULLS FIRST, NULLS LAST or DEFAULT",
        )
    }
}

/// Error returned when parsing an unknown null placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullPlacementParseError;

impl core::fmt::Display for NullPlacementParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown null placement")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NullPlacementParseError {}

/// A single ORDER BY key
///
/// `expression` is already-resolved SQL (`"t0.lastname"`, `"lower(p.name)"`) and is
/// emitted verbatim. It must not be empty; the formatter rejects empty expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SortTerm {
    /// Column reference or expression
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub expression: Cow<'static, str>,
    /// Sort direction
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: SortDirection,
    /// Null placement
    #[cfg_attr(feature = "serde", serde(default))]
    pub nulls: NullPlacement,
}

impl SortTerm {
    /// Create a new sort term with the engine's default null placement
    #[must_use]
    pub fn new(expression: impl Into<Cow<'static, str>>, direction: SortDirection) -> Self {
        Self {
            expression: expression.into(),
            direction,
            nulls: NullPlacement::Default,
        }
    }

    /// Ascending term: `expression ASC`
    #[must_use]
    pub fn asc(expression: impl Into<Cow<'static, str>>) -> Self {
        Self::new(expression, SortDirection::Asc)
    }

    /// Descending term: `expression DESC`
    #[must_use]
    pub fn desc(expression: impl Into<Cow<'static, str>>) -> Self {
        Self::new(expression, SortDirection::Desc)
    }

    /// Set NULLS FIRST
    #[must_use]
    pub fn nulls_first(self) -> Self {
        self.with_nulls(NullPlacement::First)
    }

    /// Set NULLS LAST
    #[must_use]
    pub fn nulls_last(self) -> Self {
        self.with_nulls(NullPlacement::Last)
    }

    /// Set the null placement
    #[must_use]
    pub fn with_nulls(mut self, nulls: NullPlacement) -> Self {
        self.nulls = nulls;
        self
    }
}

/// Ordered list of sort terms; the first term is the primary key
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SortSpec {
    terms: Vec<SortTerm>,
}

impl SortSpec {
    /// Create an empty specification
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Append a term as the lowest-precedence key
    pub fn push(&mut self, term: SortTerm) {
        self.terms.push(term);
    }

    /// Builder form of [`SortSpec::push`]
    #[must_use]
    pub fn then(mut self, term: SortTerm) -> Self {
        self.terms.push(term);
        self
    }

    /// Terms in precedence order
    #[must_use]
    pub fn terms(&self) -> &[SortTerm] {
        &self.terms
    }

    pub fn iter(&self) -> core::slice::Iter<'_, SortTerm> {
        self.terms.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<SortTerm>> for SortSpec {
    fn from(terms: Vec<SortTerm>) -> Self {
        Self { terms }
    }
}

impl<const N: usize> From<[SortTerm; N]> for SortSpec {
    fn from(terms: [SortTerm; N]) -> Self {
        terms.into_iter().collect()
    }
}

impl FromIterator<SortTerm> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortTerm>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<SortTerm> for SortSpec {
    fn extend<I: IntoIterator<Item = SortTerm>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl IntoIterator for SortSpec {
    type Item = SortTerm;
    type IntoIter = vec::IntoIter<SortTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortTerm;
    type IntoIter = core::slice::Iter<'a, SortTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
