//! Per-field null placement keyed by `"<alias>.<field>"`.
//!
//! A query compiler that only knows its ORDER BY items as alias/field pairs can keep
//! the placement preferences here and resolve them into [`SortTerm`]s. Only plain
//! field references are looked up; computed expressions never pick up a hint.

use std::borrow::Cow;

use hashbrown::HashMap;
use nullsort_types::{NullPlacement, SortDirection, SortSpec, SortTerm};

/// Null placement preferences for alias-qualified fields
///
/// # Examples
///
/// ```
/// use nullsort_core::NullsHints;
/// use nullsort_types::NullPlacement;
///
/// let hints = NullsHints::new()
///     .with("p.firstname", NullPlacement::First)
///     .with("p.lastname", NullPlacement::Last);
///
/// assert_eq!(hints.placement("p", "firstname"), NullPlacement::First);
/// assert_eq!(hints.placement("p", "email"), NullPlacement::Default);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NullsHints {
    fields: HashMap<String, NullPlacement>,
}

impl NullsHints {
    /// Name under which query hints carry this map
    pub const HINT: &'static str = "sortableNulls.fields";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placement for `key` (`"<alias>.<field>"`), returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, nulls: NullPlacement) -> Option<NullPlacement> {
        self.fields.insert(key.into(), nulls)
    }

    /// Builder form of [`NullsHints::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, nulls: NullPlacement) -> Self {
        self.insert(key, nulls);
        self
    }

    /// Hinted placement for `alias.field`, [`NullPlacement::Default`] if none.
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn placement(&self, alias: &str, field: &str) -> NullPlacement {
        if self.fields.is_empty() {
            return NullPlacement::Default;
        }
        self.fields
            .get(format!("{alias}.{field}").as_str())
            .copied()
            .unwrap_or_default()
    }

    /// Sort term for a field reference, carrying the hinted placement
    #[must_use]
    pub fn field_term(
        &self,
        alias: &str,
        field: &str,
        expression: impl Into<Cow<'static, str>>,
        direction: SortDirection,
    ) -> SortTerm {
        SortTerm::new(expression, direction).with_nulls(self.placement(alias, field))
    }

    /// Resolve ORDER BY items into a [`SortSpec`], keeping their order
    pub fn resolve<I>(&self, items: I) -> SortSpec
    where
        I: IntoIterator<Item = (SortKey, SortDirection)>,
    {
        items
            .into_iter()
            .map(|(key, direction)| match key {
                SortKey::Field {
                    alias,
                    field,
                    expression,
                } => self.field_term(&alias, &field, expression, direction),
                SortKey::Expression(expression) => SortTerm::new(expression, direction),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NullPlacement)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, NullPlacement)> for NullsHints {
    fn from_iter<I: IntoIterator<Item = (K, NullPlacement)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// An ORDER BY item as the query compiler sees it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Field of an aliased entity; `expression` is its resolved SQL (`"t0.lastname"`)
    Field {
        alias: String,
        field: String,
        expression: Cow<'static, str>,
    },
    /// Anything else (function calls, result variables); never hinted
    Expression(Cow<'static, str>),
}

impl SortKey {
    #[must_use]
    pub fn field(
        alias: impl Into<String>,
        field: impl Into<String>,
        expression: impl Into<Cow<'static, str>>,
    ) -> Self {
        SortKey::Field {
            alias: alias.into(),
            field: field.into(),
            expression: expression.into(),
        }
    }

    #[must_use]
    pub fn expression(expression: impl Into<Cow<'static, str>>) -> Self {
        SortKey::Expression(expression.into())
    }
}
