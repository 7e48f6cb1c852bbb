//! Serde helpers
//!
//! Sort terms hold `Cow<'static, str>` so they can be built in `const` context
//! while still being deserializable from JSON or TOML (where strings become
//! `Cow::Owned`). Keyword enums deserialize through their `parse` functions, so a
//! config file accepts exactly the spellings `FromStr` does.

#[allow(unused_imports)]
use crate::alloc_prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, de};

/// Deserialize a String into Cow<'static, str>
#[cfg(feature = "serde")]
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Cow::Owned(s))
}

/// Deserialize a string and hand it to `parse`
#[cfg(feature = "serde")]
pub(crate) fn from_parsed<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> Option<T>,
    expected: &'static str,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&s), &expected))
}
