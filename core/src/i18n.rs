//! Translation tables generated at build time from `translations/site.toml`.
//!
//! The build script rejects tables that do not share one key set, so every
//! [`TextKey`] resolves in every [`Lang`]. Keys found in markup but not in
//! the tables are the runtime's problem: [`lookup`] returns `None` and the
//! element keeps whatever text it had.

use std::fmt;

use crate::lang::Lang;

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

impl TextKey {
    pub fn parse(key: &str) -> Result<Self, UnknownTextKey> {
        Self::from_key(key).ok_or_else(|| UnknownTextKey {
            key: key.to_string(),
        })
    }

    pub fn text(self, lang: Lang) -> &'static str {
        table(lang)[self as usize]
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextKey {
    type Err = UnknownTextKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTextKey {
    pub key: String,
}

impl fmt::Display for UnknownTextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown translation key '{}'", self.key)
    }
}

impl std::error::Error for UnknownTextKey {}

fn table(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::Hu => TABLE_HU,
        Lang::De => TABLE_DE,
        Lang::En => TABLE_EN,
    }
}

/// Display string for a raw marker key, if the key is known. Keys match
/// exactly; surrounding whitespace makes a key unknown.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    TextKey::from_key(key).map(|key| key.text(lang))
}
