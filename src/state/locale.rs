//! Active locale and translation lookup with graceful degradation.
//!
//! DESIGN
//! ======
//! The string table is immutable; lookup walks
//! `locale → section → dotted key path`, retries the same path in the
//! default locale, and finally falls back to the literal key. The walk
//! returns a tagged [`Resolution`] so callers can log fallbacks and
//! misses instead of silently shipping raw keys to the page.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::translations;
use crate::util::storage;

/// localStorage key holding the persisted locale record.
const STORAGE_KEY: &str = "language-storage";

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a stored locale tag; anything unrecognized maps to English.
    pub fn from_tag(raw: &str) -> Self {
        match raw {
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }
}

/// Persisted shape of the locale preference: `{ "locale": "en" | "fr" }`.
#[derive(Debug, Serialize, Deserialize)]
struct LocaleRecord {
    locale: String,
}

/// Outcome of a single translation lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    /// Present in the active locale.
    Found(&'a Value),
    /// Missing in the active locale, present in the default locale.
    FallenBack(&'a Value),
    /// Missing in both locales; carries the key that was looked up.
    Missing(String),
}

/// Walk `locale → section → dotted key path` through `table`.
fn walk<'a>(table: &'a Value, locale: Locale, section: &str, key: &str) -> Option<&'a Value> {
    let mut node = table.get(locale.as_str())?.get(section)?;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    Some(node)
}

/// Resolve `(section, key)` in `locale`, falling back to
/// `default_locale` and then to the literal key.
pub fn resolve<'a>(
    table: &'a Value,
    locale: Locale,
    default_locale: Locale,
    section: &str,
    key: &str,
) -> Resolution<'a> {
    if let Some(value) = walk(table, locale, section, key) {
        return Resolution::Found(value);
    }
    if locale != default_locale {
        if let Some(value) = walk(table, default_locale, section, key) {
            return Resolution::FallenBack(value);
        }
    }
    Resolution::Missing(key.to_owned())
}

/// Active-locale state, provided via context at the app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleState {
    pub locale: Locale,
}

impl LocaleState {
    /// Restore the persisted locale. Absent or corrupt storage defaults
    /// to English.
    pub fn restore() -> Self {
        let locale = storage::load_json::<LocaleRecord>(STORAGE_KEY)
            .map_or(Locale::En, |record| Locale::from_tag(&record.locale));
        Self { locale }
    }

    /// Switch the active locale and persist it for the next session.
    /// Already-rendered text updates when the owning signal notifies.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        storage::save_json(
            STORAGE_KEY,
            &LocaleRecord {
                locale: locale.as_str().to_owned(),
            },
        );
    }

    /// Look up a single localized string. Misses return the literal key
    /// so the page never renders empty holes.
    pub fn t(&self, section: &str, key: &str) -> String {
        match resolve(translations::table(), self.locale, Locale::En, section, key) {
            Resolution::Found(value) => value_to_string(value, key),
            Resolution::FallenBack(value) => {
                log::debug!("translation {section}.{key} fell back to en");
                value_to_string(value, key)
            }
            Resolution::Missing(key) => {
                log::warn!("missing translation {section}.{key}");
                key
            }
        }
    }

    /// Look up a localized string array. Misses and scalar values yield
    /// an empty list, logged at `warn`.
    pub fn t_list(&self, section: &str, key: &str) -> Vec<String> {
        let resolution = resolve(translations::table(), self.locale, Locale::En, section, key);
        let value = match &resolution {
            Resolution::Found(value) | Resolution::FallenBack(value) => *value,
            Resolution::Missing(key) => {
                log::warn!("missing translation list {section}.{key}");
                return Vec::new();
            }
        };
        value.as_array().map_or_else(
            || {
                log::warn!("translation {section}.{key} is not a list");
                Vec::new()
            },
            |items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(ToOwned::to_owned))
                    .collect()
            },
        )
    }
}

fn value_to_string(value: &Value, key: &str) -> String {
    value
        .as_str()
        .map_or_else(|| key.to_owned(), ToOwned::to_owned)
}
