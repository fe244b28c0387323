//! Localization and translation support
//!
//! User-facing strings for embedding shells (context-menu titles, count
//! report labels, popup captions), with English and Japanese catalogs
//! embedded at compile time.

use std::collections::HashMap;

use crate::error::{MojiKitError, Result};
use crate::text::count::CharacterCounts;

/// Supported languages with their codes and names
pub const SUPPORTED_LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("ja", "日本語", "Japanese"),
];

// Embed the language files at compile time
const LANG_EN: &str = include_str!("languages/en.json");
const LANG_JA: &str = include_str!("languages/ja.json");

/// Get the embedded JSON for a language code
fn get_language_json(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(LANG_EN),
        "ja" => Some(LANG_JA),
        _ => None,
    }
}

/// Check if a language code is supported
pub fn is_language_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(code, _, _)| *code == lang)
}

/// Translation manager
pub struct Translations {
    /// Current language code
    current_lang: String,
    /// Current language strings
    strings: HashMap<String, String>,
    /// English strings (fallback)
    english: HashMap<String, String>,
}

impl Translations {
    /// Create a new translations instance with English as default
    pub fn new() -> Result<Self> {
        let english = Self::load_language(crate::DEFAULT_LANGUAGE)?;
        Ok(Self {
            current_lang: crate::DEFAULT_LANGUAGE.to_string(),
            strings: english.clone(),
            english,
        })
    }

    /// Load a language from embedded JSON
    fn load_language(lang: &str) -> Result<HashMap<String, String>> {
        let json = get_language_json(lang)
            .ok_or_else(|| MojiKitError::LocalizationError(
                format!("Language '{}' not found", lang)
            ))?;

        // Strip UTF-8 BOM if present
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);

        serde_json::from_str(json)
            .map_err(|e| MojiKitError::LocalizationError(
                format!("Failed to parse language '{}': {}", lang, e)
            ))
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) -> Result<()> {
        if !is_language_supported(lang) {
            return Err(MojiKitError::LocalizationError(
                format!("Language '{}' is not supported", lang)
            ));
        }

        self.strings = Self::load_language(lang)?;
        self.current_lang = lang.to_string();
        Ok(())
    }

    /// Get a translated string by key
    /// Returns the key itself if not found
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key)
            .or_else(|| self.english.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }

    /// Get a translated string, returning None if not found
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.strings.get(key)
            .or_else(|| self.english.get(key))
            .map(|s| s.as_str())
    }

    /// Get the current language code
    pub fn get_language(&self) -> &str {
        &self.current_lang
    }

    /// Get the current language name (in its own language)
    pub fn get_language_name(&self) -> &str {
        SUPPORTED_LANGUAGES.iter()
            .find(|(code, _, _)| *code == self.current_lang)
            .map(|(_, local, _)| *local)
            .unwrap_or("Unknown")
    }

    /// Get available languages as (code, local_name, english_name) tuples
    pub fn available_languages() -> &'static [(&'static str, &'static str, &'static str)] {
        SUPPORTED_LANGUAGES
    }

    /// Get the English dictionary for iteration
    pub fn get_english_dictionary(&self) -> &HashMap<String, String> {
        &self.english
    }

    /// Get all keys in the current language
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.strings.keys()
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new().expect("Failed to load default translations")
    }
}

/// Format a count report as the shells display it: one `label: value`
/// line per count, in the catalog's current language.
///
/// # Example
/// ```
/// use mojikit::{Translations, count_characters, format_count_report};
///
/// let translations = Translations::new().unwrap();
/// let report = format_count_report(&count_characters("a b\nc"), &translations);
/// assert!(report.contains("Total characters: 5"));
/// ```
pub fn format_count_report(counts: &CharacterCounts, translations: &Translations) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}",
        translations.get("count_total"),
        counts.total,
        translations.get("count_without_whitespace"),
        counts.without_whitespace,
        translations.get("count_without_line_breaks"),
        counts.without_line_breaks,
    )
}
