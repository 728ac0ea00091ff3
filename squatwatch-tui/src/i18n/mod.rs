//! Internationalization (i18n) module.
//!
//! Plain Rust structs of `&'static str`, checked at compile time, with zero
//! runtime cost. The watchlist data itself is Russian; the UI chrome follows
//! the configured language.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod ru_ru;

pub use keys::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (US)
    #[default]
    EnUs,
    /// Russian
    RuRu,
}

impl Language {
    /// Language code (BCP 47).
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::RuRu => "ru-RU",
        }
    }

    /// Parse a language code.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ru-RU" | "ru" => Some(Language::RuRu),
            _ => None,
        }
    }
}

/// Current language index (atomic, thread safe). 0 = EnUs
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// Get the translations for the current language.
///
/// # Example
///
/// ```
/// use squatwatch_tui::i18n::t;
///
/// let text = t().watchlist.title; // "Dangerous domains" or "Опасные домены"
/// ```
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &ru_ru::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// Set the current language.
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::RuRu => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        assert_eq!(Language::from_code("en-US"), Some(Language::EnUs));
        assert_eq!(Language::from_code("ru-RU"), Some(Language::RuRu));
        assert_eq!(Language::from_code("ru"), Some(Language::RuRu));
        assert_eq!(Language::from_code("de-DE"), None);

        for lang in [Language::EnUs, Language::RuRu] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_placeholders_differ_per_language() {
        // The Russian service reports the owner and the abuse address with
        // different grammatical genders
        assert_eq!(ru_ru::TRANSLATIONS.watchlist.unknown_owner, "Неизвестен");
        assert_eq!(ru_ru::TRANSLATIONS.watchlist.unknown_emails, "Неизвестна");
        assert_eq!(en_us::TRANSLATIONS.watchlist.unknown_owner, "Unknown");
    }
}
