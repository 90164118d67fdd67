//! The two persisted site preferences: colour theme and UI language.

use crate::error::{SiteError, SiteResult};
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the theme button: the icon of the theme you would switch to.
    pub fn button_glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(SiteError::InvalidPreference {
                key: THEME_KEY,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Value for the document `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// The language's own name for itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Label for the language button: names the language you would switch to.
    pub fn toggle_label(self) -> &'static str {
        self.toggled().native_name()
    }

    /// Attribute holding an element's text in this language, e.g. `data-ar`.
    pub fn data_attr(self) -> &'static str {
        match self {
            Language::En => "data-en",
            Language::Ar => "data-ar",
        }
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(SiteError::InvalidPreference {
                key: LANGUAGE_KEY,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

/// In-memory store used off-browser and in tests.
#[derive(Default, Debug)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
    /// When set, every write fails with [`SiteError::Storage`].
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        if self.fail_writes {
            return Err(SiteError::Storage(format!("write to `{}` refused", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Values found in storage; `None` for missing or unreadable entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedPreferences {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
}

/// Which toggles to replay at startup to reach the saved state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartupToggles {
    pub theme: bool,
    pub language: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    pub fn save_theme<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> SiteResult<()> {
        store.set(THEME_KEY, self.theme.as_str())
    }

    pub fn save_language<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> SiteResult<()> {
        store.set(LANGUAGE_KEY, self.language.as_str())
    }

    pub fn toggles_to_reach(&self, saved: &SavedPreferences) -> StartupToggles {
        StartupToggles {
            theme: saved.theme.is_some_and(|t| t != self.theme),
            language: saved.language.is_some_and(|l| l != self.language),
        }
    }
}

fn read_entry<S, T>(store: &S, key: &str) -> Option<T>
where
    S: PreferenceStore + ?Sized,
    T: FromStr<Err = SiteError>,
{
    let raw = match store.get(key) {
        Ok(v) => v?,
        Err(e) => {
            log::warn!("[prefs] read `{}` failed: {}", key, e);
            return None;
        }
    };
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[prefs] ignoring stored value: {}", e);
            None
        }
    }
}

pub fn load_saved<S: PreferenceStore + ?Sized>(store: &S) -> SavedPreferences {
    SavedPreferences {
        theme: read_entry(store, THEME_KEY),
        language: read_entry(store, LANGUAGE_KEY),
    }
}

/// Stored preferences with defaults (`light`, `en`) for missing entries.
pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Preferences {
    let saved = load_saved(store);
    Preferences {
        theme: saved.theme.unwrap_or_default(),
        language: saved.language.unwrap_or_default(),
    }
}

pub fn save<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) -> SiteResult<()> {
    store.set(key, value)
}
