// Host-side tests for preference loading, toggling and persistence.

use landing_core::*;

#[test]
fn missing_keys_load_defaults() {
    let store = MemoryStore::new();
    let prefs = load(&store);
    assert_eq!(prefs.theme, Theme::Light);
    assert_eq!(prefs.language, Language::En);
}

#[test]
fn stored_values_are_loaded() {
    let store = MemoryStore::new()
        .with_entry(THEME_KEY, "dark")
        .with_entry(LANGUAGE_KEY, "ar");
    let prefs = load(&store);
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.language, Language::Ar);
}

#[test]
fn unrecognised_values_fall_back_to_defaults() {
    let store = MemoryStore::new()
        .with_entry(THEME_KEY, "sepia")
        .with_entry(LANGUAGE_KEY, "fr");
    assert_eq!(load_saved(&store), SavedPreferences::default());
    assert_eq!(load(&store), Preferences::default());
}

#[test]
fn toggling_theme_twice_restores_display_and_storage() {
    let mut store = MemoryStore::new();
    let mut prefs = Preferences::default();

    assert_eq!(prefs.toggle_theme(), Theme::Dark);
    prefs.save_theme(&mut store).unwrap();
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(prefs.theme.button_glyph(), "☀️");

    assert_eq!(prefs.toggle_theme(), Theme::Light);
    prefs.save_theme(&mut store).unwrap();
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(prefs.theme.button_glyph(), "🌙");
}

#[test]
fn language_toggle_updates_attributes_and_label() {
    let mut prefs = Preferences::default();
    let lang = prefs.toggle_language();
    assert_eq!(lang, Language::Ar);
    assert_eq!(lang.dir(), "rtl");
    assert_eq!(lang.data_attr(), "data-ar");
    // button names the language you would switch back to
    assert_eq!(lang.toggle_label(), "English");

    let lang = prefs.toggle_language();
    assert_eq!(lang, Language::En);
    assert_eq!(lang.dir(), "ltr");
    assert_eq!(lang.toggle_label(), "العربية");
}

#[test]
fn startup_replays_only_differing_toggles() {
    let prefs = Preferences::default();
    let none = prefs.toggles_to_reach(&SavedPreferences::default());
    assert_eq!(none, StartupToggles::default());

    let saved = SavedPreferences {
        theme: Some(Theme::Light),
        language: Some(Language::Ar),
    };
    let t = prefs.toggles_to_reach(&saved);
    assert!(!t.theme);
    assert!(t.language);
}

#[test]
fn write_failures_surface_as_storage_errors() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    let prefs = Preferences::default();
    let err = prefs.save_language(&mut store).unwrap_err();
    assert!(matches!(err, SiteError::Storage(_)));
    assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
}

#[test]
fn save_writes_raw_pairs() {
    let mut store = MemoryStore::new();
    save(&mut store, LANGUAGE_KEY, "ar").unwrap();
    assert_eq!(load(&store).language, Language::Ar);
}

#[test]
fn parse_and_display_round_trip_names() {
    assert_eq!("dark".parse::<Theme>().unwrap().to_string(), "dark");
    assert_eq!("en".parse::<Language>().unwrap().to_string(), "en");
    assert!("DARK".parse::<Theme>().is_err());
}
