mod common;

use common::{prefs, Fixture};
use ujjtrans_site_core::{
    Markup, MemoryPage, MemoryStore, Page, PreferenceStore, Preferences, Site, ThemeMode, THEME_KEY,
};

#[test]
fn stored_dark_theme_is_applied_at_boot() {
    let fx = Fixture::new();
    let prefs = Preferences::new(MemoryStore::new().with_value(THEME_KEY, "dark"));
    let site = fx.boot(&prefs);

    assert!(fx.page.has_class(&fx.page.root(), "dark"));
    assert_eq!(site.theme().mode(&fx.page), ThemeMode::Dark);
    assert_eq!(fx.attr(fx.theme_toggle, "aria-pressed").as_deref(), Some("true"));
    assert_eq!(fx.attr(fx.theme_toggle_mobile, "aria-pressed").as_deref(), Some("true"));
}

#[test]
fn light_or_missing_theme_leaves_root_alone() {
    let fx = Fixture::new();
    let prefs = Preferences::new(MemoryStore::new().with_value(THEME_KEY, "light"));
    fx.boot(&prefs);
    assert!(!fx.page.has_class(&fx.page.root(), "dark"));
    assert_eq!(fx.attr(fx.theme_toggle, "aria-pressed").as_deref(), Some("false"));
}

#[test]
fn two_toggles_restore_mode_and_stored_flag() {
    let fx = Fixture::new();
    let prefs = Preferences::new(MemoryStore::new().with_value(THEME_KEY, "light"));
    let site = fx.boot(&prefs);

    fx.click(&site, &prefs, fx.theme_toggle);
    assert!(fx.page.has_class(&fx.page.root(), "dark"));
    assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("dark"));

    fx.click(&site, &prefs, fx.theme_toggle);
    assert!(!fx.page.has_class(&fx.page.root(), "dark"));
    assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn desktop_and_mobile_toggles_stay_in_sync() {
    let fx = Fixture::new();
    let prefs = prefs();
    let site = fx.boot(&prefs);

    fx.click(&site, &prefs, fx.theme_toggle_mobile);
    assert_eq!(fx.attr(fx.theme_toggle, "aria-pressed").as_deref(), Some("true"));
    assert_eq!(fx.attr(fx.theme_toggle_mobile, "aria-pressed").as_deref(), Some("true"));

    fx.click(&site, &prefs, fx.theme_toggle);
    assert_eq!(fx.attr(fx.theme_toggle, "aria-pressed").as_deref(), Some("false"));
    assert_eq!(fx.attr(fx.theme_toggle_mobile, "aria-pressed").as_deref(), Some("false"));
    assert!(!fx.page.has_class(&fx.page.root(), "dark"));
}

#[test]
fn toggle_reads_live_root_class() {
    let fx = Fixture::new();
    let prefs = prefs();
    let site = fx.boot(&prefs);

    fx.page.add_class(&fx.page.root(), "dark");
    assert_eq!(site.theme().toggle(&fx.page, &prefs), ThemeMode::Light);
    assert!(!fx.page.has_class(&fx.page.root(), "dark"));
}

#[test]
fn stored_dark_applies_without_toggles() {
    let page = MemoryPage::new();
    let prefs = Preferences::new(MemoryStore::new().with_value(THEME_KEY, "dark"));
    let (site, report) = Site::boot(&page, &prefs, &Markup::default(), None);

    assert_eq!(report.theme_toggles, 0);
    assert!(site.theme().toggles().is_empty());
    assert!(page.has_class(&page.root(), "dark"));
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("QuotaExceededError".to_string())
    }
}

#[test]
fn failed_write_still_switches_theme() {
    let fx = Fixture::new();
    let prefs = Preferences::new(FailingStore);
    let (site, _) = Site::boot(&fx.page, &prefs, &fx.markup, None);

    site.dispatch(
        &fx.page,
        &prefs,
        &ujjtrans_site_core::SiteEvent::Click {
            target: fx.theme_toggle,
        },
    );
    assert!(fx.page.has_class(&fx.page.root(), "dark"));
    assert!(fx
        .page
        .warnings()
        .contains(&"theme: failed to persist dark: QuotaExceededError".to_string()));
}
