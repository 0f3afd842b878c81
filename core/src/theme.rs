use crate::event::{Propagation, SiteEvent};
use crate::page::{bool_attr, Markup, Page, ATTR_ARIA_PRESSED};
use crate::prefs::{PreferenceStore, Preferences, ThemeMode};

/// Dark/light switch shared by the desktop and mobile toggles.
///
/// The live root class is the source of truth, so the two toggles can
/// never disagree about the current mode.
pub struct ThemeSwitch<N> {
    root: N,
    toggles: Vec<N>,
    dark_class: &'static str,
}

impl<N: Clone + PartialEq> ThemeSwitch<N> {
    pub fn locate<P: Page<Node = N>>(page: &P, markup: &Markup) -> Self {
        let toggles = markup
            .theme_toggles
            .iter()
            .filter_map(|selector| page.query(None, *selector))
            .collect();
        Self {
            root: page.root(),
            toggles,
            dark_class: markup.dark_class,
        }
    }

    pub fn toggles(&self) -> &[N] {
        &self.toggles
    }

    pub fn mode<P: Page<Node = N>>(&self, page: &P) -> ThemeMode {
        ThemeMode::from_dark(page.has_class(&self.root, self.dark_class))
    }

    /// Applies a stored dark preference and syncs the toggles.
    pub fn init<P: Page<Node = N>, S: PreferenceStore>(&self, page: &P, prefs: &Preferences<S>) {
        if prefs.theme() == Some(ThemeMode::Dark) {
            page.add_class(&self.root, self.dark_class);
        }
        self.sync_toggles(page, self.mode(page));
    }

    pub fn set<P: Page<Node = N>, S: PreferenceStore>(
        &self,
        page: &P,
        prefs: &Preferences<S>,
        mode: ThemeMode,
    ) {
        if mode.is_dark() {
            page.add_class(&self.root, self.dark_class);
        } else {
            page.remove_class(&self.root, self.dark_class);
        }
        if let Err(err) = prefs.set_theme(mode) {
            page.warn(&format!("theme: failed to persist {}: {err}", mode.as_str()));
        }
        self.sync_toggles(page, mode);
    }

    pub fn toggle<P: Page<Node = N>, S: PreferenceStore>(
        &self,
        page: &P,
        prefs: &Preferences<S>,
    ) -> ThemeMode {
        let next = ThemeMode::from_dark(!self.mode(page).is_dark());
        self.set(page, prefs, next);
        next
    }

    pub fn handle<P: Page<Node = N>, S: PreferenceStore>(
        &self,
        page: &P,
        prefs: &Preferences<S>,
        event: &SiteEvent<N>,
    ) -> Propagation {
        if let SiteEvent::Click { target } = event {
            if self.toggles.iter().any(|toggle| page.contains(toggle, target)) {
                self.toggle(page, prefs);
            }
        }
        Propagation::Continue
    }

    fn sync_toggles<P: Page<Node = N>>(&self, page: &P, mode: ThemeMode) {
        for toggle in &self.toggles {
            page.set_attribute(toggle, ATTR_ARIA_PRESSED, bool_attr(mode.is_dark()));
        }
    }
}
