use crate::event::{Propagation, SiteEvent};
use crate::i18n;
use crate::lang::Lang;
use crate::page::{bool_attr, Markup, Page, Selector, ATTR_ARIA_PRESSED, ATTR_LANG};
use crate::prefs::{PreferenceStore, Preferences};

/// Swaps every `data-i18n` element to one language table.
///
/// Nothing is cached: buttons and text elements are re-queried on every
/// switch, so markup added after boot is picked up.
pub struct LanguageSwitch {
    button: Selector,
    lang_attr: &'static str,
    i18n_attr: &'static str,
}

impl LanguageSwitch {
    pub fn new(markup: &Markup) -> Self {
        Self {
            button: markup.lang_button,
            lang_attr: markup.lang_attr,
            i18n_attr: markup.i18n_attr,
        }
    }

    /// Replaces the text of every tagged element whose key is known.
    /// Returns how many elements were updated.
    pub fn apply<P: Page>(&self, page: &P, lang: Lang) -> usize {
        let mut applied = 0;
        for node in page.query_all(None, Selector::Attr(self.i18n_attr)) {
            let Some(key) = page.attribute(&node, self.i18n_attr) else {
                continue;
            };
            if let Some(text) = i18n::lookup(lang, &key) {
                page.set_text(&node, text);
                applied += 1;
            }
        }
        applied
    }

    pub fn set_language<P: Page, S: PreferenceStore>(
        &self,
        page: &P,
        prefs: &Preferences<S>,
        lang: Lang,
    ) {
        for button in page.query_all(None, self.button) {
            let pressed = page
                .attribute(&button, self.lang_attr)
                .and_then(|code| Lang::parse(&code).ok())
                == Some(lang);
            page.set_attribute(&button, ATTR_ARIA_PRESSED, bool_attr(pressed));
        }
        page.set_attribute(&page.root(), ATTR_LANG, lang.code());
        let applied = self.apply(page, lang);
        page.log(&format!("language: applied {lang} to {applied} elements"));
        if let Err(err) = prefs.set_language(lang) {
            page.warn(&format!("language: failed to persist {lang}: {err}"));
        }
    }

    /// Restores the stored language, Hungarian when none is stored.
    pub fn init<P: Page, S: PreferenceStore>(&self, page: &P, prefs: &Preferences<S>) -> Lang {
        let lang = prefs.language();
        self.set_language(page, prefs, lang);
        lang
    }

    pub fn handle<P: Page, S: PreferenceStore>(
        &self,
        page: &P,
        prefs: &Preferences<S>,
        event: &SiteEvent<P::Node>,
    ) -> Propagation {
        let SiteEvent::Click { target } = event else {
            return Propagation::Continue;
        };
        let Some(button) = page.closest(target, self.button) else {
            return Propagation::Continue;
        };
        let Some(code) = page.attribute(&button, self.lang_attr) else {
            page.warn("language: selector without a language code");
            return Propagation::Continue;
        };
        self.set_language(page, prefs, Lang::from_selector_code(&code));
        Propagation::Continue
    }
}
