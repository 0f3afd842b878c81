//! One object per page load: every behaviour, located once, and the
//! ordered handler table events are dispatched through.

use crate::event::{Propagation, SiteEvent};
use crate::hooks::{self, AnchorHook, Landmark};
use crate::lang::Lang;
use crate::language::LanguageSwitch;
use crate::lightbox::Lightbox;
use crate::nav::NavMenu;
use crate::page::{Markup, Page};
use crate::prefs::{PreferenceStore, Preferences};
use crate::theme::ThemeSwitch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Handler {
    Nav,
    Anchors,
    Lightbox,
    Theme,
    Language,
}

const DISPATCH_ORDER: [Handler; 5] = [
    Handler::Nav,
    Handler::Anchors,
    Handler::Lightbox,
    Handler::Theme,
    Handler::Language,
];

/// What boot found on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootReport {
    pub nav: bool,
    pub lightbox: bool,
    pub theme_toggles: usize,
    pub lang: Lang,
    pub missing_landmarks: Vec<Landmark>,
}

pub struct Site<N> {
    nav: Option<NavMenu<N>>,
    lightbox: Option<Lightbox<N>>,
    theme: ThemeSwitch<N>,
    language: LanguageSwitch,
    anchors: AnchorHook,
}

impl<N: Clone + PartialEq> Site<N> {
    /// Locates every component without touching the page.
    pub fn locate<P: Page<Node = N>>(page: &P, markup: &Markup) -> Self {
        Self {
            nav: NavMenu::locate(page, markup),
            lightbox: Lightbox::locate(page, markup),
            theme: ThemeSwitch::locate(page, markup),
            language: LanguageSwitch::new(markup),
            anchors: AnchorHook::new(markup),
        }
    }

    /// Page-ready initialisation: locate, restore theme and language,
    /// stamp the year and report missing landmarks.
    pub fn boot<P: Page<Node = N>, S: PreferenceStore>(
        page: &P,
        prefs: &Preferences<S>,
        markup: &Markup,
        year: Option<i32>,
    ) -> (Self, BootReport) {
        let site = Self::locate(page, markup);
        site.theme.init(page, prefs);
        let lang = site.language.init(page, prefs);
        if let Some(year) = year {
            hooks::stamp_year(page, markup, year);
        }
        let missing_landmarks = hooks::check_landmarks(page, markup);
        let report = BootReport {
            nav: site.nav.is_some(),
            lightbox: site.lightbox.is_some(),
            theme_toggles: site.theme.toggles().len(),
            lang,
            missing_landmarks,
        };
        page.log(&format!(
            "site: ready (nav: {}, lightbox: {}, theme toggles: {}, lang: {})",
            report.nav, report.lightbox, report.theme_toggles, report.lang
        ));
        (site, report)
    }

    pub fn nav(&self) -> Option<&NavMenu<N>> {
        self.nav.as_ref()
    }

    pub fn lightbox(&self) -> Option<&Lightbox<N>> {
        self.lightbox.as_ref()
    }

    pub fn theme(&self) -> &ThemeSwitch<N> {
        &self.theme
    }

    pub fn language(&self) -> &LanguageSwitch {
        &self.language
    }

    pub fn dispatch<P: Page<Node = N>, S: PreferenceStore>(
        &self,
        page: &P,
        prefs: &Preferences<S>,
        event: &SiteEvent<N>,
    ) {
        for handler in DISPATCH_ORDER {
            let propagation = match handler {
                Handler::Nav => match &self.nav {
                    Some(nav) => nav.handle(page, event),
                    None => Propagation::Continue,
                },
                Handler::Anchors => self.anchors.handle(page, self.nav.as_ref(), event),
                Handler::Lightbox => match &self.lightbox {
                    Some(lightbox) => lightbox.handle(page, event),
                    None => Propagation::Continue,
                },
                Handler::Theme => self.theme.handle(page, prefs, event),
                Handler::Language => self.language.handle(page, prefs, event),
            };
            if propagation == Propagation::Stop {
                return;
            }
        }
    }
}
