#![allow(dead_code)]

use ujjtrans_site_core::{Markup, MemoryPage, MemoryStore, NodeId, Page, Preferences, Site, SiteEvent};

/// The brochure page, reduced to the elements the behaviours care about.
pub struct Fixture {
    pub page: MemoryPage,
    pub markup: Markup,
    pub header: NodeId,
    pub hamburger: NodeId,
    pub menu: NodeId,
    pub menu_home: NodeId,
    pub menu_external: NodeId,
    pub theme_toggle: NodeId,
    pub theme_toggle_mobile: NodeId,
    pub lang_hu: NodeId,
    pub lang_de: NodeId,
    pub lang_en: NodeId,
    pub hero_title: NodeId,
    pub nav_home: NodeId,
    pub unknown_key: NodeId,
    pub gallery_a: NodeId,
    pub gallery_a_thumb: NodeId,
    pub gallery_missing_src: NodeId,
    pub lightbox: NodeId,
    pub lightbox_img: NodeId,
    pub lightbox_close: NodeId,
    pub contact_link: NodeId,
    pub footer: NodeId,
    pub year: NodeId,
    pub main: NodeId,
}

impl Fixture {
    pub fn new() -> Self {
        let page = MemoryPage::new();
        let body = page.body();

        let header = page.element(&body, "header", &[("class", "site-header")]);
        let nav_home = page.element(
            &header,
            "a",
            &[("href", "index.html#home"), ("data-i18n", "nav.home")],
        );
        page.set_text(&nav_home, "Főoldal");
        let theme_toggle = page.element(
            &header,
            "button",
            &[("id", "theme-toggle"), ("aria-pressed", "false")],
        );
        let lang_hu = page.element(&header, "button", &[("class", "lang-btn"), ("data-lang", "hu")]);
        let lang_de = page.element(&header, "button", &[("class", "lang-btn"), ("data-lang", "de")]);
        let lang_en = page.element(&header, "button", &[("class", "lang-btn"), ("data-lang", "en")]);
        let hamburger = page.element(
            &header,
            "button",
            &[("id", "hamburger"), ("aria-expanded", "false"), ("aria-controls", "mobile-menu")],
        );
        let hamburger_icon = page.append(&hamburger, "span");
        page.set_text(&hamburger_icon, "☰");

        let menu = page.element(&body, "nav", &[("id", "mobile-menu"), ("hidden", "")]);
        let menu_home = page.element(&menu, "a", &[("href", "#home"), ("data-i18n", "nav.home")]);
        page.set_text(&menu_home, "Főoldal");
        let menu_external = page.element(&menu, "a", &[("href", "https://example.com/")]);
        let theme_toggle_mobile = page.element(
            &menu,
            "button",
            &[("id", "theme-toggle-mobile"), ("aria-pressed", "false")],
        );

        let main = page.append(&body, "main");
        let hero_title = page.element(&main, "h1", &[("data-i18n", "hero.title")]);
        page.set_text(&hero_title, "Precízen és korrekten — fuvarozás és földmunka");
        let unknown_key = page.element(&main, "p", &[("data-i18n", "nav.nonexistent")]);
        page.set_text(&unknown_key, "Eredeti szöveg");

        let gallery = page.element(&main, "section", &[("id", "gallery")]);
        let gallery_a = page.element(
            &gallery,
            "button",
            &[("class", "gallery-item"), ("data-src", "/img/a.jpg")],
        );
        let gallery_a_thumb = page.element(
            &gallery_a,
            "img",
            &[("src", "/img/a-thumb.jpg"), ("alt", "Site A")],
        );
        let gallery_missing_src = page.element(&gallery, "button", &[("class", "gallery-item")]);
        page.element(&gallery_missing_src, "img", &[("alt", "No source")]);
        let contact_link = page.element(&main, "a", &[("href", "#contact")]);

        let lightbox = page.element(
            &body,
            "div",
            &[("id", "lightbox"), ("hidden", ""), ("aria-hidden", "true")],
        );
        let lightbox_close = page.element(&lightbox, "button", &[("class", "lightbox-close")]);
        let lightbox_img = page.element(&lightbox, "img", &[("src", ""), ("alt", "")]);

        let footer = page.element(&body, "footer", &[("class", "site-footer")]);
        let year = page.element(&footer, "span", &[("id", "year")]);

        Self {
            page,
            markup: Markup::default(),
            header,
            hamburger,
            menu,
            menu_home,
            menu_external,
            theme_toggle,
            theme_toggle_mobile,
            lang_hu,
            lang_de,
            lang_en,
            hero_title,
            nav_home,
            unknown_key,
            gallery_a,
            gallery_a_thumb,
            gallery_missing_src,
            lightbox,
            lightbox_img,
            lightbox_close,
            contact_link,
            footer,
            year,
            main,
        }
    }

    pub fn boot(&self, prefs: &Preferences<MemoryStore>) -> Site<NodeId> {
        let (site, _report) = Site::boot(&self.page, prefs, &self.markup, Some(2024));
        site
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.page.attribute(&node, name)
    }

    pub fn click(&self, site: &Site<NodeId>, prefs: &Preferences<MemoryStore>, target: NodeId) {
        site.dispatch(&self.page, prefs, &SiteEvent::Click { target });
    }

    pub fn escape(&self, site: &Site<NodeId>, prefs: &Preferences<MemoryStore>) {
        site.dispatch(
            &self.page,
            prefs,
            &SiteEvent::KeyDown {
                key: ujjtrans_site_core::Key::Escape,
            },
        );
    }

    pub fn menu_open(&self) -> bool {
        !self.page.has_attribute(&self.menu, "hidden")
    }
}

pub fn prefs() -> Preferences<MemoryStore> {
    Preferences::new(MemoryStore::new())
}
