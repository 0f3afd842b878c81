use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use ujjtrans_site_core::{Page, Selector};

/// [`Page`] over the live document.
pub(crate) struct WebPage {
    document: Document,
    root: Element,
}

impl WebPage {
    pub(crate) fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::new(document)
    }

    pub(crate) fn new(document: Document) -> Option<Self> {
        let root = document.document_element()?;
        Some(Self { document, root })
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }
}

fn elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Page for WebPage {
    type Node = Element;

    fn root(&self) -> Element {
        self.root.clone()
    }

    fn query(&self, scope: Option<&Element>, selector: Selector) -> Option<Element> {
        let css = selector.to_string();
        let found = match scope {
            Some(scope) => scope.query_selector(&css),
            None => self.document.query_selector(&css),
        };
        found.ok().flatten()
    }

    fn query_all(&self, scope: Option<&Element>, selector: Selector) -> Vec<Element> {
        let css = selector.to_string();
        let found = match scope {
            Some(scope) => scope.query_selector_all(&css),
            None => self.document.query_selector_all(&css),
        };
        match found {
            Ok(list) => elements(list),
            Err(_) => Vec::new(),
        }
    }

    fn matches(&self, node: &Element, selector: Selector) -> bool {
        node.matches(&selector.to_string()).unwrap_or(false)
    }

    fn closest(&self, node: &Element, selector: Selector) -> Option<Element> {
        node.closest(&selector.to_string()).ok().flatten()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn remove_attribute(&self, node: &Element, name: &str) {
        let _ = node.remove_attribute(name);
    }

    fn has_attribute(&self, node: &Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn focus(&self, node: &Element) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.focus();
        }
    }

    fn log(&self, message: &str) {
        gloo::console::log!(message);
    }

    fn warn(&self, message: &str) {
        gloo::console::warn!(message);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use ujjtrans_site_core::{Markup, MemoryStore, Preferences, Site, SiteEvent};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r##"
        <header class="site-header">
          <button id="theme-toggle" aria-pressed="false">theme</button>
          <button class="lang-btn" data-lang="hu">HU</button>
          <button class="lang-btn" data-lang="de">DE</button>
          <button class="lang-btn" data-lang="en">EN</button>
          <button id="hamburger" aria-expanded="false"><span>menu</span></button>
        </header>
        <nav id="mobile-menu" hidden>
          <a href="#home" data-i18n="nav.home">Főoldal</a>
          <a href="#contact" data-i18n="nav.contact">Kapcsolat</a>
        </nav>
        <main>
          <p id="unknown" data-i18n="nav.nonexistent">Eredeti</p>
          <button class="gallery-item" data-src="/img/a.jpg"><img src="/img/a-thumb.jpg" alt="Site A"></button>
        </main>
        <div id="lightbox" hidden aria-hidden="true">
          <button class="lightbox-close">x</button>
          <img src="" alt="">
        </div>
        <footer class="site-footer"><span id="year"></span></footer>
    "##;

    struct Mounted {
        page: WebPage,
        container: Element,
    }

    impl Mounted {
        fn new() -> Self {
            let page = WebPage::current().expect("document");
            let container = page.document().create_element("div").expect("div");
            container.set_inner_html(FIXTURE);
            page.document()
                .body()
                .expect("body")
                .append_child(&container)
                .expect("append");
            Self { page, container }
        }

        fn find(&self, css: &str) -> Element {
            self.container
                .query_selector(css)
                .ok()
                .flatten()
                .unwrap_or_else(|| panic!("missing {css}"))
        }
    }

    impl Drop for Mounted {
        fn drop(&mut self) {
            self.container.remove();
            let root = self.page.root();
            let _ = root.class_list().remove_1("dark");
        }
    }

    #[wasm_bindgen_test]
    fn selectors_resolve_against_real_document() {
        let mounted = Mounted::new();
        let page = &mounted.page;
        let menu = mounted.find("#mobile-menu");

        let links = page.query_all(Some(&menu), Markup::default().menu_focusable);
        assert_eq!(links.len(), 2);
        let anchor = links[0].clone();
        assert!(page.matches(&anchor, Markup::default().in_page_anchor));
        assert_eq!(page.closest(&anchor, Selector::Id("mobile-menu")), Some(menu.clone()));
        assert!(page.contains(&menu, &anchor));
        assert!(!page.contains(&anchor, &menu));
    }

    #[wasm_bindgen_test]
    fn menu_toggle_and_escape_on_real_elements() {
        let mounted = Mounted::new();
        let page = &mounted.page;
        let prefs = Preferences::new(MemoryStore::new());
        let (site, _) = Site::boot(page, &prefs, &Markup::default(), Some(2024));
        let hamburger = mounted.find("#hamburger");
        let menu = mounted.find("#mobile-menu");

        site.dispatch(page, &prefs, &SiteEvent::Click { target: mounted.find("#hamburger span") });
        assert!(!menu.has_attribute("hidden"));
        assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));

        site.dispatch(
            page,
            &prefs,
            &SiteEvent::KeyDown {
                key: ujjtrans_site_core::Key::Escape,
            },
        );
        assert!(menu.has_attribute("hidden"));
        assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert_eq!(mounted.find("#year").text_content().as_deref(), Some("2024"));
    }

    #[wasm_bindgen_test]
    fn lightbox_and_language_on_real_elements() {
        let mounted = Mounted::new();
        let page = &mounted.page;
        let prefs = Preferences::new(MemoryStore::new());
        let (site, _) = Site::boot(page, &prefs, &Markup::default(), None);
        let image = mounted.find("#lightbox img");

        site.dispatch(page, &prefs, &SiteEvent::Click { target: mounted.find(".gallery-item img") });
        assert_eq!(image.get_attribute("src").as_deref(), Some("/img/a.jpg"));
        assert_eq!(image.get_attribute("alt").as_deref(), Some("Site A"));
        assert_eq!(mounted.find("#lightbox").get_attribute("aria-hidden").as_deref(), Some("false"));

        site.dispatch(page, &prefs, &SiteEvent::Click { target: mounted.find("[data-lang=de]") });
        assert_eq!(mounted.find("[data-i18n='nav.home']").text_content().as_deref(), Some("Startseite"));
        assert_eq!(mounted.find("#unknown").text_content().as_deref(), Some("Eredeti"));
        assert_eq!(page.root().get_attribute("lang").as_deref(), Some("de"));
    }
}
