//! The document seam every component talks to.
//!
//! Components never touch a browser directly: they hold `Page::Node`
//! handles and go through [`Page`] for attribute, text, class and focus
//! changes. The web crate implements it over `web_sys::Document`;
//! `MemoryPage` (behind the `test-support` feature) implements it in-process.

use std::fmt;

pub const ATTR_HIDDEN: &str = "hidden";
pub const ATTR_ARIA_EXPANDED: &str = "aria-expanded";
pub const ATTR_ARIA_HIDDEN: &str = "aria-hidden";
pub const ATTR_ARIA_PRESSED: &str = "aria-pressed";
pub const ATTR_LANG: &str = "lang";

/// A typed subset of CSS selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Id(&'static str),
    Class(&'static str),
    Tag(&'static str),
    Attr(&'static str),
    AttrPrefix(&'static str, &'static str),
    AnyOf(&'static [Selector]),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(class) => write!(f, ".{class}"),
            Selector::Tag(tag) => f.write_str(tag),
            Selector::Attr(name) => write!(f, "[{name}]"),
            Selector::AttrPrefix(name, prefix) => write!(f, "[{name}^={prefix:?}]"),
            Selector::AnyOf(options) => {
                for (idx, option) in options.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{option}")?;
                }
                Ok(())
            }
        }
    }
}

pub trait Page {
    type Node: Clone + PartialEq;

    /// The root (`<html>`) element.
    fn root(&self) -> Self::Node;

    /// First match in document order. With a scope, only descendants of
    /// the scope are searched.
    fn query(&self, scope: Option<&Self::Node>, selector: Selector) -> Option<Self::Node>;
    fn query_all(&self, scope: Option<&Self::Node>, selector: Selector) -> Vec<Self::Node>;

    fn matches(&self, node: &Self::Node, selector: Selector) -> bool;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: Selector) -> Option<Self::Node>;

    /// Inclusive containment, like `Node.contains`.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&self, node: &Self::Node, name: &str);

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn focus(&self, node: &Self::Node);

    fn log(&self, message: &str);
    fn warn(&self, message: &str);
}

pub(crate) fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Where each behaviour finds its elements. Everything here is optional on
/// the page; a missing element disables the behaviour that needs it.
#[derive(Clone, Debug)]
pub struct Markup {
    pub menu_trigger: Selector,
    pub menu_panel: Selector,
    pub menu_focusable: Selector,
    pub lightbox: Selector,
    pub lightbox_image: Selector,
    pub lightbox_close: Selector,
    pub gallery_item: Selector,
    pub gallery_thumbnail: Selector,
    pub gallery_src_attr: &'static str,
    pub theme_toggles: &'static [Selector],
    pub dark_class: &'static str,
    pub lang_button: Selector,
    pub lang_attr: &'static str,
    pub i18n_attr: &'static str,
    pub anchor: Selector,
    pub in_page_anchor: Selector,
    pub header: Selector,
    pub footer: Selector,
    pub year: Selector,
}

const MENU_FOCUSABLE: &[Selector] = &[Selector::Tag("a"), Selector::Tag("button")];
const THEME_TOGGLES: &[Selector] = &[Selector::Id("theme-toggle"), Selector::Id("theme-toggle-mobile")];
const IN_PAGE_ANCHORS: &[Selector] = &[
    Selector::AttrPrefix("href", "index.html#"),
    Selector::AttrPrefix("href", "#"),
];

impl Default for Markup {
    fn default() -> Self {
        Self {
            menu_trigger: Selector::Id("hamburger"),
            menu_panel: Selector::Id("mobile-menu"),
            menu_focusable: Selector::AnyOf(MENU_FOCUSABLE),
            lightbox: Selector::Id("lightbox"),
            lightbox_image: Selector::Tag("img"),
            lightbox_close: Selector::Class("lightbox-close"),
            gallery_item: Selector::Class("gallery-item"),
            gallery_thumbnail: Selector::Tag("img"),
            gallery_src_attr: "data-src",
            theme_toggles: THEME_TOGGLES,
            dark_class: "dark",
            lang_button: Selector::Class("lang-btn"),
            lang_attr: "data-lang",
            i18n_attr: "data-i18n",
            anchor: Selector::Tag("a"),
            in_page_anchor: Selector::AnyOf(IN_PAGE_ANCHORS),
            header: Selector::Class("site-header"),
            footer: Selector::Class("site-footer"),
            year: Selector::Id("year"),
        }
    }
}
