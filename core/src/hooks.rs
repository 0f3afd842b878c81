use crate::event::{Propagation, SiteEvent};
use crate::nav::NavMenu;
use crate::page::{Markup, Page, Selector};

/// Closes the mobile menu when an in-page anchor is followed.
pub struct AnchorHook {
    anchor: Selector,
    in_page: Selector,
}

impl AnchorHook {
    pub fn new(markup: &Markup) -> Self {
        Self {
            anchor: markup.anchor,
            in_page: markup.in_page_anchor,
        }
    }

    pub fn is_in_page_anchor<P: Page>(&self, page: &P, node: &P::Node) -> bool {
        page.matches(node, self.anchor) && page.matches(node, self.in_page)
    }

    pub fn handle<P: Page>(
        &self,
        page: &P,
        nav: Option<&NavMenu<P::Node>>,
        event: &SiteEvent<P::Node>,
    ) -> Propagation {
        let (Some(nav), SiteEvent::Click { target }) = (nav, event) else {
            return Propagation::Continue;
        };
        let Some(link) = page.closest(target, self.anchor) else {
            return Propagation::Continue;
        };
        if self.is_in_page_anchor(page, &link) && nav.is_open(page) {
            nav.close(page);
        }
        Propagation::Continue
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    Header,
    Footer,
}

impl Landmark {
    pub fn label(self) -> &'static str {
        match self {
            Landmark::Header => "header",
            Landmark::Footer => "footer",
        }
    }
}

/// Warns once per missing landmark. Returns the missing ones.
pub fn check_landmarks<P: Page>(page: &P, markup: &Markup) -> Vec<Landmark> {
    let mut missing = Vec::new();
    for (landmark, selector) in [
        (Landmark::Header, markup.header),
        (Landmark::Footer, markup.footer),
    ] {
        if page.query(None, selector).is_none() {
            page.warn(&format!("landmark missing: {} ({selector})", landmark.label()));
            missing.push(landmark);
        }
    }
    missing
}

/// Writes `year` into the footer year slot, if the page has one.
pub fn stamp_year<P: Page>(page: &P, markup: &Markup, year: i32) -> bool {
    let Some(slot) = page.query(None, markup.year) else {
        return false;
    };
    page.set_text(&slot, &year.to_string());
    true
}
