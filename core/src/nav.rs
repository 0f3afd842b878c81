use crate::event::{Key, Propagation, SiteEvent};
use crate::page::{bool_attr, Markup, Page, Selector, ATTR_ARIA_EXPANDED, ATTR_HIDDEN};

/// Mobile menu: a trigger button that owns one panel.
pub struct NavMenu<N> {
    trigger: N,
    panel: N,
    focusable: Selector,
    anchor: Selector,
}

impl<N: Clone + PartialEq> NavMenu<N> {
    /// `None` unless both the trigger and the panel are on the page.
    pub fn locate<P: Page<Node = N>>(page: &P, markup: &Markup) -> Option<Self> {
        let trigger = page.query(None, markup.menu_trigger)?;
        let panel = page.query(None, markup.menu_panel)?;
        Some(Self {
            trigger,
            panel,
            focusable: markup.menu_focusable,
            anchor: markup.anchor,
        })
    }

    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn panel(&self) -> &N {
        &self.panel
    }

    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        !page.has_attribute(&self.panel, ATTR_HIDDEN)
    }

    pub fn toggle<P: Page<Node = N>>(&self, page: &P) {
        if self.is_open(page) {
            self.close(page);
        } else {
            self.open(page);
        }
    }

    pub fn open<P: Page<Node = N>>(&self, page: &P) {
        page.remove_attribute(&self.panel, ATTR_HIDDEN);
        page.set_attribute(&self.trigger, ATTR_ARIA_EXPANDED, bool_attr(true));
        if let Some(first) = page.query(Some(&self.panel), self.focusable) {
            page.focus(&first);
        }
    }

    /// Hides the panel. Returns whether it was open.
    pub fn close<P: Page<Node = N>>(&self, page: &P) -> bool {
        let was_open = self.is_open(page);
        if was_open {
            page.set_attribute(&self.panel, ATTR_HIDDEN, "");
        }
        page.set_attribute(&self.trigger, ATTR_ARIA_EXPANDED, bool_attr(false));
        was_open
    }

    pub fn handle<P: Page<Node = N>>(&self, page: &P, event: &SiteEvent<N>) -> Propagation {
        match event {
            SiteEvent::Click { target } => {
                if page.contains(&self.trigger, target) {
                    self.toggle(page);
                    return Propagation::Stop;
                }
                if page.contains(&self.panel, target) {
                    let link = page
                        .closest(target, self.anchor)
                        .filter(|link| page.contains(&self.panel, link));
                    if link.is_some() && self.close(page) {
                        page.log("nav: closed after link activation");
                    }
                } else if self.is_open(page) {
                    self.close(page);
                }
                Propagation::Continue
            }
            SiteEvent::KeyDown { key: Key::Escape } => {
                if self.is_open(page) {
                    self.close(page);
                    page.focus(&self.trigger);
                }
                Propagation::Continue
            }
            SiteEvent::KeyDown { .. } => Propagation::Continue,
        }
    }
}
