use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use ujjtrans_site_core::{Key, Markup, Preferences, Site, SiteEvent};

use crate::boot;
use crate::dom::WebPage;
use crate::persisted_store::BrowserStore;

thread_local! {
    static RUNTIME: RefCell<Option<Rc<SiteRuntime>>> = RefCell::new(None);
}

/// Everything one page load needs, kept alive by the document listeners.
pub(crate) struct SiteRuntime {
    page: WebPage,
    prefs: Preferences<BrowserStore>,
    site: Site<Element>,
    listeners: RefCell<Vec<EventListener>>,
}

impl SiteRuntime {
    fn start(page: WebPage, prefs: Preferences<BrowserStore>, markup: &Markup) -> Rc<Self> {
        let year = Date::new_0().get_full_year() as i32;
        let (site, _report) = Site::boot(&page, &prefs, markup, Some(year));
        let runtime = Rc::new(Self {
            page,
            prefs,
            site,
            listeners: RefCell::new(Vec::new()),
        });
        runtime.install_listeners();
        runtime
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        let document = self.page.document().clone();

        let runtime = Rc::clone(self);
        let listener = EventListener::new(&document, "click", move |event: &Event| {
            let Some(target) = click_target(event) else {
                return;
            };
            runtime.dispatch(SiteEvent::Click { target });
        });
        listeners.push(listener);

        let runtime = Rc::clone(self);
        let listener = EventListener::new(&document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = Key::from_key_value(&event.key());
            if key == Key::Other {
                return;
            }
            runtime.dispatch(SiteEvent::KeyDown { key });
        });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }

    fn dispatch(&self, event: SiteEvent<Element>) {
        self.site.dispatch(&self.page, &self.prefs, &event);
    }
}

/// The element a click landed on; text nodes resolve to their parent.
fn click_target(event: &Event) -> Option<Element> {
    let node = event.target()?.dyn_into::<Node>().ok()?;
    match node.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(node) => node.parent_element(),
    }
}

pub(crate) fn run() {
    boot::when_ready(|| {
        let Some(page) = WebPage::current() else {
            gloo::console::warn!("site: no document, interactivity disabled");
            return;
        };
        let prefs = Preferences::new(BrowserStore::open());
        let runtime = SiteRuntime::start(page, prefs, &Markup::default());
        RUNTIME.with(|slot| {
            *slot.borrow_mut() = Some(runtime);
        });
    });
}
