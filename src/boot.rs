use std::cell::Cell;

use gloo::events::EventListener;

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
}

/// Runs `start` once the document is parsed. Safe to call more than once;
/// only the first ready signal starts the site.
pub(crate) fn when_ready<F>(start: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        start_once(start);
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", move |_event| {
        start_once(start);
    })
    .forget();
}

fn start_once<F: FnOnce()>(start: F) {
    let already_started = STARTED.with(|flag| {
        if flag.get() {
            true
        } else {
            flag.set(true);
            false
        }
    });
    if already_started {
        return;
    }
    start();
}
