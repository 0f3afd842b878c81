pub mod event;
pub mod hooks;
pub mod i18n;
pub mod lang;
pub mod language;
pub mod lightbox;
#[cfg(any(test, feature = "test-support"))]
pub mod memory_page;
pub mod nav;
pub mod page;
pub mod prefs;
pub mod site;
pub mod theme;

pub use event::{Key, Propagation, SiteEvent};
pub use i18n::{lookup, TextKey, UnknownTextKey};
pub use lang::{Lang, ParseLangError};
#[cfg(any(test, feature = "test-support"))]
pub use memory_page::{MemoryPage, NodeId};
pub use page::{Markup, Page, Selector};
pub use prefs::{MemoryStore, PreferenceStore, Preferences, ThemeMode, LANG_KEY, THEME_KEY};
pub use site::{BootReport, Site};
