/// Keys the site reacts to; everything else collapses into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key_value(value: &str) -> Self {
        match value {
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SiteEvent<N> {
    Click { target: N },
    KeyDown { key: Key },
}

/// Whether later handlers still see the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}
