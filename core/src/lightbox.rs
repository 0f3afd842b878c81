use crate::event::{Key, Propagation, SiteEvent};
use crate::page::{bool_attr, Markup, Page, Selector, ATTR_ARIA_HIDDEN, ATTR_HIDDEN};

/// Overlay viewer for gallery thumbnails.
pub struct Lightbox<N> {
    overlay: N,
    image: N,
    close_control: Option<N>,
    gallery_item: Selector,
    thumbnail: Selector,
    src_attr: &'static str,
}

impl<N: Clone + PartialEq> Lightbox<N> {
    pub fn locate<P: Page<Node = N>>(page: &P, markup: &Markup) -> Option<Self> {
        let overlay = page.query(None, markup.lightbox)?;
        let Some(image) = page.query(Some(&overlay), markup.lightbox_image) else {
            page.warn("lightbox: overlay has no image, viewer disabled");
            return None;
        };
        let close_control = page.query(Some(&overlay), markup.lightbox_close);
        Some(Self {
            overlay,
            image,
            close_control,
            gallery_item: markup.gallery_item,
            thumbnail: markup.gallery_thumbnail,
            src_attr: markup.gallery_src_attr,
        })
    }

    pub fn overlay(&self) -> &N {
        &self.overlay
    }

    pub fn image(&self) -> &N {
        &self.image
    }

    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        !page.has_attribute(&self.overlay, ATTR_HIDDEN)
    }

    /// Shows `item`'s image. Items without an image source are ignored.
    pub fn open<P: Page<Node = N>>(&self, page: &P, item: &N) -> bool {
        let Some(src) = page
            .attribute(item, self.src_attr)
            .filter(|src| !src.is_empty())
        else {
            return false;
        };
        let alt = page
            .query(Some(item), self.thumbnail)
            .and_then(|thumb| page.attribute(&thumb, "alt"))
            .unwrap_or_default();
        page.set_attribute(&self.image, "src", &src);
        page.set_attribute(&self.image, "alt", &alt);
        page.remove_attribute(&self.overlay, ATTR_HIDDEN);
        page.set_attribute(&self.overlay, ATTR_ARIA_HIDDEN, bool_attr(false));
        if let Some(close) = &self.close_control {
            page.focus(close);
        }
        true
    }

    pub fn close<P: Page<Node = N>>(&self, page: &P) {
        page.set_attribute(&self.overlay, ATTR_HIDDEN, "");
        page.set_attribute(&self.overlay, ATTR_ARIA_HIDDEN, bool_attr(true));
        page.set_attribute(&self.image, "src", "");
    }

    pub fn handle<P: Page<Node = N>>(&self, page: &P, event: &SiteEvent<N>) -> Propagation {
        match event {
            SiteEvent::Click { target } => {
                let on_close = self
                    .close_control
                    .as_ref()
                    .map(|close| page.contains(close, target))
                    .unwrap_or(false);
                if on_close || *target == self.overlay {
                    self.close(page);
                } else if let Some(item) = page.closest(target, self.gallery_item) {
                    self.open(page, &item);
                }
            }
            SiteEvent::KeyDown { key: Key::Escape } => {
                if self.is_open(page) {
                    self.close(page);
                }
            }
            SiteEvent::KeyDown { .. } => {}
        }
        Propagation::Continue
    }
}
