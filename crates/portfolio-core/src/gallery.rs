//! Expand/dismiss state for the QR gallery overlay.

use crate::qr::QrItem;

/// Where a click on the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The dimmed background around the image
    Backdrop,
    /// The enlarged QR image itself
    Image,
}

/// Which QR code, if any, is shown enlarged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrGallery {
    expanded: Option<QrItem>,
}

impl QrGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enlarge `item`, replacing any item already shown.
    pub fn expand(&mut self, item: QrItem) {
        tracing::debug!(label = %item.label, "Expanding QR code");
        self.expanded = Some(item);
    }

    pub fn expanded(&self) -> Option<&QrItem> {
        self.expanded.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.expanded.is_some()
    }

    pub fn dismiss(&mut self) {
        self.expanded = None;
    }

    /// Handle a key press while the page has focus.
    ///
    /// Returns `true` when the key closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.dismiss();
            return true;
        }
        false
    }

    /// Backdrop clicks close the overlay; clicks on the image do not.
    pub fn handle_overlay_click(&mut self, click: OverlayClick) {
        if click == OverlayClick::Backdrop {
            self.dismiss();
        }
    }
}

/// Holds a listener guard only while it is wanted.
///
/// The guard type unregisters itself on drop (for example
/// `gloo::events::EventListener`), so closing the overlay or dropping the
/// slot on unmount removes the listener.
#[derive(Debug)]
pub struct ListenerSlot<L> {
    active: Option<L>,
}

impl<L> Default for ListenerSlot<L> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<L> ListenerSlot<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register with `register` when `wanted` and nothing is held; drop the
    /// held guard when not `wanted`.
    pub fn sync(&mut self, wanted: bool, register: impl FnOnce() -> L) {
        match (wanted, self.active.is_some()) {
            (true, false) => self.active = Some(register()),
            (false, true) => self.active = None,
            _ => {}
        }
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactRecord;
    use crate::qr::{qr_gallery_items, QrServiceConfig};
    use std::cell::Cell;
    use std::rc::Rc;

    fn items() -> Vec<QrItem> {
        qr_gallery_items(
            &ContactRecord::default(),
            Some("https://example.com/?page=contact"),
            &QrServiceConfig::default(),
        )
    }

    /// Counts live guards.
    struct Guard(Rc<Cell<usize>>);

    impl Guard {
        fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Guard(live.clone())
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn expand_shows_clicked_item() {
        let items = items();
        let mut gallery = QrGallery::new();
        assert!(!gallery.is_open());

        gallery.expand(items[2].clone());
        assert_eq!(gallery.expanded().map(|i| i.image_src.as_str()), Some(items[2].image_src.as_str()));
    }

    #[test]
    fn backdrop_click_dismisses() {
        let mut gallery = QrGallery::new();
        gallery.expand(items()[0].clone());

        gallery.handle_overlay_click(OverlayClick::Backdrop);
        assert!(!gallery.is_open());
    }

    #[test]
    fn image_click_keeps_overlay_open() {
        let mut gallery = QrGallery::new();
        gallery.expand(items()[0].clone());

        gallery.handle_overlay_click(OverlayClick::Image);
        assert!(gallery.is_open());
    }

    #[test]
    fn escape_dismisses_only_when_open() {
        let mut gallery = QrGallery::new();
        assert!(!gallery.handle_key("Escape"));

        gallery.expand(items()[1].clone());
        assert!(!gallery.handle_key("Enter"));
        assert!(gallery.is_open());

        assert!(gallery.handle_key("Escape"));
        assert!(!gallery.is_open());
    }

    #[test]
    fn listener_follows_overlay() {
        let live = Rc::new(Cell::new(0));
        let mut slot = ListenerSlot::new();
        let mut gallery = QrGallery::new();

        slot.sync(gallery.is_open(), || Guard::new(&live));
        assert_eq!(live.get(), 0);

        gallery.expand(items()[3].clone());
        slot.sync(gallery.is_open(), || Guard::new(&live));
        assert_eq!(live.get(), 1);

        // switching items while open does not register twice
        gallery.expand(items()[4].clone());
        slot.sync(gallery.is_open(), || Guard::new(&live));
        assert_eq!(live.get(), 1);

        gallery.handle_key("Escape");
        slot.sync(gallery.is_open(), || Guard::new(&live));
        assert_eq!(live.get(), 0);
        assert!(!slot.is_registered());
    }

    #[test]
    fn dropping_slot_releases_listener() {
        let live = Rc::new(Cell::new(0));
        let mut slot = ListenerSlot::new();
        slot.sync(true, || Guard::new(&live));
        assert_eq!(live.get(), 1);

        drop(slot);
        assert_eq!(live.get(), 0);
    }
}
