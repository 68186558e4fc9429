//! Dialog controller: registry operations plus page side effects.

use log::debug;

use super::{DialogId, DialogRegistry};
use crate::host::PageHost;

/// Public open/close surface over a [`DialogRegistry`].
///
/// Every operation updates the registry first and then brings the page in
/// line with it: dialog visibility and the scroll lock, which is engaged
/// exactly while some dialog is open.
#[derive(Debug, Clone, Default)]
pub struct DialogController {
    registry: DialogRegistry,
}

impl DialogController {
    /// Wrap an already-populated registry.
    pub fn new(registry: DialogRegistry) -> Self {
        Self { registry }
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &DialogRegistry {
        &self.registry
    }

    /// Register another dialog discovered on the page.
    pub fn register<H: PageHost + ?Sized>(
        &mut self,
        id: impl Into<DialogId>,
        host: &H,
    ) -> bool {
        self.registry.register(id, host)
    }

    /// Open a dialog, closing whichever one was open, and lock scrolling.
    pub fn open<H: PageHost + ?Sized>(&mut self, id: &DialogId, host: &mut H) {
        if !self.registry.contains(id) {
            debug!("open: dialog '{}' is not registered", id);
            return;
        }
        self.registry.open(id);
        self.sync_visibility(host);
        host.set_scroll_locked(true);
        debug!("Dialog opened: {}", id);
    }

    /// Close a dialog; scrolling is released once nothing remains open.
    pub fn close<H: PageHost + ?Sized>(&mut self, id: &DialogId, host: &mut H) {
        if !self.registry.contains(id) {
            debug!("close: dialog '{}' is not registered", id);
            return;
        }
        self.registry.close(id);
        host.set_dialog_visible(id, false);
        if !self.registry.is_any_open() {
            host.set_scroll_locked(false);
        }
        debug!("Dialog closed: {}", id);
    }

    /// Close every dialog and release the scroll lock unconditionally.
    pub fn close_all<H: PageHost + ?Sized>(&mut self, host: &mut H) {
        self.registry.close_all();
        self.sync_visibility(host);
        host.set_scroll_locked(false);
        debug!("All dialogs closed");
    }

    /// Replace `from` with `to` as a single transition.
    ///
    /// The page is only synchronised once both registry steps are done, so
    /// the scroll lock is never released in between.
    pub fn switch_to<H: PageHost + ?Sized>(
        &mut self,
        from: &DialogId,
        to: &DialogId,
        host: &mut H,
    ) {
        self.registry.close(from);
        self.registry.open(to);
        self.sync_visibility(host);
        host.set_scroll_locked(self.registry.is_any_open());
        debug!("Dialog switch: {} -> {}", from, to);
    }

    /// True if some dialog is shown.
    pub fn is_any_open(&self) -> bool {
        self.registry.is_any_open()
    }

    fn sync_visibility<H: PageHost + ?Sized>(&self, host: &mut H) {
        for descriptor in self.registry.descriptors() {
            host.set_dialog_visible(&descriptor.id, descriptor.visible);
        }
    }
}
