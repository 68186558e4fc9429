//! Registry of known dialogs and their visibility.

use log::debug;

use super::DialogId;
use crate::host::DialogLookup;

/// Visibility record for one registered dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescriptor {
    /// The dialog's id.
    pub id: DialogId,
    /// Whether the dialog is currently shown.
    pub visible: bool,
}

/// Registry of dialogs with a single-open-dialog policy.
///
/// Opening a dialog always hides every other one, so at most one descriptor
/// is visible after any mutation.
#[derive(Debug, Clone, Default)]
pub struct DialogRegistry {
    /// Descriptors in registration order.
    descriptors: Vec<DialogDescriptor>,
}

impl DialogRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dialog, hidden.
    ///
    /// No-op if the page has no such dialog or it is already registered.
    /// Returns true if a descriptor was added.
    pub fn register<L: DialogLookup + ?Sized>(
        &mut self,
        id: impl Into<DialogId>,
        lookup: &L,
    ) -> bool {
        let id = id.into();
        if !lookup.has_dialog(&id) {
            debug!("Dialog '{}' not found on page, skipping registration", id);
            return false;
        }
        if self.contains(&id) {
            return false;
        }
        debug!("Registered dialog '{}'", id);
        self.descriptors.push(DialogDescriptor { id, visible: false });
        true
    }

    /// Show a dialog and hide every other one.
    ///
    /// Unknown ids leave the registry untouched.
    pub fn open(&mut self, id: &DialogId) {
        if !self.contains(id) {
            debug!("open: unknown dialog '{}'", id);
            return;
        }
        for descriptor in &mut self.descriptors {
            descriptor.visible = &descriptor.id == id;
        }
        self.debug_check();
    }

    /// Hide a dialog. Already-closed or unknown dialogs are ignored.
    pub fn close(&mut self, id: &DialogId) {
        if let Some(descriptor) = self.descriptors.iter_mut().find(|d| &d.id == id) {
            descriptor.visible = false;
        }
    }

    /// Hide every dialog.
    pub fn close_all(&mut self) {
        for descriptor in &mut self.descriptors {
            descriptor.visible = false;
        }
    }

    /// True if some dialog is shown.
    pub fn is_any_open(&self) -> bool {
        self.descriptors.iter().any(|d| d.visible)
    }

    /// The currently shown dialog, if any.
    pub fn visible(&self) -> Option<&DialogId> {
        self.descriptors.iter().find(|d| d.visible).map(|d| &d.id)
    }

    /// Whether a dialog is registered.
    pub fn contains(&self, id: &DialogId) -> bool {
        self.descriptors.iter().any(|d| &d.id == id)
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> &[DialogDescriptor] {
        &self.descriptors
    }

    fn debug_check(&self) {
        debug_assert!(
            self.descriptors.iter().filter(|d| d.visible).count() <= 1,
            "more than one dialog visible"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryPage;

    fn registry() -> DialogRegistry {
        let page = MemoryPage::with_dialogs(["a", "b", "c"]);
        let mut registry = DialogRegistry::new();
        for id in ["a", "b", "c"] {
            registry.register(id, &page);
        }
        registry
    }

    #[test]
    fn test_register_skips_missing_and_duplicate() {
        let page = MemoryPage::with_dialogs(["a"]);
        let mut registry = DialogRegistry::new();
        assert!(registry.register("a", &page));
        assert!(!registry.register("a", &page));
        assert!(!registry.register("missing", &page));
        assert_eq!(registry.descriptors().len(), 1);
        assert!(!registry.descriptors()[0].visible);
    }

    #[test]
    fn test_open_preempts_previous() {
        let mut registry = registry();
        registry.open(&"a".into());
        registry.open(&"b".into());
        assert_eq!(registry.visible(), Some(&DialogId::from("b")));
        assert_eq!(registry.descriptors().iter().filter(|d| d.visible).count(), 1);
    }

    #[test]
    fn test_open_unknown_keeps_state() {
        let mut registry = registry();
        registry.open(&"a".into());
        registry.open(&"zzz".into());
        assert_eq!(registry.visible(), Some(&DialogId::from("a")));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut registry = registry();
        registry.open(&"b".into());
        registry.close(&"a".into());
        let before = registry.descriptors().to_vec();
        registry.close(&"a".into());
        assert_eq!(registry.descriptors(), before.as_slice());
        assert!(registry.is_any_open());
    }
}
