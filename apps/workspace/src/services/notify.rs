use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::SurfaceKey;

/// Cross-surface unread flags. A surface is unread iff at least one step was
/// emitted on its behalf since it was last marked read. Last write wins;
/// state is only ever touched from the UI thread.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NotificationFlags {
    unread: HashMap<SurfaceKey, bool>,
}

impl NotificationFlags {
    pub fn is_unread(&self, surface: SurfaceKey) -> bool {
        self.unread.get(&surface).copied().unwrap_or(false)
    }

    pub fn mark_emitted(&mut self, surface: SurfaceKey) {
        debug!(surface = surface.as_key(), "notification emitted");
        self.unread.insert(surface, true);
    }

    pub fn mark_read(&mut self, surface: SurfaceKey) {
        debug!(surface = surface.as_key(), "notification read");
        self.unread.insert(surface, false);
    }

    pub fn clear(&mut self) {
        self.unread.clear();
    }

    pub fn any_unread(&self) -> bool {
        self.unread.values().any(|flag| *flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_starts_without_unread_flag() {
        let flags = NotificationFlags::default();
        assert!(!flags.is_unread(SurfaceKey::MessengerOnboarding));
        assert!(!flags.any_unread());
    }

    #[test]
    fn flag_clears_only_on_explicit_mark_read() {
        let mut flags = NotificationFlags::default();

        flags.mark_emitted(SurfaceKey::MessengerOnboarding);
        assert!(flags.is_unread(SurfaceKey::MessengerOnboarding));

        // Further emissions keep it set; only mark_read clears it.
        flags.mark_emitted(SurfaceKey::MessengerOnboarding);
        flags.mark_emitted(SurfaceKey::MessengerOnboarding);
        assert!(flags.is_unread(SurfaceKey::MessengerOnboarding));

        flags.mark_read(SurfaceKey::MessengerOnboarding);
        assert!(!flags.is_unread(SurfaceKey::MessengerOnboarding));
    }

    #[test]
    fn surfaces_are_independent() {
        let mut flags = NotificationFlags::default();
        flags.mark_emitted(SurfaceKey::EmailInbox);

        assert!(flags.is_unread(SurfaceKey::EmailInbox));
        assert!(!flags.is_unread(SurfaceKey::AssistantButton));

        flags.mark_read(SurfaceKey::EmailInbox);
        assert!(!flags.any_unread());
    }
}
