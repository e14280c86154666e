//! Registry of per-window "menu entry invoked" subscriptions.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::window::{SubscriptionHandle, WindowHandle, WindowSystem};

/// Owns every subscription ontop has attached.
///
/// Maps subscription handle to observed window, with at most one
/// subscription per window. Entries exist from a successful attach until
/// detach; nothing here is persisted.
#[derive(Debug, Default)]
pub struct HookRegistry {
    subscriptions: HashMap<SubscriptionHandle, WindowHandle>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a subscription to the window unless one already exists.
    ///
    /// Returns the window's subscription, or `None` if the OS rejected the
    /// attach.
    pub fn attach<W: WindowSystem + ?Sized>(
        &mut self,
        os: &W,
        window: WindowHandle,
    ) -> Option<SubscriptionHandle> {
        if let Some(existing) = self.subscription_for(window) {
            return Some(existing);
        }

        match os.subscribe_menu_invoked(window) {
            Ok(subscription) => {
                self.subscriptions.insert(subscription, window);
                debug!(
                    event = "core.hooks.attach_completed",
                    window = %window,
                    subscription = subscription.as_raw()
                );
                Some(subscription)
            }
            Err(e) => {
                debug!(
                    event = "core.hooks.attach_failed",
                    window = %window,
                    error = %e
                );
                None
            }
        }
    }

    /// Detach every subscription mapped to the window. Returns how many
    /// mappings were removed; zero for an untracked window.
    pub fn detach<W: WindowSystem + ?Sized>(&mut self, os: &W, window: WindowHandle) -> usize {
        let mapped: Vec<SubscriptionHandle> = self
            .subscriptions
            .iter()
            .filter(|(_, w)| **w == window)
            .map(|(s, _)| *s)
            .collect();

        for subscription in &mapped {
            // The mapping goes either way; a subscription the OS refuses to
            // remove belongs to a window that is already gone.
            if let Err(e) = os.unsubscribe(*subscription) {
                warn!(
                    event = "core.hooks.unsubscribe_failed",
                    window = %window,
                    subscription = subscription.as_raw(),
                    error = %e
                );
            }
            self.subscriptions.remove(subscription);
        }

        if !mapped.is_empty() {
            debug!(
                event = "core.hooks.detach_completed",
                window = %window,
                count = mapped.len()
            );
        }
        mapped.len()
    }

    /// Detach everything. Leaves the registry empty.
    pub fn detach_all<W: WindowSystem + ?Sized>(&mut self, os: &W) -> usize {
        let mut count = 0;
        for window in self.windows() {
            count += self.detach(os, window);
        }
        info!(event = "core.hooks.detach_all_completed", count = count);
        count
    }

    pub fn window_for(&self, subscription: SubscriptionHandle) -> Option<WindowHandle> {
        self.subscriptions.get(&subscription).copied()
    }

    pub fn subscription_for(&self, window: WindowHandle) -> Option<SubscriptionHandle> {
        self.subscriptions
            .iter()
            .find(|(_, w)| **w == window)
            .map(|(s, _)| *s)
    }

    pub fn contains(&self, window: WindowHandle) -> bool {
        self.subscriptions.values().any(|w| *w == window)
    }

    /// Observed windows, without duplicates.
    pub fn windows(&self) -> Vec<WindowHandle> {
        let mut windows: Vec<WindowHandle> = self.subscriptions.values().copied().collect();
        windows.sort_by_key(|w| w.as_raw());
        windows.dedup();
        windows
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
