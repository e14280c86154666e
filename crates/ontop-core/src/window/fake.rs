//! Scripted in-memory window system for unit tests.
//!
//! Models just enough of a desktop: windows with a topmost flag and a
//! system menu built from a default template, a foreground window, and
//! per-window subscriptions. Every call that changes OS state bumps a
//! mutation counter so tests can assert that a step was a pure no-op.

use std::cell::RefCell;
use std::collections::HashMap;

use super::errors::WindowSystemError;
use super::traits::WindowSystem;
use super::types::{MenuHandle, MenuItem, SubscriptionHandle, TopLevelWindow, WindowHandle};

/// Restore, Move, Size, Minimize, Maximize, separator, Close.
const DEFAULT_MENU: [(u32, &str); 7] = [
    (0xF120, "&Restore"),
    (0xF010, "&Move"),
    (0xF000, "&Size"),
    (0xF020, "Mi&nimize"),
    (0xF030, "Ma&ximize"),
    (0, ""),
    (0xF060, "&Close"),
];

fn default_menu() -> Vec<MenuItem> {
    DEFAULT_MENU
        .iter()
        .map(|(id, label)| MenuItem::new(*id, *label, false))
        .collect()
}

#[derive(Debug, Clone)]
struct FakeWindow {
    pid: u32,
    title: String,
    topmost: bool,
    menu: Vec<MenuItem>,
    visible: bool,
    owned: bool,
    menu_denied: bool,
    menu_corrupt: bool,
}

#[derive(Debug, Default)]
struct FakeState {
    windows: HashMap<WindowHandle, FakeWindow>,
    order: Vec<WindowHandle>,
    foreground: Option<WindowHandle>,
    subscriptions: HashMap<SubscriptionHandle, WindowHandle>,
    next_subscription: isize,
    mutations: usize,
    reverts: usize,
    fail_subscribe: bool,
    fail_insert: bool,
    fail_update: bool,
    reject_topmost: bool,
    locale: Option<String>,
    dialogs: Vec<(String, String)>,
}

#[derive(Debug, Default)]
pub struct FakeWindowSystem {
    state: RefCell<FakeState>,
}

fn gone(window: WindowHandle) -> WindowSystemError {
    WindowSystemError::WindowGone {
        window: window.to_string(),
    }
}

fn rejected(call: &'static str) -> WindowSystemError {
    WindowSystemError::CallFailed {
        call,
        message: "rejected by test".to_string(),
    }
}

fn menu_window(menu: MenuHandle) -> WindowHandle {
    WindowHandle::from_raw(menu.as_raw())
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible, unowned top-level window with the default system menu.
    pub fn add_window(&self, raw: isize, pid: u32, title: &str) -> WindowHandle {
        let handle = WindowHandle::from_raw(raw);
        let mut state = self.state.borrow_mut();
        state.windows.insert(
            handle,
            FakeWindow {
                pid,
                title: title.to_string(),
                topmost: false,
                menu: default_menu(),
                visible: true,
                owned: false,
                menu_denied: false,
                menu_corrupt: false,
            },
        );
        state.order.push(handle);
        handle
    }

    pub fn destroy_window(&self, window: WindowHandle) {
        let mut state = self.state.borrow_mut();
        state.windows.remove(&window);
        if state.foreground == Some(window) {
            state.foreground = None;
        }
    }

    pub fn set_foreground(&self, window: Option<WindowHandle>) {
        self.state.borrow_mut().foreground = window;
    }

    /// Change the stacking flag behind ontop's back.
    pub fn set_topmost_externally(&self, window: WindowHandle, topmost: bool) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.topmost = topmost;
        }
    }

    /// Rebuild the menu behind ontop's back, as the OS or the owning
    /// application may do at any time.
    pub fn reset_menu_externally(&self, window: WindowHandle) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.menu = default_menu();
        }
    }

    pub fn set_visible(&self, window: WindowHandle, visible: bool) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.visible = visible;
        }
    }

    pub fn set_owned(&self, window: WindowHandle, owned: bool) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.owned = owned;
        }
    }

    pub fn deny_menu(&self, window: WindowHandle) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.menu_denied = true;
        }
    }

    /// Make the item count unreadable until the menu is reverted.
    pub fn corrupt_menu(&self, window: WindowHandle) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.menu_corrupt = true;
        }
    }

    /// Remove a subscription on the OS side only, so a later unsubscribe fails.
    pub fn drop_subscription(&self, subscription: SubscriptionHandle) {
        self.state.borrow_mut().subscriptions.remove(&subscription);
    }

    pub fn fail_subscribe(&self, fail: bool) {
        self.state.borrow_mut().fail_subscribe = fail;
    }

    pub fn fail_insert(&self, fail: bool) {
        self.state.borrow_mut().fail_insert = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        self.state.borrow_mut().fail_update = fail;
    }

    pub fn reject_topmost(&self, reject: bool) {
        self.state.borrow_mut().reject_topmost = reject;
    }

    pub fn set_locale(&self, locale: &str) {
        self.state.borrow_mut().locale = Some(locale.to_string());
    }

    pub fn menu(&self, window: WindowHandle) -> Vec<MenuItem> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|w| w.menu.clone())
            .unwrap_or_default()
    }

    pub fn entries_with_id(&self, window: WindowHandle, id: u32) -> usize {
        self.menu(window).iter().filter(|item| item.id == id).count()
    }

    pub fn topmost(&self, window: WindowHandle) -> bool {
        self.state
            .borrow()
            .windows
            .get(&window)
            .is_some_and(|w| w.topmost)
    }

    pub fn mutations(&self) -> usize {
        self.state.borrow().mutations
    }

    pub fn reverts(&self) -> usize {
        self.state.borrow().reverts
    }

    pub fn subscription_count(&self) -> usize {
        self.state.borrow().subscriptions.len()
    }

    pub fn subscriptions_for(&self, window: WindowHandle) -> usize {
        self.state
            .borrow()
            .subscriptions
            .values()
            .filter(|w| **w == window)
            .count()
    }

    pub fn dialogs(&self) -> Vec<(String, String)> {
        self.state.borrow().dialogs.clone()
    }
}

impl WindowSystem for FakeWindowSystem {
    fn is_topmost(&self, window: WindowHandle) -> Result<bool, WindowSystemError> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|w| w.topmost)
            .ok_or_else(|| gone(window))
    }

    fn set_topmost(&self, window: WindowHandle, topmost: bool) -> Result<(), WindowSystemError> {
        let mut state = self.state.borrow_mut();
        if state.reject_topmost {
            return Err(rejected("SetWindowPos"));
        }
        let w = state.windows.get_mut(&window).ok_or_else(|| gone(window))?;
        w.topmost = topmost;
        state.mutations += 1;
        Ok(())
    }

    fn system_menu(&self, window: WindowHandle) -> Option<MenuHandle> {
        let state = self.state.borrow();
        let w = state.windows.get(&window)?;
        (!w.menu_denied).then(|| MenuHandle::from_raw(window.as_raw()))
    }

    fn revert_system_menu(&self, window: WindowHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(w) = state.windows.get_mut(&window) {
            w.menu = default_menu();
            w.menu_corrupt = false;
            state.reverts += 1;
            state.mutations += 1;
        }
    }

    fn menu_item_count(&self, menu: MenuHandle) -> Result<u32, WindowSystemError> {
        let window = menu_window(menu);
        let state = self.state.borrow();
        let w = state.windows.get(&window).ok_or_else(|| gone(window))?;
        if w.menu_corrupt {
            return Err(rejected("GetMenuItemCount"));
        }
        Ok(w.menu.len() as u32)
    }

    fn read_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
    ) -> Result<MenuItem, WindowSystemError> {
        let window = menu_window(menu);
        let state = self.state.borrow();
        let w = state.windows.get(&window).ok_or_else(|| gone(window))?;
        w.menu
            .get(position as usize)
            .cloned()
            .ok_or_else(|| rejected("GetMenuItemInfoW"))
    }

    fn insert_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
        item: &MenuItem,
    ) -> Result<(), WindowSystemError> {
        let window = menu_window(menu);
        let mut state = self.state.borrow_mut();
        if state.fail_insert {
            return Err(rejected("InsertMenuItemW"));
        }
        let w = state.windows.get_mut(&window).ok_or_else(|| gone(window))?;
        let position = (position as usize).min(w.menu.len());
        w.menu.insert(position, item.clone());
        state.mutations += 1;
        Ok(())
    }

    fn update_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
        item: &MenuItem,
    ) -> Result<(), WindowSystemError> {
        let window = menu_window(menu);
        let mut state = self.state.borrow_mut();
        if state.fail_update {
            return Err(rejected("SetMenuItemInfoW"));
        }
        let w = state.windows.get_mut(&window).ok_or_else(|| gone(window))?;
        let slot = w
            .menu
            .get_mut(position as usize)
            .ok_or_else(|| rejected("SetMenuItemInfoW"))?;
        *slot = item.clone();
        state.mutations += 1;
        Ok(())
    }

    fn subscribe_menu_invoked(
        &self,
        window: WindowHandle,
    ) -> Result<SubscriptionHandle, WindowSystemError> {
        let mut state = self.state.borrow_mut();
        if state.fail_subscribe {
            return Err(rejected("SetWinEventHook"));
        }
        if !state.windows.contains_key(&window) {
            return Err(gone(window));
        }
        state.next_subscription += 1;
        let subscription = SubscriptionHandle::from_raw(1000 + state.next_subscription);
        state.subscriptions.insert(subscription, window);
        state.mutations += 1;
        Ok(subscription)
    }

    fn unsubscribe(&self, subscription: SubscriptionHandle) -> Result<(), WindowSystemError> {
        let mut state = self.state.borrow_mut();
        state
            .subscriptions
            .remove(&subscription)
            .ok_or_else(|| rejected("UnhookWinEvent"))?;
        state.mutations += 1;
        Ok(())
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.state.borrow().foreground
    }

    fn top_level_windows(&self) -> Result<Vec<TopLevelWindow>, WindowSystemError> {
        let state = self.state.borrow();
        Ok(state
            .order
            .iter()
            .filter_map(|handle| {
                state.windows.get(handle).map(|w| TopLevelWindow {
                    handle: *handle,
                    pid: w.pid,
                    title: w.title.clone(),
                    visible: w.visible,
                    owned: w.owned,
                })
            })
            .collect())
    }

    fn user_locale(&self) -> Option<String> {
        self.state.borrow().locale.clone()
    }

    fn show_error_dialog(&self, title: &str, message: &str) {
        self.state
            .borrow_mut()
            .dialogs
            .push((title.to_string(), message.to_string()));
    }
}
