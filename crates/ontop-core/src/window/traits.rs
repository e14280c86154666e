//! Native window system trait definition.

use super::errors::WindowSystemError;
use super::types::{MenuHandle, MenuItem, SubscriptionHandle, TopLevelWindow, WindowHandle};

/// The native window-system surface ontop consumes.
///
/// Every call is fallible and addresses objects owned by other processes.
/// Callers treat failures as "no change happened" and retry on the next
/// event; nothing here is expected to be transactional.
pub trait WindowSystem {
    /// Whether the window carries the topmost extended style bit.
    fn is_topmost(&self, window: WindowHandle) -> Result<bool, WindowSystemError>;

    /// Move the window into or out of the topmost stacking class without
    /// moving or resizing it.
    fn set_topmost(&self, window: WindowHandle, topmost: bool) -> Result<(), WindowSystemError>;

    /// Current system menu of the window, if one can be obtained.
    fn system_menu(&self, window: WindowHandle) -> Option<MenuHandle>;

    /// Rebuild the window's system menu from the default template.
    fn revert_system_menu(&self, window: WindowHandle);

    fn menu_item_count(&self, menu: MenuHandle) -> Result<u32, WindowSystemError>;

    fn read_menu_item(&self, menu: MenuHandle, position: u32)
    -> Result<MenuItem, WindowSystemError>;

    fn insert_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
        item: &MenuItem,
    ) -> Result<(), WindowSystemError>;

    fn update_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
        item: &MenuItem,
    ) -> Result<(), WindowSystemError>;

    /// Subscribe to "menu entry invoked" notifications for the window.
    fn subscribe_menu_invoked(
        &self,
        window: WindowHandle,
    ) -> Result<SubscriptionHandle, WindowSystemError>;

    fn unsubscribe(&self, subscription: SubscriptionHandle) -> Result<(), WindowSystemError>;

    /// The window currently receiving user input, if any.
    fn foreground_window(&self) -> Option<WindowHandle>;

    /// All top-level windows in enumeration order.
    fn top_level_windows(&self) -> Result<Vec<TopLevelWindow>, WindowSystemError>;

    /// Locale name of the interactive user (e.g. `de-DE`).
    fn user_locale(&self) -> Option<String>;

    /// Show a modal error dialog. Best-effort.
    fn show_error_dialog(&self, title: &str, message: &str);
}

/// Forward through smart pointers and references, so a synchronizer can own
/// a boxed native system or borrow a test double.
macro_rules! forward_window_system {
    ($($ty:ty),*) => {$(
        impl<T: WindowSystem + ?Sized> WindowSystem for $ty {
            fn is_topmost(&self, window: WindowHandle) -> Result<bool, WindowSystemError> {
                (**self).is_topmost(window)
            }

            fn set_topmost(&self, window: WindowHandle, topmost: bool) -> Result<(), WindowSystemError> {
                (**self).set_topmost(window, topmost)
            }

            fn system_menu(&self, window: WindowHandle) -> Option<MenuHandle> {
                (**self).system_menu(window)
            }

            fn revert_system_menu(&self, window: WindowHandle) {
                (**self).revert_system_menu(window)
            }

            fn menu_item_count(&self, menu: MenuHandle) -> Result<u32, WindowSystemError> {
                (**self).menu_item_count(menu)
            }

            fn read_menu_item(
                &self,
                menu: MenuHandle,
                position: u32,
            ) -> Result<MenuItem, WindowSystemError> {
                (**self).read_menu_item(menu, position)
            }

            fn insert_menu_item(
                &self,
                menu: MenuHandle,
                position: u32,
                item: &MenuItem,
            ) -> Result<(), WindowSystemError> {
                (**self).insert_menu_item(menu, position, item)
            }

            fn update_menu_item(
                &self,
                menu: MenuHandle,
                position: u32,
                item: &MenuItem,
            ) -> Result<(), WindowSystemError> {
                (**self).update_menu_item(menu, position, item)
            }

            fn subscribe_menu_invoked(
                &self,
                window: WindowHandle,
            ) -> Result<SubscriptionHandle, WindowSystemError> {
                (**self).subscribe_menu_invoked(window)
            }

            fn unsubscribe(&self, subscription: SubscriptionHandle) -> Result<(), WindowSystemError> {
                (**self).unsubscribe(subscription)
            }

            fn foreground_window(&self) -> Option<WindowHandle> {
                (**self).foreground_window()
            }

            fn top_level_windows(&self) -> Result<Vec<TopLevelWindow>, WindowSystemError> {
                (**self).top_level_windows()
            }

            fn user_locale(&self) -> Option<String> {
                (**self).user_locale()
            }

            fn show_error_dialog(&self, title: &str, message: &str) {
                (**self).show_error_dialog(title, message)
            }
        }
    )*};
}

forward_window_system!(Box<T>, &T);
