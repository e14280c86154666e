//! user32-backed [`WindowSystem`].

mod events;

use std::ffi::c_void;

use tracing::debug;
use windows::Win32::Foundation::{BOOL, FALSE, HMODULE, HWND, LPARAM, TRUE};
use windows::Win32::Globalization::GetUserDefaultLocaleName;
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GW_OWNER, GetForegroundWindow, GetMenuItemCount, GetMenuItemInfoW,
    GetSystemMenu, GetWindow, GetWindowInfo, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, HMENU, HWND_NOTOPMOST, HWND_TOPMOST, InsertMenuItemW,
    IsWindowVisible, MB_ICONERROR, MB_OK, MENUITEMINFOW, MFS_CHECKED, MFS_UNCHECKED, MFT_STRING,
    MIIM_FTYPE, MIIM_ID, MIIM_STATE, MIIM_STRING, MessageBoxW, SET_WINDOW_POS_FLAGS,
    SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SetMenuItemInfoW, SetWindowPos, WINDOWINFO, WS_EX_TOPMOST,
};
use windows::core::{HSTRING, PWSTR};

pub(super) use events::Win32EventSource;

use super::errors::WindowSystemError;
use super::traits::WindowSystem;
use super::types::{MenuHandle, MenuItem, SubscriptionHandle, TopLevelWindow, WindowHandle};
use crate::menu::LABEL_CAPACITY;

pub(super) const EVENT_OBJECT_FOCUS: u32 = 0x8005;
const EVENT_OBJECT_INVOKED: u32 = 0x8013;
pub(super) const WINEVENT_OUTOFCONTEXT: u32 = 0x0000;

/// Longest locale name, including the terminator.
const LOCALE_NAME_MAX_LENGTH: usize = 85;

pub struct Win32WindowSystem;

/// Change only the z-order. The target is often a background window (the
/// `toggle` command) and must not be raised or focused.
fn restack_flags() -> SET_WINDOW_POS_FLAGS {
    SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.as_raw() as *mut c_void)
}

fn window_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as isize)
}

fn hmenu(menu: MenuHandle) -> HMENU {
    HMENU(menu.as_raw() as *mut c_void)
}

fn call_failed(call: &'static str, e: windows::core::Error) -> WindowSystemError {
    WindowSystemError::CallFailed {
        call,
        message: e.to_string(),
    }
}

fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// Build a string entry. `label` must outlive the returned struct.
fn menu_item_info(item: &MenuItem, label: &mut [u16]) -> MENUITEMINFOW {
    MENUITEMINFOW {
        cbSize: size_of::<MENUITEMINFOW>() as u32,
        fMask: MIIM_STATE | MIIM_FTYPE | MIIM_ID | MIIM_STRING,
        fType: MFT_STRING,
        fState: if item.checked {
            MFS_CHECKED
        } else {
            MFS_UNCHECKED
        },
        wID: item.id,
        dwTypeData: PWSTR(label.as_mut_ptr()),
        cch: label.len().saturating_sub(1) as u32,
        ..Default::default()
    }
}

fn nul_terminated(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
    handles.push(hwnd);
    TRUE
}

fn window_title(hwnd: HWND) -> String {
    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len <= 0 {
        return String::new();
    }
    let mut buffer = vec![0u16; len as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

fn window_thread_and_process(hwnd: HWND) -> (u32, u32) {
    let mut pid = 0u32;
    let thread = unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid as *mut u32)) };
    (thread, pid)
}

impl WindowSystem for Win32WindowSystem {
    fn is_topmost(&self, window: WindowHandle) -> Result<bool, WindowSystemError> {
        let mut info = WINDOWINFO {
            cbSize: size_of::<WINDOWINFO>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowInfo(hwnd(window), &mut info) }.map_err(|_| {
            WindowSystemError::WindowGone {
                window: window.to_string(),
            }
        })?;
        Ok(info.dwExStyle.0 & WS_EX_TOPMOST.0 != 0)
    }

    fn set_topmost(&self, window: WindowHandle, topmost: bool) -> Result<(), WindowSystemError> {
        let insert_after = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
        unsafe {
            SetWindowPos(
                hwnd(window),
                insert_after,
                0,
                0,
                0,
                0,
                restack_flags(),
            )
        }
        .map_err(|e| call_failed("SetWindowPos", e))
    }

    fn system_menu(&self, window: WindowHandle) -> Option<MenuHandle> {
        let menu = unsafe { GetSystemMenu(hwnd(window), FALSE) };
        (!menu.0.is_null()).then(|| MenuHandle::from_raw(menu.0 as isize))
    }

    fn revert_system_menu(&self, window: WindowHandle) {
        // Reverting returns no usable handle.
        let _ = unsafe { GetSystemMenu(hwnd(window), TRUE) };
    }

    fn menu_item_count(&self, menu: MenuHandle) -> Result<u32, WindowSystemError> {
        let count = unsafe { GetMenuItemCount(hmenu(menu)) };
        u32::try_from(count)
            .map_err(|_| call_failed("GetMenuItemCount", windows::core::Error::from_win32()))
    }

    fn read_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
    ) -> Result<MenuItem, WindowSystemError> {
        let mut buffer = [0u16; LABEL_CAPACITY + 1];
        let mut info = MENUITEMINFOW {
            cbSize: size_of::<MENUITEMINFOW>() as u32,
            fMask: MIIM_STATE | MIIM_FTYPE | MIIM_ID | MIIM_STRING,
            dwTypeData: PWSTR(buffer.as_mut_ptr()),
            cch: buffer.len() as u32,
            ..Default::default()
        };
        unsafe { GetMenuItemInfoW(hmenu(menu), position, TRUE, &mut info) }
            .map_err(|e| call_failed("GetMenuItemInfoW", e))?;

        Ok(MenuItem {
            id: info.wID,
            label: wide_to_string(&buffer),
            checked: info.fState.0 & MFS_CHECKED.0 != 0,
        })
    }

    fn insert_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
        item: &MenuItem,
    ) -> Result<(), WindowSystemError> {
        let mut label = nul_terminated(&item.label);
        let info = menu_item_info(item, &mut label);
        unsafe { InsertMenuItemW(hmenu(menu), position, TRUE, &info) }
            .map_err(|e| call_failed("InsertMenuItemW", e))
    }

    fn update_menu_item(
        &self,
        menu: MenuHandle,
        position: u32,
        item: &MenuItem,
    ) -> Result<(), WindowSystemError> {
        let mut label = nul_terminated(&item.label);
        let info = menu_item_info(item, &mut label);
        unsafe { SetMenuItemInfoW(hmenu(menu), position, TRUE, &info) }
            .map_err(|e| call_failed("SetMenuItemInfoW", e))
    }

    fn subscribe_menu_invoked(
        &self,
        window: WindowHandle,
    ) -> Result<SubscriptionHandle, WindowSystemError> {
        // Scope the hook to the thread that owns the window.
        let (thread, pid) = window_thread_and_process(hwnd(window));
        if thread == 0 {
            return Err(WindowSystemError::WindowGone {
                window: window.to_string(),
            });
        }

        let hook = unsafe {
            SetWinEventHook(
                EVENT_OBJECT_INVOKED,
                EVENT_OBJECT_INVOKED,
                HMODULE::default(),
                Some(events::on_menu_invoked),
                pid,
                thread,
                WINEVENT_OUTOFCONTEXT,
            )
        };
        if hook.0.is_null() {
            return Err(call_failed(
                "SetWinEventHook",
                windows::core::Error::from_win32(),
            ));
        }
        Ok(SubscriptionHandle::from_raw(hook.0 as isize))
    }

    fn unsubscribe(&self, subscription: SubscriptionHandle) -> Result<(), WindowSystemError> {
        let hook = HWINEVENTHOOK(subscription.as_raw() as *mut c_void);
        if unsafe { UnhookWinEvent(hook) }.as_bool() {
            Ok(())
        } else {
            Err(call_failed(
                "UnhookWinEvent",
                windows::core::Error::from_win32(),
            ))
        }
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        let foreground = unsafe { GetForegroundWindow() };
        (!foreground.0.is_null()).then(|| window_handle(foreground))
    }

    fn top_level_windows(&self) -> Result<Vec<TopLevelWindow>, WindowSystemError> {
        let mut handles: Vec<HWND> = Vec::new();
        unsafe {
            EnumWindows(
                Some(collect_window),
                LPARAM(&mut handles as *mut Vec<HWND> as isize),
            )
        }
        .map_err(|e| WindowSystemError::EnumerationFailed {
            message: e.to_string(),
        })?;

        let windows: Vec<TopLevelWindow> = handles
            .into_iter()
            .map(|h| {
                let (_, pid) = window_thread_and_process(h);
                let owned = unsafe { GetWindow(h, GW_OWNER) }
                    .map(|owner| !owner.0.is_null())
                    .unwrap_or(false);
                TopLevelWindow {
                    handle: window_handle(h),
                    pid,
                    title: window_title(h),
                    visible: unsafe { IsWindowVisible(h) }.as_bool(),
                    owned,
                }
            })
            .collect();

        debug!(event = "core.window.enumerated", count = windows.len());
        Ok(windows)
    }

    fn user_locale(&self) -> Option<String> {
        let mut buffer = [0u16; LOCALE_NAME_MAX_LENGTH];
        let len = unsafe { GetUserDefaultLocaleName(&mut buffer) };
        (len > 1).then(|| wide_to_string(&buffer))
    }

    fn show_error_dialog(&self, title: &str, message: &str) {
        let _ = unsafe {
            MessageBoxW(
                HWND::default(),
                &HSTRING::from(message),
                &HSTRING::from(title),
                MB_OK | MB_ICONERROR,
            )
        };
    }
}
