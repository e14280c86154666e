//! WinEvent callbacks and the message loop that drains them.
//!
//! Callbacks run on the thread that installed the hook, inside
//! `GetMessageW`. They only push onto a thread-local queue and post a wake
//! message; all handling happens after `next_event` returns.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::c_void;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, warn};
use windows::Win32::Foundation::{BOOL, FALSE, HMODULE, HWND, LPARAM, TRUE, WPARAM};
use windows::Win32::System::Console::{
    CTRL_CLOSE_EVENT, CTRL_LOGOFF_EVENT, CTRL_SHUTDOWN_EVENT, SetConsoleCtrlHandler,
};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetForegroundWindow, GetMessageW, MSG, PostThreadMessageW,
    TranslateMessage, WM_APP, WM_QUIT,
};

use super::{EVENT_OBJECT_FOCUS, WINEVENT_OUTOFCONTEXT, call_failed, window_handle};
use crate::daemon::{TEARDOWN, TEARDOWN_WAIT};
use crate::dispatch::{Event, EventSource};
use crate::window::{SubscriptionHandle, WindowSystemError};

const WM_WAKE: u32 = WM_APP + 1;

/// Thread running the message loop, for the console control handler.
static LOOP_THREAD: AtomicU32 = AtomicU32::new(0);

thread_local! {
    static QUEUE: RefCell<VecDeque<Event>> = const { RefCell::new(VecDeque::new()) };
}

fn enqueue(event: Event) {
    QUEUE.with(|queue| queue.borrow_mut().push_back(event));
    let _ = unsafe { PostThreadMessageW(GetCurrentThreadId(), WM_WAKE, WPARAM(0), LPARAM(0)) };
}

unsafe extern "system" fn on_focus(
    _hook: HWINEVENTHOOK,
    _event: u32,
    _hwnd: HWND,
    _id_object: i32,
    _id_child: i32,
    _thread: u32,
    _time: u32,
) {
    // Focus lands on child controls; the system menu belongs to the
    // top-level window.
    let foreground = unsafe { GetForegroundWindow() };
    if foreground.0.is_null() {
        return;
    }
    enqueue(Event::FocusChanged {
        window: window_handle(foreground),
    });
}

pub(super) unsafe extern "system" fn on_menu_invoked(
    hook: HWINEVENTHOOK,
    _event: u32,
    _hwnd: HWND,
    _id_object: i32,
    id_child: i32,
    _thread: u32,
    _time: u32,
) {
    enqueue(Event::MenuInvoked {
        subscription: SubscriptionHandle::from_raw(hook.0 as isize),
        item_id: id_child as u32,
    });
}

unsafe extern "system" fn on_console_ctrl(ctrl_type: u32) -> BOOL {
    let thread = LOOP_THREAD.load(Ordering::SeqCst);
    if thread == 0 {
        return FALSE;
    }
    debug!(event = "core.daemon.quit_requested", ctrl_type = ctrl_type);
    if unsafe { PostThreadMessageW(thread, WM_QUIT, WPARAM(0), LPARAM(0)) }.is_err() {
        return FALSE;
    }

    // The process is terminated as soon as these handlers return.
    if matches!(
        ctrl_type,
        CTRL_CLOSE_EVENT | CTRL_LOGOFF_EVENT | CTRL_SHUTDOWN_EVENT
    ) && !TEARDOWN.wait(TEARDOWN_WAIT)
    {
        warn!(event = "core.daemon.teardown_timed_out", ctrl_type = ctrl_type);
    }
    TRUE
}

/// Global focus subscription plus the thread's message loop.
pub struct Win32EventSource {
    focus_hook: HWINEVENTHOOK,
}

impl Win32EventSource {
    pub fn start() -> Result<Self, WindowSystemError> {
        let focus_hook = unsafe {
            SetWinEventHook(
                EVENT_OBJECT_FOCUS,
                EVENT_OBJECT_FOCUS,
                HMODULE::default(),
                Some(on_focus),
                0,
                0,
                WINEVENT_OUTOFCONTEXT,
            )
        };
        if focus_hook.0.is_null() {
            return Err(call_failed(
                "SetWinEventHook",
                windows::core::Error::from_win32(),
            ));
        }

        LOOP_THREAD.store(unsafe { GetCurrentThreadId() }, Ordering::SeqCst);
        if let Err(e) = unsafe { SetConsoleCtrlHandler(Some(on_console_ctrl), TRUE) } {
            warn!(event = "core.daemon.ctrl_handler_failed", error = %e);
        }

        debug!(event = "core.daemon.focus_hook_installed");
        Ok(Self { focus_hook })
    }
}

impl EventSource for Win32EventSource {
    fn next_event(&mut self) -> Result<Option<Event>, WindowSystemError> {
        loop {
            if let Some(event) = QUEUE.with(|queue| queue.borrow_mut().pop_front()) {
                return Ok(Some(event));
            }

            let mut msg = MSG::default();
            let result = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };
            match result.0 {
                0 => return Ok(None),
                -1 => {
                    return Err(call_failed(
                        "GetMessageW",
                        windows::core::Error::from_win32(),
                    ));
                }
                _ => {}
            }

            if msg.hwnd.0.is_null() && msg.message == WM_WAKE {
                continue;
            }
            unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }
}

impl Drop for Win32EventSource {
    fn drop(&mut self) {
        unsafe {
            let _ = UnhookWinEvent(self.focus_hook);
            let _ = SetConsoleCtrlHandler(Some(on_console_ctrl), FALSE);
        }
        LOOP_THREAD.store(0, Ordering::SeqCst);
        self.focus_hook = HWINEVENTHOOK(std::ptr::null_mut::<c_void>());
        debug!(event = "core.daemon.focus_hook_removed");
    }
}
