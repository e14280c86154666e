use crate::errors::OnTopError;

#[derive(Debug, thiserror::Error)]
pub enum WindowSystemError {
    #[error("Window {window} no longer exists")]
    WindowGone { window: String },

    #[error("System menu unavailable for window {window}")]
    MenuUnavailable { window: String },

    #[error("Native call '{call}' failed: {message}")]
    CallFailed { call: &'static str, message: String },

    #[error("Window enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("Native window system is only available on Windows")]
    Unsupported,
}

impl OnTopError for WindowSystemError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowSystemError::WindowGone { .. } => "WINDOW_GONE",
            WindowSystemError::MenuUnavailable { .. } => "WINDOW_MENU_UNAVAILABLE",
            WindowSystemError::CallFailed { .. } => "WINDOW_CALL_FAILED",
            WindowSystemError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowSystemError::Unsupported => "WINDOW_SYSTEM_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowSystemError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_failed_error() {
        let error = WindowSystemError::CallFailed {
            call: "InsertMenuItemW",
            message: "Access is denied.".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Native call 'InsertMenuItemW' failed: Access is denied."
        );
        assert_eq!(error.error_code(), "WINDOW_CALL_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_unsupported_is_user_error() {
        let error = WindowSystemError::Unsupported;
        assert!(error.to_string().contains("only available on Windows"));
        assert!(error.is_user_error());
    }
}
