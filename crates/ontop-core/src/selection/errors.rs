use crate::errors::OnTopError;
use crate::window::WindowSystemError;

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("No process with a visible main window matches '{target}'")]
    TargetNotFound { target: String },

    #[error("Window system refused to change the stacking of '{name}'")]
    ToggleRejected { name: String },

    #[error(transparent)]
    Window(#[from] WindowSystemError),
}

impl OnTopError for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            SelectionError::TargetNotFound { .. } => "TARGET_NOT_FOUND",
            SelectionError::ToggleRejected { .. } => "TOGGLE_REJECTED",
            SelectionError::Window(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SelectionError::TargetNotFound { .. })
    }
}
