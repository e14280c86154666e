use crate::errors::OnTopError;
use crate::singleton::SingletonError;
use crate::window::WindowSystemError;

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error(transparent)]
    Singleton(#[from] SingletonError),

    #[error(transparent)]
    WindowSystem(#[from] WindowSystemError),

    #[error("Event loop aborted: {message}")]
    Fatal { message: String },
}

impl OnTopError for DaemonError {
    fn error_code(&self) -> &'static str {
        match self {
            DaemonError::Singleton(e) => e.error_code(),
            DaemonError::WindowSystem(e) => e.error_code(),
            DaemonError::Fatal { .. } => "DAEMON_FATAL",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DaemonError::Singleton(e) => e.is_user_error(),
            DaemonError::WindowSystem(e) => e.is_user_error(),
            DaemonError::Fatal { .. } => false,
        }
    }
}
