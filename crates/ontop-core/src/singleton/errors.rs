use crate::errors::OnTopError;

#[derive(Debug, thiserror::Error)]
pub enum SingletonError {
    #[error("Failed to create instance mutex '{name}': {message}")]
    CreateFailed { name: String, message: String },

    #[error("Single-instance guard is only available on Windows")]
    Unsupported,
}

impl OnTopError for SingletonError {
    fn error_code(&self) -> &'static str {
        match self {
            SingletonError::CreateFailed { .. } => "SINGLETON_CREATE_FAILED",
            SingletonError::Unsupported => "SINGLETON_UNSUPPORTED",
        }
    }
}
