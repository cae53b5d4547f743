use crate::errors::BridgeError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Top-level window could not be resolved")]
    WindowUnavailable,

    #[error("Native call '{operation}' failed: {reason}")]
    NativeCallFailed { operation: String, reason: String },
}

impl WindowError {
    /// Build a `NativeCallFailed` from an OS error value.
    pub fn native(operation: impl Into<String>, reason: impl ToString) -> Self {
        WindowError::NativeCallFailed {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }
}

impl BridgeError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::WindowUnavailable => "WINDOW_UNAVAILABLE",
            WindowError::NativeCallFailed { .. } => "NATIVE_CALL_FAILED",
        }
    }
}
