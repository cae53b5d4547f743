use std::error::Error;

/// Base trait for all application errors
pub trait BridgeError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type BridgeResult<T> = Result<T, Box<dyn BridgeError>>;

impl<E: BridgeError> From<E> for Box<dyn BridgeError> {
    fn from(error: E) -> Self {
        Box::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_result() {
        let _result: BridgeResult<i32> = Ok(42);
    }
}
