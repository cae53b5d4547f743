use winbridge_core::errors::BridgeError;

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Invalid argument for '{method}': key '{key}' missing or not a {expected}")]
    InvalidArgument {
        method: String,
        key: String,
        expected: &'static str,
    },

    #[error("Unknown method: '{method}'")]
    UnknownMethod { method: String },
}

impl BridgeError for ChannelError {
    fn error_code(&self) -> &'static str {
        match self {
            ChannelError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            ChannelError::UnknownMethod { .. } => "UNKNOWN_METHOD",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = ChannelError::InvalidArgument {
            method: "setBounds".to_string(),
            key: "width".to_string(),
            expected: "number",
        };
        assert_eq!(
            error.to_string(),
            "Invalid argument for 'setBounds': key 'width' missing or not a number"
        );
        assert_eq!(error.error_code(), "INVALID_ARGUMENT");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_unknown_method_error() {
        let error = ChannelError::UnknownMethod {
            method: "teleport".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown method: 'teleport'");
        assert_eq!(error.error_code(), "UNKNOWN_METHOD");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChannelError>();
    }
}
