use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{operation} failed: {message}")]
    Upstream {
        operation: &'static str,
        message: String,
    },

    #[error("Malformed {operation} response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
}

impl DirectoryError {
    pub fn upstream(operation: &'static str, message: impl Into<String>) -> Self {
        DirectoryError::Upstream {
            operation,
            message: message.into(),
        }
    }

    pub fn decode(operation: &'static str, message: impl Into<String>) -> Self {
        DirectoryError::Decode {
            operation,
            message: message.into(),
        }
    }
}
