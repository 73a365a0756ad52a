use std::error::Error;
use std::fmt::{Display, Formatter};

/// Custom error type to indicate that the given combination of arguments can not be executed
#[derive(Debug)]
pub struct ConfigurationError {
    message: String,
}

impl Error for ConfigurationError {}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ConfigurationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
