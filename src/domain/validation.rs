use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidCallbackUrl { input: String },
    MissingEnv { var: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidCallbackUrl { input } => {
                write!(f, "invalid callback url (expected absolute http/https): {input}")
            }
            Self::MissingEnv { var } => write!(f, "environment variable {var} is not set"),
        }
    }
}

impl std::error::Error for ValidationError {}
