use crate::parser;

/// Markers found in platform errors raised by missing permissions
const PERMISSION_MARKERS: [&str; 3] = ["403", "forbidden", "missing permissions"];

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    Pest(Box<pest::error::Error<parser::Rule>>),
    Config(String),
    Forbidden(String),
    Service(String),
    Other(String),
}

impl Error {
    /// Check if the platform refused the call for lack of permissions
    pub fn is_permission(&self) -> bool {
        match self {
            Self::Forbidden(_) => true,
            Self::Service(e) | Self::Other(e) => {
                let e = e.to_lowercase();
                PERMISSION_MARKERS.iter().any(|marker| e.contains(marker))
            }
            Self::Pest(_) | Self::Config(_) => false,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pest(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Forbidden(e) => write!(f, "{e}"),
            Self::Service(e) => write!(f, "{e}"),
            Self::Other(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
