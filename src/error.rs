use std::collections::TryReserveError;

/// Conditions that end the shell process with a failure status.
#[derive(Debug)]
pub enum ShellError {
    Read(std::io::Error),
    Allocation(TryReserveError),
    Flag(String),
}

impl From<TryReserveError> for ShellError {
    fn from(err: TryReserveError) -> Self {
        ShellError::Allocation(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Read(e) => write!(f, "read error: {}", e),
            ShellError::Allocation(e) => write!(f, "allocation error: {}", e),
            ShellError::Flag(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Read(e) => Some(e),
            ShellError::Allocation(e) => Some(e),
            ShellError::Flag(_) => None,
        }
    }
}
