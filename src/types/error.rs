use std::fmt;

/// Terminal failures for one scaffold invocation. There is no retry or
/// resume; a partial directory must be removed before re-running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// The addon name is blank after trimming.
    EmptyName,
    /// The target path already exists; nothing was written.
    AlreadyExists(String),
    /// A required stub key has no backing content. This is a packaging
    /// defect, not a user input problem.
    TemplateMissing(String),
    /// Two manifest entries resolved to the same relative path.
    DuplicatePath(String),
    Io(String),
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::EmptyName => write!(f, "Addon name is required."),
            ScaffoldError::AlreadyExists(path) => {
                write!(f, "Directory already exists: {}", path)
            }
            ScaffoldError::TemplateMissing(key) => {
                write!(f, "Missing template stub: {}", key)
            }
            ScaffoldError::DuplicatePath(path) => {
                write!(f, "Duplicate manifest path: {}", path)
            }
            ScaffoldError::Io(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ScaffoldError {}
