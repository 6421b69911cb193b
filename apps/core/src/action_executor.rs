use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    EmptyPath,
    MissingPath(PathBuf),
    Spawn(String),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "empty path"),
            Self::MissingPath(path) => write!(f, "path does not exist: {}", path.display()),
            Self::Spawn(error) => write!(f, "failed to spawn: {error}"),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Opens the path with the OS-default handler.
pub fn open_path(path: &str) -> Result<(), LaunchError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(LaunchError::EmptyPath);
    }

    let candidate = Path::new(trimmed);
    if !candidate.exists() {
        return Err(LaunchError::MissingPath(candidate.to_path_buf()));
    }

    open::that(trimmed).map_err(|error| LaunchError::Spawn(error.to_string()))
}

/// Spawns the script detached; the child keeps running after the handle
/// drops.
pub fn run_script(command: &str, args: &[String]) -> Result<(), LaunchError> {
    Command::new(command)
        .args(args)
        .spawn()
        .map(|_| ())
        .map_err(|error| LaunchError::Spawn(error.to_string()))
}
