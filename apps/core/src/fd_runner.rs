use std::fmt::{Display, Formatter};
use std::process::Command;

use crate::fd_command::{build_args, SearchRequest, SEARCH_TIMEOUT};

/// Exit code the `timeout(1)` wrapper reports after killing the child.
const TIMEOUT_EXIT_CODE: i32 = 124;

#[derive(Debug)]
pub enum SearchToolError {
    Launch(std::io::Error),
    Timeout,
    Diagnostic(String),
}

impl Display for SearchToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Launch(error) => write!(f, "search tool failed to launch: {error}"),
            Self::Timeout => write!(f, "search timed out after {SEARCH_TIMEOUT}"),
            Self::Diagnostic(message) => write!(f, "search tool reported: {message}"),
        }
    }
}

impl std::error::Error for SearchToolError {}

pub trait SearchRunner: Send + Sync {
    fn run(&self, request: &SearchRequest) -> Result<Vec<String>, SearchToolError>;
}

/// Blocking `fd` invocation through `timeout` and `ionice`, stdout and
/// stderr captured separately.
pub struct FdRunner;

impl SearchRunner for FdRunner {
    fn run(&self, request: &SearchRequest) -> Result<Vec<String>, SearchToolError> {
        let args = build_args(request);
        let output = Command::new(&args[0])
            .args(&args[1..])
            .output()
            .map_err(SearchToolError::Launch)?;

        interpret(output.status.code(), &output.stdout, &output.stderr)
    }
}

/// Maps a finished invocation to the non-empty stdout lines in emission
/// order, or to the error kind the service layer logs and absorbs.
pub fn interpret(
    exit_code: Option<i32>,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<Vec<String>, SearchToolError> {
    if exit_code == Some(TIMEOUT_EXIT_CODE) {
        return Err(SearchToolError::Timeout);
    }

    let diagnostics = String::from_utf8_lossy(stderr);
    let diagnostics = diagnostics.trim();
    if !diagnostics.is_empty() {
        return Err(SearchToolError::Diagnostic(diagnostics.to_string()));
    }

    Ok(String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
