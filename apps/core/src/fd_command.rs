use std::path::PathBuf;

use crate::model::SearchMode;

pub const SEARCH_TIMEOUT: &str = "15s";

/// Name pattern handed to the search tool, with an optional explicit
/// extension filter split off the raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    pub name: String,
    pub extension: Option<String>,
}

impl SearchPattern {
    /// Splits the query at its last `'.'` when extension matching is on.
    /// A query with no usable split (no dot, leading dot, empty suffix)
    /// degrades to a literal whole-string pattern instead of mis-slicing.
    pub fn from_query(raw: &str, append_extension: bool) -> Self {
        let trimmed = raw.trim();

        if append_extension {
            if let Some(index) = trimmed.rfind('.') {
                if index > 0 {
                    let extension = &trimmed[index + 1..];
                    return Self {
                        name: trimmed[..index].to_string(),
                        extension: if extension.is_empty() {
                            None
                        } else {
                            Some(extension.to_string())
                        },
                    };
                }
            }
        }

        Self {
            name: trimmed.to_string(),
            extension: None,
        }
    }
}

/// Everything one search invocation needs. Built fresh per query event,
/// immutable once built, discarded after the child process returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub pattern: SearchPattern,
    pub mode: SearchMode,
    pub base_dir: PathBuf,
    pub ignored_folders: Vec<String>,
    pub ignored_files: Vec<String>,
}

/// Builds the full argument vector, `argv[0]` included:
/// `timeout 15s ionice -c 3 fd --hidden [-t f|d] [-e ext] <name> [-E pat]... <base-dir>`.
/// Ignore patterns are passed through as argv elements, never quoted.
pub fn build_args(request: &SearchRequest) -> Vec<String> {
    let mut args: Vec<String> = ["timeout", SEARCH_TIMEOUT, "ionice", "-c", "3", "fd", "--hidden"]
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    if let Some(filter) = request.mode.type_filter() {
        args.push("-t".to_string());
        args.push(filter.to_string());
    }

    if let Some(extension) = &request.pattern.extension {
        args.push("-e".to_string());
        args.push(extension.clone());
    }

    args.push(request.pattern.name.clone());

    for pattern in request
        .ignored_folders
        .iter()
        .chain(request.ignored_files.iter())
    {
        args.push("-E".to_string());
        args.push(pattern.clone());
    }

    args.push(request.base_dir.to_string_lossy().into_owned());
    args
}
