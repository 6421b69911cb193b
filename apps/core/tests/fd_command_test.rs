use std::path::PathBuf;

use pathseek_core::fd_command::{build_args, SearchPattern, SearchRequest};
use pathseek_core::model::SearchMode;

fn request(pattern: SearchPattern, mode: SearchMode) -> SearchRequest {
    SearchRequest {
        pattern,
        mode,
        base_dir: PathBuf::from("/home/user/docs"),
        ignored_folders: Vec::new(),
        ignored_files: Vec::new(),
    }
}

#[test]
fn splits_extension_at_last_dot() {
    let pattern = SearchPattern::from_query("notes.md", true);
    assert_eq!(pattern.name, "notes");
    assert_eq!(pattern.extension.as_deref(), Some("md"));
}

#[test]
fn split_uses_last_dot_of_many() {
    let pattern = SearchPattern::from_query("archive.tar.gz", true);
    assert_eq!(pattern.name, "archive.tar");
    assert_eq!(pattern.extension.as_deref(), Some("gz"));
}

#[test]
fn query_without_dot_falls_back_to_literal() {
    let pattern = SearchPattern::from_query("Makefile", true);
    assert_eq!(pattern.name, "Makefile");
    assert_eq!(pattern.extension, None);
}

#[test]
fn trailing_dot_drops_empty_extension() {
    let pattern = SearchPattern::from_query("notes.", true);
    assert_eq!(pattern.name, "notes");
    assert_eq!(pattern.extension, None);
}

#[test]
fn leading_dot_stays_literal() {
    let pattern = SearchPattern::from_query(".bashrc", true);
    assert_eq!(pattern.name, ".bashrc");
    assert_eq!(pattern.extension, None);
}

#[test]
fn extension_split_is_off_by_default() {
    let pattern = SearchPattern::from_query("notes.md", false);
    assert_eq!(pattern.name, "notes.md");
    assert_eq!(pattern.extension, None);
}

#[test]
fn argument_vector_starts_with_priority_wrappers() {
    let args = build_args(&request(
        SearchPattern::from_query("report", false),
        SearchMode::All,
    ));

    assert_eq!(
        &args[..7],
        &[
            "timeout".to_string(),
            "15s".to_string(),
            "ionice".to_string(),
            "-c".to_string(),
            "3".to_string(),
            "fd".to_string(),
            "--hidden".to_string(),
        ]
    );
    assert_eq!(args.last().map(String::as_str), Some("/home/user/docs"));
}

#[test]
fn all_mode_adds_no_type_filter() {
    let args = build_args(&request(
        SearchPattern::from_query("report", false),
        SearchMode::All,
    ));
    assert!(!args.contains(&"-t".to_string()));
}

#[test]
fn file_mode_restricts_to_regular_files() {
    let args = build_args(&request(
        SearchPattern::from_query("report", false),
        SearchMode::File,
    ));

    let position = args.iter().position(|arg| arg == "-t").expect("-t present");
    assert_eq!(args[position + 1], "f");
}

#[test]
fn directory_mode_restricts_to_directories() {
    let args = build_args(&request(
        SearchPattern::from_query("report", false),
        SearchMode::Directory,
    ));

    let position = args.iter().position(|arg| arg == "-t").expect("-t present");
    assert_eq!(args[position + 1], "d");
}

#[test]
fn extension_filter_precedes_name_pattern() {
    let args = build_args(&request(
        SearchPattern::from_query("notes.md", true),
        SearchMode::File,
    ));

    let ext_flag = args.iter().position(|arg| arg == "-e").expect("-e present");
    assert_eq!(args[ext_flag + 1], "md");
    assert_eq!(args[ext_flag + 2], "notes");
}

#[test]
fn one_exclusion_pair_per_ignore_pattern_in_supplied_order() {
    let mut req = request(SearchPattern::from_query("report", false), SearchMode::All);
    req.ignored_folders = vec!["node_modules".to_string(), ".git".to_string()];
    req.ignored_files = vec!["*.tmp".to_string()];

    let args = build_args(&req);

    let pairs: Vec<&str> = args
        .iter()
        .enumerate()
        .filter(|(_, arg)| arg.as_str() == "-E")
        .map(|(index, _)| args[index + 1].as_str())
        .collect();

    assert_eq!(pairs, vec!["node_modules", ".git", "*.tmp"]);
}

#[test]
fn ignore_patterns_pass_through_unquoted() {
    let mut req = request(SearchPattern::from_query("report", false), SearchMode::All);
    req.ignored_files = vec!["*.swp".to_string()];

    let args = build_args(&req);

    assert!(args.contains(&"*.swp".to_string()));
    assert!(!args.iter().any(|arg| arg.contains('"') || arg.contains('\'')));
}
