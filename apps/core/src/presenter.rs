use std::path::Path;

use crate::contract::{Action, RenderInstruction, ResultItem};
use crate::icons::{IconResolver, BUNDLED_BADGE_ICON};
use crate::model::SearchHit;
use crate::preferences::Preferences;

pub const MIN_QUERY_CHARS: usize = 2;

pub const RECOGNIZED_TERMINALS: [&str; 4] =
    ["gnome-terminal", "terminator", "tilix", "xfce-terminal"];

pub fn keep_typing_instruction() -> RenderInstruction {
    RenderInstruction {
        items: vec![ResultItem {
            icon: BUNDLED_BADGE_ICON.to_string(),
            name: "Keep typing your search criteria ...".to_string(),
            on_enter: Action::DoNothing,
            on_alt_enter: Action::DoNothing,
        }],
    }
}

pub fn no_results_instruction(query: &str) -> RenderInstruction {
    RenderInstruction {
        items: vec![ResultItem {
            icon: BUNDLED_BADGE_ICON.to_string(),
            name: format!("No results found matching {query}"),
            on_enter: Action::HideWindow,
            on_alt_enter: Action::DoNothing,
        }],
    }
}

/// Shapes raw path lines into a bounded, UI-ready result list. An empty
/// input (including every absorbed tool failure) renders the single
/// no-results item.
pub fn present(
    query: &str,
    paths: &[String],
    preferences: &Preferences,
    resolver: &dyn IconResolver,
    cap: usize,
) -> RenderInstruction {
    if paths.is_empty() {
        return no_results_instruction(query);
    }

    let items = shape_hits(paths, resolver, cap)
        .into_iter()
        .map(|hit| result_item(hit, preferences))
        .collect();

    RenderInstruction { items }
}

/// Truncates to the cap, classifies each path via filesystem metadata, and
/// resolves an icon per hit. A path that vanished before the check falls
/// back to the file icon and stays in the list.
pub fn shape_hits(paths: &[String], resolver: &dyn IconResolver, cap: usize) -> Vec<SearchHit> {
    paths
        .iter()
        .take(cap)
        .map(|path| {
            let is_directory = Path::new(path).is_dir();
            let icon = if is_directory {
                resolver.folder_icon()
            } else {
                resolver.file_icon(path)
            };
            SearchHit {
                path: path.clone(),
                is_directory,
                icon,
            }
        })
        .collect()
}

/// Alternate action: open a terminal session rooted at the hit. Emulators
/// outside the recognized set get a no-op.
pub fn terminal_action(emulator: &str, hit: &SearchHit) -> Action {
    if !RECOGNIZED_TERMINALS.contains(&emulator) {
        return Action::DoNothing;
    }

    let working_dir = if hit.is_directory {
        hit.path.clone()
    } else {
        Path::new(&hit.path)
            .parent()
            .map(|parent| parent.to_string_lossy().into_owned())
            .unwrap_or_else(|| hit.path.clone())
    };

    Action::RunScript {
        command: emulator.to_string(),
        args: vec!["--working-directory".to_string(), working_dir],
    }
}

fn result_item(hit: SearchHit, preferences: &Preferences) -> ResultItem {
    let on_alt_enter = terminal_action(&preferences.terminal_emulator, &hit);
    ResultItem {
        icon: hit.icon,
        name: hit.path.clone(),
        on_enter: Action::OpenPath { path: hit.path },
        on_alt_enter,
    }
}
