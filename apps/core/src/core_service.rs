use std::collections::HashMap;
use std::path::PathBuf;

use crate::action_executor::{self, LaunchError};
use crate::config::{validate, Config};
use crate::contract::{
    Action, ActivatedResponse, CoreRequest, CoreResponse, PreferencesUpdatedResponse, QueryEvent,
    RenderInstruction,
};
use crate::fd_command::{SearchPattern, SearchRequest};
use crate::fd_runner::{FdRunner, SearchRunner, SearchToolError};
use crate::icons::{IconResolver, ThemeIconResolver};
use crate::logging;
use crate::model::SearchMode;
use crate::preferences::{KeywordBinding, KeywordMap, Preferences};
use crate::presenter;

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Launch(LaunchError),
    InvalidRequest(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Launch(error) => write!(f, "launch error: {error}"),
            Self::InvalidRequest(message) => write!(f, "invalid request: {message}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<LaunchError> for ServiceError {
    fn from(value: LaunchError) -> Self {
        Self::Launch(value)
    }
}

pub struct CoreService {
    config: Config,
    preferences: Preferences,
    keyword_map: KeywordMap,
    runner: Box<dyn SearchRunner>,
    icons: Box<dyn IconResolver>,
}

impl CoreService {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        Self::with_parts(
            config,
            Box::new(FdRunner),
            Box::new(ThemeIconResolver::from_environment()),
        )
    }

    pub fn with_parts(
        config: Config,
        runner: Box<dyn SearchRunner>,
        icons: Box<dyn IconResolver>,
    ) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        let preferences = Preferences::from_map(&config.preference_map());
        let keyword_map = KeywordMap::from_preferences(&preferences);
        Ok(Self {
            config,
            preferences,
            keyword_map,
            runner,
            icons,
        })
    }

    /// The end-to-end query pipeline. Never fails upward: every tool error
    /// is logged and degrades to the no-results item.
    pub fn handle_query(&self, event: &QueryEvent) -> RenderInstruction {
        let query = event.argument.trim();
        if query.chars().count() < presenter::MIN_QUERY_CHARS {
            return presenter::keep_typing_instruction();
        }

        let binding = self.resolve_binding(&event.keyword);
        let request = self.search_request(query, binding);
        let lines = match self.runner.run(&request) {
            Ok(lines) => lines,
            Err(error) => {
                log_search_failure(&error);
                Vec::new()
            }
        };

        presenter::present(
            query,
            &lines,
            &self.preferences,
            self.icons.as_ref(),
            self.config.max_results as usize,
        )
    }

    /// Replaces the preferences snapshot the host pushed.
    pub fn update_preferences(&mut self, map: &HashMap<String, String>) {
        self.preferences = Preferences::from_map(map);
        self.keyword_map = KeywordMap::from_preferences(&self.preferences);
    }

    /// Executes an action the host echoed back after the user picked a
    /// result item.
    pub fn activate(&self, action: &Action) -> Result<(), ServiceError> {
        match action {
            Action::OpenPath { path } => action_executor::open_path(path).map_err(ServiceError::from),
            Action::RunScript { command, args } => {
                if command.trim().is_empty() {
                    return Err(ServiceError::InvalidRequest(
                        "run script command is empty".to_string(),
                    ));
                }
                action_executor::run_script(command, args).map_err(ServiceError::from)
            }
            Action::HideWindow | Action::DoNothing => Ok(()),
        }
    }

    pub fn handle_command(&mut self, request: CoreRequest) -> Result<CoreResponse, ServiceError> {
        match request {
            CoreRequest::Query(event) => Ok(CoreResponse::Render(self.handle_query(&event))),
            CoreRequest::UpdatePreferences(update) => {
                self.update_preferences(&update.preferences);
                Ok(CoreResponse::PreferencesUpdated(
                    PreferencesUpdatedResponse { updated: true },
                ))
            }
            CoreRequest::Activate(activate) => {
                self.activate(&activate.action)?;
                Ok(CoreResponse::Activated(ActivatedResponse {
                    activated: true,
                }))
            }
        }
    }

    fn resolve_binding(&self, keyword: &str) -> KeywordBinding {
        match self.keyword_map.resolve(keyword) {
            Some(binding) => binding,
            None => {
                logging::warn(&format!(
                    "keyword '{keyword}' has no binding; searching all entries"
                ));
                KeywordBinding {
                    mode: SearchMode::All,
                    append_extension: false,
                }
            }
        }
    }

    fn search_request(&self, query: &str, binding: KeywordBinding) -> SearchRequest {
        SearchRequest {
            pattern: SearchPattern::from_query(query, binding.append_extension),
            mode: binding.mode,
            base_dir: PathBuf::from(&self.preferences.base_dir),
            ignored_folders: self.preferences.ignored_folders.clone(),
            ignored_files: self.preferences.ignored_files.clone(),
        }
    }
}

fn log_search_failure(error: &SearchToolError) {
    match error {
        SearchToolError::Launch(cause) => {
            logging::error(&format!("search tool failed to launch: {cause}"));
        }
        SearchToolError::Timeout => {
            logging::warn("search timed out; returning no results");
        }
        SearchToolError::Diagnostic(message) => {
            logging::error(&format!("search tool stderr: {message}"));
        }
    }
}
