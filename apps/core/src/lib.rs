pub mod action_executor;
pub mod config;
pub mod contract;
pub mod core_service;
pub mod fd_command;
pub mod fd_runner;
pub mod icons;
pub mod logging;
pub mod model;
pub mod preferences;
pub mod presenter;
pub mod runtime;
pub mod transport;
