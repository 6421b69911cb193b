use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::core_service::{CoreService, ServiceError};
use crate::logging;
use crate::transport;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

pub fn parse_cli_args(args: &[String]) -> Result<RuntimeOptions, String> {
    let mut options = RuntimeOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

pub fn run_with_options(options: RuntimeOptions) -> Result<(), RuntimeError> {
    let config = config::load(options.config_path.as_deref())?;
    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[pathseek-core] wrote default config to {}",
            config.config_path.display()
        );
    }

    if let Err(error) = logging::init() {
        eprintln!("[pathseek-core] logging unavailable: {error}");
    }

    println!(
        "[pathseek-core] startup base_dir={} max_results={} config_path={}",
        config.base_dir,
        config.max_results,
        config.config_path.display(),
    );

    let mut service = CoreService::new(config)?;
    logging::info("runtime started");
    println!("[pathseek-core] event loop running (json lines on stdio)");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&mut service, stdin.lock(), stdout.lock())
}

/// Reads one JSON request per line and writes one JSON response line per
/// request until EOF. Blank lines are skipped.
pub fn serve<R: BufRead, W: Write>(
    service: &mut CoreService,
    reader: R,
    mut writer: W,
) -> Result<(), RuntimeError> {
    for line in reader.lines() {
        let line = line.map_err(RuntimeError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = transport::handle_json(service, &line);
        writeln!(writer, "{reply}").map_err(RuntimeError::Io)?;
    }

    Ok(())
}
