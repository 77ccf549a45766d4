use std::path::PathBuf;
use std::process::ExitCode;

use clap::{crate_authors, crate_version};

use swand::config::{ConfigError, LogLevel, RuntimeConfig};
use swand::error::ExitError;
use swand::log::Logger;
use swand::state_db::StateRegistry;

fn run() -> Result<(), ExitError> {
    let cmd = clap::Command::new("swand")
        .version(crate_version!())
        .author(crate_authors!())
        .next_line_help(true)
        .arg(
            clap::Arg::new("config")
                .long("config")
                .value_name("PATH")
                .default_value("/etc/swand.toml")
                .help("Path to swand's own runtime configuration file"),
        )
        .arg(
            clap::Arg::new("ipsec_conf")
                .long("ipsec-conf")
                .value_name("PATH")
                .help("Override the ipsec.conf-style file named in the runtime configuration"),
        )
        .arg(
            clap::Arg::new("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["trace", "debug", "info", "warning", "error"])
                .help("Override the configured log level"),
        )
        .arg(
            clap::Arg::new("check_config")
                .long("check-config")
                .action(clap::ArgAction::SetTrue)
                .help("Load and validate the configuration, then exit without running"),
        );
    let matches = cmd.get_matches();

    let config_path: &str = matches.get_one::<String>("config").expect("has a default");
    let mut config = RuntimeConfig::load(PathBuf::from(config_path).as_path())?;

    if let Some(path) = matches.get_one::<String>("ipsec_conf") {
        config.ipsec_conf = PathBuf::from(path);
    }
    if let Some(level) = matches.get_one::<String>("log_level") {
        config.logging.level = match level.as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => unreachable!("restricted by value_parser"),
        };
    }

    let logger = Logger::launch(&config.logging).map_err(ExitError::Logging)?;
    let _ = logger;

    let text = std::fs::read_to_string(&config.ipsec_conf).map_err(|source| {
        ExitError::Config(ConfigError::Read { path: config.ipsec_conf.clone(), source })
    })?;
    let raw = swand_cfg::lex::lex(&text)
        .map_err(|source| ExitError::Lex { path: config.ipsec_conf.clone(), source })?;
    let file = swand_cfg::assemble(&config.ipsec_conf.display().to_string(), &raw)
        .map_err(|source| ExitError::Parse { path: config.ipsec_conf.clone(), source })?;

    tracing::info!(connections = file.connections.len(), "parsed ipsec.conf");

    if matches.get_flag("check_config") {
        return Ok(());
    }

    let registry: StateRegistry<()> = StateRegistry::new();
    tracing::info!(states = registry.len(), "swand started");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("swand: {error}");
            ExitCode::FAILURE
        }
    }
}
