//! `gen-stringify`: build-time generator of SDK value-to-name lookups.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use stringify_cli::config::{ConfigFile, ConfigOverrides, GeneratorConfig, header_dir_from_env};
use stringify_cli::logging::{LogConfig, init_logging};
use stringify_cli::pipeline::{GenerateResult, RunMode, run};

mod cli;
mod summary;

use crate::cli::Cli;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match generate(&cli) {
        Ok(result) => {
            print_summary(&result);
            if result.is_out_of_date() { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn generate(cli: &Cli) -> Result<GenerateResult> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let overrides = ConfigOverrides {
        header_dir: cli.header_dir.clone(),
        output: cli.output.clone(),
        template: cli.template.clone(),
    };
    let config = GeneratorConfig::resolve(file, header_dir_from_env(), overrides)?;
    let mode = if cli.check {
        RunMode::Check
    } else {
        RunMode::Write
    };
    run(&config, mode)
}

/// `--log-level` wins over `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), Into::into),
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
