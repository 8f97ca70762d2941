//! Apparel size sorter CLI.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use sizes_cli::cli::{Cli, Command, LogFormatArg};
use sizes_cli::commands::{run_classify, run_index, run_normalize, run_sort};
use sizes_cli::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match &cli.command {
        Command::Sort(args) => match run_sort(args) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Index(args) => {
            println!("{}", run_index(args));
            0
        }
        Command::Normalize(args) => {
            println!("{}", run_normalize(args));
            0
        }
        Command::Classify(args) => match run_classify(args) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    if config.level_filter == LevelFilter::OFF {
        config.use_env_filter = false;
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        clap::ColorChoice::Always => true,
        clap::ColorChoice::Never => false,
        clap::ColorChoice::Auto => {
            use std::io::IsTerminal;
            std::io::stderr().is_terminal()
        }
    };
    config
}
