use anyhow::Context;
use backtrace::Backtrace;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, error};

use std::path::PathBuf;
use std::sync::Arc;

mod catalog;
mod config;
mod exposition;
mod extract;
mod snapshot;
mod source;

use catalog::FIELDS;
use config::{Config, Level};
use exposition::http::AppState;
use source::{CommandSource, ReportSource, StaticSource};

fn main() {
    // custom panic hook to terminate whole process after unwinding
    std::panic::set_hook(Box::new(|s| {
        eprintln!("{s}");
        eprintln!("{:?}", Backtrace::new());
        std::process::exit(101);
    }));

    let matches = command().get_matches();

    let config = match load_config(&matches) {
        Ok(c) => c,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.log().level()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(config, &matches) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn command() -> Command {
    Command::new(env!("CARGO_BIN_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_about(
            "Exports Open vSwitch userspace datapath statistics (PMD stats, drop \
             reasons and DOCA offload counters) on a Prometheus compatible endpoint.",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Exporter configuration file")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .index(1),
        )
        .arg(
            Arg::new("LISTEN")
                .long("listen")
                .help("Address to listen on, overrides the config file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("PATH")
                .long("path")
                .help("URL path exposing the metrics, overrides the config file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("ONCE")
                .long("once")
                .help("Collect once, print the exposition to stdout and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("PMD_STATS_FILE")
                .long("pmd-stats-file")
                .help("Read the PMD stats report from a file instead of running ovs-appctl")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("COVERAGE_FILE")
                .long("coverage-file")
                .help("Read the coverage report from a file instead of running ovs-appctl")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("VERBOSE")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity")
                .action(ArgAction::Count),
        )
}

fn load_config(matches: &ArgMatches) -> Result<Config, config::ConfigError> {
    let mut config = match matches.get_one::<PathBuf>("CONFIG") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let level = match matches.get_count("VERBOSE") {
        0 => None,
        1 => Some(Level::Debug),
        _ => Some(Level::Trace),
    };

    config.apply_overrides(
        matches.get_one::<String>("LISTEN").map(String::as_str),
        matches.get_one::<String>("PATH").map(String::as_str),
        level,
    )?;

    Ok(config)
}

fn run(config: Config, matches: &ArgMatches) -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("ovsdp-exporter")
        .build()?;

    ctrlc::set_handler(move || {
        std::process::exit(2);
    })?;

    catalog::compile_patterns(&FIELDS);

    let source = report_source(&config, matches)?;
    let state = Arc::new(AppState::new(&FIELDS, source));

    if matches.get_flag("ONCE") {
        let body = rt.block_on(state.render());
        print!("{body}");
        return Ok(());
    }

    let listen = config.general().listen()?;
    let path = config.general().path().to_string();

    rt.block_on(exposition::http::serve(listen, &path, state))
}

/// Reports come from files when either file option is given, otherwise from
/// the configured commands.
fn report_source(config: &Config, matches: &ArgMatches) -> anyhow::Result<Box<dyn ReportSource>> {
    let pmd_stats = matches.get_one::<PathBuf>("PMD_STATS_FILE");
    let coverage = matches.get_one::<PathBuf>("COVERAGE_FILE");

    if pmd_stats.is_none() && coverage.is_none() {
        debug!("pmd stats command: {:?}", config.reports().pmd_stats());
        debug!("coverage command: {:?}", config.reports().coverage());

        return Ok(Box::new(CommandSource::new(
            config.reports().pmd_stats().to_vec(),
            config.reports().coverage().to_vec(),
        )));
    }

    let read = |path: Option<&PathBuf>| -> anyhow::Result<String> {
        match path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read report file {path:?}")),
            None => Ok(String::new()),
        }
    };

    Ok(Box::new(StaticSource::new(read(pmd_stats)?, read(coverage)?)))
}
