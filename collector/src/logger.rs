use chrono::Local;
use env_logger::fmt::Formatter;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter, Record};
use std::io::{self, Write};

/// Library crates of this workspace; `--verbose` lowers their level to debug, as for the
/// binary itself.
const WORKSPACE_TARGETS: [&str; 3] = ["recorder_rs", "sensors_rs", "publisher"];

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m\x1b[1m",
        Level::Warn => "\x1b[33m\x1b[1m",
        Level::Info => "\x1b[32m\x1b[1m",
        Level::Debug => "\x1b[36m\x1b[1m",
        Level::Trace => "\x1b[90m\x1b[1m",
    }
}

/// `recorder_rs::session::manager` -> `recorder_rs`
fn short_target(target: &str) -> &str {
    target.split("::").next().unwrap_or(target)
}

fn format_record(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} {}{:<5}\x1b[0m {:<11} {}",
        Local::now().format("%H:%M:%S%.3f"),
        level_color(record.level()),
        record.level(),
        short_target(record.target()),
        record.args(),
    )
}

/// Installs the global logger. Workspace crates log at info, or debug with `verbose`
/// (which includes the live values). Dependencies log warnings only. `RUST_LOG` overrides
/// both.
pub fn init_logger(verbose: bool) {
    let workspace_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.filter_module(short_target(module_path!()), workspace_level);
    for target in WORKSPACE_TARGETS {
        builder.filter_module(target, workspace_level);
    }
    builder
        .parse_env(Env::default())
        .format(format_record)
        .init();
}
