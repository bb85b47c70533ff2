use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use flexi_logger::{DeferredNow, Level, Logger, Record};
use once_cell::sync::Lazy;
use std::{io::Write, ops::Deref};

pub fn configure_for_cli(verbose: bool) -> Result<()> {
    Logger::try_with_env_or_str(if verbose { "debug" } else { "warn" })?
        .log_to_stderr()
        .format_for_stderr(cli_format)
        .start()
        .map(|_handle| ())
        .context("Could not initialise logging to stderr")
}

fn cli_format(
    writer: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record<'_>,
) -> std::io::Result<()> {
    let level = match record.level() {
        Level::Debug => LOG_PREFIX_DEBUG.deref(),
        Level::Info => LOG_PREFIX_INFO.deref(),
        Level::Warn => LOG_PREFIX_WARN.deref(),
        Level::Error => LOG_PREFIX_ERROR.deref(),
        Level::Trace => LOG_PREFIX_TRACE.deref(),
    };

    write!(writer, "{}{}", level, record.args())
}

pub static LOG_PREFIX_INFO: Lazy<ColoredString> = Lazy::new(|| "I ".normal());
pub static LOG_PREFIX_DEBUG: Lazy<ColoredString> = Lazy::new(|| "D ".dimmed());
pub static LOG_PREFIX_WARN: Lazy<ColoredString> = Lazy::new(|| "W ".yellow().bold());
pub static LOG_PREFIX_ERROR: Lazy<ColoredString> = Lazy::new(|| "E ".red().bold());
pub static LOG_PREFIX_TRACE: Lazy<ColoredString> = Lazy::new(|| "T ".normal());
