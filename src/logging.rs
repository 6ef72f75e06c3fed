use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Stdout, through the test harness's output capture.
    CapturedStdout,
}

/// Starts logging with a compact `HH:MM:SS [L] message` format. `RUST_LOG`
/// overrides `default_spec`. Keep the returned handle alive for as long as
/// logging is needed.
pub fn init_logger(
    default_spec: &str,
    target: LogTarget,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(default_spec)?;
    let logger = match target {
        LogTarget::Stderr => logger.log_to_stderr(),
        LogTarget::CapturedStdout => logger.write_mode(WriteMode::SupportCapture).log_to_stdout(),
    };
    logger
        .set_palette("196;208;3;7;8".to_owned())
        .format(|w, now, record| {
            let style = flexi_logger::style(record.level());
            write!(
                w,
                "{} {pref}[{}] {}{suf}",
                now.format("%H:%M:%S"),
                &record.level().as_str()[0..1],
                record.args(),
                pref = style.prefix(),
                suf = style.suffix(),
            )
        })
        .start()
}
