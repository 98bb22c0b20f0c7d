// Logging setup for host binaries.
//
// The library itself only emits through the `log` facade; a front end that
// wants to see those records calls `init` once at startup.
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Initializes terminal logging at the given level.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}
