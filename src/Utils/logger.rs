use crate::somelinalg::linsys_errors::LinSysError;
use crate::somelinalg::solver_config::SolverConfig;
use chrono::Local;
use simplelog::*;
use std::fs::File;

/// file name used when `log_file = "auto"`
pub fn default_log_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Sets up terminal logging (and file logging when `log_file` is given) at the configured level.
/// Terminal output goes to stderr, stdout is left to the report.
/// Returns Ok(false) when logging is switched off or a global logger already exists.
pub fn init_logger(config: &SolverConfig) -> Result<bool, LinSysError> {
    if config.logging_disabled() {
        return Ok(false);
    }
    let level = config.level_filter()?;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(name) = &config.log_file {
        let name = if name == "auto" {
            default_log_name()
        } else {
            name.clone()
        };
        let file = File::create(&name)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    // only the first logger of the process wins, later calls just keep it
    Ok(CombinedLogger::init(loggers).is_ok())
}
