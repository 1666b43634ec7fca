use crate::somelinalg::linsys_errors::LinSysError;
use simplelog::LevelFilter;
use toml::{Table, Value};

/// default convergence tolerance of the iterative methods
pub const TOL: f64 = 1e-6;
/// default cap on the number of sweeps of the iterative methods
pub const MAX_ITER: usize = 100;

/// Settings shared by all solvers. Only `tolerance` and `max_iterations` affect the numbers,
/// the rest controls logging, diagnostics and export.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub tolerance: f64,          // max abs change of a component between sweeps
    pub max_iterations: usize,   // sweeps cap
    pub loglevel: Option<String>, // off, none, debug, info, warn, error
    pub log_file: Option<String>,
    pub diagnostics: bool, // attach warnings about pivots, dominance, convergence to reports
    pub save_csv: Option<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: TOL,
            max_iterations: MAX_ITER,
            loglevel: None,
            log_file: None,
            diagnostics: true,
            save_csv: None,
        }
    }
}

impl SolverConfig {
    pub fn new() -> SolverConfig {
        SolverConfig::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// at least one sweep is always made, 0 is raised to 1
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn with_loglevel(mut self, loglevel: &str) -> Self {
        self.loglevel = Some(loglevel.to_string());
        self
    }

    pub fn with_log_file(mut self, log_file: &str) -> Self {
        self.log_file = Some(log_file.to_string());
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_csv(mut self, path: &str) -> Self {
        self.save_csv = Some(path.to_string());
        self
    }

    /// true when loglevel is "off" or "none"
    pub fn logging_disabled(&self) -> bool {
        self.loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false)
    }

    /// Maps the loglevel string to a filter; no level means Info.
    pub fn level_filter(&self) -> Result<LevelFilter, LinSysError> {
        match self.loglevel.as_deref() {
            None => Ok(LevelFilter::Info),
            Some("off") | Some("none") => Ok(LevelFilter::Off),
            Some("debug") => Ok(LevelFilter::Debug),
            Some("info") => Ok(LevelFilter::Info),
            Some("warn") => Ok(LevelFilter::Warn),
            Some("error") => Ok(LevelFilter::Error),
            Some(other) => Err(LinSysError::InvalidLogLevel(other.to_string())),
        }
    }

    /// Reads a `[solver]` table. Absent keys keep their defaults.
    pub fn from_toml_table(table: &Table) -> Result<SolverConfig, LinSysError> {
        let mut config = SolverConfig::default();
        for (key, value) in table {
            match key.as_str() {
                "tolerance" => config.tolerance = as_f64(key, value)?,
                "max_iterations" => {
                    let max_iter = value.as_integer().ok_or_else(|| {
                        LinSysError::TaskParse(format!("'{}' must be an integer", key))
                    })?;
                    if max_iter < 1 {
                        return Err(LinSysError::TaskParse(format!(
                            "'{}' must be positive, got {}",
                            key, max_iter
                        )));
                    }
                    config.max_iterations = max_iter as usize;
                }
                "loglevel" => config.loglevel = Some(as_string(key, value)?),
                "log_file" => config.log_file = Some(as_string(key, value)?),
                "save_csv" => config.save_csv = Some(as_string(key, value)?),
                "diagnostics" => {
                    config.diagnostics = value.as_bool().ok_or_else(|| {
                        LinSysError::TaskParse(format!("'{}' must be a boolean", key))
                    })?
                }
                other => {
                    return Err(LinSysError::TaskParse(format!(
                        "unknown solver option '{}'",
                        other
                    )));
                }
            }
        }
        if !(config.tolerance > 0.0) {
            return Err(LinSysError::TaskParse(format!(
                "tolerance must be positive, got {}",
                config.tolerance
            )));
        }
        config.level_filter()?;
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<SolverConfig, LinSysError> {
        let table: Table = s.parse()?;
        SolverConfig::from_toml_table(&table)
    }
}

/// integers are accepted where floats are expected: `tolerance = 1` is fine
pub(crate) fn as_f64(key: &str, value: &Value) -> Result<f64, LinSysError> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(LinSysError::TaskParse(format!("'{}' must be a number", key))),
    }
}

fn as_string(key: &str, value: &Value) -> Result<String, LinSysError> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| LinSysError::TaskParse(format!("'{}' must be a string", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 100);
        assert!(config.diagnostics);
        assert_eq!(config.level_filter(), Ok(LevelFilter::Info));
        assert!(!config.logging_disabled());
    }

    #[test]
    fn test_from_toml_str() {
        let s = r#"
            tolerance = 1e-10
            max_iterations = 500
            loglevel = "warn"
            diagnostics = false
        "#;
        let config = SolverConfig::from_toml_str(s).unwrap();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.level_filter(), Ok(LevelFilter::Warn));
        assert!(!config.diagnostics);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_bad_options() {
        assert!(SolverConfig::from_toml_str("tolerance = \"small\"").is_err());
        assert!(SolverConfig::from_toml_str("max_iterations = 0").is_err());
        assert!(SolverConfig::from_toml_str("tolerance = -1.0").is_err());
        assert!(SolverConfig::from_toml_str("speed = 3").is_err());
        assert_eq!(
            SolverConfig::from_toml_str("loglevel = \"loud\""),
            Err(LinSysError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_logging_off() {
        let config = SolverConfig::new().with_loglevel("none");
        assert!(config.logging_disabled());
        assert_eq!(config.level_filter(), Ok(LevelFilter::Off));
    }
}
