//! Reads a task file describing one linear system and the method to solve it with:
//! ```toml
//! [system]
//! matrix = [[4.0, 1.0], [2.0, 3.0]]
//! rhs = [1.0, 2.0]
//! method = 5
//!
//! [solver]
//! tolerance = 1e-6
//! max_iterations = 100
//! loglevel = "info"
//! ```
//! `[solver]` is optional, missing keys keep their defaults.
use crate::somelinalg::LinSys_api::LinearSystem;
use crate::somelinalg::linsys_errors::{LinSysError, check_system};
use crate::somelinalg::solver_config::{SolverConfig, as_f64};
use nalgebra::{DMatrix, DVector};
use std::fs;
use std::path::Path;
use toml::{Table, Value};

#[derive(Debug, Clone)]
pub struct LinSysTask {
    pub A: DMatrix<f64>,
    pub b: DVector<f64>,
    /// menu number; out-of-range values are kept, the dispatcher reports them
    pub selector: i64,
    pub config: SolverConfig,
}

impl LinSysTask {
    pub fn from_toml_str(s: &str) -> Result<LinSysTask, LinSysError> {
        let doc: Table = s.parse()?;
        let system = doc
            .get("system")
            .and_then(|v| v.as_table())
            .ok_or_else(|| LinSysError::TaskParse("missing [system] section".to_string()))?;

        let A = parse_matrix(get(system, "matrix")?)?;
        let b = DVector::from_vec(parse_row(get(system, "rhs")?, "rhs")?);
        check_system(&A, &b)?;
        let selector = get(system, "method")?
            .as_integer()
            .ok_or_else(|| LinSysError::TaskParse("'method' must be an integer".to_string()))?;

        let config = match doc.get("solver") {
            Some(Value::Table(solver)) => SolverConfig::from_toml_table(solver)?,
            Some(_) => {
                return Err(LinSysError::TaskParse(
                    "[solver] must be a table".to_string(),
                ));
            }
            None => SolverConfig::default(),
        };
        Ok(LinSysTask {
            A,
            b,
            selector,
            config,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<LinSysTask, LinSysError> {
        let content = fs::read_to_string(path)?;
        LinSysTask::from_toml_str(&content)
    }

    pub fn into_system(self) -> (LinearSystem, i64) {
        (LinearSystem::new(self.A, self.b, self.config), self.selector)
    }
}

fn get<'a>(table: &'a Table, key: &str) -> Result<&'a Value, LinSysError> {
    table
        .get(key)
        .ok_or_else(|| LinSysError::TaskParse(format!("missing '{}'", key)))
}

fn parse_row(value: &Value, key: &str) -> Result<Vec<f64>, LinSysError> {
    let arr = value
        .as_array()
        .ok_or_else(|| LinSysError::TaskParse(format!("'{}' must be an array", key)))?;
    arr.iter().map(|v| as_f64(key, v)).collect()
}

/// array of rows, all of the same length
fn parse_matrix(value: &Value) -> Result<DMatrix<f64>, LinSysError> {
    let rows = value
        .as_array()
        .ok_or_else(|| LinSysError::TaskParse("'matrix' must be an array of rows".to_string()))?;
    let mut data = Vec::new();
    let mut ncols = None;
    for (i, row) in rows.iter().enumerate() {
        let row = parse_row(row, "matrix")?;
        match ncols {
            None => ncols = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(LinSysError::TaskParse(format!(
                    "row {} of 'matrix' has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            _ => {}
        }
        data.extend(row);
    }
    Ok(DMatrix::from_row_slice(rows.len(), ncols.unwrap_or(0), &data))
}
