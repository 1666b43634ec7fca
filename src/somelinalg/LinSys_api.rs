//! Single entry point for the five solvers.
//! ```
//! use RustedLinSys::somelinalg::LinSys_api::{LinearSystem, LinSysMethod};
//! use RustedLinSys::somelinalg::solver_config::SolverConfig;
//! use nalgebra::{DMatrix, DVector};
//! let A = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
//! let b = DVector::from_vec(vec![1.0, 2.0]);
//! let system = LinearSystem::new(A, b, SolverConfig::default().with_loglevel("off"));
//! // integer selector 1..5 like the menu
//! let report = system.run_selection(3).unwrap();
//! assert_eq!(report.to_string(), "Solution by Gauss Elimination: 0.1 0.6 \n");
//! // or the enum directly
//! let report = system.solve(LinSysMethod::LU).unwrap();
//! let x = report.solution().unwrap();
//! assert!((x[1] - 0.6).abs() < 1e-12);
//! ```
use crate::Utils::logger::init_logger;
use crate::Utils::pretty_print::{format_grid, format_values};
use crate::Utils::results_io::{save_matrix_to_csv, save_solution_to_csv, suffixed_path};
use crate::somelinalg::LUsolver::{LUFactorization, lu_factorization};
use crate::somelinalg::gauss_elimination::{gauss_elimination, gauss_jordan_elimination};
use crate::somelinalg::iterative_solvers_cpu::{IterationOutcome, gauss_seidel, jacobi};
use crate::somelinalg::linear_sys_diagnostics::{
    Diagnostic, direct_diagnostics, iterative_diagnostics, residual_norm,
};
use crate::somelinalg::linsys_errors::{LinSysError, check_system};
use crate::somelinalg::solver_config::SolverConfig;
use log::info;
use nalgebra::{DMatrix, DVector};
use std::fmt;
use std::time::Instant;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tabled::{builder::Builder, settings::Style};

pub const INVALID_CHOICE: &str = "Invalid choice. Please select a valid method.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum LinSysMethod {
    Jacobi,
    GaussSeidel,
    GaussElimination,
    GaussJordan,
    LU,
}

impl LinSysMethod {
    /// menu number 1..5 -> method, anything else is None
    pub fn from_selector(selector: i64) -> Option<LinSysMethod> {
        match selector {
            1 => Some(LinSysMethod::Jacobi),
            2 => Some(LinSysMethod::GaussSeidel),
            3 => Some(LinSysMethod::GaussElimination),
            4 => Some(LinSysMethod::GaussJordan),
            5 => Some(LinSysMethod::LU),
            _ => None,
        }
    }

    pub fn selector(&self) -> i64 {
        match self {
            LinSysMethod::Jacobi => 1,
            LinSysMethod::GaussSeidel => 2,
            LinSysMethod::GaussElimination => 3,
            LinSysMethod::GaussJordan => 4,
            LinSysMethod::LU => 5,
        }
    }

    /// name as shown in the menu
    pub fn name(&self) -> &'static str {
        match self {
            LinSysMethod::Jacobi => "Jacobi Iterative Method",
            LinSysMethod::GaussSeidel => "Gauss-Seidel Iterative Method",
            LinSysMethod::GaussElimination => "Gauss Elimination",
            LinSysMethod::GaussJordan => "Gauss-Jordan Elimination",
            LinSysMethod::LU => "LU Factorization",
        }
    }

    /// prefix of the solution line
    pub fn label(&self) -> &'static str {
        match self {
            LinSysMethod::Jacobi => "Solution by Jacobi Method: ",
            LinSysMethod::GaussSeidel => "Solution by Gauss-Seidel Method: ",
            LinSysMethod::GaussElimination => "Solution by Gauss Elimination: ",
            LinSysMethod::GaussJordan => "Solution by Gauss-Jordan Elimination: ",
            LinSysMethod::LU => "Solution Matrix X:",
        }
    }

    pub fn is_iterative(&self) -> bool {
        matches!(self, LinSysMethod::Jacobi | LinSysMethod::GaussSeidel)
    }

    /// menu text of the interactive program, byte for byte (double space and
    /// trailing blanks after the iterative entries included)
    pub fn menu() -> String {
        let mut menu = String::from("Choose a method to solve the  linear system:\n");
        for method in LinSysMethod::iter() {
            let pad = if method.is_iterative() { " " } else { "" };
            menu.push_str(&format!("{}. {}{}\n", method.selector(), method.name(), pad));
        }
        menu
    }
}

/// Result of one solver call, `Display` prints it in the report format.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverReport {
    Solution {
        method: LinSysMethod,
        x: DVector<f64>,
        /// only for the iterative methods
        outcome: Option<IterationOutcome>,
        residual: f64,
        diagnostics: Vec<Diagnostic>,
    },
    Factorization {
        lu: LUFactorization,
        residual: f64,
        diagnostics: Vec<Diagnostic>,
    },
    InvalidChoice,
}

impl SolverReport {
    pub fn solution(&self) -> Option<&DVector<f64>> {
        match self {
            SolverReport::Solution { x, .. } => Some(x),
            SolverReport::Factorization { lu, .. } => Some(&lu.x),
            SolverReport::InvalidChoice => None,
        }
    }

    pub fn method(&self) -> Option<LinSysMethod> {
        match self {
            SolverReport::Solution { method, .. } => Some(*method),
            SolverReport::Factorization { .. } => Some(LinSysMethod::LU),
            SolverReport::InvalidChoice => None,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            SolverReport::Solution { diagnostics, .. }
            | SolverReport::Factorization { diagnostics, .. } => diagnostics,
            SolverReport::InvalidChoice => &[],
        }
    }

    pub fn residual(&self) -> Option<f64> {
        match self {
            SolverReport::Solution { residual, .. }
            | SolverReport::Factorization { residual, .. } => Some(*residual),
            SolverReport::InvalidChoice => None,
        }
    }
}

impl fmt::Display for SolverReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverReport::Solution { method, x, .. } => {
                writeln!(f, "{}{}", method.label(), format_values(x.iter()))
            }
            SolverReport::Factorization { lu, .. } => {
                writeln!(f, "Lower Matrix L:")?;
                write!(f, "{}", format_grid(&lu.l))?;
                writeln!(f, "\nUpper Matrix U:")?;
                write!(f, "{}", format_grid(&lu.u))?;
                writeln!(f, "\nY matrix:")?;
                writeln!(f, "{}", format_values(lu.y.iter()))?;
                writeln!(f, "\n{}", LinSysMethod::LU.label())?;
                writeln!(f, "{}", format_values(lu.x.iter()))
            }
            SolverReport::InvalidChoice => writeln!(f, "{}", INVALID_CHOICE),
        }
    }
}

/// A = matrix of coefficients, b = right-hand side. Nothing here mutates them:
/// every call works on its own copies or fresh buffers.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub A: DMatrix<f64>,
    pub b: DVector<f64>,
    pub config: SolverConfig,
}

impl LinearSystem {
    pub fn new(A: DMatrix<f64>, b: DVector<f64>, config: SolverConfig) -> LinearSystem {
        LinearSystem { A, b, config }
    }

    pub fn n(&self) -> usize {
        self.b.len()
    }

    /// wrapper around `run_selection` that first sets up logging from the config
    pub fn run_with_logging(&self, selector: i64) -> Result<SolverReport, LinSysError> {
        let logger_started = init_logger(&self.config)?;
        let res = self.run_selection(selector);
        if logger_started {
            info!(" \n \n Program ended");
        }
        res
    }

    /// Menu-style dispatch: selectors outside 1..5 give `SolverReport::InvalidChoice`
    /// without computing anything.
    pub fn run_selection(&self, selector: i64) -> Result<SolverReport, LinSysError> {
        match LinSysMethod::from_selector(selector) {
            Some(method) => self.solve(method),
            None => {
                info!("selector {} does not name a method", selector);
                Ok(SolverReport::InvalidChoice)
            }
        }
    }

    pub fn solve(&self, method: LinSysMethod) -> Result<SolverReport, LinSysError> {
        let n = check_system(&self.A, &self.b)?;
        info!("solving {}x{} system with {}", n, n, method.name());
        let begin = Instant::now();
        let report = match method {
            LinSysMethod::Jacobi | LinSysMethod::GaussSeidel => {
                // initial guess is zero
                let mut x = DVector::zeros(n);
                let outcome = if method == LinSysMethod::Jacobi {
                    jacobi(&self.A, &self.b, &mut x, &self.config)?
                } else {
                    gauss_seidel(&self.A, &self.b, &mut x, &self.config)?
                };
                let diagnostics = if self.config.diagnostics {
                    iterative_diagnostics(&self.A, &x, &outcome)
                } else {
                    Vec::new()
                };
                SolverReport::Solution {
                    method,
                    residual: residual_norm(&self.A, &x, &self.b),
                    x,
                    outcome: Some(outcome),
                    diagnostics,
                }
            }
            LinSysMethod::GaussElimination | LinSysMethod::GaussJordan => {
                let sol = if method == LinSysMethod::GaussElimination {
                    gauss_elimination(&self.A, &self.b)?
                } else {
                    gauss_jordan_elimination(&self.A, &self.b)?
                };
                let diagnostics = if self.config.diagnostics {
                    direct_diagnostics(&sol.pivots, &sol.x)
                } else {
                    Vec::new()
                };
                SolverReport::Solution {
                    method,
                    residual: residual_norm(&self.A, &sol.x, &self.b),
                    x: sol.x,
                    outcome: None,
                    diagnostics,
                }
            }
            LinSysMethod::LU => {
                let lu = lu_factorization(&self.A, self.b.clone())?;
                let diagnostics = if self.config.diagnostics {
                    direct_diagnostics(&lu.pivots(), &lu.x)
                } else {
                    Vec::new()
                };
                SolverReport::Factorization {
                    residual: residual_norm(&self.A, &lu.x, &self.b),
                    lu,
                    diagnostics,
                }
            }
        };
        let elapsed = begin.elapsed();
        self.calc_statistics(&report, elapsed.as_micros());
        if let Some(path) = &self.config.save_csv {
            save_report(&report, path)?;
        }
        Ok(report)
    }

    /// Runs every method on the same system, in menu order.
    pub fn solve_all(&self) -> Result<Vec<SolverReport>, LinSysError> {
        LinSysMethod::iter().map(|m| self.solve(m)).collect()
    }

    /// max over all components of the spread between the methods' solutions
    pub fn max_disagreement(reports: &[SolverReport]) -> f64 {
        let solutions: Vec<&DVector<f64>> = reports.iter().filter_map(|r| r.solution()).collect();
        let mut spread = 0.0_f64;
        for (k, x) in solutions.iter().enumerate() {
            for y in solutions.iter().skip(k + 1) {
                let d = (*x - *y).amax();
                spread = if d.is_nan() { f64::NAN } else { spread.max(d) };
            }
        }
        spread
    }

    fn calc_statistics(&self, report: &SolverReport, elapsed_micros: u128) {
        let mut builder = Builder::default();
        builder.push_record(["parameter", "value"]);
        if let Some(method) = report.method() {
            builder.push_record(["method".to_string(), method.name().to_string()]);
        }
        builder.push_record(["n".to_string(), self.n().to_string()]);
        if let SolverReport::Solution {
            outcome: Some(outcome),
            ..
        } = report
        {
            builder.push_record(["iterations".to_string(), outcome.iterations.to_string()]);
            builder.push_record(["converged".to_string(), outcome.converged.to_string()]);
        }
        if let Some(residual) = report.residual() {
            builder.push_record(["residual (max norm)".to_string(), format!("{:e}", residual)]);
        }
        builder.push_record([
            "warnings".to_string(),
            report.diagnostics().len().to_string(),
        ]);
        builder.push_record(["elapsed, us".to_string(), elapsed_micros.to_string()]);
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
    }
}

/// Solution goes to `path`; for LU the factors go next to it as `<stem>_L.csv`, `<stem>_U.csv`.
fn save_report(report: &SolverReport, path: &str) -> Result<(), LinSysError> {
    match report {
        SolverReport::Solution { x, .. } => save_solution_to_csv(x, path)?,
        SolverReport::Factorization { lu, .. } => {
            save_solution_to_csv(&lu.x, path)?;
            save_matrix_to_csv(&lu.l, suffixed_path(path, "L"))?;
            save_matrix_to_csv(&lu.u, suffixed_path(path, "U"))?;
        }
        SolverReport::InvalidChoice => return Ok(()),
    }
    info!("result saved to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> LinearSystem {
        let A = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        LinearSystem::new(A, b, SolverConfig::default())
    }

    #[test]
    fn test_selectors() {
        for method in LinSysMethod::iter() {
            assert_eq!(LinSysMethod::from_selector(method.selector()), Some(method));
        }
        assert_eq!(LinSysMethod::from_selector(0), None);
        assert_eq!(LinSysMethod::from_selector(6), None);
        assert_eq!(LinSysMethod::from_selector(-1), None);
    }

    #[test]
    fn test_menu() {
        assert_eq!(
            LinSysMethod::menu(),
            "Choose a method to solve the  linear system:\n\
             1. Jacobi Iterative Method \n\
             2. Gauss-Seidel Iterative Method \n\
             3. Gauss Elimination\n\
             4. Gauss-Jordan Elimination\n\
             5. LU Factorization\n"
        );
    }

    #[test]
    fn test_reports_text() {
        let system = example();
        assert_eq!(
            system.run_selection(1).unwrap().to_string(),
            // stops 6e-8 short of 0.1, visible at 6 significant digits
            "Solution by Jacobi Method: 0.0999999 0.6 \n"
        );
        assert_eq!(
            system.run_selection(2).unwrap().to_string(),
            "Solution by Gauss-Seidel Method: 0.1 0.6 \n"
        );
        assert_eq!(
            system.run_selection(3).unwrap().to_string(),
            "Solution by Gauss Elimination: 0.1 0.6 \n"
        );
        assert_eq!(
            system.run_selection(4).unwrap().to_string(),
            "Solution by Gauss-Jordan Elimination: 0.1 0.6 \n"
        );
        assert_eq!(
            system.run_selection(9).unwrap().to_string(),
            "Invalid choice. Please select a valid method.\n"
        );
    }

    #[test]
    fn test_lu_report_text() {
        let report = example().run_selection(5).unwrap();
        let pad = |s: &str| format!("{:>10} ", s);
        let expected = format!(
            "Lower Matrix L:\n{}{}\n{}{}\n\nUpper Matrix U:\n{}{}\n{}{}\n\nY matrix:\n1 1.5 \n\nSolution Matrix X:\n0.1 0.6 \n",
            pad("1"),
            pad("0"),
            pad("0.5"),
            pad("1"),
            pad("4"),
            pad("1"),
            pad("0"),
            pad("2.5"),
        );
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_invalid_choice_has_no_solution() {
        let report = example().run_selection(0).unwrap();
        assert_eq!(report, SolverReport::InvalidChoice);
        assert!(report.solution().is_none());
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn test_solve_all_agree() {
        let reports = example().solve_all().unwrap();
        assert_eq!(reports.len(), 5);
        assert!(LinearSystem::max_disagreement(&reports) < 1e-6);
        for r in &reports {
            assert!(r.diagnostics().is_empty());
            assert!(r.residual().unwrap() < 1e-5);
        }
    }

    #[test]
    fn test_diagnostics_attached() {
        let A = DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 2.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let system = LinearSystem::new(A, b, SolverConfig::default());
        let report = system.solve(LinSysMethod::Jacobi).unwrap();
        assert!(matches!(
            report.diagnostics()[0],
            Diagnostic::NotDiagonallyDominant(0)
        ));
        assert!(
            report
                .diagnostics()
                .iter()
                .any(|d| matches!(d, Diagnostic::IterationCapReached(100, _)))
        );

        let quiet = LinearSystem::new(
            system.A.clone(),
            system.b.clone(),
            SolverConfig::default().with_diagnostics(false),
        );
        assert!(quiet.solve(LinSysMethod::Jacobi).unwrap().diagnostics().is_empty());
    }

    #[test]
    fn test_malformed_system() {
        let A = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let system = LinearSystem::new(A, b, SolverConfig::default());
        assert!(system.run_selection(3).is_err());
        // invalid selector is checked before the system
        assert_eq!(system.run_selection(7), Ok(SolverReport::InvalidChoice));
    }
}
