use crate::somelinalg::LinSys_api::{LinSysMethod, LinearSystem};
use crate::somelinalg::linear_sys_diagnostics::hilbert_matrix;
use crate::somelinalg::solver_config::SolverConfig;
use nalgebra::{DMatrix, DVector};
use strum::IntoEnumIterator;

pub fn linsys_examples(example: usize) {
    match example {
        0 => {
            // the textbook 2x2 system, every method in menu order
            let A = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
            let b = DVector::from_vec(vec![1.0, 2.0]);
            let system = LinearSystem::new(A, b, SolverConfig::default());
            print!("{}", LinSysMethod::menu());
            for method in LinSysMethod::iter() {
                match system.solve(method) {
                    Ok(report) => print!("{}", report),
                    Err(e) => println!("{}", e),
                }
            }
        }
        1 => {
            // diagonally dominant 4x4: all five methods must agree
            let A = DMatrix::from_row_slice(
                4,
                4,
                &[
                    10.0, -1.0, 2.0, 0.0, -1.0, 11.0, -1.0, 3.0, 2.0, -1.0, 10.0, -1.0, 0.0,
                    3.0, -1.0, 8.0,
                ],
            );
            let b = DVector::from_vec(vec![6.0, 25.0, -11.0, 15.0]);
            let system = LinearSystem::new(A, b, SolverConfig::default().with_tolerance(1e-10));
            match system.solve_all() {
                Ok(reports) => {
                    for report in &reports {
                        print!("{}", report);
                    }
                    println!(
                        "max disagreement between methods = {:e}",
                        LinearSystem::max_disagreement(&reports)
                    );
                }
                Err(e) => println!("{}", e),
            }
        }
        2 => {
            // not diagonally dominant: iterations blow up and stop at the cap
            let A = DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 2.0, 1.0]);
            let b = DVector::from_vec(vec![1.0, 1.0]);
            let system = LinearSystem::new(A, b, SolverConfig::default());
            for method in LinSysMethod::iter().filter(|m| m.is_iterative()) {
                if let Ok(report) = system.solve(method) {
                    print!("{}", report);
                    for d in report.diagnostics() {
                        println!("{}", d);
                    }
                }
            }
        }
        3 => {
            // zero leading pivot: no row exchange is done, the answer is inf/NaN
            let A = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 1.0]);
            let b = DVector::from_vec(vec![1.0, 2.0]);
            let system = LinearSystem::new(A, b, SolverConfig::default());
            for selector in 3..=5 {
                if let Ok(report) = system.run_selection(selector) {
                    print!("{}", report);
                    for d in report.diagnostics() {
                        println!("{}", d);
                    }
                }
            }
        }
        4 => {
            // ill-conditioned Hilbert matrix, direct methods lose digits
            let n = 8;
            let A = hilbert_matrix(n);
            let x_exact = DVector::from_element(n, 1.0);
            let b = &A * &x_exact;
            let system = LinearSystem::new(A, b, SolverConfig::default());
            for selector in [3, 4, 5] {
                if let Ok(report) = system.run_selection(selector) {
                    if let Some(x) = report.solution() {
                        println!(
                            "{}: error = {:e}, residual = {:e}",
                            LinSysMethod::from_selector(selector)
                                .map(|m| m.name())
                                .unwrap_or(""),
                            (x - &x_exact).amax(),
                            report.residual().unwrap_or(f64::NAN)
                        );
                    }
                }
            }
        }
        _ => {
            println!("example not found");
        }
    }
}
