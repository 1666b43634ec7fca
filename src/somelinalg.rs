//! classic solvers for dense linear systems A*x = b
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// Jacobi and Gauss-Seidel iterations
pub mod iterative_solvers_cpu;

/// Gauss and Gauss-Jordan elimination, no pivoting
pub mod gauss_elimination;
/// Doolittle LU factorization
pub mod LUsolver;
/// forward and back substitution for triangular systems
pub mod Lx_eq_b;

/// single entry point: method enum, selector dispatch, reports
pub mod LinSys_api;
/// diagnostics for linear systems and matrices: zero pivots, non-finite results,
/// diagonal dominance, residuals
pub mod linear_sys_diagnostics;
pub mod linsys_errors;
pub mod solver_config;
