//! examples of usage of RustedLinSys
/// all five methods on small systems, divergent and degenerate cases
pub mod linsys_examples;
