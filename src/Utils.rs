//! different utility modules used throughout the project
/// set up terminal and file logging from the solver config
pub mod logger;
/// C-style general float formatting for reports
pub mod pretty_print;
/// tiny module to save solution and factors into csv files
pub mod results_io;
/// read a linear system task from a TOML file
pub mod task_parser;
