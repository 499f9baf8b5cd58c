pub mod cli;
pub mod factories;
