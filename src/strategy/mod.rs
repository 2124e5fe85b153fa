pub mod filter;
pub mod runner;
