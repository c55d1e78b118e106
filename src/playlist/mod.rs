pub mod config;
pub mod filters;
pub mod generator;
pub mod metadata;
pub mod tempo;
pub mod utils;

#[cfg(test)]
mod config_tests;

pub use config::*;
pub use generator::*;
pub use metadata::*;
