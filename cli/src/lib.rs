//! FitCalc command-line front end
//!
//! This library exposes the CLI modules for use in tests and the binary.

pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod store;
