//! Library side of the `lls` directory lister.
//!
//! The shipped application is the `lls` binary (`src/main.rs`). The library
//! exists so the binary and the integration tests share one pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod term;
