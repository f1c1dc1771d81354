//! NumSeq library: application logic for the `numseq` command.

pub mod app;
pub mod config;
pub mod errors;
