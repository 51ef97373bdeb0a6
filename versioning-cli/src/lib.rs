//! Library side of the `versioning` example program.
//!
//! Split out of the binary so the config and document handling can be tested
//! without spawning a process.

pub mod config;
pub mod document;
pub mod generated;
