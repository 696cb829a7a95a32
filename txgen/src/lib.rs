//! Synthetic card transaction generator.
//!
//! Produces random transactions as JSON lines at random intervals, for
//! feeding log pipelines, dashboards and fraud-detection demos.

pub mod core;
pub mod domain;
pub mod emit;
pub mod stream;
