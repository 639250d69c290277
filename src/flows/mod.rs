//! Flows module - End-to-end pipelines built from the backends
//!
//! Provides:
//! - fixup: Load a fixup table, scan sources, rewrite includes, report

pub mod fixup;
