//! Backends module - File system operations
//!
//! Provides:
//! - scan: Source set discovery with walkdir

pub mod scan;
