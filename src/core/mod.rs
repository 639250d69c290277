//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Fixup table and change record model
//! - Typed errors
//! - Run configuration (project root, scan directory)
//! - Path normalization utilities
//! - Atomic file writing
//! - Rendering of change records

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
