//! Include fixups
//!
//! - fixups: loading the JSON fixup table
//! - rewrite: matching and rewriting `#include` directives

pub mod fixups;
pub mod rewrite;
