//! Fixup table loading
//!
//! The fixup file is a JSON object mapping bare include paths to either a
//! replacement path or `null` for removal:
//!
//! ```json
//! {
//!     "From.hpp": "To.hpp",
//!     "ToRemove.hpp": null
//! }
//! ```

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::error::{FixupError, Result};
use crate::core::model::FixupTable;

/// Parse fixup table text; `path` is only used for error messages
pub fn parse_fixup_str(text: &str, path: &Path) -> Result<FixupTable> {
    let parse_err = |source: serde_json::Error| FixupError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(text).map_err(parse_err)?;
    if !value.is_object() {
        return Err(FixupError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    serde_json::from_value(value).map_err(parse_err)
}

/// Load the fixup table from a file
pub fn load_fixup_file(path: &Path) -> Result<FixupTable> {
    let text = fs::read_to_string(path).map_err(|e| FixupError::io(path, e))?;
    parse_fixup_str(&text, path)
}
