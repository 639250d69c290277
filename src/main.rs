//! fixup-headers - bulk #include path rewriting for C++ source trees
//!
//! fixup-headers provides:
//! - JSON fixup tables mapping old include paths to new ones (or removal)
//! - Recursive discovery of .hpp/.cpp/.tpp files
//! - In-place, atomic rewriting of matching #include lines

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod includes;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
