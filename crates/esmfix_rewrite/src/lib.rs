//! Import specifier rewriting for compiled ES module output.
//!
//! This crate fixes up the relative import/export specifiers that a compiler
//! emits without a concrete target, rewriting `'./foo'` into `'./foo/index.js'`
//! or `'./foo.js'` so the output loads under strict, extension-sensitive
//! module resolution.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use esmfix_rewrite::{Config, run_rewrite};
//! use std::io::{BufWriter, Write};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/dist")),
//!     include_mjs: false,
//! };
//!
//! let result = run_rewrite(cfg).await?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! esmfix_rewrite::print_summary(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod fsutil;
mod reporter;
mod resolver;
mod rewriter;
mod runner;
mod types;
mod walker;

// Re-export public API
pub use config::Config;
pub use constants::{INDEX_FILE, JS_EXTENSIONS, JS_MJS_EXTENSIONS, RESOLVE_EXTENSION};
pub use fsutil::is_regular_file;
pub use reporter::{print_no_changes_message, print_summary};
pub use resolver::resolve;
pub use rewriter::rewrite_file;
pub use runner::run_rewrite;
pub use types::{FileOutcome, RewriteResult};
pub use walker::walk_files;
