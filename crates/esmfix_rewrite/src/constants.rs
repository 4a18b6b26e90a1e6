//! Constants for the file extensions the rewriter recognizes.
//!
//! Compiled output uses a fixed `.js` extension policy, so resolution only
//! ever tries an `index.js` directory entry or a bare `.js` sibling. The
//! `.mjs` extension is recognized for *scanning* in one configuration
//! variant, but never as a resolution target.

/// Extensions of files eligible for rewriting (default variant)
pub const JS_EXTENSIONS: &[&str] = &["js"];

/// Extensions of files eligible for rewriting when `.mjs` output is enabled
pub const JS_MJS_EXTENSIONS: &[&str] = &["js", "mjs"];

/// Index file tried first when a specifier names a directory
pub const INDEX_FILE: &str = "index.js";

/// Extension appended when a specifier names a sibling module
pub const RESOLVE_EXTENSION: &str = "js";
