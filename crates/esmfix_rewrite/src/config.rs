use clap::Parser;
use std::path::PathBuf;

use crate::constants::{JS_EXTENSIONS, JS_MJS_EXTENSIONS};

#[derive(Debug, Clone, Parser)]
#[command(name = "rewrite-imports")]
#[command(about = "Rewrite relative import specifiers in compiled ES module output")]
pub struct Config {
    /// Root directory of the compiled output (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Also rewrite .mjs files in addition to .js
    #[arg(long)]
    pub include_mjs: bool,
}

impl Config {
    /// Extensions of files this pass will rewrite.
    pub fn extensions(&self) -> &'static [&'static str] {
        if self.include_mjs { JS_MJS_EXTENSIONS } else { JS_EXTENSIONS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions_are_js_only() {
        let cfg = Config { root: None, include_mjs: false };
        assert_eq!(cfg.extensions(), &["js"]);
    }

    #[test]
    fn test_mjs_flag_extends_extensions() {
        let cfg = Config { root: None, include_mjs: true };
        assert!(cfg.extensions().contains(&"mjs"));
        assert!(cfg.extensions().contains(&"js"));
    }
}
