use anyhow::{Context, Result};
use futures::future;
use log::{debug, trace};
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

use crate::resolver::resolve;
use crate::types::FileOutcome;

/// Matches `import <clause> from '<specifier>';` and the export-from form.
/// The clause is non-greedy and may span lines; the quoted specifier must not
/// contain a newline or an embedded quote of its own kind. Anything this
/// pattern does not match is left untouched, including side-effect imports
/// and dynamic `import()` calls.
static IMPORT_EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\b(?:import|export)\b.*?\bfrom\s*('[^'\n]*'|"[^"\n]*")\s*;"#)
        .expect("import/export pattern is valid")
});

struct StatementMatch {
    /// Byte range of the quoted specifier, quotes included
    quoted: Range<usize>,
    request: String,
}

fn find_statements(content: &str) -> Vec<StatementMatch> {
    IMPORT_EXPORT_RE
        .captures_iter(content)
        .map(|cap| {
            let quoted = cap.get(1).unwrap();
            let text = quoted.as_str();
            StatementMatch {
                quoted: quoted.range(),
                request: text[1..text.len() - 1].to_string(),
            }
        })
        .collect()
}

/// Rewrite every resolvable import/export specifier in one file.
///
/// The file is read once; all specifier resolutions are launched together and
/// joined as a batch, then substituted back in source order. Content outside
/// the quoted specifier spans is preserved byte for byte, and the file is
/// written back only when the result actually differs.
pub async fn rewrite_file(path: &Path) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let statements = find_statements(&content);
    if statements.is_empty() {
        trace!("No import/export statements in {}", path.display());
        return Ok(FileOutcome::default());
    }
    debug!("Found {} import/export statements in {}", statements.len(), path.display());

    // join_all keeps results in launch order, so the n-th result lines up
    // with the n-th match no matter which resolution finishes first.
    let resolutions = future::join_all(statements.iter().map(|s| resolve(path, &s.request))).await;

    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut resolved = 0;
    for (stmt, resolution) in statements.iter().zip(&resolutions) {
        if let Some(new_spec) = resolution {
            trace!("Substituting '{}' -> '{}'", stmt.request, new_spec);
            out.push_str(&content[last..stmt.quoted.start]);
            out.push('\'');
            out.push_str(new_spec);
            out.push('\'');
            last = stmt.quoted.end;
            resolved += 1;
        }
    }
    out.push_str(&content[last..]);

    let changed = out != content;
    if changed {
        debug!(
            "Rewriting {} ({} of {} specifiers resolved)",
            path.display(),
            resolved,
            statements.len()
        );
        fs::write(path, &out)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        trace!("Content unchanged, skipping write: {}", path.display());
    }

    Ok(FileOutcome { changed, statements: statements.len(), resolved })
}
