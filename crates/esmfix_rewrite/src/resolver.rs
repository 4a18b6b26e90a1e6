use log::trace;
use path_clean::clean;
use std::path::{Component, Path, PathBuf};

use crate::constants::{INDEX_FILE, RESOLVE_EXTENSION};
use crate::fsutil::is_regular_file;

/// Resolve a relative import specifier against the file that contains it.
///
/// Returns the concrete on-disk specifier to substitute, or `None` when the
/// specifier is not relative or neither candidate exists; in both cases the
/// caller must leave the original statement untouched.
pub async fn resolve(from_file: &Path, request: &str) -> Option<String> {
    if !(request.starts_with("./") || request.starts_with("../")) {
        trace!("Not a relative specifier, leaving alone: '{}'", request);
        return None;
    }

    let dir = from_file.parent()?;
    let base = clean(dir.join(request));
    trace!("Resolving '{}' from {} as {}", request, from_file.display(), base.display());

    // Candidates in fixed priority order: directory index first, then a
    // sibling module with the output extension appended. Nothing else is a
    // match; the build step guarantees a .js-only output tree.
    let index_candidate = base.join(INDEX_FILE);
    let ext_candidate = PathBuf::from(format!("{}.{}", base.display(), RESOLVE_EXTENSION));

    let found = if is_regular_file(&index_candidate).await {
        index_candidate
    } else if is_regular_file(&ext_candidate).await {
        ext_candidate
    } else {
        trace!("No candidate on disk for '{}'", request);
        return None;
    };

    let rel = make_relative(&found, dir)?;
    let mut spec = rel.to_string_lossy().to_string();
    if !spec.starts_with('.') {
        spec = format!("./{}", spec);
    }
    trace!("Resolved '{}' to '{}'", request, spec);
    Some(spec)
}

/// Create a relative path from `base` to `target`. Both paths must be
/// absolute and normalized.
fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    if target_parts.first() != base_parts.first() {
        // No shared root, no relative form
        return None;
    }

    let common = target_parts.iter().zip(&base_parts).take_while(|(t, b)| t == b).count();

    let mut result = PathBuf::new();
    for _ in common..base_parts.len() {
        result.push("..");
    }
    for part in &target_parts[common..] {
        result.push(part);
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[tokio::test]
    async fn test_package_specifier_is_not_resolved() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b.js", "");
        // A same-named relative path on disk must not matter
        create_test_file(temp_dir.path(), "a/some-package.js", "");
        assert_eq!(resolve(&from, "some-package").await, None);
    }

    #[tokio::test]
    async fn test_index_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b.js", "");
        create_test_file(temp_dir.path(), "a/c/index.js", "");
        assert_eq!(resolve(&from, "./c").await.as_deref(), Some("./c/index.js"));
    }

    #[tokio::test]
    async fn test_index_wins_over_bare_extension() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b.js", "");
        create_test_file(temp_dir.path(), "a/c/index.js", "");
        create_test_file(temp_dir.path(), "a/c.js", "");
        assert_eq!(resolve(&from, "./c").await.as_deref(), Some("./c/index.js"));
    }

    #[tokio::test]
    async fn test_bare_extension_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b.js", "");
        create_test_file(temp_dir.path(), "a/c.js", "");
        assert_eq!(resolve(&from, "./c").await.as_deref(), Some("./c.js"));
    }

    #[tokio::test]
    async fn test_parent_directory_specifier() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b/f.js", "");
        create_test_file(temp_dir.path(), "a/c.js", "");
        assert_eq!(resolve(&from, "../c").await.as_deref(), Some("../c.js"));
    }

    #[tokio::test]
    async fn test_unresolvable_specifier() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b.js", "");
        assert_eq!(resolve(&from, "./d").await, None);
    }

    #[tokio::test]
    async fn test_other_extensions_do_not_match() {
        let temp_dir = TempDir::new().unwrap();
        let from = create_test_file(temp_dir.path(), "a/b.js", "");
        create_test_file(temp_dir.path(), "a/c.mjs", "");
        create_test_file(temp_dir.path(), "a/d/index.mjs", "");
        assert_eq!(resolve(&from, "./c").await, None);
        assert_eq!(resolve(&from, "./d").await, None);
    }

    #[test]
    fn test_make_relative_sibling() {
        let rel = make_relative(Path::new("/r/a/c.js"), Path::new("/r/a")).unwrap();
        assert_eq!(rel, PathBuf::from("c.js"));
    }

    #[test]
    fn test_make_relative_walks_up() {
        let rel = make_relative(Path::new("/r/a/c.js"), Path::new("/r/a/b")).unwrap();
        assert_eq!(rel, PathBuf::from("../c.js"));
    }
}
