use log::trace;
use std::path::Path;
use tokio::fs;

/// Check whether `path` names an existing regular file.
///
/// Directories, symlink targets that are directories, and paths whose
/// metadata cannot be read all report `false`; a resolution candidate that
/// cannot be stat'd is simply not a match.
pub async fn is_regular_file(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(meta) => meta.is_file(),
        Err(e) => {
            trace!("Candidate {} not usable: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.js");
        std_fs::write(&file, "export {};").unwrap();
        assert!(is_regular_file(&file).await);
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("sub");
        std_fs::create_dir(&dir).unwrap();
        assert!(!is_regular_file(&dir).await);
    }

    #[tokio::test]
    async fn test_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_regular_file(&temp_dir.path().join("nope.js")).await);
    }
}
