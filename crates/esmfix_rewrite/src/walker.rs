use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// Lazily enumerate every regular file under `root`, recursing into
/// subdirectories.
///
/// Directories yield no entry themselves, only their file descendants.
/// Enumeration order follows the underlying directory listing and carries no
/// guarantee. A directory that cannot be opened surfaces as an `Err` item so
/// the caller aborts the pass rather than silently skipping a subtree.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    debug!("Walking directory tree from root: {}", root.display());

    // Every regular file counts here, including hidden and ignored ones;
    // the build output tree is not a git working copy.
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .build();

    walker.filter_map(|res| match res {
        Ok(dent) => {
            if dent.file_type().is_some_and(|t| t.is_file()) {
                trace!("Found file: {}", dent.path().display());
                Some(Ok(dent.into_path()))
            } else {
                None
            }
        }
        Err(e) => Some(Err(e.into())),
    })
}
