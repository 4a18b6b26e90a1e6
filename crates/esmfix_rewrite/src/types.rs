#[derive(Debug, Clone, Copy, Default)]
pub struct FileOutcome {
    pub changed: bool,
    /// Import/export-from statements matched in the file
    pub statements: usize,
    /// Specifiers that resolved to a concrete on-disk target
    pub resolved: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub statements_matched: usize,
    pub specifiers_resolved: usize,
}
