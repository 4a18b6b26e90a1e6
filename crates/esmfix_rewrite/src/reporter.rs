use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::RewriteResult;

pub fn print_no_changes_message<W: Write>(writer: &mut W, result: &RewriteResult) -> io::Result<()> {
    debug!("No files needed rewriting");
    writeln!(
        writer,
        "{} All specifiers already concrete. Scanned {} files.",
        "✓".green().bold(),
        result.files_scanned
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(writer: &mut W, result: &RewriteResult) -> io::Result<()> {
    writeln!(
        writer,
        "{} Rewrote {} of {} files ({} of {} specifiers resolved).",
        "✓".green().bold(),
        result.files_rewritten.to_string().cyan(),
        result.files_scanned,
        result.specifiers_resolved.to_string().cyan(),
        result.statements_matched
    )?;
    writer.flush()?;
    Ok(())
}
