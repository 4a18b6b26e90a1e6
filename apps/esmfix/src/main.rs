use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use esmfix_rewrite::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "esmfix")]
#[command(about = "Post-build fixups for compiled ES module output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite relative import specifiers to concrete on-disk targets
    RewriteImports(Config),
}

// The rewrite is I/O bound and processes one file at a time, so a single
// cooperative thread is all the runtime needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::RewriteImports(cfg) => {
            info!("Running import rewrite with root: {:?}", cfg.root);

            let result = esmfix_rewrite::run_rewrite(cfg).await?;
            debug!("Rewrote {} files", result.files_rewritten);

            let elapsed_ms = start.elapsed().as_millis();

            if result.files_rewritten > 0 {
                esmfix_rewrite::print_summary(&mut stdout, &result)?;
            } else {
                esmfix_rewrite::print_no_changes_message(&mut stdout, &result)?;
            }

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files_scanned.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
