use std::io;

use anyhow::{Context, Result};
use tracing::info;

use boardsight_core::Registry;
use boardsight_shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("boardsight starting");

    let mut shell = match std::env::args().nth(1) {
        Some(layout) => {
            let registry: Registry = layout
                .parse()
                .with_context(|| format!("invalid starting layout: {layout}"))?;
            Shell::with_registry(registry)
        }
        None => Shell::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell
        .run(stdin.lock(), &mut stdout.lock())
        .context("shell terminated")?;
    Ok(())
}
