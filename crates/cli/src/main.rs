use anyhow::Context;

use sweetshop_cli::{Shell, ShellConfig, demo};
use sweetshop_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env();
    sweetshop_observability::init(&config.log);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut inventory = Inventory::new();
    if config.seed_demo {
        demo::seed(&mut inventory).context("failed to seed demo catalog")?;
        tracing::info!(sweets = inventory.len(), "demo catalog loaded");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::with_inventory(inventory, stdin.lock(), stdout.lock());

    shell.run().context("terminal I/O failed")?;
    Ok(())
}
