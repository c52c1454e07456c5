use std::io;

use anyhow::Result;
use log::*;

use partsim::{config, shell::Shell};

fn main() -> Result<()> {
    // Keep the interactive output readable unless the user
    // asked for more through RUST_LOG.
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let ledger = config::ledger_from_args(&args)?;
    info!("Simulating {} addresses", ledger.capacity());

    let stdin = io::stdin();
    let mut shell = Shell::new(ledger, stdin.lock(), io::stdout());
    shell.run()
}
