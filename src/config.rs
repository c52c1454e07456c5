use anyhow::{anyhow, Context, Result};

use crate::core::ledger::Ledger;

/// Builds the ledger from the process arguments, which must be
/// the program name followed by the memory size.
pub fn ledger_from_args(args: &[String]) -> Result<Ledger> {
    let [_, size] = args else {
        return Err(anyhow!("usage: partsim <memory_size>"));
    };

    let capacity: usize = size
        .parse()
        .with_context(|| format!("memory size '{size}' is not a positive integer"))?;
    let ledger = Ledger::new(capacity).context("invalid memory size")?;

    Ok(ledger)
}
