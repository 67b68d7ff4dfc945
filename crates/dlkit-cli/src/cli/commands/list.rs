//! `dlkit list` – show all saved task records.

use anyhow::Result;
use dlkit_core::format::format_bytes;
use dlkit_core::state_store::StateStore;

use crate::cli::record::TaskRecord;

pub fn run_list(store: &StateStore) -> Result<()> {
    let names = store.names()?;
    if names.is_empty() {
        println!("No saved records.");
        return Ok(());
    }
    println!("{:<32} {:<9} {:<12} {:<8} {}", "NAME", "KIND", "SIZE", "ALG", "PATH");
    for name in names {
        match store.load::<TaskRecord>(&name) {
            Some(r) => println!(
                "{:<32} {:<9} {:<12} {:<8} {}",
                name,
                r.kind().as_str(),
                format_bytes(r.size),
                r.algorithm,
                r.path.display()
            ),
            None => println!("{:<32} {:<9} {:<12} {:<8} -", name, "-", "-", "-"),
        }
    }
    Ok(())
}
