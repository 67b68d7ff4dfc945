//! `dlkit forget <name>` – delete a saved task record; the downloaded file is left alone.

use anyhow::Result;
use dlkit_core::state_store::StateStore;

pub fn run_forget(store: &StateStore, name: &str) -> Result<()> {
    if store.remove(name)? {
        println!("Removed record {name}");
    } else {
        println!("No record named {name}");
    }
    Ok(())
}
