//! `dlkit show <name>` – print a saved task record.

use anyhow::Result;
use dlkit_core::state_store::StateStore;

use crate::cli::record::TaskRecord;

pub fn run_show(store: &StateStore, name: &str, json: bool) -> Result<()> {
    let Some(record) = store.load::<TaskRecord>(name) else {
        println!("No saved state for {name}");
        return Ok(());
    };
    let view = record.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!("path:      {}", view.path.display());
    if let Some(url) = view.url {
        println!("url:       {url}");
    }
    println!("kind:      {}", view.kind);
    println!("size:      {} ({} bytes)", view.size_display, view.size);
    println!("{:<10} {}", format!("{}:", view.algorithm), view.digest);
    Ok(())
}
