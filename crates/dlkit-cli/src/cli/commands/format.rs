//! `dlkit format <n> [--speed]` – human-readable size or rate.

use anyhow::{Context, Result};
use dlkit_core::format::{format_bytes, format_speed};

pub fn run_format(value: &str, speed: bool) -> Result<()> {
    let out = if speed {
        let bps: f64 = value
            .parse()
            .with_context(|| format!("not a rate: {value:?}"))?;
        format_speed(bps)
    } else {
        let bytes: u64 = value
            .parse()
            .with_context(|| format!("not a byte count: {value:?}"))?;
        format_bytes(bytes)
    };
    println!("{out}");
    Ok(())
}
