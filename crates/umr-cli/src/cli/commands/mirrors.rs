//! `umr mirrors` – list configured mirrors in resolution order.

use anyhow::Result;
use umr_core::{MirrorEntry, MirrorSet};

fn or_dash(v: Option<&str>) -> &str {
    v.unwrap_or("-")
}

fn confinement(entry: &MirrorEntry) -> String {
    if entry.is_confined() {
        entry.confined_target_paths.join(",")
    } else {
        "*".to_string()
    }
}

pub fn run_mirrors(mirrors: &MirrorSet) -> Result<()> {
    if mirrors.is_empty() {
        println!("No mirrors configured.");
        return Ok(());
    }
    println!(
        "{:<16} {:<12} {:<12} {:<20} {}",
        "NAME", "METADATA", "TARGETS", "CONFINED", "URL_PREFIX"
    );
    for (name, entry) in mirrors.iter() {
        println!(
            "{:<16} {:<12} {:<12} {:<20} {}",
            name,
            or_dash(entry.metadata_path.as_deref()),
            or_dash(entry.targets_path.as_deref()),
            confinement(entry),
            entry.url_prefix
        );
    }
    Ok(())
}
