//! `umr resolve` / `umr explain` – candidate URLs for one artifact.

use anyhow::{Context, Result};
use umr_core::{ArtifactKind, MirrorSet, Outcome};

pub fn run_resolve(mirrors: &MirrorSet, kind: &str, path: &str) -> Result<()> {
    let urls = umr_core::resolve_named(kind, path, mirrors)
        .with_context(|| format!("resolve {kind} {path:?}"))?;
    if urls.is_empty() {
        tracing::info!("no mirror serves {} {:?}", kind, path);
    }
    for url in urls {
        println!("{url}");
    }
    Ok(())
}

pub fn run_explain(mirrors: &MirrorSet, kind: &str, path: &str) -> Result<()> {
    let kind: ArtifactKind = kind.parse()?;
    let candidates = umr_core::explain(kind, path, mirrors)
        .with_context(|| format!("explain {kind} {path:?}"))?;
    if candidates.is_empty() {
        println!("No mirrors configured.");
        return Ok(());
    }
    for c in candidates {
        match c.outcome {
            Outcome::Url(url) => println!("{:<16} {}", c.mirror, url),
            Outcome::Confined => println!("{:<16} confined (skipped)", c.mirror),
        }
    }
    Ok(())
}
