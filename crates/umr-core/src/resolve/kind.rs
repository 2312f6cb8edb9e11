//! Artifact kinds a mirror can be asked for.

use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// Which half of a mirror a request is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Signed metadata documents (root, targets, snapshot, ...).
    Metadata,
    /// Distributed content files.
    Target,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Metadata => "meta",
            ArtifactKind::Target => "target",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = ResolveError;

    /// Accepts `meta`/`metadata` and `target`/`targets`, ASCII case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "meta" | "metadata" => Ok(ArtifactKind::Metadata),
            "target" | "targets" => Ok(ArtifactKind::Target),
            _ => Err(ResolveError::InvalidArgument(format!(
                "artifact kind must be 'meta' or 'target', got {s:?}"
            ))),
        }
    }
}
