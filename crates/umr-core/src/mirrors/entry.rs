//! A single mirror's configuration record.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::resolve::ArtifactKind;

/// Where one mirror serves metadata and target files.
///
/// `metadata_path` and `targets_path` are optional so that a mirror which only
/// carries one kind of artifact can be described; asking such a mirror for the
/// other kind is rejected by [`MirrorEntry::sub_path_for`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorEntry {
    /// Scheme and host, e.g. `https://mirror.example.com`. No trailing slash expected.
    pub url_prefix: String,
    /// Sub-path under `url_prefix` where metadata documents live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_path: Option<String>,
    /// Sub-path under `url_prefix` where target files live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets_path: Option<String>,
    /// Path prefixes (relative to the mirror root, e.g. `targets/release1`)
    /// this mirror may serve. Empty means unconfined.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub confined_target_paths: Vec<String>,
    /// Opaque, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
}

impl MirrorEntry {
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            metadata_path: None,
            targets_path: None,
            confined_target_paths: Vec::new(),
            custom: None,
        }
    }

    pub fn with_metadata_path(mut self, path: impl Into<String>) -> Self {
        self.metadata_path = Some(path.into());
        self
    }

    pub fn with_targets_path(mut self, path: impl Into<String>) -> Self {
        self.targets_path = Some(path.into());
        self
    }

    pub fn with_confined_target_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.confined_target_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom(mut self, custom: serde_json::Value) -> Self {
        self.custom = Some(custom);
        self
    }

    /// True when the mirror restricts which target paths it serves.
    pub fn is_confined(&self) -> bool {
        !self.confined_target_paths.is_empty()
    }

    /// Checks that `url_prefix` is an absolute URL with a host.
    pub fn validate_prefix(&self, name: &str) -> Result<(), ResolveError> {
        if self.url_prefix.is_empty() {
            return Err(ResolveError::malformed(format!(
                "mirror {name:?}: url_prefix is empty"
            )));
        }
        let parsed = url::Url::parse(&self.url_prefix).map_err(|e| {
            ResolveError::malformed(format!(
                "mirror {name:?}: url_prefix {:?} is not a URL: {e}",
                self.url_prefix
            ))
        })?;
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ResolveError::malformed(format!(
                "mirror {name:?}: url_prefix {:?} has no host",
                self.url_prefix
            )));
        }
        Ok(())
    }

    /// Sub-path this mirror serves `kind` under, or an error naming the missing field.
    pub fn sub_path_for(&self, name: &str, kind: ArtifactKind) -> Result<&str, ResolveError> {
        let (field, value) = match kind {
            ArtifactKind::Metadata => ("metadata_path", self.metadata_path.as_deref()),
            ArtifactKind::Target => ("targets_path", self.targets_path.as_deref()),
        };
        value.ok_or_else(|| {
            ResolveError::malformed(format!("mirror {name:?}: missing {field} for {kind} request"))
        })
    }
}
