//! Mirror resolution: turn an artifact request into candidate download URLs.
//!
//! For each mirror, in the set's order, the URL is
//! `url_prefix + "/" + sub_path + "/" + percent_encoded(relative_path)`,
//! where `sub_path` is the mirror's `metadata_path` or `targets_path`. Target
//! requests are additionally filtered by the mirror's confined target paths,
//! matched component-wise against `targets_path` joined with the request path.
//!
//! All input validation happens before the first URL is built, so an error
//! never comes with a partial list.

mod encode;
mod kind;
mod path;

pub use encode::encode_path;
pub use kind::ArtifactKind;
pub use path::validate_relative_path;

use crate::error::ResolveError;
use crate::mirrors::MirrorSet;

/// What one mirror contributes to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The mirror may serve the artifact at this URL.
    Url(String),
    /// Target request falls outside the mirror's confined target paths.
    Confined,
}

/// Per-mirror decision, in mirror order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub mirror: String,
    pub outcome: Outcome,
}

impl Candidate {
    pub fn url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Url(u) => Some(u.as_str()),
            Outcome::Confined => None,
        }
    }
}

/// Ordered list of URLs where `relative_path` of the given kind may be fetched.
///
/// An empty list (no mirrors, or every mirror confined out) is not an error.
pub fn resolve(
    kind: ArtifactKind,
    relative_path: &str,
    mirrors: &MirrorSet,
) -> Result<Vec<String>, ResolveError> {
    let urls: Vec<String> = explain(kind, relative_path, mirrors)?
        .into_iter()
        .filter_map(|c| match c.outcome {
            Outcome::Url(u) => Some(u),
            Outcome::Confined => None,
        })
        .collect();
    tracing::trace!(%kind, relative_path, count = urls.len(), "resolved mirror urls");
    Ok(urls)
}

/// Like [`resolve`], with the artifact kind given by name (`meta` / `target`).
pub fn resolve_named(
    kind: &str,
    relative_path: &str,
    mirrors: &MirrorSet,
) -> Result<Vec<String>, ResolveError> {
    let kind: ArtifactKind = kind.parse()?;
    resolve(kind, relative_path, mirrors)
}

/// Same decision as [`resolve`], keeping one entry per mirror including the
/// ones skipped by confinement.
pub fn explain(
    kind: ArtifactKind,
    relative_path: &str,
    mirrors: &MirrorSet,
) -> Result<Vec<Candidate>, ResolveError> {
    validate(kind, relative_path, mirrors)?;

    let encoded = encode_path(relative_path);
    let mut out = Vec::with_capacity(mirrors.len());

    for (name, entry) in mirrors.iter() {
        let sub_path = entry.sub_path_for(name, kind)?;

        if kind == ArtifactKind::Target && entry.is_confined() {
            let full = path::join_components(sub_path, relative_path);
            if !path::in_confined_paths(&full, &entry.confined_target_paths) {
                tracing::debug!(
                    mirror = name,
                    relative_path,
                    confined = ?entry.confined_target_paths,
                    "mirror skipped: target outside confined paths"
                );
                out.push(Candidate {
                    mirror: name.to_string(),
                    outcome: Outcome::Confined,
                });
                continue;
            }
        }

        let url = format!("{}/{}/{}", entry.url_prefix, sub_path, encoded);
        out.push(Candidate {
            mirror: name.to_string(),
            outcome: Outcome::Url(url),
        });
    }

    Ok(out)
}

fn validate(kind: ArtifactKind, relative_path: &str, mirrors: &MirrorSet) -> Result<(), ResolveError> {
    validate_relative_path(relative_path)?;
    for (name, entry) in mirrors.iter() {
        entry.validate_prefix(name)?;
        entry.sub_path_for(name, kind)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirrors::MirrorEntry;

    fn mirror(prefix: &str) -> MirrorEntry {
        MirrorEntry::new(prefix)
            .with_metadata_path("meta/")
            .with_targets_path("targets/")
    }

    fn single(entry: MirrorEntry) -> MirrorSet {
        MirrorSet::new().with("m1", entry).unwrap()
    }

    #[test]
    fn metadata_url_keeps_literal_separators() {
        let set = single(mirror("http://x"));
        assert_eq!(
            resolve(ArtifactKind::Metadata, "root.json", &set).unwrap(),
            vec!["http://x/meta//root.json"]
        );
    }

    #[test]
    fn target_url_unconfined() {
        let set = single(mirror("http://x"));
        assert_eq!(
            resolve(ArtifactKind::Target, "release1/file.bin", &set).unwrap(),
            vec!["http://x/targets//release1/file.bin"]
        );
    }

    #[test]
    fn target_outside_confinement_is_skipped() {
        let set = single(mirror("http://x").with_confined_target_paths(["targets/release2"]));
        assert!(resolve(ArtifactKind::Target, "release1/file.bin", &set)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn target_inside_confinement_is_kept() {
        let set = single(mirror("http://x").with_confined_target_paths(["targets/release2"]));
        assert_eq!(
            resolve(ArtifactKind::Target, "release2/file.bin", &set).unwrap(),
            vec!["http://x/targets//release2/file.bin"]
        );
    }

    #[test]
    fn confinement_does_not_match_sibling_with_shared_prefix() {
        let set = single(mirror("http://x").with_confined_target_paths(["targets/release1"]));
        assert!(resolve(ArtifactKind::Target, "release10/file.bin", &set)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn metadata_ignores_confinement() {
        let set = single(mirror("http://x").with_confined_target_paths(["targets/nothing"]));
        assert_eq!(
            resolve(ArtifactKind::Metadata, "targets.json", &set).unwrap(),
            vec!["http://x/meta//targets.json"]
        );
    }

    #[test]
    fn unknown_kind_name_is_invalid_argument() {
        let set = single(mirror("http://x"));
        let err = resolve_named("image", "root.json", &set).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument(_)));
    }

    #[test]
    fn empty_set_gives_empty_list() {
        let set = MirrorSet::new();
        assert!(resolve(ArtifactKind::Metadata, "root.json", &set).unwrap().is_empty());
        assert!(resolve(ArtifactKind::Target, "a/b.bin", &set).unwrap().is_empty());
    }

    #[test]
    fn path_is_encoded_once_per_mirror() {
        let set = MirrorSet::new()
            .with("a", mirror("http://a"))
            .unwrap()
            .with("b", mirror("http://b"))
            .unwrap()
            .with("c", mirror("http://c"))
            .unwrap();
        let urls = resolve(ArtifactKind::Target, "dir/my file%.bin", &set).unwrap();
        assert_eq!(
            urls,
            vec![
                "http://a/targets//dir/my%20file%25.bin",
                "http://b/targets//dir/my%20file%25.bin",
                "http://c/targets//dir/my%20file%25.bin",
            ]
        );
    }

    #[test]
    fn bad_mirror_fails_before_any_output() {
        let set = MirrorSet::new()
            .with("good", mirror("http://good"))
            .unwrap()
            .with("bad", MirrorEntry::new("http://bad").with_metadata_path("meta"))
            .unwrap();
        let err = resolve(ArtifactKind::Target, "f.bin", &set).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedInput(_)));
        assert!(err.to_string().contains("\"bad\""), "{err}");

        // Same set is fine for metadata: the missing field is not needed.
        assert_eq!(resolve(ArtifactKind::Metadata, "root.json", &set).unwrap().len(), 2);
    }

    #[test]
    fn bad_prefix_is_malformed() {
        let set = single(mirror("not a url"));
        let err = resolve(ArtifactKind::Metadata, "root.json", &set).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedInput(_)));
    }

    #[test]
    fn bad_relative_path_is_malformed() {
        let set = single(mirror("http://x"));
        for bad in ["", "/abs", "https://evil/x", "../up"] {
            let err = resolve(ArtifactKind::Metadata, bad, &set).unwrap_err();
            assert!(matches!(err, ResolveError::MalformedInput(_)), "{bad:?}");
        }
    }

    #[test]
    fn explain_reports_confined_mirrors() {
        let set = MirrorSet::new()
            .with("open", mirror("http://open"))
            .unwrap()
            .with(
                "stable-only",
                mirror("http://stable").with_confined_target_paths(["targets/stable"]),
            )
            .unwrap();
        let candidates = explain(ArtifactKind::Target, "beta/app.bin", &set).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].mirror, "open");
        assert_eq!(candidates[0].url(), Some("http://open/targets//beta/app.bin"));
        assert_eq!(candidates[1].mirror, "stable-only");
        assert_eq!(candidates[1].outcome, Outcome::Confined);
        assert_eq!(candidates[1].url(), None);
    }
}
