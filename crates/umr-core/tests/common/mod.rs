//! Shared mirror fixtures for integration tests.

use umr_core::{MirrorEntry, MirrorSet};

/// The single-mirror layout used throughout: `http://x`, `meta/`, `targets/`.
pub fn mirror_x(confined: &[&str]) -> MirrorEntry {
    MirrorEntry::new("http://x")
        .with_metadata_path("meta/")
        .with_targets_path("targets/")
        .with_confined_target_paths(confined.iter().copied())
}

pub fn set_of(pairs: Vec<(&str, MirrorEntry)>) -> MirrorSet {
    let mut set = MirrorSet::new();
    for (name, entry) in pairs {
        set.insert(name, entry).expect("unique fixture names");
    }
    set
}

/// Three mirrors, the middle one confined to `targets/stable`.
pub fn mixed_set() -> MirrorSet {
    set_of(vec![
        (
            "primary",
            MirrorEntry::new("https://primary.example.com")
                .with_metadata_path("metadata")
                .with_targets_path("targets"),
        ),
        (
            "stable-cdn",
            MirrorEntry::new("https://cdn.example.com")
                .with_metadata_path("md")
                .with_targets_path("targets")
                .with_confined_target_paths(["targets/stable"]),
        ),
        (
            "backup",
            MirrorEntry::new("http://backup.example.org:8080")
                .with_metadata_path("repo/metadata")
                .with_targets_path("repo/targets"),
        ),
    ])
}
