//! Insertion-ordered collection of named mirrors.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::MirrorEntry;
use crate::error::ResolveError;

/// Named mirrors in a stable order.
///
/// Iteration follows insertion order (document order when deserialized), so
/// resolution output is reproducible. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MirrorSet {
    entries: Vec<(String, MirrorEntry)>,
}

impl MirrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mirror. Rejects empty and duplicate names.
    pub fn insert(&mut self, name: impl Into<String>, entry: MirrorEntry) -> Result<(), ResolveError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ResolveError::malformed("mirror name is empty"));
        }
        if self.get(&name).is_some() {
            return Err(ResolveError::malformed(format!("duplicate mirror name {name:?}")));
        }
        self.entries.push((name, entry));
        Ok(())
    }

    /// Builder form of [`MirrorSet::insert`].
    pub fn with(mut self, name: impl Into<String>, entry: MirrorEntry) -> Result<Self, ResolveError> {
        self.insert(name, entry)?;
        Ok(self)
    }

    /// Appends every mirror of `other`, failing on the first name already present.
    pub fn extend_from(&mut self, other: MirrorSet) -> Result<(), ResolveError> {
        for (name, entry) in other.entries {
            self.insert(name, entry)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MirrorEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MirrorEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(String, MirrorEntry)>> for MirrorSet {
    type Error = ResolveError;

    fn try_from(pairs: Vec<(String, MirrorEntry)>) -> Result<Self, Self::Error> {
        let mut set = MirrorSet::new();
        for (name, entry) in pairs {
            set.insert(name, entry)?;
        }
        Ok(set)
    }
}

impl Serialize for MirrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

struct MirrorSetVisitor;

impl<'de> Visitor<'de> for MirrorSetVisitor {
    type Value = MirrorSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of mirror names to mirror entries")
    }

    // Entries arrive in document order; collecting them directly keeps that order.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MirrorSet, A::Error> {
        let mut set = MirrorSet::new();
        while let Some((name, entry)) = access.next_entry::<String, MirrorEntry>()? {
            set.insert(name, entry)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for MirrorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MirrorSetVisitor)
    }
}
