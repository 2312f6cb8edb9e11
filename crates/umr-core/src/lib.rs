//! Mirror URL resolution for software-update clients.
//!
//! Given a configured set of mirrors and a request for a metadata document or
//! a target file, [`resolve`] lists the URLs the artifact may be fetched
//! from, in mirror order, honoring each mirror's confined target paths.

pub mod config;
pub mod error;
pub mod logging;
pub mod mirrors;
pub mod resolve;

pub use error::ResolveError;
pub use mirrors::{MirrorEntry, MirrorSet};
pub use resolve::{explain, resolve, resolve_named, ArtifactKind, Candidate, Outcome};
