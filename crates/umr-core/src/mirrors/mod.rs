//! Mirror configuration model.
//!
//! A mirror is a server believed to host copies of update metadata and/or
//! target files. [`MirrorEntry`] describes where on that server each kind of
//! artifact lives; [`MirrorSet`] holds the named mirrors in the order the
//! caller (or the config document) listed them.

mod entry;
mod set;

pub use entry::MirrorEntry;
pub use set::MirrorSet;
