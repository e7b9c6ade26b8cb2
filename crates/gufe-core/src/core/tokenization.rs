//! Content-derived identity for model objects.
//!
//! Every model type hashes purely from its content, so a hash computed with a
//! fixed-key hasher doubles as a reproducible identity. [`Tokenizable`] turns
//! that hash into a [`GufeKey`], a printable key such as
//! `ChemicalSystem-3f09c1d2a4b5e6f7` that is identical for equal objects.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GufeKey(String);

impl GufeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The type-name part of the key (everything before the final `-`).
    pub fn prefix(&self) -> &str {
        self.0.rsplit_once('-').map_or(&self.0, |(prefix, _)| prefix)
    }
}

impl fmt::Display for GufeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Tokenizable: Hash {
    fn type_name(&self) -> &'static str;

    fn key(&self) -> GufeKey {
        GufeKey(format!("{}-{:016x}", self.type_name(), stable_hash(self)))
    }
}

/// Hashes `value` with a fixed-key hasher, so the result does not vary
/// between process runs.
pub fn stable_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Combines per-item hashes with a wrapping sum, which makes the result
/// independent of iteration order.
pub fn unordered_hash<I>(items: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
{
    items
        .into_iter()
        .map(|item| stable_hash(&item))
        .fold(0, u64::wrapping_add)
}
