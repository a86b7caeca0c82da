//! Read-only SNOMED reference set cache.
//!
//! The cache is constructed explicitly, from the static maps or from
//! caller-supplied rows (e.g. a refset fetched from a terminology
//! server by the embedding application), and passed into the
//! recoders, so tests and offline runs never touch the network.
//! Populate it once per process and share it; nothing mutates it
//! after construction.

use std::collections::BTreeSet;

use crate::maps;

#[derive(Debug, Clone, Default)]
pub struct RefsetCache {
    codes: BTreeSet<i64>,
}

impl RefsetCache {
    /// Cache covering exactly the concept IDs named by the static
    /// feature maps.
    pub fn from_static() -> Self {
        let mut codes = BTreeSet::new();
        for map in [
            maps::ACCOMMODATIONSTATUS,
            maps::EDARRIVALMODE,
            maps::EDATTENDSOURCE,
            maps::EDACUITY,
            maps::EDATTENDDISPATCH,
            maps::EDREFSERVICE,
            maps::EDDIAG_SEASONAL,
        ] {
            codes.extend(map.iter().map(|(code, _)| *code));
        }
        for list in [
            maps::EDINVEST_NON_URGENT,
            maps::EDINVEST_NOISE,
            maps::EDTREAT_NON_URGENT,
            maps::EDTREAT_NOISE,
        ] {
            codes.extend(list.iter().copied());
        }
        Self { codes }
    }

    /// Cache built from an externally-loaded refset (e.g. rows fetched
    /// from a terminology service by a collaborator outside this
    /// crate).
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Merge another refset into a new cache.
    pub fn merged(&self, other: &RefsetCache) -> Self {
        let mut codes = self.codes.clone();
        codes.extend(other.codes.iter().copied());
        Self { codes }
    }

    pub fn contains(&self, code: i64) -> bool {
        self.codes.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
