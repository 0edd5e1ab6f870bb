use grdfs_model::KeyId;
use rustc_hash::FxHashSet;

/// A dedup index over existing `(subject, object)` pairs, probed during
/// `materialize_results` so join output skips pairs already stored.
pub struct PairIndex(FxHashSet<(u64, u64)>);

impl PairIndex {
    pub fn build(pairs: impl Iterator<Item = (KeyId, KeyId)>) -> Self {
        Self(pairs.map(|(s, o)| (s.as_u64(), o.as_u64())).collect())
    }

    #[must_use]
    pub fn contains(&self, subject: KeyId, object: KeyId) -> bool {
        self.0.contains(&(subject.as_u64(), object.as_u64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_only_indexed_pairs() {
        let a = KeyId::from_raw(1);
        let b = KeyId::from_raw(2);
        let c = KeyId::from_raw(3);
        let index = PairIndex::build(std::iter::once((a, b)));
        assert!(index.contains(a, b));
        assert!(!index.contains(a, c));
    }
}
