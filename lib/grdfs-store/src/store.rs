use crate::fingerprint::hash_triple;
use grdfs_model::{Triple, TripleFlags};
use rustc_hash::FxHashMap;

/// Columnar, fingerprint-deduplicated triple storage. Triples are held as
/// four parallel vectors (subject, predicate, object, flags) rather than a
/// `Vec<Triple>` so the closure engine can hand `predicates()` or
/// `objects()` straight to a [`grdfs_kernel::KernelRuntime`] as a
/// contiguous array.
#[derive(Debug, Default)]
pub struct TripleStore {
    subjects: Vec<grdfs_model::KeyId>,
    predicates: Vec<grdfs_model::KeyId>,
    objects: Vec<grdfs_model::KeyId>,
    flags: Vec<TripleFlags>,
    fingerprints: FxHashMap<u64, u32>,
}

impl TripleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `triple` with `flags` unless an equal triple is already
    /// stored. Returns `true` if it was newly added.
    pub fn add(&mut self, triple: Triple, flags: TripleFlags) -> bool {
        let fp = hash_triple(
            triple.subject.as_u64(),
            triple.predicate.as_u64(),
            triple.object.as_u64(),
        );
        if self.fingerprints.contains_key(&fp) {
            return false;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.subjects.len() as u32;
        self.subjects.push(triple.subject);
        self.predicates.push(triple.predicate);
        self.objects.push(triple.object);
        self.flags.push(flags);
        self.fingerprints.insert(fp, index);
        true
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    #[must_use]
    pub fn subjects(&self) -> &[grdfs_model::KeyId] {
        &self.subjects
    }

    #[must_use]
    pub fn predicates(&self) -> &[grdfs_model::KeyId] {
        &self.predicates
    }

    #[must_use]
    pub fn objects(&self) -> &[grdfs_model::KeyId] {
        &self.objects
    }

    fn triple_at(&self, index: usize) -> Triple {
        Triple::new(self.subjects[index], self.predicates[index], self.objects[index])
    }

    /// Yields every stored triple in insertion order.
    pub fn iter_all(&self) -> impl Iterator<Item = Triple> + '_ {
        (0..self.subjects.len()).map(move |i| self.triple_at(i))
    }

    /// Yields only triples flagged [`TripleFlags::ENTAILED`], in insertion
    /// order.
    pub fn iter_entailed(&self) -> impl Iterator<Item = Triple> + '_ {
        (0..self.subjects.len())
            .filter(move |&i| self.flags[i].contains(TripleFlags::ENTAILED))
            .map(move |i| self.triple_at(i))
    }

    /// Whether `triple` (by value, ignoring flags) is already stored.
    #[must_use]
    pub fn contains(&self, triple: Triple) -> bool {
        let fp = hash_triple(
            triple.subject.as_u64(),
            triple.predicate.as_u64(),
            triple.object.as_u64(),
        );
        self.fingerprints.contains_key(&fp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grdfs_model::KeyId;

    fn triple(s: u64, p: u64, o: u64) -> Triple {
        Triple::new(KeyId::from_raw(s), KeyId::from_raw(p), KeyId::from_raw(o))
    }

    #[test]
    fn add_returns_true_for_new_triple() {
        let mut store = TripleStore::new();
        assert!(store.add(triple(1, 2, 3), TripleFlags::empty()));
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn add_returns_false_for_duplicate() {
        let mut store = TripleStore::new();
        assert!(store.add(triple(1, 2, 3), TripleFlags::empty()));
        assert!(!store.add(triple(1, 2, 3), TripleFlags::ENTAILED));
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn iter_all_preserves_insertion_order() {
        let mut store = TripleStore::new();
        store.add(triple(1, 2, 3), TripleFlags::empty());
        store.add(triple(4, 5, 6), TripleFlags::empty());
        let seen: Vec<_> = store.iter_all().collect();
        assert_eq!(seen, vec![triple(1, 2, 3), triple(4, 5, 6)]);
    }

    #[test]
    fn iter_entailed_skips_asserted_triples() {
        let mut store = TripleStore::new();
        store.add(triple(1, 2, 3), TripleFlags::empty());
        store.add(triple(4, 5, 6), TripleFlags::ENTAILED);
        let seen: Vec<_> = store.iter_entailed().collect();
        assert_eq!(seen, vec![triple(4, 5, 6)]);
    }

    #[test]
    fn column_accessors_stay_parallel() {
        let mut store = TripleStore::new();
        store.add(triple(1, 2, 3), TripleFlags::empty());
        store.add(triple(4, 5, 6), TripleFlags::empty());
        assert_eq!(store.subjects(), &[KeyId::from_raw(1), KeyId::from_raw(4)]);
        assert_eq!(store.predicates(), &[KeyId::from_raw(2), KeyId::from_raw(5)]);
        assert_eq!(store.objects(), &[KeyId::from_raw(3), KeyId::from_raw(6)]);
    }

    #[test]
    fn contains_reflects_fingerprint_dedup() {
        let mut store = TripleStore::new();
        assert!(!store.contains(triple(1, 2, 3)));
        store.add(triple(1, 2, 3), TripleFlags::empty());
        assert!(store.contains(triple(1, 2, 3)));
    }
}
