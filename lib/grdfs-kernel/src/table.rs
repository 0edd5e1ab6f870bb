use grdfs_model::KeyId;
use rustc_hash::{FxHashMap, FxHashSet};

/// A `KeyId -> [KeyId]` map flattened into a contiguous backing array, the
/// layout a data-parallel kernel would probe: a hash index from key to a
/// `(start, count)` run in a single flat successor array.
pub struct SuccessorTable {
    index: FxHashMap<KeyId, (u32, u32)>,
    flat: Vec<KeyId>,
}

impl SuccessorTable {
    #[must_use]
    pub fn build(map: &FxHashMap<KeyId, FxHashSet<KeyId>>) -> Self {
        let mut index = FxHashMap::default();
        let mut flat = Vec::new();
        for (key, successors) in map {
            if successors.is_empty() {
                continue;
            }
            #[expect(clippy::cast_possible_truncation)]
            let start = flat.len() as u32;
            flat.extend(successors.iter().copied());
            #[expect(clippy::cast_possible_truncation)]
            let count = successors.len() as u32;
            index.insert(*key, (start, count));
        }
        Self { index, flat }
    }

    #[must_use]
    pub fn successors(&self, key: KeyId) -> &[KeyId] {
        match self.index.get(&key) {
            Some(&(start, count)) => &self.flat[start as usize..(start + count) as usize],
            None => &[],
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: KeyId) -> bool {
        self.index.contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_successor_sets() {
        let mut map: FxHashMap<KeyId, FxHashSet<KeyId>> = FxHashMap::default();
        let a = KeyId::from_raw(1);
        let b = KeyId::from_raw(2);
        let c = KeyId::from_raw(3);
        map.entry(a).or_default().insert(b);
        map.entry(a).or_default().insert(c);

        let table = SuccessorTable::build(&map);
        let mut successors = table.successors(a).to_vec();
        successors.sort_by_key(KeyId::as_u64);
        assert_eq!(successors, vec![b, c]);
        assert!(table.successors(b).is_empty());
        assert!(!table.contains_key(b));
    }
}
