use crate::error::KernelError;
use crate::pair_index::PairIndex;
use crate::table::SuccessorTable;
use grdfs_model::KeyId;

/// Phase A output for one input element: where its successor run starts in
/// the schema table (`None` if the input has no match) and how many there
/// are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinCount {
    pub offset: Option<u32>,
    pub count: u32,
}

/// Phase B output, flattened: `source_index[i]` is the position in the
/// original input array that produced `result[i]`.
#[derive(Debug, Clone, Default)]
pub struct JoinOutput {
    pub source_index: Vec<u32>,
    pub result: Vec<KeyId>,
}

impl JoinOutput {
    #[must_use]
    pub fn len(&self) -> usize {
        self.result.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// A closure that, given a row's position in the instance input array and
/// the successor key the join matched, returns the `(subject, object)` pair
/// that would be stored were this row to fire. Used only to probe the
/// dedup `PairIndex`; it never constructs the final triple.
pub type PairKeyFn<'a> = dyn Fn(usize, KeyId) -> (KeyId, KeyId) + 'a;

/// Abstracts the data-parallel backend the closure engine drives its
/// inheritance joins through (rules 2, 3, 7, 9 in §4.5). `HostKernelRuntime`
/// is the only backend this crate ships; a GPU backend would implement the
/// same two-phase contract.
pub trait KernelRuntime {
    /// Preferred work-group size for this backend; global sizes submitted to
    /// it are conceptually rounded up to a multiple of this value.
    fn preferred_work_group_size(&self) -> usize;

    /// Phase A: for every input element, count its matches in `table`.
    fn count_results(
        &self,
        input: &[KeyId],
        table: &SuccessorTable,
    ) -> Result<Vec<JoinCount>, KernelError>;

    /// Phase B: for every input element and every one of its matches,
    /// produce an output row. `dedup`, when given, skips matches whose
    /// `(subject, object)` pair (per `pair_key`) is already stored.
    fn materialize_results(
        &self,
        input: &[KeyId],
        table: &SuccessorTable,
        counts: &[JoinCount],
        dedup: Option<(&PairIndex, &PairKeyFn<'_>)>,
    ) -> Result<JoinOutput, KernelError>;
}

/// A serial, single-threaded CPU implementation of [`KernelRuntime`]. The
/// two-phase shape (count then materialize, with an explicit prefix sum in
/// between) is kept even though a single thread gains nothing from it,
/// because it is the contract a GPU backend would need to honor.
#[derive(Debug, Clone, Copy)]
pub struct HostKernelRuntime {
    work_group_size: usize,
}

impl HostKernelRuntime {
    #[must_use]
    pub const fn new(work_group_size: usize) -> Self {
        Self { work_group_size }
    }
}

impl Default for HostKernelRuntime {
    fn default() -> Self {
        Self::new(256)
    }
}

impl KernelRuntime for HostKernelRuntime {
    fn preferred_work_group_size(&self) -> usize {
        self.work_group_size
    }

    fn count_results(
        &self,
        input: &[KeyId],
        table: &SuccessorTable,
    ) -> Result<Vec<JoinCount>, KernelError> {
        let mut counts = Vec::with_capacity(input.len());
        let mut running_offset: u32 = 0;
        for &key in input {
            let successors = table.successors(key);
            if successors.is_empty() {
                counts.push(JoinCount {
                    offset: None,
                    count: 0,
                });
                continue;
            }
            #[expect(clippy::cast_possible_truncation)]
            let count = successors.len() as u32;
            counts.push(JoinCount {
                offset: Some(running_offset),
                count,
            });
            running_offset = running_offset
                .checked_add(count)
                .ok_or_else(|| KernelError::Allocation("join scan total overflowed u32".into()))?;
        }
        Ok(counts)
    }

    fn materialize_results(
        &self,
        input: &[KeyId],
        table: &SuccessorTable,
        counts: &[JoinCount],
        dedup: Option<(&PairIndex, &PairKeyFn<'_>)>,
    ) -> Result<JoinOutput, KernelError> {
        if input.len() != counts.len() {
            return Err(KernelError::Execution(
                "input and count arrays have different lengths".into(),
            ));
        }
        let scan_total: usize = counts.iter().map(|c| c.count as usize).sum();
        let mut output = JoinOutput {
            source_index: Vec::with_capacity(scan_total),
            result: Vec::with_capacity(scan_total),
        };
        for (i, &key) in input.iter().enumerate() {
            if counts[i].count == 0 {
                continue;
            }
            for &successor in table.successors(key) {
                if let Some((existing, pair_key)) = dedup {
                    let (subject, object) = pair_key(i, successor);
                    if existing.contains(subject, object) {
                        continue;
                    }
                }
                #[expect(clippy::cast_possible_truncation)]
                output.source_index.push(i as u32);
                output.result.push(successor);
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::{FxHashMap, FxHashSet};

    fn table_with(entries: &[(u64, &[u64])]) -> SuccessorTable {
        let mut map: FxHashMap<KeyId, FxHashSet<KeyId>> = FxHashMap::default();
        for &(key, successors) in entries {
            let set = map.entry(KeyId::from_raw(key)).or_default();
            for &s in successors {
                set.insert(KeyId::from_raw(s));
            }
        }
        SuccessorTable::build(&map)
    }

    #[test]
    fn count_then_materialize_round_trips() {
        let table = table_with(&[(1, &[10, 11]), (2, &[20])]);
        let runtime = HostKernelRuntime::default();
        let input = [KeyId::from_raw(1), KeyId::from_raw(2), KeyId::from_raw(3)];
        let counts = runtime.count_results(&input, &table).unwrap();
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].count, 1);
        assert_eq!(counts[2].count, 0);
        assert!(counts[2].offset.is_none());

        let output = runtime
            .materialize_results(&input, &table, &counts, None)
            .unwrap();
        assert_eq!(output.len(), 3);
        assert_eq!(output.source_index, vec![0, 0, 1]);
    }

    #[test]
    fn dedup_skips_already_stored_pairs() {
        let table = table_with(&[(1, &[10, 11])]);
        let runtime = HostKernelRuntime::default();
        let input = [KeyId::from_raw(1)];
        let counts = runtime.count_results(&input, &table).unwrap();

        let existing = PairIndex::build(std::iter::once((KeyId::from_raw(1), KeyId::from_raw(10))));
        let pair_key: &PairKeyFn<'_> = &|_i, successor| (KeyId::from_raw(1), successor);
        let output = runtime
            .materialize_results(&input, &table, &counts, Some((&existing, pair_key)))
            .unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.result, vec![KeyId::from_raw(11)]);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let table = table_with(&[]);
        let runtime = HostKernelRuntime::default();
        let counts = runtime.count_results(&[], &table).unwrap();
        let output = runtime.materialize_results(&[], &table, &counts, None).unwrap();
        assert!(output.is_empty());
    }
}
