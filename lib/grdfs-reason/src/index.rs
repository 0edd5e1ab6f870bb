use crate::error::ReasonerError;
use crate::vocab;
use grdfs_dict::Dictionary;
use grdfs_model::{KeyId, Triple, TripleFlags};
use grdfs_store::TripleStore;
use rustc_hash::{FxHashMap, FxHashSet};

/// `KeyId -> set<KeyId>` adjacency, the shape both schema relations
/// (subClassOf, subPropertyOf) and the domain/range maps share.
pub type TermMap = FxHashMap<KeyId, FxHashSet<KeyId>>;

/// The reasoner's working state: three disjoint triple buckets, the schema
/// adjacency maps built from them, and the membership-property set.
///
/// Bucketing relies on the five schema/type vocabulary terms being the
/// first five terms ever looked up in a fresh [`Dictionary`], which
/// [`ReasonerIndex::new`] guarantees by looking them up itself, in a fixed
/// order, before accepting any other triple.
pub struct ReasonerIndex {
    pub(crate) schema_triples: TripleStore,
    pub(crate) type_triples: TripleStore,
    pub(crate) triples: TripleStore,

    pub(crate) sc_successors: TermMap,
    pub(crate) sc_predecessors: TermMap,
    pub(crate) sp_successors: TermMap,
    pub(crate) sp_predecessors: TermMap,
    pub(crate) dom_triples: TermMap,
    pub(crate) rng_triples: TermMap,

    pub(crate) sc_terms: FxHashSet<KeyId>,
    pub(crate) sp_terms: FxHashSet<KeyId>,
    pub(crate) membership_properties: FxHashSet<KeyId>,

    pub(crate) sub_class_of: KeyId,
    pub(crate) sub_property_of: KeyId,
    pub(crate) domain: KeyId,
    pub(crate) range: KeyId,
    pub(crate) rdf_type: KeyId,

    inferred_triples: usize,
    inferred_duplicates: usize,
}

impl ReasonerIndex {
    /// Registers the schema vocabulary against `dict` and returns an empty
    /// index. `dict` need not be empty, but the five schema terms must not
    /// already be tagged with a different kind (they are looked up as
    /// plain IRIs).
    pub fn new(dict: &mut Dictionary) -> Result<Self, ReasonerError> {
        let sub_class_of = dict.lookup(vocab::RDFS_SUBCLASS_OF)?;
        let sub_property_of = dict.lookup(vocab::RDFS_SUBPROPERTY_OF)?;
        let domain = dict.lookup(vocab::RDFS_DOMAIN)?;
        let range = dict.lookup(vocab::RDFS_RANGE)?;
        let rdf_type = dict.lookup(vocab::RDF_TYPE)?;

        Ok(Self {
            schema_triples: TripleStore::new(),
            type_triples: TripleStore::new(),
            triples: TripleStore::new(),
            sc_successors: TermMap::default(),
            sc_predecessors: TermMap::default(),
            sp_successors: TermMap::default(),
            sp_predecessors: TermMap::default(),
            dom_triples: TermMap::default(),
            rng_triples: TermMap::default(),
            sc_terms: FxHashSet::default(),
            sp_terms: FxHashSet::default(),
            membership_properties: FxHashSet::default(),
            sub_class_of,
            sub_property_of,
            domain,
            range,
            rdf_type,
            inferred_triples: 0,
            inferred_duplicates: 0,
        })
    }

    fn is_schema_property(&self, predicate: KeyId) -> bool {
        predicate.as_u64() <= self.range.as_u64()
    }

    #[must_use]
    pub fn inferred_triples(&self) -> usize {
        self.inferred_triples
    }

    #[must_use]
    pub fn inferred_duplicates(&self) -> usize {
        self.inferred_duplicates
    }

    #[must_use]
    pub fn triples(&self) -> &TripleStore {
        &self.triples
    }

    #[must_use]
    pub fn type_triples(&self) -> &TripleStore {
        &self.type_triples
    }

    #[must_use]
    pub fn schema_triples(&self) -> &TripleStore {
        &self.schema_triples
    }

    /// Total number of stored triples across all three buckets.
    #[must_use]
    pub fn size(&self) -> usize {
        self.schema_triples.size() + self.type_triples.size() + self.triples.size()
    }

    /// Yields every triple across all three buckets, schema first, then
    /// rdf:type, then everything else — the order the CLI driver serializes
    /// output in.
    pub fn iter_all(&self) -> impl Iterator<Item = Triple> + '_ {
        self.schema_triples
            .iter_all()
            .chain(self.type_triples.iter_all())
            .chain(self.triples.iter_all())
    }

    /// Files `t` into the appropriate bucket, updates schema adjacency on
    /// novel schema triples, and tracks container-membership properties.
    /// Returns whether the triple was newly stored.
    pub fn add(
        &mut self,
        dict: &Dictionary,
        t: Triple,
        flags: TripleFlags,
    ) -> Result<bool, ReasonerError> {
        let inserted = if self.is_schema_property(t.predicate) {
            let inserted = self.schema_triples.add(t, flags);
            if inserted {
                if t.predicate == self.sub_class_of {
                    self.sc_successors.entry(t.subject).or_default().insert(t.object);
                    self.sc_predecessors.entry(t.object).or_default().insert(t.subject);
                    self.sc_terms.insert(t.subject);
                    self.sc_terms.insert(t.object);
                } else if t.predicate == self.sub_property_of {
                    self.sp_successors.entry(t.subject).or_default().insert(t.object);
                    self.sp_predecessors.entry(t.object).or_default().insert(t.subject);
                    self.sp_terms.insert(t.subject);
                    self.sp_terms.insert(t.object);
                } else if t.predicate == self.domain {
                    self.dom_triples.entry(t.subject).or_default().insert(t.object);
                } else if t.predicate == self.range {
                    self.rng_triples.entry(t.subject).or_default().insert(t.object);
                }
            }
            inserted
        } else if t.predicate == self.rdf_type {
            self.type_triples.add(t, flags)
        } else {
            self.triples.add(t, flags)
        };

        if !self.membership_properties.contains(&t.predicate) {
            let predicate_uri = dict.find(t.predicate).unwrap_or_default();
            if predicate_uri.starts_with(vocab::RDF_MEMBER_PREFIX) {
                self.membership_properties.insert(t.predicate);
            }
        }

        if flags.contains(TripleFlags::ENTAILED) {
            if inserted {
                self.inferred_triples += 1;
            } else {
                self.inferred_duplicates += 1;
            }
        }

        Ok(inserted)
    }

    /// Injects the fixed axiomatic RDFS triples plus the per-membership-
    /// property triples for every `rdf:_N` predicate seen so far.
    pub fn add_axiomatic_triples(&mut self, dict: &mut Dictionary) -> Result<(), ReasonerError> {
        crate::axioms::add_axiomatic_triples(self, dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple_str(dict: &mut Dictionary, s: &str, p: &str, o: &str) -> Triple {
        Triple::new(dict.lookup(s).unwrap(), dict.lookup(p).unwrap(), dict.lookup(o).unwrap())
    }

    #[test]
    fn schema_triple_updates_adjacency() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let t = triple_str(&mut dict, "http://ex/A", vocab::RDFS_SUBCLASS_OF, "http://ex/B");
        assert!(index.add(&dict, t, TripleFlags::empty()).unwrap());
        assert!(index.sc_successors[&t.subject].contains(&t.object));
        assert!(index.sc_predecessors[&t.object].contains(&t.subject));
    }

    #[test]
    fn type_triple_goes_to_type_bucket() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let t = triple_str(&mut dict, "http://ex/x", vocab::RDF_TYPE, "http://ex/A");
        index.add(&dict, t, TripleFlags::empty()).unwrap();
        assert_eq!(index.type_triples.size(), 1);
        assert_eq!(index.schema_triples.size(), 0);
    }

    #[test]
    fn non_schema_triple_goes_to_instance_bucket() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let t = triple_str(&mut dict, "http://ex/a", "http://ex/knows", "http://ex/b");
        index.add(&dict, t, TripleFlags::empty()).unwrap();
        assert_eq!(index.triples.size(), 1);
    }

    #[test]
    fn membership_property_is_detected() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let member_predicate = format!("{}1", vocab::RDF_MEMBER_PREFIX);
        let t = triple_str(&mut dict, "http://ex/bag", &member_predicate, "http://ex/item");
        index.add(&dict, t, TripleFlags::empty()).unwrap();
        assert!(index.membership_properties.contains(&t.predicate));
    }

    #[test]
    fn entailed_duplicate_increments_duplicate_counter() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let t = triple_str(&mut dict, "http://ex/a", "http://ex/knows", "http://ex/b");
        index.add(&dict, t, TripleFlags::empty()).unwrap();
        index.add(&dict, t, TripleFlags::ENTAILED).unwrap();
        assert_eq!(index.inferred_duplicates(), 1);
        assert_eq!(index.inferred_triples(), 0);
    }
}
