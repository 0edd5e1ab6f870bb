//! The transitive-closure sweep (rules 5, 11) and the join-driven
//! inheritance/expansion rules (7, 2, 3, 9), plus the extra full-RDFS
//! rules (1, 4a, 4b, 6, 8, 10, 12, 13).

use crate::error::{CycleError, ReasonerError, SchemaGraph};
use crate::index::{ReasonerIndex, TermMap};
use crate::vocab::{self, RuleSet};
use grdfs_dict::Dictionary;
use grdfs_kernel::{KernelRuntime, SuccessorTable};
use grdfs_model::{KeyId, Triple, TripleFlags};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Computes the transitive closure of `successors` in place using an
/// inverse-topological sweep: start from the roots (nodes with incoming
/// edges in `predecessors` but none outgoing in `successors`), and merge
/// each node's successor set into every one of its predecessors as the
/// worklist drains upward. A schema graph with no roots is cyclic.
pub fn transitive_closure(
    successors: &mut TermMap,
    predecessors: &TermMap,
    graph: SchemaGraph,
) -> Result<(), CycleError> {
    let mut queue: VecDeque<KeyId> = VecDeque::new();
    let mut finished: FxHashSet<KeyId> = FxHashSet::default();

    for &node in predecessors.keys() {
        if !successors.contains_key(&node) {
            queue.push_back(node);
        }
    }

    if queue.is_empty() && !predecessors.is_empty() {
        return Err(CycleError { graph });
    }

    while let Some(current) = queue.pop_front() {
        if let Some(parents) = predecessors.get(&current) {
            for &parent in parents {
                if finished.insert(parent) {
                    queue.push_back(parent);
                }
            }
        }

        if let Some(direct) = successors.get(&current).cloned() {
            for child in direct {
                if let Some(grandchildren) = successors.get(&child).cloned() {
                    successors.entry(current).or_default().extend(grandchildren);
                }
            }
        }
    }

    Ok(())
}

/// Materializes every closed (subject, property, object) edge from a
/// successor map computed by [`transitive_closure`] as an ENTAILED triple.
fn materialize_transitive_closure(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    successors: &TermMap,
    property: KeyId,
) -> Result<(), ReasonerError> {
    let edges: Vec<(KeyId, KeyId)> = successors
        .iter()
        .flat_map(|(&subject, objects)| objects.iter().map(move |&object| (subject, object)))
        .collect();
    for (subject, object) in edges {
        index.add(dict, Triple::new(subject, property, object), TripleFlags::ENTAILED)?;
    }
    Ok(())
}

fn apply_rule7(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    runtime: &dyn KernelRuntime,
) -> Result<usize, ReasonerError> {
    let table = SuccessorTable::build(&index.sp_successors);
    let probe = index.triples.predicates().to_vec();
    let subjects = index.triples.subjects().to_vec();
    let objects = index.triples.objects().to_vec();

    let counts = runtime.count_results(&probe, &table)?;
    let output = runtime.materialize_results(&probe, &table, &counts, None)?;

    let mut added = 0;
    for (&i, &successor) in output.source_index.iter().zip(output.result.iter()) {
        let t = Triple::new(subjects[i as usize], successor, objects[i as usize]);
        if index.add(dict, t, TripleFlags::ENTAILED)? {
            added += 1;
        }
    }
    Ok(added)
}

fn fire_rule7_to_fixpoint(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    runtime: &dyn KernelRuntime,
) -> Result<(), ReasonerError> {
    loop {
        if apply_rule7(index, dict, runtime)? == 0 {
            break;
        }
    }
    Ok(())
}

fn apply_rule2_domain(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    runtime: &dyn KernelRuntime,
) -> Result<(), ReasonerError> {
    let table = SuccessorTable::build(&index.dom_triples);
    let probe = index.triples.predicates().to_vec();
    let subjects = index.triples.subjects().to_vec();

    let counts = runtime.count_results(&probe, &table)?;
    let output = runtime.materialize_results(&probe, &table, &counts, None)?;

    let rdf_type = index.rdf_type;
    for (&i, &class) in output.source_index.iter().zip(output.result.iter()) {
        let t = Triple::new(subjects[i as usize], rdf_type, class);
        index.add(dict, t, TripleFlags::ENTAILED)?;
    }
    Ok(())
}

fn apply_rule3_range(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    runtime: &dyn KernelRuntime,
) -> Result<(), ReasonerError> {
    let table = SuccessorTable::build(&index.rng_triples);
    let probe = index.triples.predicates().to_vec();
    let objects = index.triples.objects().to_vec();

    let counts = runtime.count_results(&probe, &table)?;
    let output = runtime.materialize_results(&probe, &table, &counts, None)?;

    let rdf_type = index.rdf_type;
    for (&i, &class) in output.source_index.iter().zip(output.result.iter()) {
        let subject = objects[i as usize];
        // Guard: a literal can never be the subject of an entailed triple.
        if subject.is_literal() {
            continue;
        }
        let t = Triple::new(subject, rdf_type, class);
        index.add(dict, t, TripleFlags::ENTAILED)?;
    }
    Ok(())
}

fn apply_rule9_subclass_inheritance(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    runtime: &dyn KernelRuntime,
) -> Result<(), ReasonerError> {
    let table = SuccessorTable::build(&index.sc_successors);
    let probe = index.type_triples.objects().to_vec();
    let subjects = index.type_triples.subjects().to_vec();

    let counts = runtime.count_results(&probe, &table)?;
    let output = runtime.materialize_results(&probe, &table, &counts, None)?;

    let rdf_type = index.rdf_type;
    for (&i, &class) in output.source_index.iter().zip(output.result.iter()) {
        let t = Triple::new(subjects[i as usize], rdf_type, class);
        index.add(dict, t, TripleFlags::ENTAILED)?;
    }
    Ok(())
}

/// Rules 1, 4a, 4b: every predicate is an `rdf:Property`, every subject and
/// non-literal object is an `rdfs:Resource`. Fires only over the general
/// instance bucket, matching `OpenCLReasoner::applyTypingRules`'s scope over
/// `triples_`; schema and `rdf:type` triples are not themselves re-typed.
fn apply_typing_rules(index: &mut ReasonerIndex, dict: &mut Dictionary) -> Result<(), ReasonerError> {
    let property = dict.lookup(vocab::RDF_PROPERTY)?;
    let resource = dict.lookup(vocab::RDFS_RESOURCE)?;
    let rdf_type = index.rdf_type;

    let snapshot: Vec<Triple> = index.triples.iter_all().collect();
    for t in snapshot {
        index.add(dict, Triple::new(t.predicate, rdf_type, property), TripleFlags::ENTAILED)?;
        index.add(dict, Triple::new(t.subject, rdf_type, resource), TripleFlags::ENTAILED)?;
        if !t.object.is_literal() {
            index.add(dict, Triple::new(t.object, rdf_type, resource), TripleFlags::ENTAILED)?;
        }
    }
    Ok(())
}

/// Rules 6, 8, 10, 12, 13: reflexive/typed entailments driven off existing
/// `rdf:type` triples. Returns whether any new `subPropertyOf` triple was
/// produced (rule 12), which requires re-closing and re-firing rule 7.
fn apply_reflexive_rules(index: &mut ReasonerIndex, dict: &mut Dictionary) -> Result<bool, ReasonerError> {
    let property = dict.lookup(vocab::RDF_PROPERTY)?;
    let class = dict.lookup(vocab::RDFS_CLASS)?;
    let container_membership_property = dict.lookup(vocab::RDFS_CONTAINER_MEMBERSHIP_PROPERTY)?;
    let datatype = dict.lookup(vocab::RDFS_DATATYPE)?;
    let member = dict.lookup(vocab::RDFS_MEMBER)?;
    let literal = dict.lookup(vocab::RDFS_LITERAL)?;
    let resource = dict.lookup(vocab::RDFS_RESOURCE)?;
    let sub_property_of = index.sub_property_of;
    let sub_class_of = index.sub_class_of;

    let snapshot: Vec<Triple> = index.type_triples.iter_all().collect();
    let mut fired_rule12 = false;
    for t in snapshot {
        if t.object == property {
            index.add(dict, Triple::new(t.subject, sub_property_of, t.subject), TripleFlags::ENTAILED)?;
        } else if t.object == class {
            index.add(dict, Triple::new(t.subject, sub_class_of, resource), TripleFlags::ENTAILED)?;
            index.add(dict, Triple::new(t.subject, sub_class_of, t.subject), TripleFlags::ENTAILED)?;
        } else if t.object == container_membership_property {
            if index.add(dict, Triple::new(t.subject, sub_property_of, member), TripleFlags::ENTAILED)? {
                fired_rule12 = true;
            }
        } else if t.object == datatype {
            index.add(dict, Triple::new(t.subject, sub_class_of, literal), TripleFlags::ENTAILED)?;
        }
    }
    Ok(fired_rule12)
}

/// Runs the full materialization pipeline over `index` in the fixed firing
/// order from rule documentation: 5, 7*, 2, 3, 11, 9, then (RDFS only)
/// 1/4a/4b/6/8/10/12/13, with rule 12 re-triggering a 5/7 re-close when it
/// produces new edges.
pub fn compute_closure(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
    runtime: &dyn KernelRuntime,
    rule_set: RuleSet,
) -> Result<(), ReasonerError> {
    let sub_property_of = index.sub_property_of;
    let sub_class_of = index.sub_class_of;

    transitive_closure(&mut index.sp_successors, &index.sp_predecessors, SchemaGraph::SubPropertyOf)?;
    materialize_transitive_closure(index, dict, &index.sp_successors.clone(), sub_property_of)?;
    fire_rule7_to_fixpoint(index, dict, runtime)?;
    apply_rule2_domain(index, dict, runtime)?;
    apply_rule3_range(index, dict, runtime)?;
    transitive_closure(&mut index.sc_successors, &index.sc_predecessors, SchemaGraph::SubClassOf)?;
    materialize_transitive_closure(index, dict, &index.sc_successors.clone(), sub_class_of)?;
    apply_rule9_subclass_inheritance(index, dict, runtime)?;

    if rule_set == RuleSet::Rdfs {
        apply_typing_rules(index, dict)?;
        let fired_rule12 = apply_reflexive_rules(index, dict)?;
        if fired_rule12 {
            transitive_closure(&mut index.sp_successors, &index.sp_predecessors, SchemaGraph::SubPropertyOf)?;
            materialize_transitive_closure(index, dict, &index.sp_successors.clone(), sub_property_of)?;
            fire_rule7_to_fixpoint(index, dict, runtime)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grdfs_kernel::HostKernelRuntime;

    fn lookup(dict: &mut Dictionary, s: &str) -> KeyId {
        dict.lookup(s).unwrap()
    }

    #[test]
    fn subclass_transitivity_scenario() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let a = lookup(&mut dict, "http://ex/A");
        let b = lookup(&mut dict, "http://ex/B");
        let c = lookup(&mut dict, "http://ex/C");
        index
            .add(&dict, Triple::new(a, index.sub_class_of, b), TripleFlags::empty())
            .unwrap();
        index
            .add(&dict, Triple::new(b, index.sub_class_of, c), TripleFlags::empty())
            .unwrap();

        let runtime = HostKernelRuntime::default();
        compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap();

        assert!(index.schema_triples.contains(Triple::new(a, index.sub_class_of, c)));
    }

    #[test]
    fn subclass_inheritance_scenario() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let a = lookup(&mut dict, "http://ex/A");
        let b = lookup(&mut dict, "http://ex/B");
        let x = lookup(&mut dict, "http://ex/x");
        index
            .add(&dict, Triple::new(a, index.sub_class_of, b), TripleFlags::empty())
            .unwrap();
        index.add(&dict, Triple::new(x, index.rdf_type, a), TripleFlags::empty()).unwrap();

        let runtime = HostKernelRuntime::default();
        compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap();

        assert!(index.type_triples.contains(Triple::new(x, index.rdf_type, b)));
    }

    #[test]
    fn combined_subclass_and_type_depth_two() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let a = lookup(&mut dict, "http://ex/A");
        let b = lookup(&mut dict, "http://ex/B");
        let c = lookup(&mut dict, "http://ex/C");
        let x = lookup(&mut dict, "http://ex/x");
        index.add(&dict, Triple::new(a, index.sub_class_of, b), TripleFlags::empty()).unwrap();
        index.add(&dict, Triple::new(b, index.sub_class_of, c), TripleFlags::empty()).unwrap();
        index.add(&dict, Triple::new(x, index.rdf_type, a), TripleFlags::empty()).unwrap();

        let runtime = HostKernelRuntime::default();
        compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap();

        assert!(index.type_triples.contains(Triple::new(x, index.rdf_type, a)));
        assert!(index.type_triples.contains(Triple::new(x, index.rdf_type, b)));
        assert!(index.type_triples.contains(Triple::new(x, index.rdf_type, c)));
        assert!(index.schema_triples.contains(Triple::new(a, index.sub_class_of, c)));
        assert_eq!(index.size(), 6);
    }

    #[test]
    fn subproperty_inheritance_scenario() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let p = lookup(&mut dict, "http://ex/p");
        let q = lookup(&mut dict, "http://ex/q");
        let a = lookup(&mut dict, "http://ex/a");
        let b = lookup(&mut dict, "http://ex/b");
        index
            .add(&dict, Triple::new(p, index.sub_property_of, q), TripleFlags::empty())
            .unwrap();
        index.add(&dict, Triple::new(a, p, b), TripleFlags::empty()).unwrap();

        let runtime = HostKernelRuntime::default();
        compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap();

        assert!(index.triples.contains(Triple::new(a, q, b)));
    }

    #[test]
    fn domain_expansion_scenario() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let p = lookup(&mut dict, "http://ex/p");
        let d = lookup(&mut dict, "http://ex/D");
        let a = lookup(&mut dict, "http://ex/a");
        let b = lookup(&mut dict, "http://ex/b");
        index.add(&dict, Triple::new(p, index.domain, d), TripleFlags::empty()).unwrap();
        index.add(&dict, Triple::new(a, p, b), TripleFlags::empty()).unwrap();

        let runtime = HostKernelRuntime::default();
        compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap();

        assert!(index.type_triples.contains(Triple::new(a, index.rdf_type, d)));
    }

    #[test]
    fn range_guard_skips_literal_subject() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let p = lookup(&mut dict, "http://ex/p");
        let r = lookup(&mut dict, "http://ex/R");
        let a = lookup(&mut dict, "http://ex/a");
        let literal = dict.lookup_with("lit", grdfs_model::KeyId::set_literal).unwrap();
        index.add(&dict, Triple::new(p, index.range, r), TripleFlags::empty()).unwrap();
        index.add(&dict, Triple::new(a, p, literal), TripleFlags::empty()).unwrap();

        let runtime = HostKernelRuntime::default();
        compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap();

        assert_eq!(index.type_triples.size(), 0);
    }

    #[test]
    fn self_loop_schema_triple_is_a_cycle_error() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let a = lookup(&mut dict, "http://ex/A");
        index.add(&dict, Triple::new(a, index.sub_class_of, a), TripleFlags::empty()).unwrap();

        let runtime = HostKernelRuntime::default();
        let err = compute_closure(&mut index, &mut dict, &runtime, RuleSet::RhoDf).unwrap_err();
        assert!(matches!(err, ReasonerError::Cycle(_)));
    }
}
