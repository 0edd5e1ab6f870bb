//! The fixed axiomatic RDFS triple set (full-RDFS rule set only). The list
//! is finite and specified, not computed, so it is a static table rather
//! than a generator.

use crate::error::ReasonerError;
use crate::index::ReasonerIndex;
use crate::vocab;
use grdfs_dict::Dictionary;
use grdfs_model::{Triple, TripleFlags};

pub(crate) fn add_axiomatic_triples(
    index: &mut ReasonerIndex,
    dict: &mut Dictionary,
) -> Result<(), ReasonerError> {
    let rdf_type = index.rdf_type;
    let domain = index.domain;
    let range = index.range;
    let sub_class_of = index.sub_class_of;
    let sub_property_of = index.sub_property_of;

    let resource = dict.lookup(vocab::RDFS_RESOURCE)?;
    let property = dict.lookup(vocab::RDF_PROPERTY)?;
    let class = dict.lookup(vocab::RDFS_CLASS)?;
    let literal = dict.lookup(vocab::RDFS_LITERAL)?;
    let statement = dict.lookup(vocab::RDF_STATEMENT)?;
    let container = dict.lookup(vocab::RDFS_CONTAINER)?;
    let container_membership_property = dict.lookup(vocab::RDFS_CONTAINER_MEMBERSHIP_PROPERTY)?;

    let member = dict.lookup(vocab::RDFS_MEMBER)?;
    let see_also = dict.lookup(vocab::RDFS_SEE_ALSO)?;
    let is_defined_by = dict.lookup(vocab::RDFS_IS_DEFINED_BY)?;
    let comment = dict.lookup(vocab::RDFS_COMMENT)?;
    let label = dict.lookup(vocab::RDFS_LABEL)?;

    let subject_term = dict.lookup(vocab::RDF_SUBJECT)?;
    let predicate_term = dict.lookup(vocab::RDF_PREDICATE)?;
    let object_term = dict.lookup(vocab::RDF_OBJECT)?;
    let first = dict.lookup(vocab::RDF_FIRST)?;
    let rest = dict.lookup(vocab::RDF_REST)?;
    let value = dict.lookup(vocab::RDF_VALUE)?;

    let list = dict.lookup(vocab::RDF_LIST)?;
    let alt = dict.lookup(vocab::RDF_ALT)?;
    let bag = dict.lookup(vocab::RDF_BAG)?;
    let seq = dict.lookup(vocab::RDF_SEQ)?;
    let xml_literal = dict.lookup(vocab::RDF_XML_LITERAL)?;
    let datatype = dict.lookup(vocab::RDFS_DATATYPE)?;

    let axiomatic_triples = [
        Triple::new(rdf_type, domain, resource),
        Triple::new(domain, domain, property),
        Triple::new(range, domain, property),
        Triple::new(sub_property_of, domain, property),
        Triple::new(sub_class_of, domain, property),
        Triple::new(subject_term, domain, statement),
        Triple::new(predicate_term, domain, statement),
        Triple::new(object_term, domain, statement),
        Triple::new(member, domain, resource),
        Triple::new(first, domain, list),
        Triple::new(rest, domain, list),
        Triple::new(see_also, domain, resource),
        Triple::new(is_defined_by, domain, resource),
        Triple::new(comment, domain, resource),
        Triple::new(label, domain, resource),
        Triple::new(value, domain, resource),
        Triple::new(rdf_type, range, class),
        Triple::new(domain, range, class),
        Triple::new(range, range, class),
        Triple::new(sub_property_of, range, property),
        Triple::new(sub_class_of, range, class),
        Triple::new(subject_term, range, resource),
        Triple::new(predicate_term, range, resource),
        Triple::new(object_term, range, resource),
        Triple::new(member, range, resource),
        Triple::new(rest, range, resource),
        Triple::new(see_also, range, resource),
        Triple::new(is_defined_by, range, resource),
        Triple::new(comment, range, literal),
        Triple::new(label, range, literal),
        Triple::new(value, range, resource),
        Triple::new(alt, sub_class_of, container),
        Triple::new(bag, sub_class_of, container),
        Triple::new(seq, sub_class_of, container),
        Triple::new(container_membership_property, sub_class_of, property),
        Triple::new(xml_literal, rdf_type, datatype),
        Triple::new(xml_literal, sub_class_of, literal),
        Triple::new(datatype, sub_class_of, class),
    ];

    for t in axiomatic_triples {
        index.add(dict, t, TripleFlags::ENTAILED)?;
    }

    let membership_properties: Vec<_> = index.membership_properties.iter().copied().collect();
    for membership_property in membership_properties {
        index.add(
            dict,
            Triple::new(membership_property, rdf_type, container_membership_property),
            TripleFlags::ENTAILED,
        )?;
        index.add(dict, Triple::new(membership_property, domain, resource), TripleFlags::ENTAILED)?;
        index.add(dict, Triple::new(membership_property, range, resource), TripleFlags::ENTAILED)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axiomatic_triples_are_entailed_and_present() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        index.add_axiomatic_triples(&mut dict).unwrap();
        assert!(index.size() >= 35);
        assert_eq!(index.inferred_duplicates(), 0);
    }

    #[test]
    fn membership_property_gets_its_own_axioms() {
        let mut dict = Dictionary::new().unwrap();
        let mut index = ReasonerIndex::new(&mut dict).unwrap();
        let bag = dict.lookup("http://ex/bag").unwrap();
        let member_predicate = dict.lookup(&format!("{}1", vocab::RDF_MEMBER_PREFIX)).unwrap();
        let item = dict.lookup("http://ex/item").unwrap();
        index
            .add(&dict, Triple::new(bag, member_predicate, item), TripleFlags::empty())
            .unwrap();
        let size_before = index.size();
        index.add_axiomatic_triples(&mut dict).unwrap();
        assert!(index.size() > size_before + 35);
    }
}
