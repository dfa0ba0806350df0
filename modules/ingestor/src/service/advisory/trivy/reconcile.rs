use std::collections::{BTreeMap, BTreeSet};
use vulnforge_entity::{source::Source, vulnerable_software::VulnerableSoftware};

/// Merge the previously stored affected-software list with the entries
/// derived from the current ingestion into the new authoritative list.
///
/// A source can only retract its own prior claims: an entry missing from the
/// incoming batch is removed only if no other source still attributes it.
/// Duplicate claims within the batch collapse to their first occurrence, so
/// repeating an identical ingestion leaves the result unchanged.
pub fn reconcile(
    old: Vec<VulnerableSoftware>,
    new: Vec<VulnerableSoftware>,
    source: Source,
) -> Vec<VulnerableSoftware> {
    let mut incoming = BTreeMap::new();
    let mut order = Vec::new();

    for mut entry in new {
        let claim = entry.claim();
        if !incoming.contains_key(&claim) {
            entry.attributions = BTreeSet::from([source]);
            order.push(claim.clone());
            incoming.insert(claim, entry);
        }
    }

    let mut result = Vec::new();

    for mut entry in old {
        if incoming.remove(&entry.claim()).is_some() {
            // confirmed by the current ingestion, prior attributions stay
            entry.attributions.insert(source);
            result.push(entry);
        } else {
            // the current source no longer asserts this claim
            entry.attributions.remove(&source);
            if !entry.attributions.is_empty() {
                result.push(entry);
            }
        }
    }

    for claim in order {
        if let Some(entry) = incoming.remove(&claim) {
            result.push(entry);
        }
    }

    result
}
