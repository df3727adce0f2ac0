//! Facet domains: the distinct classes and units available for a subject.
//!
//! Derived from the subject restriction alone, never from the other filters,
//! so a user who has narrowed one facet still sees every value of the other
//! facets for re-selection.

use serde::Serialize;
use std::collections::HashSet;

use pyqdash_core::types::Chapter;

/// Distinct `class` and `unit` values for one subject, in first-seen
/// dataset order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct FacetDomain {
    pub classes: Vec<String>,
    pub units: Vec<String>,
}

/// Collect the facet domain for `active_subject` from the full dataset.
///
/// Subject comparison is case-sensitive exact match. Duplicates are
/// suppressed; order within each list is the order values first appear in
/// the dataset.
#[must_use]
pub fn facets_for(dataset: &[Chapter], active_subject: &str) -> FacetDomain {
    let mut domain = FacetDomain::default();
    let mut seen_classes: HashSet<&str> = HashSet::new();
    let mut seen_units: HashSet<&str> = HashSet::new();

    for record in dataset.iter().filter(|r| r.subject == active_subject) {
        if seen_classes.insert(&record.class) {
            domain.classes.push(record.class.clone());
        }
        if seen_units.insert(&record.unit) {
            domain.units.push(record.unit.clone());
        }
    }
    domain
}
