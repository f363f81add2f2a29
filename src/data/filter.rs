use std::collections::BTreeSet;

use super::model::Pendant;

// ---------------------------------------------------------------------------
// Criteria: which values are acceptable per attribute
// ---------------------------------------------------------------------------

/// One query's worth of filter constraints.
///
/// Every field is optional, and an absent or empty set places no constraint
/// on its attribute – the convention of optional query parameters, where
/// "nothing selected" means "show everything".  `preservation_statuses` is
/// the one conjunctive field: a record matches only if it holds every
/// required label, so a record with extra labels still matches.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Exact century match.
    pub century: Option<u32>,
    pub shapes: Option<BTreeSet<String>>,
    pub materials: Option<BTreeSet<String>>,
    pub regions: Option<BTreeSet<String>>,
    pub sizes: Option<BTreeSet<String>>,
    pub functions: Option<BTreeSet<String>>,
    /// Labels the record must ALL carry (criterion ⊆ record.preservation).
    pub preservation_statuses: Option<BTreeSet<String>>,
}

impl Criteria {
    /// Whether a record satisfies every present constraint.
    ///
    /// Unknown criterion values (a shape no record has) simply never match;
    /// they are not an error.
    pub fn matches(&self, p: &Pendant) -> bool {
        if let Some(century) = self.century {
            if p.century != century {
                return false;
            }
        }
        member(&self.shapes, &p.shape)
            && member(&self.materials, &p.material)
            && member(&self.regions, &p.region)
            && member(&self.sizes, &p.size)
            && member(&self.functions, &p.function)
            && has_all(&self.preservation_statuses, &p.preservation)
    }
}

/// Membership test with the unconstrained convention: an absent or empty
/// selection accepts every value.
fn member(selected: &Option<BTreeSet<String>>, value: &str) -> bool {
    match selected {
        Some(set) if !set.is_empty() => set.contains(value),
        _ => true,
    }
}

/// Conjunctive preservation test: every required label must be present on
/// the record.
fn has_all(required: &Option<BTreeSet<String>>, labels: &BTreeSet<String>) -> bool {
    match required {
        Some(req) if !req.is_empty() => req.is_subset(labels),
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Full-scan filter
// ---------------------------------------------------------------------------

/// Return the records passing all criteria, in storage order.
///
/// A stable full linear scan: the result is a subsequence of `records` –
/// no reordering, no duplication, no fabrication.  Deterministic for
/// identical inputs, and never an error on well-typed criteria.
pub fn apply<'a>(records: &'a [Pendant], criteria: &Criteria) -> Vec<&'a Pendant> {
    records.iter().filter(|p| criteria.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(xs: &[&str]) -> BTreeSet<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn pendant(name: &str, century: u32, shape: &str, preservation: &[&str]) -> Pendant {
        Pendant {
            name: name.to_string(),
            lat: 48.0,
            lon: 10.0,
            period: format!("{century}th century"),
            century,
            origin: "test".to_string(),
            shape: shape.to_string(),
            material: "silver".to_string(),
            region: "Central Europe".to_string(),
            size: "small".to_string(),
            function: "devotional".to_string(),
            preservation: labels(preservation),
            description: String::new(),
            collection_link: String::new(),
        }
    }

    /// The three-record collection used throughout: A(13, heart, intact),
    /// B(14, heart, broken), C(14, round, intact).
    fn abc() -> Vec<Pendant> {
        vec![
            pendant("A", 13, "heart", &["intact"]),
            pendant("B", 14, "heart", &["broken"]),
            pendant("C", 14, "round", &["intact"]),
        ]
    }

    fn names(result: &[&Pendant]) -> Vec<String> {
        result.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = abc();
        let result = apply(&records, &Criteria::default());
        assert_eq!(result.len(), records.len());
        assert_eq!(names(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_century_exact_match() {
        let records = abc();
        let criteria = Criteria {
            century: Some(14),
            ..Criteria::default()
        };
        assert_eq!(names(&apply(&records, &criteria)), vec!["B", "C"]);
    }

    #[test]
    fn test_result_is_a_subsequence() {
        let records = abc();
        // "intact" picks the non-adjacent A and C; order must survive.
        let criteria = Criteria {
            preservation_statuses: Some(labels(&["intact"])),
            ..Criteria::default()
        };
        assert_eq!(names(&apply(&records, &criteria)), vec!["A", "C"]);
    }

    #[test]
    fn test_shape_membership() {
        let records = abc();
        let criteria = Criteria {
            shapes: Some(labels(&["round", "lozenge"])),
            ..Criteria::default()
        };
        assert_eq!(names(&apply(&records, &criteria)), vec!["C"]);
    }

    #[test]
    fn test_present_but_empty_set_is_unconstrained() {
        let records = abc();
        let criteria = Criteria {
            shapes: Some(BTreeSet::new()),
            ..Criteria::default()
        };
        assert_eq!(apply(&records, &criteria).len(), 3);
    }

    #[test]
    fn test_preservation_containment() {
        let record = pendant("gilded", 13, "cross", &["intact", "gilded"]);
        let matches = |required: &[&str]| {
            Criteria {
                preservation_statuses: Some(labels(required)),
                ..Criteria::default()
            }
            .matches(&record)
        };

        assert!(matches(&["intact"]));
        assert!(matches(&["intact", "gilded"]));
        assert!(!matches(&["intact", "broken"]));
    }

    #[test]
    fn test_unknown_value_yields_empty_not_error() {
        let records = abc();
        let criteria = Criteria {
            shapes: Some(labels(&["octagon"])),
            ..Criteria::default()
        };
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_sequential_application_equals_conjunction() {
        let records = abc();
        let c1 = Criteria {
            century: Some(14),
            ..Criteria::default()
        };
        let c2 = Criteria {
            shapes: Some(labels(&["heart"])),
            ..Criteria::default()
        };
        let both = Criteria {
            century: Some(14),
            shapes: Some(labels(&["heart"])),
            ..Criteria::default()
        };

        let first: Vec<Pendant> = apply(&records, &c1).into_iter().cloned().collect();
        let sequential = names(&apply(&first, &c2));
        let combined = names(&apply(&records, &both));
        assert_eq!(sequential, combined);
        assert_eq!(combined, vec!["B"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let records = abc();

        let heart_14 = Criteria {
            century: Some(14),
            shapes: Some(labels(&["heart"])),
            ..Criteria::default()
        };
        assert_eq!(names(&apply(&records, &heart_14)), vec!["B"]);

        let intact = Criteria {
            preservation_statuses: Some(labels(&["intact"])),
            ..Criteria::default()
        };
        assert_eq!(names(&apply(&records, &intact)), vec!["A", "C"]);
    }
}
