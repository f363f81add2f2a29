use std::collections::BTreeSet;

use super::error::DataError;
use super::model::{FilterOptions, Pendant};

// ---------------------------------------------------------------------------
// Filter options extraction
// ---------------------------------------------------------------------------

/// Compute the distinct value sets used to populate the filter controls.
///
/// Each categorical attribute yields its distinct values in ascending
/// lexicographic order; preservation yields the sorted union of all labels
/// across records; centuries come back sorted with the `min_century` /
/// `max_century` bounds.  Pure function of its input.
///
/// Errors with [`DataError::EmptyDataset`] when `records` is empty – the
/// century range is undefined and the filter UI cannot be populated.
pub fn extract(records: &[Pendant]) -> Result<FilterOptions, DataError> {
    if records.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let mut shapes = BTreeSet::new();
    let mut materials = BTreeSet::new();
    let mut regions = BTreeSet::new();
    let mut sizes = BTreeSet::new();
    let mut functions = BTreeSet::new();
    let mut preservation_statuses = BTreeSet::new();
    let mut centuries = BTreeSet::new();

    for p in records {
        shapes.insert(p.shape.clone());
        materials.insert(p.material.clone());
        regions.insert(p.region.clone());
        sizes.insert(p.size.clone());
        functions.insert(p.function.clone());
        preservation_statuses.extend(p.preservation.iter().cloned());
        centuries.insert(p.century);
    }

    let centuries: Vec<u32> = centuries.into_iter().collect();
    let min_century = centuries[0];
    let max_century = centuries[centuries.len() - 1];

    Ok(FilterOptions {
        shapes: shapes.into_iter().collect(),
        materials: materials.into_iter().collect(),
        regions: regions.into_iter().collect(),
        sizes: sizes.into_iter().collect(),
        functions: functions.into_iter().collect(),
        preservation_statuses: preservation_statuses.into_iter().collect(),
        centuries,
        min_century,
        max_century,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(name: &str) -> Pendant {
        Pendant {
            name: name.to_string(),
            lat: 48.0,
            lon: 10.0,
            period: "13th century".to_string(),
            century: 13,
            origin: "test".to_string(),
            shape: "cross".to_string(),
            material: "silver".to_string(),
            region: "Central Europe".to_string(),
            size: "small".to_string(),
            function: "devotional".to_string(),
            preservation: BTreeSet::new(),
            description: String::new(),
            collection_link: String::new(),
        }
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let err = extract(&[]).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset));
    }

    #[test]
    fn test_materials_deduplicated_and_ascii_sorted() {
        let mut a = base("a");
        a.material = "bronze".to_string();
        let mut b = base("b");
        b.material = "Silver".to_string();
        let mut c = base("c");
        c.material = "bronze".to_string();

        let options = extract(&[a, b, c]).unwrap();
        // Byte-wise ordering: uppercase sorts before lowercase.
        assert_eq!(options.materials, vec!["Silver", "bronze"]);
    }

    #[test]
    fn test_preservation_is_union_of_all_labels() {
        let mut a = base("a");
        a.preservation = ["intact", "gilded"].iter().map(|s| s.to_string()).collect();
        let mut b = base("b");
        b.preservation = ["worn", "intact"].iter().map(|s| s.to_string()).collect();

        let options = extract(&[a, b]).unwrap();
        assert_eq!(options.preservation_statuses, vec!["gilded", "intact", "worn"]);
    }

    #[test]
    fn test_century_range() {
        let mut a = base("a");
        a.century = 14;
        let mut b = base("b");
        b.century = 11;
        let mut c = base("c");
        c.century = 13;

        let options = extract(&[a, b, c]).unwrap();
        assert_eq!(options.centuries, vec![11, 13, 14]);
        assert_eq!(options.min_century, 11);
        assert_eq!(options.max_century, 14);
    }

    #[test]
    fn test_single_record_range_collapses() {
        let options = extract(&[base("only")]).unwrap();
        assert_eq!(options.min_century, options.max_century);
        assert_eq!(options.shapes, vec!["cross"]);
        assert!(options.preservation_statuses.is_empty());
    }
}
