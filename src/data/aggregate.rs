use crate::chart::{pie_title, PieChart, Slice};

use super::filter::restrict_to_site;
use super::model::{LaunchDataset, SiteFilter};

/// Compute the pie chart for the current site selection.
///
/// * `SiteFilter::All` → one slice per launch site, value = launches at that site
/// * `SiteFilter::Site` → one slice per outcome class (`"1"` / `"0"`) at that site
///
/// Slices appear in first-occurrence order. An empty selection yields no slices.
pub fn aggregate(dataset: &LaunchDataset, site: &SiteFilter) -> PieChart {
    let keys: Box<dyn Iterator<Item = String> + '_> = match site {
        SiteFilter::All => Box::new(dataset.records().iter().map(|r| r.site.clone())),
        SiteFilter::Site(_) => {
            Box::new(restrict_to_site(dataset, site).map(|r| r.outcome.to_string()))
        }
    };

    PieChart {
        title: pie_title(site),
        slices: count_in_order(keys),
    }
}

fn count_in_order(keys: impl Iterator<Item = String>) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();
    for key in keys {
        match slices.iter_mut().find(|s| s.label == key) {
            Some(slice) => slice.value += 1,
            None => slices.push(Slice {
                label: key,
                value: 1,
            }),
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::tests::{arb_dataset, arb_site, record, sample_dataset};

    fn value_of(pie: &PieChart, label: &str) -> Option<usize> {
        pie.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    #[test]
    fn test_aggregate_all_counts_per_site() {
        let ds = sample_dataset();
        let pie = aggregate(&ds, &SiteFilter::All);
        assert_eq!(pie.title, "Total Success Launches");
        assert_eq!(
            pie.slices,
            vec![
                Slice {
                    label: "SiteA".to_string(),
                    value: 2
                },
                Slice {
                    label: "SiteB".to_string(),
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn test_aggregate_site_counts_per_outcome() {
        let ds = sample_dataset();
        let pie = aggregate(&ds, &SiteFilter::Site("SiteA".to_string()));
        assert_eq!(pie.title, "Success and Failure Count for SiteA");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(value_of(&pie, "1"), Some(1));
        assert_eq!(value_of(&pie, "0"), Some(1));
    }

    #[test]
    fn test_aggregate_all_sums_to_dataset_len() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 1.0, 1, "FT"),
            record("B", 2.0, 0, "FT"),
            record("C", 3.0, 1, "B4"),
            record("A", 4.0, 1, "B4"),
            record("B", 5.0, 1, "B5"),
        ]);
        let pie = aggregate(&ds, &SiteFilter::All);
        assert_eq!(pie.slices.len(), ds.sites().len());
        assert_eq!(pie.total(), ds.len());
    }

    #[test]
    fn test_aggregate_site_sums_to_site_count() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 1.0, 1, "FT"),
            record("A", 2.0, 1, "FT"),
            record("B", 3.0, 0, "FT"),
            record("A", 4.0, 0, "FT"),
        ]);
        let pie = aggregate(&ds, &SiteFilter::Site("A".to_string()));
        assert!(pie.slices.len() <= 2);
        assert_eq!(pie.total(), 3);
        assert_eq!(value_of(&pie, "1"), Some(2));
    }

    #[test]
    fn test_single_outcome_site_has_one_slice() {
        let ds = sample_dataset();
        let pie = aggregate(&ds, &SiteFilter::Site("SiteB".to_string()));
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(value_of(&pie, "1"), Some(1));
    }

    #[test]
    fn test_unknown_site_has_no_slices() {
        let ds = sample_dataset();
        let pie = aggregate(&ds, &SiteFilter::Site("Nowhere".to_string()));
        assert!(pie.slices.is_empty());
        assert_eq!(pie.total(), 0);
    }

    proptest! {
        #[test]
        fn test_all_sites_pie_covers_every_launch(ds in arb_dataset()) {
            let pie = aggregate(&ds, &SiteFilter::All);
            prop_assert_eq!(pie.slices.len(), ds.sites().len());
            prop_assert_eq!(pie.total(), ds.len());
        }

        #[test]
        fn test_site_pie_counts_that_site(ds in arb_dataset(), site in arb_site()) {
            prop_assume!(site != SiteFilter::All);
            let pie = aggregate(&ds, &site);
            let at_site = ds.records().iter().filter(|r| site.matches(r)).count();
            prop_assert!(pie.slices.len() <= 2);
            prop_assert_eq!(pie.total(), at_site);
            for slice in &pie.slices {
                prop_assert!(slice.label == "1" || slice.label == "0");
            }
        }
    }
}
