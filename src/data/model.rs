use std::fmt;

use super::catalog;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing / recovery outcome of a launch (`class` column: 1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a numeric class value. Only exactly 0 and 1 are accepted.
    pub fn from_class(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Outcome::Failure)
        } else if value == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    /// The numeric class value as it appears in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// `Launch Site` column.
    pub site: String,
    /// `Payload Mass (kg)` column, finite and non-negative.
    pub payload_mass_kg: f64,
    /// `class` column.
    pub outcome: Outcome,
    /// `Booster Version Category` column.
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// Query inputs
// ---------------------------------------------------------------------------

/// Value the site selector emits for "no restriction".
pub const ALL_SITES: &str = "ALL";

/// Site restriction applied by every query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Parse the selector value. `ALL`, empty and missing values mean no restriction.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_SITES) => SiteFilter::All,
            Some(site) => SiteFilter::Site(site.to_string()),
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "{ALL_SITES}"),
            SiteFilter::Site(site) => write!(f, "{site}"),
        }
    }
}

/// Closed payload interval `[min, max]` in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    min: f64,
    max: f64,
}

impl PayloadRange {
    /// Returns `None` unless both bounds are finite and `min <= max`.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        (min.is_finite() && max.is_finite() && min <= max).then_some(Self { min, max })
    }

    /// Build a range from the two-element array the range control emits.
    pub fn from_slice(bounds: &[f64]) -> Option<Self> {
        match bounds {
            [min, max] => Self::new(*min, *max),
            _ => None,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.min <= payload_mass_kg && payload_mass_kg <= self.max
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded dataset with catalogs computed once at construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct sites, first-occurrence order.
    sites: Vec<String>,
    /// Distinct booster version categories, first-occurrence order.
    booster_categories: Vec<String>,
    /// Dataset-wide payload min / max (`None` when empty).
    payload_bounds: Option<PayloadRange>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites = catalog::site_catalog(&records);
        let booster_categories = catalog::booster_categories(&records);
        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .and_then(|(lo, hi)| PayloadRange::new(lo, hi));

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use proptest::prelude::*;

    use super::*;

    const SITES: [&str; 4] = ["SiteA", "SiteB", "SiteC", "SiteD"];
    const CATEGORIES: [&str; 3] = ["v1.0", "FT", "B4"];

    pub(crate) fn record(site: &str, payload: f64, class: u8, category: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome: if class == 1 {
                Outcome::Success
            } else {
                Outcome::Failure
            },
            booster_version_category: category.to_string(),
        }
    }

    /// The three-launch table used throughout the query tests.
    pub(crate) fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("SiteA", 500.0, 1, "v1.0"),
            record("SiteA", 9000.0, 0, "FT"),
            record("SiteB", 3000.0, 1, "v1.0"),
        ])
    }

    /// Arbitrary tables of up to 40 launches over four sites.
    pub(crate) fn arb_dataset() -> impl Strategy<Value = LaunchDataset> {
        prop::collection::vec(
            (0..SITES.len(), 0.0f64..10_000.0, 0u8..=1, 0..CATEGORIES.len()),
            0..40,
        )
        .prop_map(|rows| {
            LaunchDataset::from_records(
                rows.into_iter()
                    .map(|(site, payload, class, cat)| {
                        record(SITES[site], payload, class, CATEGORIES[cat])
                    })
                    .collect(),
            )
        })
    }

    /// `ALL`, one of the generated sites, or a site that never occurs.
    pub(crate) fn arb_site() -> impl Strategy<Value = SiteFilter> {
        prop_oneof![
            Just(SiteFilter::All),
            prop::sample::select(SITES.to_vec()).prop_map(|s| SiteFilter::Site(s.to_string())),
            Just(SiteFilter::Site("Nowhere".to_string())),
        ]
    }

    pub(crate) fn arb_range() -> impl Strategy<Value = PayloadRange> {
        (0.0f64..10_000.0, 0.0f64..10_000.0).prop_map(|(a, b)| {
            PayloadRange::new(a.min(b), a.max(b)).expect("ordered finite bounds")
        })
    }

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(0.5), None);
        assert_eq!(Outcome::from_class(2.0), None);
        assert_eq!(Outcome::Success.to_string(), "1");
    }

    #[test]
    fn test_site_filter_parse() {
        assert_eq!(SiteFilter::parse(None), SiteFilter::All);
        assert_eq!(SiteFilter::parse(Some("")), SiteFilter::All);
        assert_eq!(SiteFilter::parse(Some("ALL")), SiteFilter::All);
        assert_eq!(
            SiteFilter::parse(Some("KSC LC-39A")),
            SiteFilter::Site("KSC LC-39A".to_string())
        );
    }

    #[test]
    fn test_payload_range_validation() {
        assert!(PayloadRange::new(0.0, 0.0).is_some());
        assert!(PayloadRange::new(10.0, 5.0).is_none());
        assert!(PayloadRange::new(f64::NAN, 5.0).is_none());
        assert!(PayloadRange::from_slice(&[1.0]).is_none());
        assert!(PayloadRange::from_slice(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn test_dataset_catalogs_and_bounds() {
        let ds = sample_dataset();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites(), ["SiteA", "SiteB"]);
        assert_eq!(ds.booster_categories(), ["v1.0", "FT"]);
        let bounds = ds.payload_bounds().unwrap();
        assert_eq!((bounds.min(), bounds.max()), (500.0, 9000.0));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.sites().is_empty());
        assert!(ds.payload_bounds().is_none());
    }
}
