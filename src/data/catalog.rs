use std::collections::HashSet;

use super::model::LaunchRecord;

/// Distinct launch sites in first-occurrence order.
pub fn site_catalog(records: &[LaunchRecord]) -> Vec<String> {
    distinct_in_order(records.iter().map(|r| r.site.as_str()))
}

/// Distinct booster version categories in first-occurrence order.
pub fn booster_categories(records: &[LaunchRecord]) -> Vec<String> {
    distinct_in_order(records.iter().map(|r| r.booster_version_category.as_str()))
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
