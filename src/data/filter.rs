use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteFilter};

// ---------------------------------------------------------------------------
// Site restriction shared by both charts
// ---------------------------------------------------------------------------

/// Records passing the site filter, in dataset order.
pub fn restrict_to_site<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteFilter,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset.records().iter().filter(move |r| site.matches(r))
}

// ---------------------------------------------------------------------------
// Payload filter (scatter chart input)
// ---------------------------------------------------------------------------

/// Return the records for the scatter chart.
///
/// A record passes when:
/// * its site matches `site` (`SiteFilter::All` → every site passes)
/// * `range` is `None` → no payload constraint
/// * otherwise `min <= payload_mass_kg <= max`
///
/// `[0, 0]` is a real range; only `None` disables the payload constraint.
pub fn filter_payload<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteFilter,
    range: Option<PayloadRange>,
) -> Vec<&'a LaunchRecord> {
    restrict_to_site(dataset, site)
        .filter(|r| range.map_or(true, |range| range.contains(r.payload_mass_kg)))
        .collect()
}
