use serde::Serialize;

use crate::chart::{self, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::aggregate::aggregate;
use crate::data::filter::filter_payload;
use crate::data::model::{LaunchDataset, PayloadRange, SiteFilter};

// ---------------------------------------------------------------------------
// Control state and input events
// ---------------------------------------------------------------------------

/// A change coming from one of the two input controls.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SiteChanged(SiteFilter),
    /// `None` when the control sent something that is not a valid range.
    RangeChanged(Option<PayloadRange>),
}

/// Current values of the input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub site: SiteFilter,
    /// `None` means no payload restriction.
    pub range: Option<PayloadRange>,
}

impl Inputs {
    /// Selector on `ALL`, range control spanning the whole dataset.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Self {
            site: SiteFilter::All,
            range: dataset.payload_bounds(),
        }
    }

    /// Apply one input event. The other control keeps its value.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::SiteChanged(site) => self.site = site,
            InputEvent::RangeChanged(range) => self.range = range,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart outputs
// ---------------------------------------------------------------------------

/// Data for both chart outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub pie: PieChart,
    pub scatter: ScatterChart,
}

impl ChartView {
    /// Run both queries for the given inputs. Pure: same inputs, same view.
    pub fn compute(dataset: &LaunchDataset, colors: &ColorMap, inputs: &Inputs) -> Self {
        let pie = aggregate(dataset, &inputs.site);
        let records = filter_payload(dataset, &inputs.site, inputs.range);
        let scatter = chart::scatter(&records, &inputs.site, colors);

        log::debug!(
            "recomputed charts for site={} range={:?}: {} slices, {} points",
            inputs.site,
            inputs.range.map(|r| (r.min(), r.max())),
            pie.slices.len(),
            scatter.point_count()
        );

        ChartView { pie, scatter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_dataset;

    #[test]
    fn test_initial_inputs() {
        let ds = sample_dataset();
        let colors = ColorMap::new(ds.booster_categories());
        let inputs = Inputs::initial(&ds);

        assert_eq!(inputs.site, SiteFilter::All);
        assert_eq!(inputs.range, ds.payload_bounds());

        let view = ChartView::compute(&ds, &colors, &inputs);
        assert_eq!(view.pie.title, "Total Success Launches");
        assert_eq!(view.pie.total(), 3);
        assert_eq!(view.scatter.point_count(), 3);
    }

    #[test]
    fn test_site_change_recomputes_both_charts() {
        let ds = sample_dataset();
        let colors = ColorMap::new(ds.booster_categories());
        let mut inputs = Inputs::initial(&ds);

        inputs.apply(InputEvent::SiteChanged(SiteFilter::Site(
            "SiteA".to_string(),
        )));
        let view = ChartView::compute(&ds, &colors, &inputs);
        assert_eq!(view.pie.title, "Success and Failure Count for SiteA");
        assert_eq!(view.scatter.title, "Payload vs Launch Outcome for SiteA");
        assert_eq!(view.scatter.point_count(), 2);
    }

    #[test]
    fn test_range_change_keeps_site() {
        let ds = sample_dataset();
        let colors = ColorMap::new(ds.booster_categories());
        let mut inputs = Inputs::initial(&ds);

        inputs.apply(InputEvent::SiteChanged(SiteFilter::Site("SiteA".to_string())));
        inputs.apply(InputEvent::RangeChanged(PayloadRange::new(0.0, 1000.0)));
        let view = ChartView::compute(&ds, &colors, &inputs);

        assert_eq!(view.scatter.point_count(), 1);
        // The pie ignores the payload range.
        assert_eq!(view.pie.total(), 2);
        assert_eq!(inputs.site, SiteFilter::Site("SiteA".to_string()));
    }

    #[test]
    fn test_invalid_range_clears_restriction() {
        let ds = sample_dataset();
        let mut inputs = Inputs::initial(&ds);
        inputs.apply(InputEvent::RangeChanged(None));
        assert_eq!(inputs.range, None);
        assert_eq!(inputs.site, SiteFilter::All);
    }

    #[test]
    fn test_same_inputs_same_view() {
        let ds = sample_dataset();
        let colors = ColorMap::new(ds.booster_categories());
        let inputs = Inputs {
            site: SiteFilter::All,
            range: PayloadRange::new(1000.0, 10000.0),
        };
        let a = ChartView::compute(&ds, &colors, &inputs);
        let b = ChartView::compute(&ds, &colors, &inputs);
        assert_eq!(a, b);
        assert_eq!(a.scatter.point_count(), 2);
    }
}
