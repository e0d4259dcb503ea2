use serde::Serialize;

use crate::data::model::{LaunchDataset, ALL_SITES};

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Roughly how many labelled marks the slider should carry.
const TARGET_MARKS: f64 = 5.0;

// ---------------------------------------------------------------------------
// Declarative page layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSelector {
    pub id: &'static str,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSlider {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// `[low, high]` handle positions.
    pub value: [f64; 2],
    pub marks: Vec<SliderMark>,
}

/// Everything the page needs to build its controls and chart placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: &'static str,
    pub site_selector: SiteSelector,
    pub payload_slider: PayloadSlider,
    pub charts: [&'static str; 2],
}

impl PageLayout {
    pub fn new(dataset: &LaunchDataset) -> Self {
        let mut options = vec![SelectOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| SelectOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let (min, max) = dataset
            .payload_bounds()
            .map_or((0.0, 0.0), |b| (b.min(), b.max()));

        PageLayout {
            title: PAGE_TITLE,
            site_selector: SiteSelector {
                id: "site-dropdown",
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here",
                searchable: true,
            },
            payload_slider: PayloadSlider {
                id: "payload-slider",
                label: "Payload range (Kg):",
                min,
                max,
                value: [min, max],
                marks: slider_marks(min, max),
            },
            charts: [PIE_CHART_ID, SCATTER_CHART_ID],
        }
    }
}

/// Marks on multiples of a 1/2/5 step that fall inside `[min, max]`.
///
/// The step grows with the span, so there are never more than about a dozen.
fn slider_marks(min: f64, max: f64) -> Vec<SliderMark> {
    let span = max - min;
    if span <= 0.0 {
        return vec![slider_mark(min)];
    }

    let spacing = mark_spacing(span);
    let first = (min / spacing).ceil() as i64;
    let last = (max / spacing).floor() as i64;
    (first..=last)
        .map(|k| slider_mark(k as f64 * spacing))
        .collect()
}

/// Largest 1/2/5 × 10^n step not above `span / (TARGET_MARKS - 1)`.
fn mark_spacing(span: f64) -> f64 {
    let raw = span / (TARGET_MARKS - 1.0);
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    [5.0, 2.0, 1.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step <= raw)
        .unwrap_or(magnitude)
}

fn slider_mark(value: f64) -> SliderMark {
    SliderMark {
        value,
        label: format!("{value}"),
    }
}
