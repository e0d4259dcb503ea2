use serde::Serialize;

use crate::color::ColorMap;
use crate::data::model::{LaunchRecord, SiteFilter};

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome";

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: usize,
}

/// Input for the success pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

pub fn pie_title(site: &SiteFilter) -> String {
    match site {
        SiteFilter::All => "Total Success Launches".to_string(),
        SiteFilter::Site(s) => format!("Success and Failure Count for {s}"),
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// All points of one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: String,
    /// `[payload_mass_kg, class]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Input for the payload vs. outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

pub fn scatter_title(site: &SiteFilter) -> String {
    match site {
        SiteFilter::All => "Payload vs Launch Outcome (All Sites)".to_string(),
        SiteFilter::Site(s) => format!("Payload vs Launch Outcome for {s}"),
    }
}

/// Build the scatter chart from already filtered records.
///
/// One series per category, in first-occurrence order among `records`.
pub fn scatter(records: &[&LaunchRecord], site: &SiteFilter, colors: &ColorMap) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for r in records {
        let point = [r.payload_mass_kg, f64::from(r.outcome.class())];
        match series
            .iter_mut()
            .find(|s| s.name == r.booster_version_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                name: r.booster_version_category.clone(),
                color: colors.color_for(&r.booster_version_category).to_string(),
                points: vec![point],
            }),
        }
    }

    ScatterChart {
        title: scatter_title(site),
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        series,
    }
}
