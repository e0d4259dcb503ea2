//! Static page: the HTML shell and the layout description it is built from.

pub mod layout;

/// Page served at `/`. Controls and charts are filled in from `/api/layout`
/// and `/api/charts`; Plotly.js renders the charts.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
