//! SpaceX launch dashboard
//!
//! This library provides:
//! - Loading the launch table (CSV, JSON or Parquet) into an immutable dataset
//! - The site catalog used to populate the site selector
//! - Pie-chart aggregation of launch outcomes per site
//! - Payload-range filtering for the payload vs. outcome scatter chart
//! - The page layout, the input-event state machine and the HTTP routes
//!
//! # Example
//!
//! ```no_run
//! use launch_dash::data::loader::load_file;
//! use launch_dash::data::model::SiteFilter;
//! use launch_dash::data::aggregate::aggregate;
//!
//! let dataset = load_file("spacex_launch_dash.csv".as_ref()).unwrap();
//! let pie = aggregate(&dataset, &SiteFilter::All);
//! println!("{}: {} launches", pie.title, pie.total());
//! ```

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
