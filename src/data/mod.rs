/// Data layer: core types, loading, catalogs and queries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site catalog, payload bounds
///   └───────────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌───────────┐     ┌──────────┐
///   │ aggregate  │     │  filter   │  site + payload predicates
///   └───────────┘     └──────────┘
///     pie slices        scatter records
/// ```

pub mod aggregate;
pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
