/// Data layer: parsing, chart datasets, selection and derived metrics.
///
/// Architecture:
/// ```text
///   data.csv / .parquet          benchmark.log
///        │                            │
///        ▼                            ▼
///   ┌──────────┐               ┌──────────┐
///   │  loader   │  → Table      │  metric   │  → PriceReport
///   └──────────┘               └──────────┘
///        │                            │
///        ▼                            │
///   ┌──────────┐                      │
///   │  chart    │  → ChartDataset  ◄──┘
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  column selection → visible series
///   └──────────┘
/// ```

pub mod chart;
pub mod filter;
pub mod loader;
pub mod metric;
pub mod model;
