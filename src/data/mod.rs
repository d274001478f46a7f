/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  2015.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → HappinessDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ HappinessDataset  │  Vec<CountryRecord>, region index
///   └──────────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  one pure derivation per dashboard tab
///   └───────────┘
/// ```
pub mod aggregate;
pub mod loader;
pub mod model;
