/// View layer: declarative chart specs and the builders that produce them.
///
/// ```text
///   derived view (data::aggregate)
///        │
///        ▼
///   ┌────────┐
///   │ build   │  one builder per tab
///   └────────┘
///        │
///        ▼
///   ┌────────┐
///   │ spec    │  ChartSpec value, no egui types
///   └────────┘
/// ```
pub mod build;
pub mod spec;
