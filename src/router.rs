use crate::data::aggregate;
use crate::data::model::{DataError, Factor, HappinessDataset};
use crate::view::build;
use crate::view::spec::ChartSpec;

/// Group size for the top/bottom ranking tab.
const RANKING_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Tab – the five dashboard views
// ---------------------------------------------------------------------------

/// One of the dashboard's five fixed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    TopBottom,
    Correlation,
    Regional,
    Freedom,
    Leaders,
}

impl Tab {
    /// All tabs, in display order.  The first is the initial selection.
    pub const ALL: [Tab; 5] = [
        Tab::TopBottom,
        Tab::Correlation,
        Tab::Regional,
        Tab::Freedom,
        Tab::Leaders,
    ];

    /// Label shown on the tab strip.
    pub fn label(self) -> &'static str {
        match self {
            Tab::TopBottom => "Top & Bottom Happy Countries",
            Tab::Correlation => "Money & Happiness",
            Tab::Regional => "Regional Comparison",
            Tab::Freedom => "Freedom Effect",
            Tab::Leaders => "Secret Sauce Leaders",
        }
    }

    /// Stable external identifier.
    pub fn id(self) -> &'static str {
        match self {
            Tab::TopBottom => "tab-1",
            Tab::Correlation => "tab-2",
            Tab::Regional => "tab-3",
            Tab::Freedom => "tab-4",
            Tab::Leaders => "tab-5",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::TopBottom
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// What the display region shows after a selection event.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Chart(ChartSpec),
    /// A per-tab failure, shown in place of the chart.
    Error(String),
    /// Unknown tab identifier: silently blank, no error surfaced.
    Empty,
}

/// Derive the chart for a tab, recomputing from the full table.
pub fn build_chart(tab: Tab, dataset: &HappinessDataset) -> Result<ChartSpec, DataError> {
    match tab {
        Tab::TopBottom => {
            let rows = aggregate::top_bottom(dataset, RANKING_SIZE);
            Ok(build::top_bottom_chart(&rows, RANKING_SIZE))
        }
        Tab::Correlation => {
            let matrix = aggregate::correlation_matrix(dataset, &Factor::ALL);
            Ok(build::correlation_chart(&matrix))
        }
        Tab::Regional => {
            let averages = aggregate::regional_averages(dataset);
            Ok(build::regional_chart(&averages))
        }
        Tab::Freedom => {
            let points = aggregate::scatter_projection(dataset);
            Ok(build::scatter_chart(&points))
        }
        Tab::Leaders => {
            let leaders = aggregate::factor_leaders(dataset, &Factor::CONTRIBUTING)?;
            Ok(build::leaders_chart(&leaders))
        }
    }
}

/// Resolve a raw tab identifier to its fragment.
///
/// Unmapped identifiers yield [`Fragment::Empty`] rather than an error,
/// mirroring the original dashboard's fallthrough.
pub fn fragment_for(id: &str, dataset: &HappinessDataset) -> Fragment {
    let Some(tab) = Tab::from_id(id) else {
        log::debug!("ignoring unknown tab id '{id}'");
        return Fragment::Empty;
    };
    match build_chart(tab, dataset) {
        Ok(spec) => Fragment::Chart(spec),
        Err(e) => {
            log::error!("tab '{id}' failed: {e}");
            Fragment::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CountryRecord;

    fn dataset() -> HappinessDataset {
        let rec = |country: &str, region: &str, score: f64| CountryRecord {
            country: country.to_string(),
            region: region.to_string(),
            happiness_score: score,
            economy: score * 0.2,
            family: 1.1,
            health: 0.8,
            freedom: score * 0.08,
            trust: 0.2,
            generosity: 0.3,
        };
        HappinessDataset::from_records(vec![
            rec("Switzerland", "Western Europe", 7.587),
            rec("Iceland", "Western Europe", 7.561),
            rec("Togo", "Sub-Saharan Africa", 2.839),
        ])
    }

    #[test]
    fn ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("tab-0"), None);
        assert_eq!(Tab::default(), Tab::TopBottom);
    }

    #[test]
    fn unknown_id_yields_empty_fragment() {
        let ds = dataset();
        assert_eq!(fragment_for("tab-6", &ds), Fragment::Empty);
        assert_eq!(fragment_for("garbage", &ds), Fragment::Empty);
    }

    #[test]
    fn each_tab_yields_its_chart_kind() {
        let ds = dataset();
        let expect = |id: &str| match fragment_for(id, &ds) {
            Fragment::Chart(spec) => spec,
            other => panic!("expected chart for {id}, got {other:?}"),
        };
        assert!(matches!(expect("tab-1"), ChartSpec::HorizontalBar(_)));
        assert!(matches!(expect("tab-2"), ChartSpec::Heatmap(_)));
        assert!(matches!(expect("tab-3"), ChartSpec::GroupedBar(_)));
        assert!(matches!(expect("tab-4"), ChartSpec::Scatter(_)));
        assert!(matches!(expect("tab-5"), ChartSpec::LabeledBar(_)));
    }

    #[test]
    fn leaders_tab_surfaces_empty_table_error() {
        let empty = HappinessDataset::from_records(Vec::new());
        match fragment_for("tab-5", &empty) {
            Fragment::Error(msg) => assert!(msg.contains("empty")),
            other => panic!("expected error fragment, got {other:?}"),
        }
        // The other tabs still render on an empty table.
        assert!(matches!(fragment_for("tab-1", &empty), Fragment::Chart(_)));
        assert!(matches!(fragment_for("tab-3", &empty), Fragment::Chart(_)));
    }

    #[test]
    fn dispatch_recomputes_identically_per_call() {
        let ds = dataset();
        assert_eq!(fragment_for("tab-2", &ds), fragment_for("tab-2", &ds));
    }
}
