use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – domain failures
// ---------------------------------------------------------------------------

/// Failures of the data layer's own contracts (as opposed to I/O failures,
/// which the loader reports through `anyhow`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("required column '{column}' is absent")]
    MissingColumn { column: String },
    #[error("cannot compute factor leaders over an empty table")]
    EmptyTable,
}

// ---------------------------------------------------------------------------
// Factor – one numeric survey column
// ---------------------------------------------------------------------------

/// A numeric column of the World Happiness Report table.
///
/// The variant order matches the column order of the 2015 source file, which
/// is also the axis order of the correlation heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    HappinessScore,
    Economy,
    Family,
    Health,
    Freedom,
    Trust,
    Generosity,
}

impl Factor {
    /// All seven numeric columns, in table order.
    pub const ALL: [Factor; 7] = [
        Factor::HappinessScore,
        Factor::Economy,
        Factor::Family,
        Factor::Health,
        Factor::Freedom,
        Factor::Trust,
        Factor::Generosity,
    ];

    /// The six contributing factors (everything except the score itself).
    pub const CONTRIBUTING: [Factor; 6] = [
        Factor::Economy,
        Factor::Family,
        Factor::Health,
        Factor::Freedom,
        Factor::Trust,
        Factor::Generosity,
    ];

    /// Exact column header as it appears in the source file.
    pub fn label(self) -> &'static str {
        match self {
            Factor::HappinessScore => "Happiness Score",
            Factor::Economy => "Economy (GDP per Capita)",
            Factor::Family => "Family",
            Factor::Health => "Health (Life Expectancy)",
            Factor::Freedom => "Freedom",
            Factor::Trust => "Trust (Government Corruption)",
            Factor::Generosity => "Generosity",
        }
    }

    /// Compact label for cramped chart axes.
    pub fn short_label(self) -> &'static str {
        match self {
            Factor::HappinessScore => "Happiness",
            Factor::Economy => "Economy",
            Factor::Family => "Family",
            Factor::Health => "Health",
            Factor::Freedom => "Freedom",
            Factor::Trust => "Trust",
            Factor::Generosity => "Generosity",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CountryRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single country's survey record (one row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub region: String,
    pub happiness_score: f64,
    pub economy: f64,
    pub family: f64,
    pub health: f64,
    pub freedom: f64,
    pub trust: f64,
    pub generosity: f64,
}

impl CountryRecord {
    /// Column-style access by factor.
    pub fn value(&self, factor: Factor) -> f64 {
        match factor {
            Factor::HappinessScore => self.happiness_score,
            Factor::Economy => self.economy,
            Factor::Family => self.family,
            Factor::Health => self.health,
            Factor::Freedom => self.freedom,
            Factor::Trust => self.trust,
            Factor::Generosity => self.generosity,
        }
    }
}

// ---------------------------------------------------------------------------
// HappinessDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct HappinessDataset {
    /// All records, in file order.
    records: Vec<CountryRecord>,
    /// Distinct regions in first-appearance order.
    regions: Vec<String>,
}

impl HappinessDataset {
    /// Build the dataset and its region index from loaded records.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        for rec in &records {
            if !regions.iter().any(|r| r == &rec.region) {
                regions.push(rec.region.clone());
            }
        }
        HappinessDataset { records, regions }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Distinct regions, first-appearance order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, region: &str, score: f64) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            region: region.to_string(),
            happiness_score: score,
            economy: 0.0,
            family: 0.0,
            health: 0.0,
            freedom: 0.0,
            trust: 0.0,
            generosity: 0.0,
        }
    }

    #[test]
    fn regions_are_deduplicated_in_first_appearance_order() {
        let ds = HappinessDataset::from_records(vec![
            rec("Iceland", "Western Europe", 7.5),
            rec("Canada", "North America", 7.4),
            rec("Norway", "Western Europe", 7.5),
        ]);
        assert_eq!(ds.regions(), ["Western Europe", "North America"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn factor_labels_match_source_headers() {
        assert_eq!(Factor::Trust.label(), "Trust (Government Corruption)");
        assert_eq!(Factor::ALL.len(), 7);
        assert_eq!(Factor::CONTRIBUTING.len(), 6);
        assert!(!Factor::CONTRIBUTING.contains(&Factor::HappinessScore));
    }

    #[test]
    fn value_reads_the_matching_field() {
        let mut r = rec("Chile", "Latin America and Caribbean", 6.6);
        r.freedom = 0.44;
        assert_eq!(r.value(Factor::HappinessScore), 6.6);
        assert_eq!(r.value(Factor::Freedom), 0.44);
    }
}
