use super::model::{DataError, Factor, HappinessDataset};

// ---------------------------------------------------------------------------
// Derived view row types
// ---------------------------------------------------------------------------

/// Which end of the happiness ranking a country landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankGroup {
    Top,
    Bottom,
}

impl RankGroup {
    /// Legend label, parameterised by the group size.
    pub fn label(self, n: usize) -> String {
        match self {
            RankGroup::Top => format!("Top {n}"),
            RankGroup::Bottom => format!("Bottom {n}"),
        }
    }
}

/// One row of the top/bottom ranking view.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCountry {
    pub country: String,
    pub score: f64,
    pub group: RankGroup,
}

/// Pairwise Pearson correlations over a fixed factor list.
///
/// `values` keeps full precision for color scaling; use [`display_value`]
/// for the 2-decimal cell annotations.
///
/// [`display_value`]: CorrelationMatrix::display_value
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub factors: Vec<Factor>,
    /// `values[i][j]` = correlation of `factors[i]` with `factors[j]`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Cell value rounded to 2 decimals for display.
    pub fn display_value(&self, i: usize, j: usize) -> f64 {
        (self.values[i][j] * 100.0).round() / 100.0
    }

    pub fn size(&self) -> usize {
        self.factors.len()
    }
}

/// Per-region means of the two metrics the regional tab compares.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalAverage {
    pub region: String,
    pub happiness: f64,
    pub trust: f64,
}

/// One point of the freedom-vs-happiness scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub freedom: f64,
    pub score: f64,
    pub region: String,
    pub country: String,
}

/// The country leading one contributing factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorLeader {
    pub factor: Factor,
    pub country: String,
    /// Leading value, rounded to 3 decimals.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Aggregations – pure functions of the immutable table
// ---------------------------------------------------------------------------

/// Top `n` and bottom `n` countries by Happiness Score, top group first.
///
/// Ties keep original row order (stable sort).  When the table has fewer
/// than `2n` rows the two groups overlap; that is accepted, not an error.
pub fn top_bottom(dataset: &HappinessDataset, n: usize) -> Vec<RankedCountry> {
    let mut by_score: Vec<_> = dataset.records().iter().collect();
    by_score.sort_by(|a, b| b.happiness_score.total_cmp(&a.happiness_score));

    let len = by_score.len();
    let top = by_score.iter().take(n).map(|rec| RankedCountry {
        country: rec.country.clone(),
        score: rec.happiness_score,
        group: RankGroup::Top,
    });
    let bottom = by_score[len.saturating_sub(n)..]
        .iter()
        .map(|rec| RankedCountry {
            country: rec.country.clone(),
            score: rec.happiness_score,
            group: RankGroup::Bottom,
        });

    top.chain(bottom).collect()
}

/// Pearson correlation for every ordered pair of the given factors.
///
/// The diagonal is exactly 1.0 by construction.  Off-diagonal entries for a
/// degenerate column (zero variance, or an empty table) are defined as 0.0
/// so the heatmap shows a neutral cell rather than NaN.
pub fn correlation_matrix(dataset: &HappinessDataset, factors: &[Factor]) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = factors
        .iter()
        .map(|&f| dataset.records().iter().map(|rec| rec.value(f)).collect())
        .collect();

    let values = (0..factors.len())
        .map(|i| {
            (0..factors.len())
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        pearson(&columns[i], &columns[j])
                    }
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        factors: factors.to_vec(),
        values,
    }
}

/// Sample Pearson correlation coefficient; 0.0 when undefined.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n == 0 {
        return 0.0;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Mean Happiness Score and Trust per region, in the dataset's
/// first-appearance region order (stable within a call).
pub fn regional_averages(dataset: &HappinessDataset) -> Vec<RegionalAverage> {
    struct Acc {
        happiness: f64,
        trust: f64,
        count: usize,
    }

    let regions = dataset.regions();
    let mut accs: Vec<Acc> = regions
        .iter()
        .map(|_| Acc {
            happiness: 0.0,
            trust: 0.0,
            count: 0,
        })
        .collect();

    for rec in dataset.records() {
        // Region list is built from the records, so the lookup cannot miss.
        if let Some(idx) = regions.iter().position(|r| r == &rec.region) {
            let acc = &mut accs[idx];
            acc.happiness += rec.happiness_score;
            acc.trust += rec.trust;
            acc.count += 1;
        }
    }

    regions
        .iter()
        .zip(accs)
        .filter(|(_, acc)| acc.count > 0)
        .map(|(region, acc)| RegionalAverage {
            region: region.clone(),
            happiness: acc.happiness / acc.count as f64,
            trust: acc.trust / acc.count as f64,
        })
        .collect()
}

/// Identity projection onto the scatter tab's four columns.
pub fn scatter_projection(dataset: &HappinessDataset) -> Vec<ScatterPoint> {
    dataset
        .records()
        .iter()
        .map(|rec| ScatterPoint {
            freedom: rec.freedom,
            score: rec.happiness_score,
            region: rec.region.clone(),
            country: rec.country.clone(),
        })
        .collect()
}

/// For each factor, the country holding its maximum value (first occurrence
/// wins ties).  Errs on an empty table: argmax is undefined there.
pub fn factor_leaders(
    dataset: &HappinessDataset,
    factors: &[Factor],
) -> Result<Vec<FactorLeader>, DataError> {
    if dataset.is_empty() {
        return Err(DataError::EmptyTable);
    }

    Ok(factors
        .iter()
        .map(|&factor| {
            let mut leader = &dataset.records()[0];
            for rec in &dataset.records()[1..] {
                if rec.value(factor) > leader.value(factor) {
                    leader = rec;
                }
            }
            FactorLeader {
                factor,
                country: leader.country.clone(),
                value: (leader.value(factor) * 1000.0).round() / 1000.0,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CountryRecord;

    fn rec(country: &str, region: &str, score: f64, freedom: f64) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            region: region.to_string(),
            happiness_score: score,
            economy: score * 0.2,
            family: 1.0,
            health: score * 0.1,
            freedom,
            trust: score * 0.05,
            generosity: 0.25,
        }
    }

    fn three_rows() -> HappinessDataset {
        HappinessDataset::from_records(vec![
            rec("A", "West", 7.0, 0.2),
            rec("B", "East", 5.0, 0.9),
            rec("C", "West", 3.0, 0.5),
        ])
    }

    fn empty() -> HappinessDataset {
        HappinessDataset::from_records(Vec::new())
    }

    // -- top_bottom --

    #[test]
    fn top_bottom_three_rows_n1() {
        let out = top_bottom(&three_rows(), 1);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].country, "A");
        assert_eq!(out[0].group, RankGroup::Top);
        assert_eq!(out[1].country, "C");
        assert_eq!(out[1].group, RankGroup::Bottom);
    }

    #[test]
    fn top_bottom_has_2n_rows_without_duplicates_on_ample_input() {
        let records: Vec<_> = (0..30)
            .map(|i| rec(&format!("C{i}"), "R", i as f64 * 0.3, 0.1))
            .collect();
        let ds = HappinessDataset::from_records(records);

        let out = top_bottom(&ds, 10);
        assert_eq!(out.len(), 20);

        let mut countries: Vec<_> = out.iter().map(|r| r.country.as_str()).collect();
        countries.sort();
        countries.dedup();
        assert_eq!(countries.len(), 20);
    }

    #[test]
    fn top_bottom_groups_overlap_on_small_input() {
        let out = top_bottom(&three_rows(), 2);
        assert_eq!(out.len(), 4);
        // B sits in both groups on a 3-row table with n=2; accepted behavior.
        assert!(out.iter().any(|r| r.country == "B" && r.group == RankGroup::Top));
        assert!(out.iter().any(|r| r.country == "B" && r.group == RankGroup::Bottom));
    }

    #[test]
    fn top_bottom_ties_keep_row_order() {
        let ds = HappinessDataset::from_records(vec![
            rec("First", "R", 5.0, 0.1),
            rec("Second", "R", 5.0, 0.1),
            rec("Last", "R", 1.0, 0.1),
        ]);
        let out = top_bottom(&ds, 1);
        assert_eq!(out[0].country, "First");
    }

    #[test]
    fn top_bottom_empty_input_is_empty() {
        assert!(top_bottom(&empty(), 10).is_empty());
    }

    // -- correlation_matrix --

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let m = correlation_matrix(&three_rows(), &Factor::ALL);
        assert_eq!(m.size(), 7);
        for i in 0..m.size() {
            assert!((m.values[i][i] - 1.0).abs() < 1e-12);
            for j in 0..m.size() {
                assert!((m.values[i][j] - m.values[j][i]).abs() < 1e-12);
                assert!(m.values[i][j] >= -1.0 - 1e-12 && m.values[i][j] <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn correlation_of_linear_transform_is_one() {
        // economy = score * 0.2 in the fixture, so r must be exactly 1.
        let m = correlation_matrix(
            &three_rows(),
            &[Factor::HappinessScore, Factor::Economy],
        );
        assert!((m.values[0][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_with_constant_column_is_neutral() {
        // family = 1.0 everywhere: zero variance, defined as r = 0.
        let m = correlation_matrix(&three_rows(), &[Factor::HappinessScore, Factor::Family]);
        assert_eq!(m.values[0][1], 0.0);
        assert_eq!(m.values[1][1], 1.0);
    }

    #[test]
    fn correlation_display_rounds_to_two_decimals() {
        let ds = HappinessDataset::from_records(vec![
            rec("A", "R", 1.0, 0.31),
            rec("B", "R", 2.0, 0.55),
            rec("C", "R", 3.0, 0.57),
        ]);
        let m = correlation_matrix(&ds, &[Factor::HappinessScore, Factor::Freedom]);
        let shown = m.display_value(0, 1);
        // Rounding moves the value by at most half a cent; full precision
        // survives in `values`.
        assert!((shown - m.values[0][1]).abs() <= 0.005);
        assert_ne!(shown, m.values[0][1]);
    }

    #[test]
    fn correlation_matrix_on_empty_table_is_well_formed() {
        let m = correlation_matrix(&empty(), &Factor::ALL);
        assert_eq!(m.size(), 7);
        for i in 0..m.size() {
            for j in 0..m.size() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.values[i][j], expected);
            }
        }
    }

    // -- regional_averages --

    #[test]
    fn regional_averages_one_row_per_region_in_first_appearance_order() {
        let out = regional_averages(&three_rows());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].region, "West");
        assert_eq!(out[1].region, "East");
        assert!((out[0].happiness - 5.0).abs() < 1e-12); // mean of 7 and 3
        assert!((out[1].happiness - 5.0).abs() < 1e-12);
    }

    #[test]
    fn regional_means_lie_within_member_range() {
        let out = regional_averages(&three_rows());
        for avg in &out {
            let members: Vec<f64> = three_rows()
                .records()
                .iter()
                .filter(|r| r.region == avg.region)
                .map(|r| r.happiness_score)
                .collect();
            let min = members.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = members.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(avg.happiness >= min && avg.happiness <= max);
        }
    }

    #[test]
    fn regional_averages_empty_input_is_empty() {
        assert!(regional_averages(&empty()).is_empty());
    }

    // -- scatter_projection --

    #[test]
    fn scatter_projection_is_identity_on_its_columns() {
        let ds = three_rows();
        let out = scatter_projection(&ds);
        assert_eq!(out.len(), ds.len());
        assert_eq!(out[1].country, "B");
        assert_eq!(out[1].region, "East");
        assert_eq!(out[1].freedom, 0.9);
        assert_eq!(out[1].score, 5.0);
    }

    // -- factor_leaders --

    #[test]
    fn factor_leaders_freedom_scenario() {
        let out = factor_leaders(&three_rows(), &[Factor::Freedom]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].country, "B");
        assert_eq!(out[0].value, 0.9);
    }

    #[test]
    fn factor_leaders_emits_one_row_per_factor() {
        let out = factor_leaders(&three_rows(), &Factor::CONTRIBUTING).unwrap();
        assert_eq!(out.len(), 6);
        for (leader, factor) in out.iter().zip(Factor::CONTRIBUTING) {
            assert_eq!(leader.factor, factor);
            let true_max = three_rows()
                .records()
                .iter()
                .map(|r| r.value(factor))
                .fold(f64::NEG_INFINITY, f64::max);
            assert!((leader.value - (true_max * 1000.0).round() / 1000.0).abs() < 1e-12);
        }
    }

    #[test]
    fn factor_leaders_rounds_to_three_decimals() {
        let mut a = rec("A", "R", 5.0, 0.123456);
        a.generosity = 0.87654;
        let ds = HappinessDataset::from_records(vec![a]);
        let out = factor_leaders(&ds, &[Factor::Freedom, Factor::Generosity]).unwrap();
        assert_eq!(out[0].value, 0.123);
        assert_eq!(out[1].value, 0.877);
    }

    #[test]
    fn factor_leaders_first_occurrence_wins_ties() {
        let ds = HappinessDataset::from_records(vec![
            rec("Early", "R", 5.0, 0.9),
            rec("Late", "R", 5.0, 0.9),
        ]);
        let out = factor_leaders(&ds, &[Factor::Freedom]).unwrap();
        assert_eq!(out[0].country, "Early");
    }

    #[test]
    fn factor_leaders_errs_on_empty_table() {
        assert_eq!(
            factor_leaders(&empty(), &Factor::CONTRIBUTING),
            Err(DataError::EmptyTable)
        );
    }

    // -- idempotence --

    #[test]
    fn aggregations_are_idempotent() {
        let ds = three_rows();
        assert_eq!(top_bottom(&ds, 10), top_bottom(&ds, 10));
        assert_eq!(
            correlation_matrix(&ds, &Factor::ALL),
            correlation_matrix(&ds, &Factor::ALL)
        );
        assert_eq!(regional_averages(&ds), regional_averages(&ds));
        assert_eq!(scatter_projection(&ds), scatter_projection(&ds));
        assert_eq!(
            factor_leaders(&ds, &Factor::CONTRIBUTING),
            factor_leaders(&ds, &Factor::CONTRIBUTING)
        );
    }
}
