use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{CountryRecord, DataError, Factor, HappinessDataset};

/// Categorical columns required alongside the seven numeric factors.
const COUNTRY_COLUMN: &str = "Country";
const REGION_COLUMN: &str = "Region";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the happiness table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the exact 2015 report column names
/// * `.json` – `[{ "Country": ..., "Region": ..., "Happiness Score": ... }, ...]`
///
/// Any failure (missing file, missing column, unparsable cell) aborts the
/// whole load; there are no partial loads.
pub fn load_file(path: &Path) -> Result<HappinessDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming `Country`, `Region` and the seven numeric
/// columns; one data row per country.  Extra columns (e.g. `Happiness Rank`,
/// `Standard Error` in the Kaggle file) are ignored.
fn load_csv(path: &Path) -> Result<HappinessDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column_index = |name: &str| -> Result<usize> {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            DataError::MissingColumn {
                column: name.to_string(),
            }
            .into()
        })
    };

    let country_idx = column_index(COUNTRY_COLUMN)?;
    let region_idx = column_index(REGION_COLUMN)?;
    let mut factor_idx = [0usize; Factor::ALL.len()];
    for (slot, factor) in factor_idx.iter_mut().zip(Factor::ALL) {
        *slot = column_index(factor.label())?;
    }

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut values = [0.0f64; Factor::ALL.len()];
        for ((slot, factor), idx) in values.iter_mut().zip(Factor::ALL).zip(factor_idx) {
            let cell = record.get(idx).unwrap_or("");
            *slot = cell.trim().parse::<f64>().with_context(|| {
                format!("CSV row {row_no}, '{}': '{cell}' is not a number", factor.label())
            })?;
        }

        records.push(build_record(
            record.get(country_idx).unwrap_or("").to_string(),
            record.get(region_idx).unwrap_or("").to_string(),
            values,
        ));
    }

    Ok(HappinessDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Country": "Switzerland",
///     "Region": "Western Europe",
///     "Happiness Score": 7.587,
///     "Economy (GDP per Capita)": 1.39651,
///     ...
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<HappinessDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON file {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    parse_json_records(&root)
}

fn parse_json_records(root: &JsonValue) -> Result<HappinessDataset> {
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let text_field = |name: &str| -> Result<String> {
            obj.get(name)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .with_context(|| format!("Row {i}: missing or non-string '{name}'"))
        };

        let mut values = [0.0f64; Factor::ALL.len()];
        for (slot, factor) in values.iter_mut().zip(Factor::ALL) {
            *slot = obj
                .get(factor.label())
                .and_then(|v| v.as_f64())
                .with_context(|| {
                    format!("Row {i}: missing or non-numeric '{}'", factor.label())
                })?;
        }

        records.push(build_record(
            text_field(COUNTRY_COLUMN)?,
            text_field(REGION_COLUMN)?,
            values,
        ));
    }

    Ok(HappinessDataset::from_records(records))
}

fn build_record(
    country: String,
    region: String,
    values: [f64; Factor::ALL.len()],
) -> CountryRecord {
    // `values` is indexed in Factor::ALL order.
    let [happiness_score, economy, family, health, freedom, trust, generosity] = values;
    CountryRecord {
        country,
        region,
        happiness_score,
        economy,
        family,
        health,
        freedom,
        trust,
        generosity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Country,Region,Happiness Rank,Happiness Score,Economy (GDP per Capita),Family,Health (Life Expectancy),Freedom,Trust (Government Corruption),Generosity
Switzerland,Western Europe,1,7.587,1.39651,1.34951,0.94143,0.66557,0.41978,0.29678
Togo,Sub-Saharan Africa,158,2.839,0.20868,0.13995,0.28443,0.36453,0.10731,0.16681
";

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_round_trip() {
        let path = write_temp("happy_globe_loader_ok.csv", SAMPLE_CSV);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.records()[0];
        assert_eq!(first.country, "Switzerland");
        assert_eq!(first.region, "Western Europe");
        assert_eq!(first.value(Factor::HappinessScore), 7.587);
        assert_eq!(first.value(Factor::Trust), 0.41978);
        assert_eq!(ds.regions().len(), 2);
    }

    #[test]
    fn csv_missing_column_names_it() {
        let csv = "Country,Region,Happiness Score\nTogo,Sub-Saharan Africa,2.839\n";
        let path = write_temp("happy_globe_loader_missing.csv", csv);
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Economy (GDP per Capita)"));
    }

    #[test]
    fn csv_bad_numeric_cell_fails() {
        let csv = SAMPLE_CSV.replace("7.587", "seven-ish");
        let path = write_temp("happy_globe_loader_badcell.csv", &csv);
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("seven-ish"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp("happy_globe_loader.parquet", "");
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn json_records_load() {
        let json = r#"[
            {
                "Country": "Norway", "Region": "Western Europe",
                "Happiness Score": 7.522, "Economy (GDP per Capita)": 1.459,
                "Family": 1.33, "Health (Life Expectancy)": 0.885,
                "Freedom": 0.67, "Trust (Government Corruption)": 0.365,
                "Generosity": 0.347
            }
        ]"#;
        let path = write_temp("happy_globe_loader_ok.json", json);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].value(Factor::Freedom), 0.67);
    }

    #[test]
    fn json_missing_factor_fails() {
        let json = r#"[{ "Country": "Norway", "Region": "Western Europe" }]"#;
        let path = write_temp("happy_globe_loader_missing.json", json);
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Happiness Score"));
    }
}
