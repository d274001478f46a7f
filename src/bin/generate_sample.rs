//! Writes a small `2015.csv` sample so the dashboard can run without the
//! full World Happiness Report file.  Values are taken from the 2015 report
//! and cover every region plus the per-factor leaders (Qatar for economy,
//! Iceland for family, Singapore for health, Norway for freedom, Rwanda for
//! trust, Myanmar for generosity).

use anyhow::{Context, Result};

const OUTPUT: &str = "2015.csv";

/// (country, region, rank, score, economy, family, health, freedom, trust, generosity)
type Row = (&'static str, &'static str, u32, [f64; 7]);

const ROWS: &[Row] = &[
    ("Switzerland", "Western Europe", 1, [7.587, 1.39651, 1.34951, 0.94143, 0.66557, 0.41978, 0.29678]),
    ("Iceland", "Western Europe", 2, [7.561, 1.30232, 1.40223, 0.94784, 0.62877, 0.14145, 0.43630]),
    ("Denmark", "Western Europe", 3, [7.527, 1.32548, 1.36058, 0.87464, 0.64938, 0.48357, 0.34139]),
    ("Norway", "Western Europe", 4, [7.522, 1.45900, 1.33095, 0.88521, 0.66973, 0.36503, 0.34699]),
    ("Canada", "North America", 5, [7.427, 1.32629, 1.32261, 0.90563, 0.63297, 0.32957, 0.45811]),
    ("New Zealand", "Australia and New Zealand", 9, [7.286, 1.25018, 1.31967, 0.90837, 0.63938, 0.42922, 0.47501]),
    ("Australia", "Australia and New Zealand", 10, [7.284, 1.33358, 1.30923, 0.93156, 0.65124, 0.35637, 0.43562]),
    ("Israel", "Middle East and Northern Africa", 11, [7.278, 1.22857, 1.22393, 0.91387, 0.41319, 0.07785, 0.33172]),
    ("Costa Rica", "Latin America and Caribbean", 12, [7.226, 0.95578, 1.23788, 0.86027, 0.63376, 0.10583, 0.25497]),
    ("Mexico", "Latin America and Caribbean", 14, [7.187, 1.02054, 0.91451, 0.81444, 0.48181, 0.21312, 0.14074]),
    ("United States", "North America", 15, [7.119, 1.39451, 1.24711, 0.86179, 0.54604, 0.15890, 0.40105]),
    ("United Kingdom", "Western Europe", 21, [6.867, 1.26637, 1.28548, 0.90943, 0.59625, 0.32067, 0.51912]),
    ("Singapore", "Southeastern Asia", 24, [6.798, 1.52186, 1.02000, 1.02525, 0.54252, 0.49210, 0.31105]),
    ("Qatar", "Middle East and Northern Africa", 28, [6.611, 1.69042, 1.07860, 0.79733, 0.64040, 0.52208, 0.32879]),
    ("Thailand", "Southeastern Asia", 34, [6.455, 0.96690, 1.26504, 0.73840, 0.55664, 0.03187, 0.57630]),
    ("China", "Eastern Asia", 84, [5.140, 0.89012, 0.94675, 0.81658, 0.51697, 0.02781, 0.08185]),
    ("Myanmar", "Southeastern Asia", 129, [4.307, 0.27108, 0.70905, 0.48246, 0.44017, 0.19034, 0.79588]),
    ("India", "Southern Asia", 117, [4.565, 0.64499, 0.38174, 0.51529, 0.39786, 0.08492, 0.26475]),
    ("Rwanda", "Sub-Saharan Africa", 154, [3.465, 0.22208, 0.77370, 0.42864, 0.59201, 0.55191, 0.22628]),
    ("Burundi", "Sub-Saharan Africa", 157, [2.905, 0.01530, 0.41587, 0.22396, 0.11850, 0.10062, 0.19727]),
    ("Togo", "Sub-Saharan Africa", 158, [2.839, 0.20868, 0.13995, 0.28443, 0.36453, 0.10731, 0.16681]),
];

fn main() -> Result<()> {
    env_logger::init();

    let mut writer = csv::Writer::from_path(OUTPUT)
        .with_context(|| format!("creating {OUTPUT}"))?;

    writer.write_record([
        "Country",
        "Region",
        "Happiness Rank",
        "Happiness Score",
        "Economy (GDP per Capita)",
        "Family",
        "Health (Life Expectancy)",
        "Freedom",
        "Trust (Government Corruption)",
        "Generosity",
    ])?;

    for (country, region, rank, values) in ROWS {
        let mut record = vec![country.to_string(), region.to_string(), rank.to_string()];
        record.extend(values.iter().map(|v| format!("{v:.5}")));
        writer.write_record(&record)?;
    }

    writer.flush().context("flushing CSV")?;
    log::info!("Wrote {} countries to {OUTPUT}", ROWS.len());
    println!("Wrote {} countries to {OUTPUT}", ROWS.len());
    Ok(())
}
