//! Table and CSV presentation.
//!
//! Rounding to two decimals happens here and only here; undefined values
//! render as "N/A" on the terminal and as an empty CSV cell, so a missing
//! ratio can never be confused with a zero one.

use anyhow::{Context, Result};
use ronda_core::{ScreenRow, ScreenTable, round2};
use std::path::Path;

/// CSV header, matching the terminal column order.
const CSV_HEADER: &[&str] = &[
    "Ticker",
    "Price",
    "Target",
    "Upside %",
    "PE",
    "fPE",
    "P/S",
    "EPS Growth %",
    "PEG",
    "fPEG",
    "EV-based PEG",
    "PEG 5Y",
    "EV/EBITDA",
    "EV/GP",
    "EV/GP/RG",
    "Status",
    "Analysts",
    "Insiders %",
];

/// Format a value for the terminal: two decimals, or "N/A" when missing.
pub(crate) fn fmt_cell(value: Option<f64>) -> String {
    round2(value).map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// Format a value for CSV: two decimals, or an empty cell when missing.
fn csv_cell(value: Option<f64>) -> String {
    round2(value).map_or_else(String::new, |v| format!("{v:.2}"))
}

/// The field values of one row, in [`CSV_HEADER`] order minus the ticker.
fn row_cells(row: &ScreenRow, cell: fn(Option<f64>) -> String, missing: &str) -> Vec<String> {
    let raw = &row.fundamentals;
    let derived = &row.ratios;

    vec![
        cell(raw.price),
        cell(raw.target_price),
        cell(derived.upside_pct),
        cell(raw.trailing_pe),
        cell(raw.forward_pe),
        cell(raw.price_to_sales),
        cell(raw.eps_growth_pct),
        cell(derived.trailing_peg),
        cell(derived.forward_peg),
        cell(derived.ev_peg),
        cell(raw.provider_peg),
        cell(derived.ev_to_ebitda),
        cell(derived.ev_to_gross_profit),
        cell(derived.ev_gp_to_rev_growth),
        raw.recommendation
            .clone()
            .unwrap_or_else(|| missing.to_string()),
        raw.analyst_count
            .map_or_else(|| missing.to_string(), |n| n.to_string()),
        cell(raw.insider_pct),
    ]
}

/// Print the screen table with aligned columns.
pub(crate) fn print_table(table: &ScreenTable) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "SCREEN (as of {}, sorted by {} {})",
        chrono::Utc::now().date_naive(),
        table.sort_key().as_str(),
        match table.sort_order() {
            ronda_core::SortOrder::Ascending => "ascending",
            ronda_core::SortOrder::Descending => "descending",
        }
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    print!("{:<8}", "Ticker");
    for header in &CSV_HEADER[1..] {
        print!(" {header:>12}");
    }
    println!();
    println!("{}", "─".repeat(8 + 13 * (CSV_HEADER.len() - 1)));

    for row in table.rows() {
        print!("{:<8}", row.symbol());
        for value in row_cells(row, fmt_cell, "N/A") {
            print!(" {value:>12}");
        }
        println!();
    }
    println!();
}

/// Write the screen table to a CSV file.
pub(crate) fn write_csv(path: &Path, table: &ScreenTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create CSV file {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for row in table.rows() {
        let mut record = vec![row.symbol().to_string()];
        record.extend(row_cells(row, csv_cell, ""));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}
