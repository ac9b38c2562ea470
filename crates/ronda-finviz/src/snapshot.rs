//! Snapshot table extraction.
//!
//! A Finviz quote page carries one `table.snapshot-table2` of alternating
//! label and value cells. Extraction is a pure function over the fetched
//! HTML so it can be tested from fixtures without any network.

use scraper::{Html, Selector};

/// Extract the percent value following `label` in the snapshot table.
///
/// Returns `None` when the table or label is absent, or when the value
/// cell is not a percent (Finviz renders unavailable estimates as "-").
#[must_use]
pub fn parse_snapshot_percent(html: &str, label: &str) -> Option<f64> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table.snapshot-table2").ok()?;
    let cell_selector = Selector::parse("td").ok()?;

    for table in document.select(&table_selector) {
        let cells: Vec<String> = table
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        for pair in cells.windows(2) {
            if pair[0] == label {
                return parse_percent(&pair[1]);
            }
        }
    }

    None
}

/// Parse a "12.34%" cell into a number; anything else is `None`.
fn parse_percent(cell: &str) -> Option<f64> {
    cell.strip_suffix('%')?.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FIXTURE: &str = r#"
        <html><body>
        <table class="snapshot-table2">
          <tr><td>P/E</td><td>32.10</td><td>EPS next Y</td><td>25.30%</td></tr>
          <tr><td>EPS next 5Y</td><td>18.00%</td><td>Insider Own</td><td>0.10%</td></tr>
          <tr><td>ROE</td><td>-</td><td>EPS next Q</td><td>-</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_next_year_growth() {
        let growth = parse_snapshot_percent(FIXTURE, "EPS next Y").unwrap();
        assert_relative_eq!(growth, 25.30);
    }

    #[test]
    fn test_parse_five_year_growth() {
        let growth = parse_snapshot_percent(FIXTURE, "EPS next 5Y").unwrap();
        assert_relative_eq!(growth, 18.0);
    }

    #[test]
    fn test_unavailable_estimate() {
        // Finviz renders missing estimates as a bare dash.
        assert_eq!(parse_snapshot_percent(FIXTURE, "EPS next Q"), None);
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(parse_snapshot_percent(FIXTURE, "EPS past 5Y"), None);
    }

    #[test]
    fn test_no_snapshot_table() {
        assert_eq!(
            parse_snapshot_percent("<html><table></table></html>", "EPS next Y"),
            None
        );
    }

    #[test]
    fn test_negative_percent() {
        let html = r#"<table class="snapshot-table2">
            <tr><td>EPS next Y</td><td>-4.20%</td></tr></table>"#;
        let growth = parse_snapshot_percent(html, "EPS next Y").unwrap();
        assert_relative_eq!(growth, -4.2);
    }
}
