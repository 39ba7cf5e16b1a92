//! Table-ready data structures for the summary report.
//!
//! This module provides `SummaryTable`, a presentation-ready structure
//! built from apartment summaries. Cells are pre-formatted strings; the
//! table only lays them out between fixed borders.
//!
//! The data flow is:
//! 1. Apartment blocks (raw numbers)
//! 2. ApartmentSummary (areas and percentages)
//! 3. SummaryTable (formatted cells for display)

use serde::{Deserialize, Serialize};

use crate::data::summary::{ApartmentSummary, CategoryShare};

/// Border line above and below the header and after the last row.
pub const BORDER: &str = "+-------+-----------------+-----------------+-----------------+";

/// Column titles.
pub const HEADER: &str = "| Apart |    Dry areas    |    Wet areas    |  Utility areas  |";

/// A single row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Apartment id cell, padded
    pub label: String,
    /// Dry, wet and utility cells: area then percentage
    pub values: Vec<String>,
}

impl TableRow {
    fn render(&self) -> String {
        format!("|{}|{}|", self.label, self.values.join("|"))
    }
}

/// Table-ready summary data, one row per apartment in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<TableRow>,
}

impl SummaryTable {
    /// Format each summary into a row.
    pub fn from_summaries(summaries: &[ApartmentSummary]) -> Self {
        let rows = summaries
            .iter()
            .map(|s| TableRow {
                label: format!("  {}  ", s.apartment_id),
                values: vec![
                    format_share(&s.dry),
                    format_share(&s.wet),
                    format_share(&s.utility),
                ],
            })
            .collect();

        Self { rows }
    }

    /// Lay the table out with its borders. Every line ends in a newline.
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(BORDER);
        output.push('\n');
        output.push_str(HEADER);
        output.push('\n');
        output.push_str(BORDER);
        output.push('\n');
        for row in &self.rows {
            output.push_str(&row.render());
            output.push('\n');
        }
        output.push_str(BORDER);
        output.push('\n');
        output
    }
}

/// Format one category cell: area with two decimals, percentage with one.
fn format_share(share: &CategoryShare) -> String {
    format!("{:8.2}{:6.1}%  ", share.area, share.percent)
}

/// Render the bordered summary table for all apartments.
pub fn render_summary_table(summaries: &[ApartmentSummary]) -> String {
    SummaryTable::from_summaries(summaries).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(area: f64, percent: f64) -> CategoryShare {
        CategoryShare { area, percent }
    }

    fn sample_summary(id: i64) -> ApartmentSummary {
        ApartmentSummary {
            apartment_id: id,
            dry: share(12.0, 100.0),
            wet: share(0.0, 0.0),
            utility: share(0.0, 0.0),
        }
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(&share(12.0, 100.0)), "   12.00 100.0%  ");
        assert_eq!(format_share(&share(0.0, 0.0)), "    0.00   0.0%  ");
        assert_eq!(format_share(&share(999.9, 33.333)), "  999.90  33.3%  ");
    }

    #[test]
    fn test_row_render() {
        let table = SummaryTable::from_summaries(&[sample_summary(1)]);
        assert_eq!(
            table.rows[0].render(),
            "|  1  |   12.00 100.0%  |    0.00   0.0%  |    0.00   0.0%  |"
        );
    }

    #[test]
    fn test_empty_table() {
        let rendered = render_summary_table(&[]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec![BORDER, HEADER, BORDER, BORDER]);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let rendered = render_summary_table(&[sample_summary(20), sample_summary(3)]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("|  20  |"));
        assert!(lines[4].starts_with("|  3  |"));
        assert_eq!(lines[5], BORDER);
    }

    #[test]
    fn test_border_matches_header_width() {
        assert_eq!(BORDER.len(), HEADER.len());
    }
}
