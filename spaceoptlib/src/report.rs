//! High-level report API.
//!
//! This module ties the pipeline together: read numbers, split them into
//! apartment blocks, build a listing and a summary for each apartment, and
//! render the result.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::data::{summarize, Apartment, ApartmentListing, ApartmentSummary};
use crate::options::Sections;
use crate::output::{render_listing, render_summary_table};
use crate::source::{read_numbers, read_numbers_from_path, segments};
use crate::Result;

/// Listings and summaries for every apartment, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Per-apartment room listings
    pub listings: Vec<ApartmentListing>,
    /// Per-apartment dry/wet/utility summaries
    pub summaries: Vec<ApartmentSummary>,
}

impl Report {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of apartments in the report.
    pub fn apartment_count(&self) -> usize {
        self.summaries.len()
    }

    /// Add one apartment's listing and summary.
    pub fn push(&mut self, apartment: &Apartment) {
        self.listings.push(apartment.listing());
        self.summaries.push(summarize(apartment));
    }

    /// Render the selected sections as text.
    ///
    /// Each listing is followed by an empty line; the summary table comes
    /// last.
    pub fn render_text(&self, sections: Sections) -> String {
        let mut output = String::new();
        if sections.listing {
            for listing in &self.listings {
                output.push_str(&render_listing(listing));
                output.push('\n');
            }
        }
        if sections.summary {
            output.push_str(&render_summary_table(&self.summaries));
        }
        output
    }
}

/// Build a report from the flat number sequence.
///
/// # Example
///
/// ```rust
/// use spaceoptlib::{build_report, parse_numbers};
///
/// let values = parse_numbers("1 2 101 3.0 4.0 -1 2 4 1 2.0 2.0 -1");
/// let report = build_report(&values);
/// assert_eq!(report.apartment_count(), 2);
/// assert_eq!(report.summaries[1].wet.area, 4.0);
/// ```
pub fn build_report(values: &[f64]) -> Report {
    let mut report = Report::new();
    for block in segments(values) {
        if let Some(apartment) = Apartment::from_slice(block) {
            debug!(
                apartment = apartment.id,
                rooms = apartment.rooms.len(),
                "processing apartment"
            );
            report.push(&apartment);
        }
    }
    info!(
        apartments = report.apartment_count(),
        values = values.len(),
        "report built"
    );
    report
}

/// Read numbers from `reader` and build a report.
pub fn report_from_reader<R: Read>(reader: R) -> Result<Report> {
    let values = read_numbers(reader)?;
    Ok(build_report(&values))
}

/// Read numbers from the file at `path` and build a report.
pub fn report_from_path(path: impl AsRef<Path>) -> Result<Report> {
    let values = read_numbers_from_path(path)?;
    Ok(build_report(&values))
}
