//! Options controlling what a report renders.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which report sections to render.
///
/// The listing section holds one block per apartment; the summary section
/// is the table across all apartments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    /// Render per-apartment listings
    pub listing: bool,
    /// Render the summary table
    pub summary: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self::all()
    }
}

impl Sections {
    /// Render every section (default)
    pub fn all() -> Self {
        Self {
            listing: true,
            summary: true,
        }
    }

    /// Render nothing
    pub fn none() -> Self {
        Self {
            listing: false,
            summary: false,
        }
    }

    /// Render only the per-apartment listings
    pub fn listing_only() -> Self {
        Self::none().with_listing(true)
    }

    /// Render only the summary table
    pub fn summary_only() -> Self {
        Self::none().with_summary(true)
    }

    /// Builder: set listing inclusion
    pub fn with_listing(mut self, include: bool) -> Self {
        self.listing = include;
        self
    }

    /// Builder: set summary inclusion
    pub fn with_summary(mut self, include: bool) -> Self {
        self.summary = include;
        self
    }
}

/// A single section name, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Listing,
    Summary,
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "listing" | "listings" => Ok(Section::Listing),
            "summary" => Ok(Section::Summary),
            _ => Err(format!(
                "Unknown section: {}. Use 'listing' or 'summary'.",
                s
            )),
        }
    }
}

impl FromIterator<Section> for Sections {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Sections::none(), |sections, section| match section {
                Section::Listing => sections.with_listing(true),
                Section::Summary => sections.with_summary(true),
            })
    }
}
