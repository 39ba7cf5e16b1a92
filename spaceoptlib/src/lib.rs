//! # spaceoptlib
//!
//! A library for reporting apartment floor areas from a flat stream of numbers.
//!
//! ## Overview
//!
//! The input is a sequence of whitespace-separated numbers. Each apartment is
//! its id followed by four numbers per room (type, number, length, width)
//! and is terminated by a negative sentinel:
//!
//! ```text
//! apartment_id [room_type room_number length width]* -1
//! ```
//!
//! The pipeline has three stages:
//!
//! - **Source**: Read numbers and split them into apartment blocks
//! - **Data**: Decode rooms, merge combined rooms, sum areas per category
//! - **Output**: Render per-apartment listings and the summary table
//!
//! Rooms are classified into three categories:
//!
//! - **Dry**: Hallway, Bedroom, Living
//! - **Wet**: Bathroom, Kitchen, Laundry
//! - **Utility**: Storage, Garage, Balcony
//!
//! Unused rooms and unknown room types belong to no category.
//!
//! ## Example
//!
//! ```rust
//! use spaceoptlib::{build_report, parse_numbers, Sections};
//!
//! let values = parse_numbers("1 2 101 3.0 4.0 -1");
//! let report = build_report(&values);
//!
//! assert_eq!(report.summaries[0].dry.area, 12.0);
//! let text = report.render_text(Sections::all());
//! assert!(text.contains("Apartment 1"));
//! assert!(text.contains("|  1  |   12.00 100.0%  |"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod report;
pub mod source;

pub use data::{
    summarize, Apartment, ApartmentListing, ApartmentSummary, Category, CategoryShare,
    ListingEntry, Room, RoomType, FIELDS_PER_ROOM,
};
pub use error::SpaceOptError;
pub use options::{Section, Sections};
pub use output::{render_listing, render_summary_table, SummaryTable, TableRow};
pub use report::{build_report, report_from_path, report_from_reader, Report};
pub use source::{
    find_sentinel, is_sentinel, parse_numbers, read_numbers, read_numbers_from_path, segments,
    Segments,
};

/// Result type for spaceoptlib operations
pub type Result<T> = std::result::Result<T, SpaceOptError>;
