//! Output formatting: present listings and summaries as text.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **Listings**: One block per apartment with a row per room and the total area
//! - **SummaryTable**: Bordered table with one row per apartment
//!
//! Both are pure presentation - all area and percentage computation happens
//! in the data stage.

pub mod listing;
pub mod table;

pub use listing::render_listing;
pub use table::{render_summary_table, SummaryTable, TableRow};
