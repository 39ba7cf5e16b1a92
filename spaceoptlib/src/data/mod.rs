//! Data stage: decode apartments and compute their areas.
//!
//! This module handles the second stage of the pipeline - turning one
//! apartment block into structured data. It provides:
//!
//! - **Rooms**: Room records, room types and their categories
//! - **Apartments**: Decoding a block and merging combined rooms into a listing
//! - **Summaries**: Dry/wet/utility areas and percentages per apartment
//!
//! ## Example
//!
//! ```rust
//! use spaceoptlib::data::{summarize, Apartment};
//!
//! let apartment = Apartment::from_slice(&[5.0, 1.0, 10.0, 2.0, 3.0, 1.0, 10.0, 4.0, 5.0]).unwrap();
//! assert_eq!(apartment.listing().total_area, 26.0);
//! assert_eq!(summarize(&apartment).dry.percent, 100.0);
//! ```

pub mod apartment;
pub mod room;
pub mod summary;

pub use apartment::{Apartment, ApartmentListing, ListingEntry};
pub use room::{Category, Room, RoomType, FIELDS_PER_ROOM};
pub use summary::{summarize, ApartmentSummary, CategoryShare};
