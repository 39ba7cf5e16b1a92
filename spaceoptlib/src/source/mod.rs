//! Source stage: turn raw input into apartment blocks.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Reading**: Parse whitespace-separated numbers from text, a reader, or a file
//! - **Segmenting**: Split the flat number sequence at negative sentinels
//!
//! ## Example
//!
//! ```rust
//! use spaceoptlib::source::{parse_numbers, segments};
//!
//! let values = parse_numbers("1 2 101 3.0 4.0 -1 2 4 1 2.0 2.0 -1");
//! assert_eq!(segments(&values).count(), 2);
//! ```

pub mod reader;
pub mod segment;

pub use reader::{parse_numbers, read_numbers, read_numbers_from_path};
pub use segment::{find_sentinel, is_sentinel, segments, Segments};
