//! Number stream reader.
//!
//! Pulls whitespace-separated floating-point tokens out of the input. The
//! reader knows nothing about apartments or rooms; it only yields the flat
//! sequence of values in input order.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::SpaceOptError;
use crate::Result;

/// Parse as many leading numbers as possible from `text`.
///
/// Reading stops at the first token that is not a valid number. That is not
/// an error: everything before the bad token is returned.
///
/// # Example
///
/// ```rust
/// use spaceoptlib::parse_numbers;
///
/// assert_eq!(parse_numbers("1 2 101\n3.0 4 -1"), vec![1.0, 2.0, 101.0, 3.0, 4.0, -1.0]);
/// assert_eq!(parse_numbers("1 2 oops 3"), vec![1.0, 2.0]);
/// ```
pub fn parse_numbers(text: &str) -> Vec<f64> {
    let mut values = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                warn!(position, token, "stopped reading at non-numeric token");
                break;
            }
        }
    }
    debug!(count = values.len(), "read numbers");
    values
}

/// Read the whole stream and parse its numbers.
pub fn read_numbers<R: Read>(mut reader: R) -> Result<Vec<f64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_numbers(&text))
}

/// Read and parse the numbers in a file.
pub fn read_numbers_from_path(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpaceOptError::PathNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| SpaceOptError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_numbers(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_parse_mixed_whitespace() {
        let values = parse_numbers("  5\t1 10\n2.0 3.0\r\n-1  ");
        assert_eq!(values, vec![5.0, 1.0, 10.0, 2.0, 3.0, -1.0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_numbers("").is_empty());
        assert!(parse_numbers(" \n\t ").is_empty());
    }

    #[test]
    fn test_parse_stops_at_malformed_token() {
        let values = parse_numbers("1 2 101 3.0 abc 4.0 -1");
        assert_eq!(values, vec![1.0, 2.0, 101.0, 3.0]);
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!(parse_numbers("1e2 2.5E-1"), vec![100.0, 0.25]);
    }

    #[test]
    fn test_read_numbers_from_reader() {
        let values = read_numbers(Cursor::new("1 2 101 3.0 4.0 -1")).unwrap();
        assert_eq!(values.len(), 6);
        assert_eq!(values[5], -1.0);
    }

    #[test]
    fn test_read_numbers_invalid_utf8() {
        let bytes: &[u8] = &[0x31, 0x20, 0xff, 0xfe];
        let err = read_numbers(bytes).unwrap_err();
        assert!(matches!(err, SpaceOptError::Io(_)));
    }

    #[test]
    fn test_read_numbers_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apartments.txt");
        fs::write(&path, "7 3 1 4.0 5.0\n-1\n").unwrap();

        let values = read_numbers_from_path(&path).unwrap();
        assert_eq!(values, vec![7.0, 3.0, 1.0, 4.0, 5.0, -1.0]);
    }

    #[test]
    fn test_read_numbers_missing_path() {
        let dir = tempdir().unwrap();
        let err = read_numbers_from_path(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SpaceOptError::PathNotFound(_)));
    }

    #[test]
    fn test_read_numbers_from_directory_fails() {
        let dir = tempdir().unwrap();
        let err = read_numbers_from_path(dir.path()).unwrap_err();
        assert!(matches!(err, SpaceOptError::FileRead { .. }));
    }
}
