//! Per-apartment room listing.

use crate::data::apartment::{ApartmentListing, ListingEntry};

/// Rule printed under the apartment heading.
const RULE: &str = "-------------";

/// Area column text for rooms whose area is carried into the next row.
const CARRIED: &str = "     ---";

fn render_entry(entry: &ListingEntry) -> String {
    let area = match entry.shown_area {
        Some(area) => format!("{:9.2}", area),
        None => CARRIED.to_string(),
    };
    format!(
        "   {:<8.8}   {}{:8.2}{:8.2}\t{}",
        entry.room_type, entry.number, entry.length, entry.width, area
    )
}

/// Render one apartment's listing. Every line ends in a newline.
///
/// # Example
///
/// ```rust
/// use spaceoptlib::{render_listing, Apartment};
///
/// let apartment = Apartment::from_slice(&[1.0, 2.0, 101.0, 3.0, 4.0]).unwrap();
/// let text = render_listing(&apartment.listing());
/// assert!(text.starts_with("Apartment 1\n"));
/// assert!(text.contains("Bedroom"));
/// ```
pub fn render_listing(listing: &ApartmentListing) -> String {
    let mut output = format!("Apartment {}\n{}\n", listing.id, RULE);
    for entry in &listing.entries {
        output.push_str(&render_entry(entry));
        output.push('\n');
    }
    output.push_str(&format!(
        "   Total area   {:25.2} metres^2\n",
        listing.total_area
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Apartment;

    fn listing_for(values: &[f64]) -> ApartmentListing {
        Apartment::from_slice(values).unwrap().listing()
    }

    #[test]
    fn test_single_room_listing() {
        let text = render_listing(&listing_for(&[1.0, 2.0, 101.0, 3.0, 4.0]));
        let expected = "Apartment 1\n\
                        -------------\n   \
                        Bedroom    101    3.00    4.00\t    12.00\n   \
                        Total area                       12.00 metres^2\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_combined_rooms_listing() {
        let text = render_listing(&listing_for(&[
            5.0, 1.0, 10.0, 2.0, 3.0, 1.0, 10.0, 4.0, 5.0,
        ]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Apartment 5");
        assert_eq!(lines[2], "   Hallway    10    2.00    3.00\t     ---");
        assert_eq!(lines[3], "   Hallway    10    4.00    5.00\t    26.00");
        assert!(lines[4].ends_with("26.00 metres^2"));
    }

    #[test]
    fn test_invalid_room_label() {
        let text = render_listing(&listing_for(&[2.0, 42.0, 1.0, 2.0, 2.0]));
        assert!(text.contains("   Invalid    1    2.00    2.00\t     4.00\n"));
    }

    #[test]
    fn test_total_area_width() {
        let text = render_listing(&listing_for(&[1.0, 8.0, 1.0, 999.9, 100.0]));
        assert!(text.contains("   Total area                    99990.00 metres^2\n"));
    }

    #[test]
    fn test_no_rooms() {
        let text = render_listing(&listing_for(&[4.0]));
        assert_eq!(
            text,
            "Apartment 4\n-------------\n   Total area                        0.00 metres^2\n"
        );
    }
}
