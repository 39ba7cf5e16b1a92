//! Dry/wet/utility area summaries.
//!
//! Every room falls into at most one [`Category`]. An apartment's summary
//! holds the area of each category and its share of the classified total.
//! Rooms without a category (`Unused`, `Invalid`) count towards neither the
//! buckets nor the total.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use tracing::warn;

use super::apartment::Apartment;
use super::room::Category;

/// Area of one category and its percentage of the apartment total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub area: f64,
    pub percent: f64,
}

/// Summary record for one apartment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApartmentSummary {
    pub apartment_id: i64,
    pub dry: CategoryShare,
    pub wet: CategoryShare,
    pub utility: CategoryShare,
}

impl ApartmentSummary {
    /// Classified total: dry + wet + utility area.
    pub fn total_area(&self) -> f64 {
        self.dry.area + self.wet.area + self.utility.area
    }

    /// The share for a given category.
    pub fn share(&self, category: Category) -> CategoryShare {
        match category {
            Category::Dry => self.dry,
            Category::Wet => self.wet,
            Category::Utility => self.utility,
        }
    }

    /// The seven summary fields in table order: id, then area and percent
    /// for dry, wet and utility.
    pub fn fields(&self) -> [f64; 7] {
        [
            self.apartment_id as f64,
            self.dry.area,
            self.dry.percent,
            self.wet.area,
            self.wet.percent,
            self.utility.area,
            self.utility.percent,
        ]
    }
}

/// Running per-category area totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CategoryAreas {
    dry: f64,
    wet: f64,
    utility: f64,
}

impl CategoryAreas {
    fn total(&self) -> f64 {
        self.dry + self.wet + self.utility
    }
}

impl AddAssign<(Category, f64)> for CategoryAreas {
    fn add_assign(&mut self, (category, area): (Category, f64)) {
        match category {
            Category::Dry => self.dry += area,
            Category::Wet => self.wet += area,
            Category::Utility => self.utility += area,
        }
    }
}

/// Percentage of `part` in `total`, or 0 when there is no classified area.
fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Classify and sum an apartment's rooms.
///
/// # Example
///
/// ```rust
/// use spaceoptlib::{summarize, Apartment};
///
/// let apartment = Apartment::from_slice(&[1.0, 2.0, 101.0, 3.0, 4.0]).unwrap();
/// let summary = summarize(&apartment);
/// assert_eq!(summary.dry.area, 12.0);
/// assert_eq!(summary.dry.percent, 100.0);
/// ```
pub fn summarize(apartment: &Apartment) -> ApartmentSummary {
    let mut areas = CategoryAreas::default();
    for room in &apartment.rooms {
        if let Some(category) = room.room_type().category() {
            areas += (category, room.area());
        }
    }

    let total = areas.total();
    if total <= 0.0 {
        warn!(
            apartment = apartment.id,
            "no classified area, reporting 0% for every category"
        );
    }

    let share = |area: f64| CategoryShare {
        area,
        percent: percent_of(area, total),
    };

    ApartmentSummary {
        apartment_id: apartment.id,
        dry: share(areas.dry),
        wet: share(areas.wet),
        utility: share(areas.utility),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn apartment(values: &[f64]) -> Apartment {
        Apartment::from_slice(values).unwrap()
    }

    #[test]
    fn test_single_bedroom() {
        let summary = summarize(&apartment(&[1.0, 2.0, 101.0, 3.0, 4.0]));
        assert_eq!(summary.apartment_id, 1);
        assert_eq!(summary.dry, CategoryShare { area: 12.0, percent: 100.0 });
        assert_eq!(summary.wet, CategoryShare::default());
        assert_eq!(summary.utility, CategoryShare::default());
    }

    #[test]
    fn test_mixed_categories() {
        let summary = summarize(&apartment(&[
            4.0, // id
            3.0, 1.0, 5.0, 4.0, // living 20
            5.0, 1.0, 3.0, 2.0, // kitchen 6
            4.0, 1.0, 2.0, 2.0, // bathroom 4
            8.0, 1.0, 5.0, 2.0, // garage 10
        ]));

        assert_eq!(summary.dry.area, 20.0);
        assert_eq!(summary.wet.area, 10.0);
        assert_eq!(summary.utility.area, 10.0);
        assert!((summary.dry.percent - 50.0).abs() < TOLERANCE);
        assert!((summary.wet.percent - 25.0).abs() < TOLERANCE);
        assert!((summary.utility.percent - 25.0).abs() < TOLERANCE);
        assert_eq!(summary.share(Category::Utility), summary.utility);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let summary = summarize(&apartment(&[
            2.0, 1.0, 1.0, 1.3, 2.7, 2.0, 2.0, 3.3, 3.1, 6.0, 1.0, 1.9, 2.2, 9.0, 1.0, 0.7, 4.4,
        ]));
        let sum = summary.dry.percent + summary.wet.percent + summary.utility.percent;
        assert!((sum - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_unused_and_invalid_not_classified() {
        let summary = summarize(&apartment(&[
            6.0, // id
            0.0, 1.0, 3.0, 3.0, // unused
            42.0, 2.0, 2.0, 2.0, // invalid
            7.0, 3.0, 1.0, 2.0, // storage 2
        ]));

        assert_eq!(summary.total_area(), 2.0);
        assert_eq!(summary.utility.percent, 100.0);
        assert_eq!(summary.dry.area, 0.0);
        assert_eq!(summary.wet.area, 0.0);
    }

    #[test]
    fn test_zero_classified_area_reports_zero_percent() {
        let summary = summarize(&apartment(&[3.0, 0.0, 1.0, 4.0, 4.0]));
        assert_eq!(summary.total_area(), 0.0);
        for share in [summary.dry, summary.wet, summary.utility] {
            assert_eq!(share.percent, 0.0);
            assert!(!share.percent.is_nan());
        }
    }

    #[test]
    fn test_fields_order() {
        let summary = summarize(&apartment(&[7.0, 4.0, 1.0, 2.0, 3.0, 1.0, 1.0, 2.0, 3.0]));
        assert_eq!(summary.fields(), [7.0, 6.0, 50.0, 6.0, 50.0, 0.0, 0.0]);
    }
}
