//! Apartment records and their room listings.
//!
//! An apartment block is its id followed by groups of
//! [`FIELDS_PER_ROOM`] values, one per room. Adjacent rooms with the same
//! type code and room number are parts of one physical room: only the last
//! part of such a run shows an area, and that area covers the whole run.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::room::{Room, RoomType, FIELDS_PER_ROOM};

/// One apartment: its id and its rooms in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: i64,
    pub rooms: Vec<Room>,
}

impl Apartment {
    /// Decode an apartment from its block of values (sentinel excluded).
    ///
    /// Returns `None` for an empty block. Trailing values that do not make
    /// up a full room are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spaceoptlib::Apartment;
    ///
    /// let apartment = Apartment::from_slice(&[1.0, 2.0, 101.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(apartment.id, 1);
    /// assert_eq!(apartment.total_area(), 12.0);
    /// ```
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        let (&id, fields) = values.split_first()?;
        let id = id as i64;

        let groups = fields.chunks_exact(FIELDS_PER_ROOM);
        let leftover = groups.remainder().len();
        if leftover > 0 {
            warn!(apartment = id, leftover, "ignoring incomplete trailing room");
        }

        let rooms = groups
            .filter_map(|group| <&[f64; FIELDS_PER_ROOM]>::try_from(group).ok())
            .map(Room::from_fields)
            .collect();

        Some(Self { id, rooms })
    }

    /// Sum of every room's area.
    pub fn total_area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    /// Whether room `index` continues into the next room.
    pub fn is_combined_with_next(&self, index: usize) -> bool {
        match (self.rooms.get(index), self.rooms.get(index + 1)) {
            (Some(current), Some(next)) => current.same_room_as(next),
            _ => false,
        }
    }

    /// Build the printable listing, merging combined rooms.
    pub fn listing(&self) -> ApartmentListing {
        let mut entries = Vec::with_capacity(self.rooms.len());
        let mut pending = 0.0;

        for (index, room) in self.rooms.iter().enumerate() {
            let shown_area = if self.is_combined_with_next(index) {
                pending += room.area();
                None
            } else {
                let shown = room.area() + pending;
                pending = 0.0;
                Some(shown)
            };
            entries.push(ListingEntry::new(room, shown_area));
        }

        ApartmentListing {
            id: self.id,
            entries,
            total_area: self.total_area(),
        }
    }
}

/// One printed room row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub room_type: RoomType,
    pub number: i64,
    pub length: f64,
    pub width: f64,
    /// This room's own area
    pub area: f64,
    /// Area printed in the right-hand column. `None` when the room
    /// continues into the next one and its area is carried forward.
    pub shown_area: Option<f64>,
}

impl ListingEntry {
    fn new(room: &Room, shown_area: Option<f64>) -> Self {
        Self {
            room_type: room.room_type(),
            number: room.display_number(),
            length: room.length,
            width: room.width,
            area: room.area(),
            shown_area,
        }
    }

    /// Whether this row's area is carried into the next row.
    pub fn is_combined(&self) -> bool {
        self.shown_area.is_none()
    }
}

/// Listing for one apartment, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentListing {
    pub id: i64,
    pub entries: Vec<ListingEntry>,
    pub total_area: f64,
}
