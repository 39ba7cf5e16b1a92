//! Room records and room-type classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of consecutive input values that describe one room.
pub const FIELDS_PER_ROOM: usize = 4;

/// Kind of room, decoded from its numeric code.
///
/// Codes `0..=9` map to the named variants; anything else is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Unused,
    Hallway,
    Bedroom,
    Living,
    Bathroom,
    Kitchen,
    Laundry,
    Storage,
    Garage,
    Balcony,
    Invalid,
}

impl RoomType {
    /// Decode a room-type code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => RoomType::Unused,
            1 => RoomType::Hallway,
            2 => RoomType::Bedroom,
            3 => RoomType::Living,
            4 => RoomType::Bathroom,
            5 => RoomType::Kitchen,
            6 => RoomType::Laundry,
            7 => RoomType::Storage,
            8 => RoomType::Garage,
            9 => RoomType::Balcony,
            _ => RoomType::Invalid,
        }
    }

    /// Display label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Unused => "Unused",
            RoomType::Hallway => "Hallway",
            RoomType::Bedroom => "Bedroom",
            RoomType::Living => "Living",
            RoomType::Bathroom => "Bathroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Laundry => "Laundry",
            RoomType::Storage => "Storage",
            RoomType::Garage => "Garage",
            RoomType::Balcony => "Balcony",
            RoomType::Invalid => "Invalid",
        }
    }

    /// Summary category for this room type, if it belongs to one.
    ///
    /// `Unused` and `Invalid` rooms count towards no category.
    pub fn category(&self) -> Option<Category> {
        match self {
            RoomType::Hallway | RoomType::Bedroom | RoomType::Living => Some(Category::Dry),
            RoomType::Bathroom | RoomType::Kitchen | RoomType::Laundry => Some(Category::Wet),
            RoomType::Storage | RoomType::Garage | RoomType::Balcony => Some(Category::Utility),
            RoomType::Unused | RoomType::Invalid => None,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() honours width and precision, e.g. {:<8.8}
        f.pad(self.label())
    }
}

/// Summary category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dry,
    Wet,
    Utility,
}

/// One room record: type code, room number, length and width.
///
/// The type code and room number are kept as they appeared in the input so
/// that adjacent rooms can be compared on their raw values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Raw room-type code
    pub code: f64,
    /// Raw room number
    pub number: f64,
    pub length: f64,
    pub width: f64,
}

impl Room {
    /// Build a room from one group of [`FIELDS_PER_ROOM`] values.
    pub fn from_fields(fields: &[f64; FIELDS_PER_ROOM]) -> Self {
        let [code, number, length, width] = *fields;
        Self {
            code,
            number,
            length,
            width,
        }
    }

    /// Decoded room type.
    pub fn room_type(&self) -> RoomType {
        RoomType::from_code(self.code as i64)
    }

    /// Room number as printed (truncated toward zero).
    pub fn display_number(&self) -> i64 {
        self.number as i64
    }

    /// Floor area: length times width.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Whether `other` describes another part of the same physical room.
    pub fn same_room_as(&self, other: &Room) -> bool {
        self.code == other.code && self.number == other.number
    }
}
