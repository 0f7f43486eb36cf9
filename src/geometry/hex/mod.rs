//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod direction;
pub mod hex_type;
pub mod offset;

pub use coordinate::{Coordinate, CoordinateError, FractionalCoordinate};
pub use direction::{Direction, DirectionError, Directions, ParseDirectionsError};
pub use hex_type::{define_hex_type, Hex, HexType};
pub use offset::{OffsetCoordinate, Parity};

/// The coordinate one step from `coordinate` in `direction`.
pub fn neighbor(coordinate: Coordinate, direction: Direction) -> Coordinate {
    coordinate.neighbor(direction)
}

/// Number of single steps between two coordinates.
pub fn distance(a: Coordinate, b: Coordinate) -> i32 {
    a.distance(b)
}
