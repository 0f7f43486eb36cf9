pub mod grid;
pub mod hex;
pub mod layout;
pub mod orientation;
pub mod point;
pub mod traverse;

pub use grid::Grid;
pub use hex::{define_hex_type, Coordinate, Direction, Hex, HexType};
pub use layout::Layout;
pub use orientation::Orientation;
pub use point::{Bounds, Point};
