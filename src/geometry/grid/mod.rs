// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod grid;

pub use grid::Grid;

use crate::geometry::hex::{Coordinate, Hex};

/// Something which can be stored in a [`Grid`] through [`Grid::set_hexes`].
///
/// Only the coordinate and payload survive; the grid recomputes geometry from its
/// own hex type.
pub trait IntoHexEntry<Payload> {
    fn into_entry(self) -> (Coordinate, Payload);
}

impl<Payload> IntoHexEntry<Payload> for Hex<Payload> {
    fn into_entry(self) -> (Coordinate, Payload) {
        self.into_parts()
    }
}

impl<Payload> IntoHexEntry<Payload> for (Coordinate, Payload) {
    fn into_entry(self) -> (Coordinate, Payload) {
        self
    }
}
