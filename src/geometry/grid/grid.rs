use super::IntoHexEntry;
use crate::geometry::{
    hex::{Coordinate, Direction, Hex, HexType},
    traverse::Traverser,
    Bounds, Layout, Point,
};
use std::{collections::HashMap, fmt};
use tracing::debug;

/// A Grid keeps track of a set of hexes, keyed by coordinate.
///
/// Iteration follows insertion order: the order of the traverser the grid was
/// built from, followed by any coordinates later added with [`Grid::set_hexes`].
/// Every hex in a grid shares the grid's [`HexType`], and the grid owns them all.
///
/// ## Entry Points
///
/// - [`Grid::from_traverser`] fills a grid with default payloads from any [`Traverser`].
/// - [`Grid::new`] starts empty; add hexes with [`Grid::set_hexes`].
///
/// ## Concurrency
///
/// Mutation requires `&mut Grid`, so a grid has one writer at a time. Share it
/// behind a lock if several threads need to write.
#[derive(Clone)]
pub struct Grid<Payload> {
    hex_type: HexType<Payload>,
    hexes: Vec<Hex<Payload>>,
    index: HashMap<Coordinate, usize>,
}

impl<Payload> Grid<Payload> {
    /// Create an empty grid.
    pub fn new(hex_type: HexType<Payload>) -> Grid<Payload> {
        Grid {
            hex_type,
            hexes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a grid holding one hex per coordinate the traverser produces,
    /// with payloads produced by `procedure`.
    ///
    /// The traverser is walked with [`Traverser::traverse_in`] this grid's layout,
    /// so a [`rectangle`][crate::geometry::traverse::rectangle] comes out rectangular
    /// for flat and pointy hexes alike.
    ///
    /// Coordinates the traverser repeats are kept at their first position, with
    /// the payload from their last visit.
    pub fn procedural(
        hex_type: HexType<Payload>,
        traverser: impl Traverser,
        mut procedure: impl FnMut(Coordinate) -> Payload,
    ) -> Grid<Payload> {
        let mut grid = Grid::new(hex_type);
        let coordinates = traverser.traverse_in(grid.layout());
        grid.hexes.reserve(coordinates.size_hint().0);
        for coordinate in coordinates {
            grid.upsert(coordinate, procedure(coordinate));
        }
        debug!(size = grid.len(), "built grid from traverser");
        grid
    }

    /// The hex type shared by every hex in this grid.
    #[inline]
    pub fn hex_type(&self) -> &HexType<Payload> {
        &self.hex_type
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        self.hex_type.layout()
    }

    /// Number of hexes in this grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Same as [`Grid::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// The hex at `coordinate`, or `None` if the grid doesn't contain it.
    pub fn get(&self, coordinate: Coordinate) -> Option<&Hex<Payload>> {
        self.index.get(&coordinate).map(|&idx| &self.hexes[idx])
    }

    /// `true` when the grid contains a hex at `coordinate`.
    pub fn has(&self, coordinate: Coordinate) -> bool {
        self.index.contains_key(&coordinate)
    }

    /// Mutable access to the payload of the hex at `coordinate`.
    pub fn payload_mut(&mut self, coordinate: Coordinate) -> Option<&mut Payload> {
        let idx = *self.index.get(&coordinate)?;
        Some(self.hexes[idx].payload_mut())
    }

    /// Iterate over the hexes of this grid in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hex<Payload>> {
        self.hexes.iter()
    }

    /// Iterate over coordinates and payloads, with mutable access to the payloads.
    pub fn iter_payloads_mut(&mut self) -> impl Iterator<Item = (Coordinate, &mut Payload)> {
        self.hexes
            .iter_mut()
            .map(|hex| (hex.coordinate(), hex.payload_mut()))
    }

    /// Visit every hex in insertion order.
    pub fn for_each(&self, visit: impl FnMut(&Hex<Payload>)) {
        self.hexes.iter().for_each(visit)
    }

    /// Copy every hex into a `Vec`, in insertion order.
    pub fn to_vec(&self) -> Vec<Hex<Payload>>
    where
        Payload: Clone,
    {
        self.hexes.clone()
    }

    /// Insert or replace hexes.
    ///
    /// Accepts [`Hex`] values or `(Coordinate, Payload)` pairs. A hex at a coordinate
    /// already in the grid replaces its payload in place; new coordinates are appended.
    /// Hexes always take this grid's geometry, whatever hex type they were built with.
    pub fn set_hexes<I>(&mut self, hexes: I)
    where
        I: IntoIterator,
        I::Item: IntoHexEntry<Payload>,
    {
        let before = self.len();
        let mut touched = 0_usize;
        for entry in hexes {
            let (coordinate, payload) = entry.into_entry();
            self.upsert(coordinate, payload);
            touched += 1;
        }
        let inserted = self.len() - before;
        debug!(inserted, replaced = touched - inserted, "set hexes");
    }

    fn upsert(&mut self, coordinate: Coordinate, payload: Payload) {
        match self.index.get(&coordinate) {
            Some(&idx) => *self.hexes[idx].payload_mut() = payload,
            None => {
                self.index.insert(coordinate, self.hexes.len());
                self.hexes.push(self.hex_type.hex_with(coordinate, payload));
            }
        }
    }

    /// The bounding box of every corner of every hex, or `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.hexes.iter().flat_map(|hex| hex.corners().iter().copied()))
    }

    /// Width of the bounding box of this grid, in pixels. `0.0` when empty.
    pub fn pixel_width(&self) -> f64 {
        self.bounds().map_or(0.0, |bounds| bounds.width())
    }

    /// Height of the bounding box of this grid, in pixels. `0.0` when empty.
    pub fn pixel_height(&self) -> f64 {
        self.bounds().map_or(0.0, |bounds| bounds.height())
    }

    /// The stored hex under a pixel, if any.
    pub fn point_to_hex(&self, point: Point) -> Option<&Hex<Payload>> {
        self.get(self.layout().hex_at(point))
    }

    /// The stored neighbor of `coordinate` in `direction`, if any.
    pub fn neighbor_of(&self, coordinate: Coordinate, direction: Direction) -> Option<&Hex<Payload>> {
        self.get(coordinate.neighbor(direction))
    }

    /// Number of single steps between two coordinates.
    ///
    /// Neither coordinate needs to be in the grid.
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> i32 {
        from.distance(to)
    }

    /// The stored hexes a traverser visits, in the traverser's order.
    ///
    /// Coordinates the grid doesn't contain are skipped.
    pub fn traverse<'a, T>(&'a self, traverser: T) -> impl 'a + Iterator<Item = &'a Hex<Payload>>
    where
        T: 'a + Traverser,
        T::Iter: 'a,
    {
        traverser
            .traverse_in(self.layout())
            .filter_map(move |coordinate| self.get(coordinate))
    }
}

impl<Payload: Default> Grid<Payload> {
    /// Create a grid holding one hex with a default payload per coordinate the
    /// traverser produces.
    pub fn from_traverser(hex_type: HexType<Payload>, traverser: impl Traverser) -> Grid<Payload> {
        Self::procedural(hex_type, traverser, |_| Payload::default())
    }
}

impl<'a, Payload> IntoIterator for &'a Grid<Payload> {
    type Item = &'a Hex<Payload>;
    type IntoIter = std::slice::Iter<'a, Hex<Payload>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Payload> IntoIterator for Grid<Payload> {
    type Item = Hex<Payload>;
    type IntoIter = std::vec::IntoIter<Hex<Payload>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.into_iter()
    }
}

impl<Payload> Extend<(Coordinate, Payload)> for Grid<Payload> {
    fn extend<I: IntoIterator<Item = (Coordinate, Payload)>>(&mut self, iter: I) {
        self.set_hexes(iter)
    }
}

impl<Payload: fmt::Debug> fmt::Debug for Grid<Payload> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("hex_type", &self.hex_type)
            .field("hexes", &self.hexes)
            .finish()
    }
}

impl<Payload: PartialEq> PartialEq for Grid<Payload> {
    fn eq(&self, other: &Self) -> bool {
        self.hex_type == other.hex_type && self.hexes == other.hexes
    }
}
