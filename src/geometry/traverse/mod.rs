//! Traversers: restartable producers of coordinate sequences.
//!
//! A traverser only describes a sequence. Each call to [`Traverser::traverse`]
//! builds a fresh, independent iterator, so the same traverser can be walked any
//! number of times and stopping early never needs cleanup. Traversers know nothing
//! about payloads; a grid hands its layout to [`Traverser::traverse_in`] so shapes
//! drawn in offset space can follow the grid's orientation.

pub mod line;
pub mod rectangle;
pub mod ring;

pub use line::{line_between, line_towards, Line, Ray};
pub use rectangle::{rectangle, Rectangle};
pub use ring::{ring, spiral, Ring, Spiral};

use crate::geometry::{
    hex::{Coordinate, Direction},
    Layout,
};

/// A restartable, finite sequence of coordinates.
pub trait Traverser {
    type Iter: Iterator<Item = Coordinate>;

    /// Start a fresh walk of this sequence.
    fn traverse(&self) -> Self::Iter;

    /// Start a fresh walk for hexes drawn with `layout`.
    ///
    /// Only traversers whose shape depends on orientation or offset parity
    /// differ from [`Traverser::traverse`].
    fn traverse_in(&self, layout: &Layout) -> Self::Iter {
        let _ = layout;
        self.traverse()
    }
}

impl<T: Traverser + ?Sized> Traverser for &T {
    type Iter = T::Iter;

    fn traverse(&self) -> Self::Iter {
        (**self).traverse()
    }

    fn traverse_in(&self, layout: &Layout) -> Self::Iter {
        (**self).traverse_in(layout)
    }
}

/// A traverser parameter was out of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TraverseError {
    #[error("radius must not be negative; got {0}")]
    NegativeRadius(i32),
    #[error("radius {radius} around {center} leaves the i32 coordinate range")]
    OutOfRange { center: Coordinate, radius: i32 },
}

/// An explicit list of coordinates, visited in order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FromCoordinates(pub Vec<Coordinate>);

/// Visit exactly the given coordinates, in order.
pub fn from_coordinates(coordinates: impl IntoIterator<Item = Coordinate>) -> FromCoordinates {
    FromCoordinates(coordinates.into_iter().collect())
}

impl Traverser for FromCoordinates {
    type Iter = std::vec::IntoIter<Coordinate>;

    fn traverse(&self) -> Self::Iter {
        self.0.clone().into_iter()
    }
}

/// Two traversers, one after the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Concat<A, B>(pub A, pub B);

/// Visit everything `first` visits, then everything `second` visits.
///
/// Duplicates are not removed.
pub fn concat<A: Traverser, B: Traverser>(first: A, second: B) -> Concat<A, B> {
    Concat(first, second)
}

impl<A: Traverser, B: Traverser> Traverser for Concat<A, B> {
    type Iter = std::iter::Chain<A::Iter, B::Iter>;

    fn traverse(&self) -> Self::Iter {
        self.0.traverse().chain(self.1.traverse())
    }

    fn traverse_in(&self, layout: &Layout) -> Self::Iter {
        self.0.traverse_in(layout).chain(self.1.traverse_in(layout))
    }
}

/// A path of single steps from a starting coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    start: Coordinate,
    directions: Vec<Direction>,
}

/// Visit `start`, then each coordinate reached by taking the given steps in turn.
///
/// Combines naturally with [`Directions`][crate::geometry::hex::Directions] parsing:
///
/// ```
/// # use hexgrid::geometry::{hex::{Coordinate, Directions}, traverse::{walk, Traverser}};
/// let Directions(steps) = "esew".parse().unwrap();
/// let path: Vec<_> = walk(Coordinate::ORIGIN, steps).traverse().collect();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[3], Coordinate::new(0, 1));
/// ```
pub fn walk(start: Coordinate, directions: impl IntoIterator<Item = Direction>) -> Walk {
    Walk {
        start,
        directions: directions.into_iter().collect(),
    }
}

impl Traverser for Walk {
    type Iter = WalkIter;

    fn traverse(&self) -> WalkIter {
        WalkIter {
            next: Some(self.start),
            directions: self.directions.clone().into_iter(),
        }
    }
}

/// Iterator created by [`Walk::traverse`].
pub struct WalkIter {
    next: Option<Coordinate>,
    directions: std::vec::IntoIter<Direction>,
}

impl Iterator for WalkIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let current = self.next?;
        self.next = self.directions.next().map(|direction| current + direction);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self.next {
            Some(_) => self.directions.len() + 1,
            None => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for WalkIter {}
