use super::Traverser;
use crate::geometry::{
    hex::{Coordinate, OffsetCoordinate, Parity},
    Layout, Orientation,
};

/// A rectangular block of hexes in offset space.
///
/// Rows are walked top to bottom, each row left to right. Because each row is
/// laid out in offset coordinates, the rendered shape is a rectangle rather than
/// a parallelogram, provided the rectangle's orientation and parity match the
/// layout the hexes are drawn with.
///
/// Orientation and parity left unset are taken from the layout when a grid
/// traverses the rectangle ([`Traverser::traverse_in`]), and fall back to
/// pointy, odd when traversed on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    start: Coordinate,
    width: u32,
    height: u32,
    orientation: Option<Orientation>,
    parity: Option<Parity>,
}

/// A `width * height` rectangle whose top left hex is the origin.
pub fn rectangle(width: u32, height: u32) -> Rectangle {
    Rectangle {
        start: Coordinate::ORIGIN,
        width,
        height,
        orientation: None,
        parity: None,
    }
}

impl Rectangle {
    /// Set the top left hex.
    pub fn start(mut self, start: Coordinate) -> Self {
        self.start = start;
        self
    }

    /// Fix the orientation, whatever layout traverses this rectangle.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Fix which rows or columns are shoved by half a hex.
    pub fn offset(mut self, parity: Parity) -> Self {
        self.parity = Some(parity);
        self
    }

    /// Use the orientation and parity of a layout.
    pub fn matching(self, layout: &Layout) -> Self {
        self.orientation(layout.orientation()).offset(layout.parity())
    }

    /// Number of coordinates this rectangle produces.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn iter_with(&self, orientation: Orientation, parity: Parity) -> RectangleIter {
        RectangleIter {
            origin: self.start.to_offset_with(orientation, parity),
            width: self.width as usize,
            area: self.area(),
            idx: 0,
            orientation,
            parity,
        }
    }
}

impl Traverser for Rectangle {
    type Iter = RectangleIter;

    fn traverse(&self) -> RectangleIter {
        self.iter_with(
            self.orientation.unwrap_or_default(),
            self.parity.unwrap_or_default(),
        )
    }

    fn traverse_in(&self, layout: &Layout) -> RectangleIter {
        self.iter_with(
            self.orientation.unwrap_or(layout.orientation()),
            self.parity.unwrap_or(layout.parity()),
        )
    }
}

/// Iterator created by [`Rectangle::traverse`].
pub struct RectangleIter {
    origin: OffsetCoordinate,
    width: usize,
    area: usize,
    idx: usize,
    orientation: Orientation,
    parity: Parity,
}

impl Iterator for RectangleIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.idx >= self.area {
            return None;
        }

        let col = (self.idx % self.width) as i32;
        let row = (self.idx / self.width) as i32;
        self.idx += 1;

        let offset = OffsetCoordinate::new(self.origin.col + col, self.origin.row + row);
        Some(offset.to_axial(self.orientation, self.parity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.area - self.idx;
        (size, Some(size))
    }
}

impl ExactSizeIterator for RectangleIter {}
