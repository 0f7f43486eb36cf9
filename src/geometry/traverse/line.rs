use super::Traverser;
use crate::geometry::hex::{Coordinate, Direction, FractionalCoordinate};

/// The hexes on a straight line between two coordinates, both ends included.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#line-drawing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    start: Coordinate,
    stop: Coordinate,
}

/// Line from `start` to `stop` by cube interpolation.
///
/// Produces `start.distance(stop) + 1` coordinates, each adjacent to the previous.
pub fn line_between(start: Coordinate, stop: Coordinate) -> Line {
    Line { start, stop }
}

/// Pushes samples off hex edges so ties round the same way along the whole line.
const NUDGE: FractionalCoordinate = FractionalCoordinate {
    q: 1e-6,
    r: 2e-6,
    s: -3e-6,
};

fn nudged(coordinate: Coordinate) -> FractionalCoordinate {
    let c = coordinate.to_fractional();
    FractionalCoordinate {
        q: c.q + NUDGE.q,
        r: c.r + NUDGE.r,
        s: c.s + NUDGE.s,
    }
}

impl Traverser for Line {
    type Iter = LineIter;

    fn traverse(&self) -> LineIter {
        LineIter {
            start: nudged(self.start),
            stop: nudged(self.stop),
            steps: self.start.distance(self.stop) as u32,
            idx: 0,
        }
    }
}

/// Iterator created by [`Line::traverse`].
pub struct LineIter {
    start: FractionalCoordinate,
    stop: FractionalCoordinate,
    steps: u32,
    idx: u32,
}

impl Iterator for LineIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.idx > self.steps {
            return None;
        }
        let t = match self.steps {
            0 => 0.0,
            steps => self.idx as f64 / steps as f64,
        };
        self.idx += 1;
        Some(self.start.lerp(self.stop, t).round())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.steps + 1 - self.idx.min(self.steps + 1)) as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for LineIter {}

/// A straight run of hexes in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    start: Coordinate,
    direction: Direction,
    length: u32,
}

/// `length` hexes starting at `start` and stepping in `direction`.
///
/// A length of 0 produces nothing.
pub fn line_towards(start: Coordinate, direction: Direction, length: u32) -> Ray {
    Ray {
        start,
        direction,
        length,
    }
}

impl Traverser for Ray {
    type Iter = RayIter;

    fn traverse(&self) -> RayIter {
        RayIter {
            next: self.start,
            direction: self.direction,
            remaining: self.length,
        }
    }
}

/// Iterator created by [`Ray::traverse`].
pub struct RayIter {
    next: Coordinate,
    direction: Direction,
    remaining: u32,
}

impl Iterator for RayIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.next;
        self.next += self.direction;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for RayIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_line_to_self() {
        let point = Coordinate::new(3, -7);
        let line: Vec<_> = line_between(point, point).traverse().collect();
        assert_eq!(line, vec![point]);
    }

    #[test]
    fn test_line_along_axis() {
        let line: Vec<_> = line_between(Coordinate::ORIGIN, Coordinate::new(3, -3))
            .traverse()
            .collect();
        assert_eq!(
            line,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, -1),
                Coordinate::new(2, -2),
                Coordinate::new(3, -3),
            ]
        );
    }

    #[test]
    fn test_line_steps_are_adjacent() {
        let start = Coordinate::new(-4, 1);
        let stop = Coordinate::new(5, -2);
        let line: Vec<_> = line_between(start, stop).traverse().collect();
        assert_eq!(line.len(), start.distance(stop) as usize + 1);
        assert_eq!(line.first(), Some(&start));
        assert_eq!(line.last(), Some(&stop));
        assert!(line
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.distance(*b) == 1));
    }

    #[test]
    fn test_line_size_hint() {
        let mut iter = line_between(Coordinate::ORIGIN, Coordinate::new(2, 1)).traverse();
        assert_eq!(iter.len(), 4);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_ray() {
        let ray: Vec<_> = line_towards(Coordinate::new(1, 1), Direction::Southwest, 3)
            .traverse()
            .collect();
        assert_eq!(
            ray,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(0, 2),
                Coordinate::new(-1, 3),
            ]
        );
        assert_eq!(
            line_towards(Coordinate::ORIGIN, Direction::East, 0)
                .traverse()
                .count(),
            0
        );
    }
}
