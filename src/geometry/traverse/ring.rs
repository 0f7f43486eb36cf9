use super::{TraverseError, Traverser};
use crate::geometry::hex::{Coordinate, Direction};

/// Every coordinate at exactly `radius` steps from `center`.
///
/// ## Winding
///
/// The walk starts at the corner `radius` steps [`East`][Direction::East] of the
/// center, then follows the six edges in the order `Southwest`, `West`, `Northwest`,
/// `Northeast`, `East`, `Southeast`, taking `radius` steps along each. With screen
/// coordinates (y down), that is clockwise. The starting corner is the first item
/// and its `Northwest` neighbor is the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    center: Coordinate,
    radius: u32,
}

/// Ring of the given radius around `center`.
///
/// A radius of 0 produces only the center; otherwise the ring has `6 * radius` hexes.
/// Fails before producing anything for negative radii, or when some cube component
/// of the ring would not fit in an `i32`.
pub fn ring(center: Coordinate, radius: i32) -> Result<Ring, TraverseError> {
    let radius = checked_radius(center, radius)?;
    Ok(Ring { center, radius })
}

fn checked_radius(center: Coordinate, radius: i32) -> Result<u32, TraverseError> {
    let unsigned = u32::try_from(radius).map_err(|_| TraverseError::NegativeRadius(radius))?;
    let (q, r) = (center.q as i64, center.r as i64);
    let reach = radius as i64;
    let fits = [q, r, -q - r].into_iter().all(|component| {
        i32::try_from(component - reach).is_ok() && i32::try_from(component + reach).is_ok()
    });
    if !fits {
        return Err(TraverseError::OutOfRange { center, radius });
    }
    Ok(unsigned)
}

/// Direction walked along edge `edge` (`0..6`) of a ring.
#[inline]
fn edge_direction(edge: u32) -> Direction {
    Direction::Southwest.rotate_clockwise(edge as i32)
}

impl Ring {
    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of coordinates on this ring.
    pub fn hex_count(&self) -> usize {
        match self.radius {
            0 => 1,
            radius => 6 * radius as usize,
        }
    }
}

impl Traverser for Ring {
    type Iter = RingIter;

    fn traverse(&self) -> RingIter {
        RingIter {
            current: self.center + Direction::East.unit() * self.radius as i32,
            radius: self.radius,
            edge: 0,
            step: 0,
            remaining: self.hex_count(),
        }
    }
}

/// Iterator created by [`Ring::traverse`].
pub struct RingIter {
    current: Coordinate,
    radius: u32,
    edge: u32,
    step: u32,
    remaining: usize,
}

impl Iterator for RingIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let item = self.current;
        if self.radius > 0 {
            self.current += edge_direction(self.edge);
            self.step += 1;
            if self.step == self.radius {
                self.step = 0;
                self.edge += 1;
            }
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingIter {}

/// Concentric rings around `center`, from radius 0 outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spiral {
    center: Coordinate,
    radius: u32,
}

/// Every coordinate within `radius` steps of `center`, ring by ring.
///
/// Produces `ring(center, 0)`, then `ring(center, 1)`, up through `ring(center, radius)`,
/// for a total of `1 + 3 * radius * (radius + 1)` coordinates.
pub fn spiral(center: Coordinate, radius: i32) -> Result<Spiral, TraverseError> {
    let radius = checked_radius(center, radius)?;
    Ok(Spiral { center, radius })
}

impl Spiral {
    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of coordinates in this spiral.
    pub fn hex_count(&self) -> usize {
        let radius = self.radius as usize;
        1 + 3 * radius * (radius + 1)
    }
}

impl Traverser for Spiral {
    type Iter = SpiralIter;

    fn traverse(&self) -> SpiralIter {
        SpiralIter {
            center: self.center,
            max_radius: self.radius,
            radius: 0,
            ring: Ring {
                center: self.center,
                radius: 0,
            }
            .traverse(),
        }
    }
}

/// Iterator created by [`Spiral::traverse`].
pub struct SpiralIter {
    center: Coordinate,
    max_radius: u32,
    radius: u32,
    ring: RingIter,
}

impl Iterator for SpiralIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            if let Some(coordinate) = self.ring.next() {
                return Some(coordinate);
            }
            if self.radius >= self.max_radius {
                return None;
            }
            self.radius += 1;
            self.ring = Ring {
                center: self.center,
                radius: self.radius,
            }
            .traverse();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // rings radius+1 ..= max_radius hold 6k each
        let triangle = |n: usize| n * (n + 1) / 2;
        let outer =
            6 * (triangle(self.max_radius as usize) - triangle(self.radius as usize));
        let size = self.ring.len() + outer;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SpiralIter {}
