use super::{
    direction::Direction,
    offset::{OffsetCoordinate, Parity},
};
use crate::geometry::Orientation;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. Only `q` and `r` are stored; `s` is always derived,
/// so the constraint cannot be violated once a `Coordinate` exists.
///
/// `s` and the arithmetic operators require every cube component to fit in an `i32`.
/// [`Coordinate::distance`] and [`Coordinate::from_cube`] accept any components.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[display("({q}, {r})")]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { q: 0, r: 0 };

    /// Create a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Coordinate {
        Coordinate { q, r }
    }

    /// Create a coordinate from all three cube components.
    ///
    /// Fails unless `q + r + s == 0`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Result<Coordinate, CoordinateError> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(CoordinateError::InconsistentCube { q, r, s });
        }
        Ok(Coordinate { q, r })
    }

    /// Convert offset `(col, row)` coordinates into axial ones.
    ///
    /// Uses the default [`Parity`]; see [`Coordinate::from_offset_with`].
    pub fn from_offset(col: i32, row: i32, orientation: Orientation) -> Coordinate {
        Self::from_offset_with(OffsetCoordinate::new(col, row), orientation, Parity::default())
    }

    /// Convert offset coordinates into axial ones with an explicit parity.
    pub fn from_offset_with(
        offset: OffsetCoordinate,
        orientation: Orientation,
        parity: Parity,
    ) -> Coordinate {
        offset.to_axial(orientation, parity)
    }

    /// Convert these coordinates into offset coordinates, using the default [`Parity`].
    pub fn to_offset(self, orientation: Orientation) -> OffsetCoordinate {
        self.to_offset_with(orientation, Parity::default())
    }

    /// Convert these coordinates into offset coordinates with an explicit parity.
    pub fn to_offset_with(self, orientation: Orientation, parity: Parity) -> OffsetCoordinate {
        OffsetCoordinate::from_axial(self, orientation, parity)
    }

    /// The derived third cube component.
    #[inline]
    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    /// `(q, r, s)`
    #[inline]
    pub fn cube(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s())
    }

    /// Number of single steps needed to get from `self` to `other`.
    ///
    /// Saturates at `i32::MAX`.
    pub fn distance(self, other: Coordinate) -> i32 {
        let dq = self.q as i64 - other.q as i64;
        let dr = self.r as i64 - other.r as i64;
        let steps = dq.abs().max(dr.abs()).max((dq + dr).abs());
        i32::try_from(steps).unwrap_or(i32::MAX)
    }

    /// The coordinate one step away in `direction`.
    pub fn neighbor(self, direction: Direction) -> Coordinate {
        self + direction
    }

    /// All six neighbors, in [`Direction::iter`] order.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Lift into fractional cube space.
    pub fn to_fractional(self) -> FractionalCoordinate {
        FractionalCoordinate::new(self.q as f64, self.r as f64)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((q, r): (i32, i32)) -> Self {
        Coordinate::new(q, r)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        Coordinate::new(-self.q, -self.r)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.q * rhs, self.r * rhs)
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs.unit();
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

/// Cube components were given explicitly and disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("cube coordinates ({q}, {r}, {s}) do not sum to zero")]
    InconsistentCube { q: i32, r: i32, s: i32 },
}

/// A point in cube space which need not lie on a hex center.
///
/// Produced by pixel-to-hex conversion and by interpolation; use
/// [`FractionalCoordinate::round`] to find the hex containing it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FractionalCoordinate {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCoordinate {
    pub fn new(q: f64, r: f64) -> FractionalCoordinate {
        FractionalCoordinate { q, r, s: -q - r }
    }

    /// Linear interpolation in cube space; `t == 0` is `self`, `t == 1` is `other`.
    pub fn lerp(self, other: FractionalCoordinate, t: f64) -> FractionalCoordinate {
        FractionalCoordinate {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }

    /// Round to the hex containing this point.
    ///
    /// Each component is rounded independently; the component with the largest
    /// rounding error is then recomputed from the other two so that `q + r + s == 0`.
    pub fn round(self) -> Coordinate {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }

        Coordinate::new(q as i32, r as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_invariant() {
        for q in -5..=5 {
            for r in -5..=5 {
                let (q, r, s) = Coordinate::new(q, r).cube();
                assert_eq!(q + r + s, 0);
            }
        }
    }

    #[test]
    fn test_from_cube() {
        assert_eq!(Coordinate::from_cube(2, -1, -1), Ok(Coordinate::new(2, -1)));
        assert_eq!(
            Coordinate::from_cube(1, 1, 1),
            Err(CoordinateError::InconsistentCube { q: 1, r: 1, s: 1 })
        );
    }

    #[test]
    fn test_extreme_components() {
        let low = Coordinate::new(i32::MIN, 0);
        let high = Coordinate::new(i32::MAX, 0);
        assert_eq!(low.distance(high), i32::MAX);
        assert_eq!(high.distance(Coordinate::new(i32::MAX - 3, 0)), 3);
        assert!(Coordinate::from_cube(i32::MAX, i32::MAX, 0).is_err());
        assert_eq!(
            Coordinate::from_cube(i32::MAX, i32::MIN, 1),
            Ok(Coordinate::new(i32::MAX, i32::MIN))
        );
    }

    #[test]
    fn test_distance() {
        let origin = Coordinate::ORIGIN;
        assert_eq!(origin.distance(origin), 0);
        assert_eq!(origin.distance(Coordinate::new(3, -3)), 3);
        assert_eq!(Coordinate::new(-2, 4).distance(Coordinate::new(1, -1)), 5);
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = Coordinate::new(4, -7);
        let neighbors: Vec<_> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 6);
        assert!(neighbors.iter().all(|&n| n.distance(center) == 1));
        assert_eq!(center.neighbor(Direction::East), Coordinate::new(5, -7));
    }

    #[test]
    fn test_display_and_parse() {
        let coordinate = Coordinate::new(-3, 12);
        assert_eq!(coordinate.to_string(), "(-3, 12)");
        assert_eq!("(-3, 12)".parse::<Coordinate>().unwrap(), coordinate);
    }

    #[test]
    fn test_round_fixes_largest_error() {
        let rounded = FractionalCoordinate::new(0.4, 0.4).round();
        let (q, r, s) = rounded.cube();
        assert_eq!(q + r + s, 0);
        assert_eq!(rounded, Coordinate::new(0, 1));

        assert_eq!(FractionalCoordinate::new(1.1, -0.9).round(), Coordinate::new(1, -1));
        assert_eq!(FractionalCoordinate::new(2.0, 3.0).round(), Coordinate::new(2, 3));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Coordinate::new(-2, 1).to_fractional();
        let b = Coordinate::new(3, 0).to_fractional();
        assert_eq!(a.lerp(b, 0.0).round(), Coordinate::new(-2, 1));
        assert_eq!(a.lerp(b, 1.0).round(), Coordinate::new(3, 0));
    }
}
