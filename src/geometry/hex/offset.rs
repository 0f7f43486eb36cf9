use super::Coordinate;
use crate::geometry::Orientation;

/// Which rows (pointy-top) or columns (flat-top) are shoved by half a hex.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-offset).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// Odd rows or columns are shoved forward.
    #[default]
    Odd,
    /// Even rows or columns are shoved forward.
    Even,
}

/// Column/row addressing for rectangular hex maps.
///
/// Meaningless without the [`Orientation`] and [`Parity`] it was produced with.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct OffsetCoordinate {
    pub col: i32,
    pub row: i32,
}

/// Half of `n`, shifted toward the shoved side of the given parity.
///
/// `n & 1` is 1 for odd values of either sign, so both branches always divide an even number.
#[inline]
fn shove(n: i32, parity: Parity) -> i32 {
    match parity {
        Parity::Odd => (n - (n & 1)) / 2,
        Parity::Even => (n + (n & 1)) / 2,
    }
}

impl OffsetCoordinate {
    pub const fn new(col: i32, row: i32) -> OffsetCoordinate {
        OffsetCoordinate { col, row }
    }

    /// Convert axial coordinates into offset coordinates.
    pub fn from_axial(
        coordinate: Coordinate,
        orientation: Orientation,
        parity: Parity,
    ) -> OffsetCoordinate {
        let Coordinate { q, r } = coordinate;
        match orientation {
            Orientation::Pointy => OffsetCoordinate::new(q + shove(r, parity), r),
            Orientation::Flat => OffsetCoordinate::new(q, r + shove(q, parity)),
        }
    }

    /// Convert these offset coordinates into axial coordinates.
    pub fn to_axial(self, orientation: Orientation, parity: Parity) -> Coordinate {
        let OffsetCoordinate { col, row } = self;
        match orientation {
            Orientation::Pointy => Coordinate::new(col - shove(row, parity), row),
            Orientation::Flat => Coordinate::new(col, row - shove(col, parity)),
        }
    }
}

impl From<(i32, i32)> for OffsetCoordinate {
    fn from((col, row): (i32, i32)) -> Self {
        OffsetCoordinate::new(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARITIES: [Parity; 2] = [Parity::Odd, Parity::Even];

    #[test]
    fn test_round_trip() {
        for orientation in Orientation::iter() {
            for parity in PARITIES {
                for q in -8..=8 {
                    for r in -8..=8 {
                        let coordinate = Coordinate::new(q, r);
                        let offset = coordinate.to_offset_with(orientation, parity);
                        assert_eq!(
                            Coordinate::from_offset_with(offset, orientation, parity),
                            coordinate,
                            "{orientation} {parity}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_odd_rows_are_shoved() {
        // row 1 under odd parity starts half a hex to the right, so its column 0 is q = 0
        assert_eq!(
            Coordinate::from_offset(0, 1, Orientation::Pointy),
            Coordinate::new(0, 1)
        );
        assert_eq!(
            Coordinate::from_offset(0, 2, Orientation::Pointy),
            Coordinate::new(-1, 2)
        );
        assert_eq!(
            Coordinate::from_offset(0, -1, Orientation::Pointy),
            Coordinate::new(1, -1)
        );
    }

    #[test]
    fn test_even_columns_are_shoved() {
        let parity = Parity::Even;
        assert_eq!(
            OffsetCoordinate::new(1, 0).to_axial(Orientation::Flat, parity),
            Coordinate::new(1, -1)
        );
        assert_eq!(
            OffsetCoordinate::new(2, 0).to_axial(Orientation::Flat, parity),
            Coordinate::new(2, -1)
        );
    }

    #[test]
    fn test_parity_text() {
        assert_eq!(Parity::Even.to_string(), "even");
        assert_eq!("odd".parse::<Parity>().unwrap(), Parity::Odd);
    }
}
