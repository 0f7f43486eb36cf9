use super::Coordinate;
use std::str::FromStr;

/// Direction in a hexagonal coordinate system
///
/// Names assume the pointy-top orientation, where `East` and `West` are
/// horizontal neighbors. The axial vectors are the same for flat-top layouts;
/// only their on-screen angle changes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    East,
    Southeast,
    Southwest,
    West,
    Northwest,
    Northeast,
}

impl Direction {
    /// All directions, clockwise from `East`.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::Southeast,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
        Direction::Northeast,
    ];

    /// Iterate through all `Direction`s, clockwise from `East`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }

    /// Position of this direction in the clockwise order starting at `East`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The axial offset of one step in this direction.
    pub fn unit(self) -> Coordinate {
        let (q, r) = match self {
            Direction::East => (1, 0),
            Direction::Southeast => (0, 1),
            Direction::Southwest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::Northwest => (0, -1),
            Direction::Northeast => (1, -1),
        };
        Coordinate::new(q, r)
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        self.rotate_clockwise(3)
    }

    /// Rotate this direction clockwise by `steps` sixths of a turn.
    ///
    /// Negative values rotate counterclockwise.
    pub fn rotate_clockwise(self, steps: i32) -> Direction {
        let idx = (self.index() as i32 + steps).rem_euclid(6);
        Self::ALL[idx as usize]
    }

    /// Attempt to parse a direction from the head of the given string.
    ///
    /// Returns `(maybe_direction, unused_portion)`.
    ///
    /// Legal inputs (case sensitive): `e`, `se`, `sw`, `w`, `nw`, `ne`.
    pub fn try_parse(s: &str) -> (Option<Direction>, &str) {
        let mut chars = s.chars();
        let first = chars.next();
        let second = chars.next();
        match (first, second) {
            (Some('e'), _) => (Some(Direction::East), &s[1..]),
            (Some('s'), Some('e')) => (Some(Direction::Southeast), &s[2..]),
            (Some('s'), Some('w')) => (Some(Direction::Southwest), &s[2..]),
            (Some('w'), _) => (Some(Direction::West), &s[1..]),
            (Some('n'), Some('w')) => (Some(Direction::Northwest), &s[2..]),
            (Some('n'), Some('e')) => (Some(Direction::Northeast), &s[2..]),
            _ => (None, s),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(DirectionError::OutOfRange(value))
    }
}

/// A direction index was not in `0..6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    #[error("direction index {0} is out of range; expected 0..6")]
    OutOfRange(u8),
}

/// Helper for parsing a line of directions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directions(pub Vec<Direction>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        let mut directions = Vec::with_capacity(s.len());

        while !s.is_empty() {
            let (direction, remaining) = Direction::try_parse(s);
            match direction {
                None => return Err(ParseDirectionsError),
                Some(direction) => directions.push(direction),
            }

            s = remaining;
        }

        Ok(Directions(directions))
    }
}

impl IntoIterator for Directions {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Parsing failed for a line of hex directions
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Parsing hex direction failed")]
pub struct ParseDirectionsError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for direction in Direction::iter() {
            assert_eq!(Direction::try_from(direction.index()).unwrap(), direction);
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(Direction::try_from(6), Err(DirectionError::OutOfRange(6)));
        assert_eq!(
            Direction::try_from(u8::MAX),
            Err(DirectionError::OutOfRange(u8::MAX))
        );
    }

    #[test]
    fn test_reverse_cancels() {
        for direction in Direction::iter() {
            assert_eq!(direction.unit() + direction.reverse().unit(), Coordinate::default());
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Direction::East.rotate_clockwise(1), Direction::Southeast);
        assert_eq!(Direction::East.rotate_clockwise(-1), Direction::Northeast);
        assert_eq!(Direction::Northwest.rotate_clockwise(8), Direction::East);
    }

    #[test]
    fn test_parse_directions() {
        let Directions(directions) = "esenwwswne".parse().unwrap();
        assert_eq!(
            directions,
            vec![
                Direction::East,
                Direction::Southeast,
                Direction::Northwest,
                Direction::West,
                Direction::Southwest,
                Direction::Northeast,
            ]
        );
        assert!("ex".parse::<Directions>().is_err());
    }
}
