//! Orientation-dependent constants.
//!
//! These tables are the only place where pointy-top and flat-top hexes differ;
//! everything else consults them through a [`Layout`][crate::geometry::Layout].

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Whether hexes have a corner (pointy) or an edge (flat) at the top.
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
pub enum Orientation {
    #[default]
    Pointy,
    Flat,
}

/// Transform matrices and corner angles for one [`Orientation`].
///
/// Matrices are row-major 2x2: `x = f[0] * q + f[1] * r`, `y = f[2] * q + f[3] * r`,
/// in units of the hex radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationTable {
    /// Axial to pixel.
    pub forward: [f64; 4],
    /// Pixel to axial.
    pub backward: [f64; 4],
    /// Angle of the first corner, in degrees clockwise from the positive x axis.
    pub start_angle: f64,
}

const POINTY: OrientationTable = OrientationTable {
    forward: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
    backward: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 30.0,
};

const FLAT: OrientationTable = OrientationTable {
    forward: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
    backward: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
    start_angle: 0.0,
};

impl Orientation {
    /// Iterate through both orientations.
    pub fn iter() -> impl Iterator<Item = Orientation> {
        [Orientation::Pointy, Orientation::Flat].into_iter()
    }

    /// The constant table for this orientation.
    pub fn table(self) -> &'static OrientationTable {
        match self {
            Orientation::Pointy => &POINTY,
            Orientation::Flat => &FLAT,
        }
    }

    /// The six corner angles, in radians, 60 degrees apart.
    pub fn corner_angles(self) -> [f64; 6] {
        let start = self.table().start_angle;
        std::array::from_fn(|corner| (start + 60.0 * corner as f64).to_radians())
    }

    /// Hex `(width, height)` in units of the horizontal and vertical radii respectively.
    pub(crate) fn extent(self) -> (f64, f64) {
        match self {
            Orientation::Pointy => (SQRT_3, 2.0),
            Orientation::Flat => (2.0, SQRT_3),
        }
    }
}
