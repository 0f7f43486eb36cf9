//! Pixel geometry of hexes.
//!
//! A [`Layout`] is an immutable combination of orientation, size, and origin.
//! All pixel math is a pure function of a layout and a [`Coordinate`].

use super::{
    hex::{Coordinate, FractionalCoordinate, Parity},
    Orientation, Point,
};
use crate::config::HexConfig;
use tracing::{debug, warn};

/// How big a hex is.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Dimensions {
    /// Distance from the center to any corner.
    Radius(f64),
    /// Full pixel width and height of a hex; converted to radii per orientation.
    Size { width: f64, height: f64 },
    /// Horizontal and vertical radii, for stretched hexes.
    #[serde(rename_all = "camelCase")]
    Radii { x_radius: f64, y_radius: f64 },
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::Radius(1.0)
    }
}

impl From<f64> for Dimensions {
    fn from(radius: f64) -> Self {
        Dimensions::Radius(radius)
    }
}

impl Dimensions {
    /// `(x_radius, y_radius)` for the given orientation.
    pub fn radii(self, orientation: Orientation) -> (f64, f64) {
        match self {
            Dimensions::Radius(radius) => (radius, radius),
            Dimensions::Size { width, height } => {
                let (x_extent, y_extent) = orientation.extent();
                (width / x_extent, height / y_extent)
            }
            Dimensions::Radii { x_radius, y_radius } => (x_radius, y_radius),
        }
    }
}

/// Where the pixel origin sits relative to hex `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Origin {
    /// Hex `(0, 0)` is centered on the pixel origin.
    #[default]
    Center,
    /// The bounding box of hex `(0, 0)` has its top left corner on the pixel origin.
    TopLeft,
    /// Every hex center is translated by this amount.
    #[serde(untagged)]
    Translate(Point),
}

/// The layout configuration could not be used.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("hex size must be positive and finite; got radii ({x_radius}, {y_radius})")]
    NonPositiveSize { x_radius: f64, y_radius: f64 },
    #[error("origin translation must be finite; got ({x}, {y})")]
    MalformedOrigin { x: f64, y: f64 },
}

/// Validated orientation, size, and origin.
///
/// Construct with [`Layout::new`]; every `Layout` in existence has positive finite
/// radii and a finite translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    parity: Parity,
    x_radius: f64,
    y_radius: f64,
    translation: Point,
}

impl Layout {
    /// Validate a configuration and resolve it into a layout.
    pub fn new(config: &HexConfig) -> Result<Layout, LayoutError> {
        let orientation = config.orientation;
        let (x_radius, y_radius) = config.dimensions.radii(orientation);
        let valid = |radius: f64| radius.is_finite() && radius > 0.0;
        if !(valid(x_radius) && valid(y_radius)) {
            warn!(x_radius, y_radius, "rejected hex layout with non-positive size");
            return Err(LayoutError::NonPositiveSize { x_radius, y_radius });
        }

        let (x_extent, y_extent) = orientation.extent();
        let translation = match config.origin {
            Origin::Center => Point::default(),
            Origin::TopLeft => Point::new(x_radius * x_extent / 2.0, y_radius * y_extent / 2.0),
            Origin::Translate(point) if point.is_finite() => point,
            Origin::Translate(Point { x, y }) => {
                warn!(x, y, "rejected hex layout with malformed origin");
                return Err(LayoutError::MalformedOrigin { x, y });
            }
        };

        debug!(%orientation, x_radius, y_radius, "defined hex layout");
        Ok(Layout {
            orientation,
            parity: config.offset,
            x_radius,
            y_radius,
            translation,
        })
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Parity used when converting to and from offset coordinates.
    #[inline]
    pub fn parity(&self) -> Parity {
        self.parity
    }

    #[inline]
    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    #[inline]
    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }

    /// Offset applied to every hex center.
    #[inline]
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Pixel width of a single hex.
    pub fn hex_width(&self) -> f64 {
        self.x_radius * self.orientation.extent().0
    }

    /// Pixel height of a single hex.
    pub fn hex_height(&self) -> f64 {
        self.y_radius * self.orientation.extent().1
    }

    /// Pixel center of the hex at `coordinate`.
    pub fn center(&self, coordinate: Coordinate) -> Point {
        let f = &self.orientation.table().forward;
        let q = coordinate.q as f64;
        let r = coordinate.r as f64;
        Point::new(
            self.x_radius * (f[0] * q + f[1] * r),
            self.y_radius * (f[2] * q + f[3] * r),
        ) + self.translation
    }

    /// The six corners of the hex at `coordinate`, in corner-angle order.
    pub fn corners(&self, coordinate: Coordinate) -> [Point; 6] {
        self.corners_around(self.center(coordinate))
    }

    pub(crate) fn corners_around(&self, center: Point) -> [Point; 6] {
        self.orientation.corner_angles().map(|angle| {
            center + Point::new(self.x_radius * angle.cos(), self.y_radius * angle.sin())
        })
    }

    /// The fractional cube position of a pixel.
    pub fn fractional_at(&self, point: Point) -> FractionalCoordinate {
        let b = &self.orientation.table().backward;
        let point = point - self.translation;
        let x = point.x / self.x_radius;
        let y = point.y / self.y_radius;
        FractionalCoordinate::new(b[0] * x + b[1] * y, b[2] * x + b[3] * y)
    }

    /// The coordinate of the hex containing a pixel.
    pub fn hex_at(&self, point: Point) -> Coordinate {
        self.fractional_at(point).round()
    }
}

/// Pixel center of the hex at `coordinate`.
pub fn center_of(layout: &Layout, coordinate: Coordinate) -> Point {
    layout.center(coordinate)
}

/// The six corners of the hex at `coordinate`.
pub fn corners_of(layout: &Layout, coordinate: Coordinate) -> [Point; 6] {
    layout.corners(coordinate)
}
