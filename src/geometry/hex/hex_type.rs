use super::{offset::OffsetCoordinate, Coordinate};
use crate::{
    config::HexConfig,
    geometry::{layout::LayoutError, Layout, Orientation, Point},
};
use std::{fmt, marker::PhantomData};

/// Validate `config` and produce a factory for hexes carrying a `Payload`.
///
/// Configuration errors surface here, never when hexes are later created.
pub fn define_hex_type<Payload>(config: &HexConfig) -> Result<HexType<Payload>, LayoutError> {
    Layout::new(config).map(HexType::from_layout)
}

/// Factory for [`Hex`] values sharing one [`Layout`].
///
/// `Payload` is whatever the caller wants to attach to each hex; the geometry
/// never inspects it.
pub struct HexType<Payload> {
    layout: Layout,
    _payload: PhantomData<fn() -> Payload>,
}

// manual impls: derives would require `Payload: Clone` etc.
impl<Payload> Clone for HexType<Payload> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Payload> Copy for HexType<Payload> {}

impl<Payload> fmt::Debug for HexType<Payload> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexType")
            .field("layout", &self.layout)
            .field("payload", &std::any::type_name::<Payload>())
            .finish()
    }
}

impl<Payload> PartialEq for HexType<Payload> {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout
    }
}

impl<Payload> HexType<Payload> {
    pub fn from_layout(layout: Layout) -> Self {
        HexType {
            layout,
            _payload: PhantomData,
        }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Create a hex at `coordinate` carrying `payload`.
    pub fn hex_with(&self, coordinate: Coordinate, payload: Payload) -> Hex<Payload> {
        let center = self.layout.center(coordinate);
        Hex {
            coordinate,
            layout: self.layout,
            center,
            corners: self.layout.corners_around(center),
            payload,
        }
    }

    /// Create a hex at the coordinate of an offset `(col, row)` pair.
    ///
    /// Uses this type's orientation and parity.
    pub fn hex_at_offset(&self, offset: OffsetCoordinate, payload: Payload) -> Hex<Payload> {
        let coordinate = offset.to_axial(self.layout.orientation(), self.layout.parity());
        self.hex_with(coordinate, payload)
    }
}

impl<Payload: Default> HexType<Payload> {
    /// Create a hex at `coordinate` carrying the default payload.
    pub fn hex(&self, coordinate: Coordinate) -> Hex<Payload> {
        self.hex_with(coordinate, Payload::default())
    }
}

/// A hex: a coordinate, its pixel geometry, and a user payload.
///
/// Geometry is computed once at construction. Only the payload can change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Hex<Payload> {
    coordinate: Coordinate,
    layout: Layout,
    center: Point,
    corners: [Point; 6],
    payload: Payload,
}

impl<Payload> Hex<Payload> {
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn q(&self) -> i32 {
        self.coordinate.q
    }

    #[inline]
    pub fn r(&self) -> i32 {
        self.coordinate.r
    }

    #[inline]
    pub fn s(&self) -> i32 {
        self.coordinate.s()
    }

    /// Offset coordinates under this hex's orientation and parity.
    pub fn offset(&self) -> OffsetCoordinate {
        self.coordinate
            .to_offset_with(self.layout.orientation(), self.layout.parity())
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    pub fn is_pointy(&self) -> bool {
        self.orientation() == Orientation::Pointy
    }

    pub fn is_flat(&self) -> bool {
        self.orientation() == Orientation::Flat
    }

    /// Pixel center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.layout.hex_width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.layout.hex_height()
    }

    /// The six corner points, in corner-angle order.
    #[inline]
    pub fn corners(&self) -> &[Point; 6] {
        &self.corners
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    pub fn into_parts(self) -> (Coordinate, Payload) {
        (self.coordinate, self.payload)
    }

    /// Replace the payload, keeping the geometry.
    pub fn map_payload<NewPayload>(self, f: impl FnOnce(Payload) -> NewPayload) -> Hex<NewPayload> {
        Hex {
            coordinate: self.coordinate,
            layout: self.layout,
            center: self.center,
            corners: self.corners,
            payload: f(self.payload),
        }
    }
}
