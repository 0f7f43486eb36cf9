//! Hexagonal grid geometry.
//!
//! Coordinates, orientation-aware pixel layouts, hex values carrying a user payload,
//! a coordinate-keyed [`Grid`], and restartable traversers (rectangle, ring, spiral,
//! line) which produce coordinate sequences to fill grids with.
//!
//! ```
//! use hexgrid::{define_hex_type, traverse::rectangle, Grid, HexConfig};
//!
//! let hex_type = define_hex_type::<()>(&HexConfig::with_radius(30.0)).unwrap();
//! let grid = Grid::from_traverser(hex_type, rectangle(3, 2));
//! assert_eq!(grid.size(), 6);
//! ```

pub mod config;
pub mod geometry;

pub use config::HexConfig;
pub use geometry::{
    define_hex_type, traverse, Coordinate, Direction, Grid, Hex, HexType, Layout, Orientation,
    Point,
};
