//! Run with: `cargo test --test terrain_payload`
//!
//! Attaches game data to hexes through the payload, the way a map editor would.

use hexgrid::{
    define_hex_type,
    geometry::layout::Origin,
    traverse::{ring, spiral, Traverser},
    Coordinate, Grid, HexConfig,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Terrain {
    #[default]
    #[display(fmt = "fields")]
    Fields,
    #[display(fmt = "forest")]
    Forest,
    #[display(fmt = "castle")]
    Castle,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Tile {
    terrain: Terrain,
    discovered: bool,
}

fn build() -> Grid<Tile> {
    let config = HexConfig::with_radius(30.0).origin(Origin::TopLeft);
    let hex_type = define_hex_type::<Tile>(&config).unwrap();
    let mut grid = Grid::from_traverser(hex_type, spiral(Coordinate::ORIGIN, 2).unwrap());

    *grid.payload_mut(Coordinate::ORIGIN).unwrap() = Tile {
        terrain: Terrain::Castle,
        discovered: true,
    };
    grid.set_hexes(
        ring(Coordinate::ORIGIN, 2)
            .unwrap()
            .traverse()
            .map(|coordinate| {
                (
                    coordinate,
                    Tile {
                        terrain: Terrain::Forest,
                        discovered: false,
                    },
                )
            }),
    );
    grid
}

#[test]
fn payloads_follow_rings() {
    let grid = build();
    assert_eq!(grid.size(), 19);

    let mut census = std::collections::BTreeMap::new();
    grid.for_each(|hex| {
        *census.entry(hex.payload().terrain.to_string()).or_insert(0) += 1;
    });
    assert_eq!(census["castle"], 1);
    assert_eq!(census["fields"], 6);
    assert_eq!(census["forest"], 12);
}

#[test]
fn upsert_keeps_traversal_order() {
    let grid = build();
    let order: Vec<_> = grid.iter().map(|hex| hex.coordinate()).collect();
    let expected: Vec<_> = spiral(Coordinate::ORIGIN, 2).unwrap().traverse().collect();
    assert_eq!(order, expected);
}

#[test]
fn reveal_neighbors() {
    let mut grid = build();
    let around: Vec<_> = Coordinate::ORIGIN.neighbors().collect();
    for coordinate in around {
        if let Some(tile) = grid.payload_mut(coordinate) {
            tile.discovered = true;
        }
    }
    let discovered = grid.iter().filter(|hex| hex.payload().discovered).count();
    assert_eq!(discovered, 7);

    let snapshot = grid.to_vec();
    assert_eq!(snapshot.len(), grid.size());
    assert!(grid.get(Coordinate::new(3, 0)).is_none());
}

#[test]
fn top_left_grid_starts_near_origin() {
    let grid = build();
    let bounds = grid.bounds().unwrap();
    assert!(grid.pixel_width() > 0.0);
    assert!(grid.pixel_height() > 0.0);
    // hexes up to two rings west and north of (0, 0) extend past the top left corner
    assert!(bounds.min.x < 0.0);
    assert!(bounds.min.y < 0.0);
}
