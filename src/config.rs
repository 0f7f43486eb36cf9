use crate::geometry::{
    hex::Parity,
    layout::{Dimensions, LayoutError, Origin},
    Layout, Orientation,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Everything needed to define a hex type.
///
/// Deserializes from TOML such as
///
/// ```toml
/// dimensions = 30.0
/// orientation = "flat"
/// origin = "topLeft"
/// offset = "even"
/// ```
///
/// `dimensions` may also be `{ width = .., height = .. }` or `{ xRadius = .., yRadius = .. }`,
/// and `origin` may be an explicit `{ x = .., y = .. }` translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HexConfig {
    pub orientation: Orientation,
    /// Offset-coordinate parity.
    pub offset: Parity,
    // tables last, so they serialize after the plain values
    pub dimensions: Dimensions,
    pub origin: Origin,
}

impl HexConfig {
    /// Uniform hexes of the given radius; everything else default.
    pub fn with_radius(radius: f64) -> Self {
        HexConfig {
            dimensions: Dimensions::Radius(radius),
            ..HexConfig::default()
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn offset(mut self, offset: Parity) -> Self {
        self.offset = offset;
        self
    }

    /// Parse a configuration from TOML.
    ///
    /// This checks the shape of the data only; see [`HexConfig::layout`] for validation.
    pub fn from_toml(data: &str) -> Result<Self, Error> {
        toml::from_str(data).map_err(Into::into)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&data)?;
        config.layout()?;
        debug!(path = %path.display(), "loaded hex config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = self.to_toml()?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    /// Validate this configuration, resolving it into a [`Layout`].
    pub fn layout(&self) -> Result<Layout, LayoutError> {
        Layout::new(self)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("invalid hex layout")]
    InvalidLayout(#[from] LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_defaults() {
        let config = HexConfig::from_toml("").unwrap();
        assert_eq!(config, HexConfig::default());
        assert_eq!(config.orientation, Orientation::Pointy);
        assert_eq!(config.origin, Origin::Center);
        assert_eq!(config.offset, Parity::Odd);
    }

    #[test]
    fn test_parse_radius_and_named_origin() {
        let config = HexConfig::from_toml(
            r#"
            dimensions = 30.0
            orientation = "flat"
            origin = "topLeft"
            offset = "even"
            "#,
        )
        .unwrap();
        assert_eq!(config.dimensions, Dimensions::Radius(30.0));
        assert_eq!(config.orientation, Orientation::Flat);
        assert_eq!(config.origin, Origin::TopLeft);
        assert_eq!(config.offset, Parity::Even);
    }

    #[test]
    fn test_parse_size_and_translation() {
        let config = HexConfig::from_toml(
            r#"
            dimensions = { width = 40.0, height = 50.0 }
            origin = { x = 5.0, y = -2.5 }
            "#,
        )
        .unwrap();
        assert_eq!(
            config.dimensions,
            Dimensions::Size {
                width: 40.0,
                height: 50.0
            }
        );
        assert_eq!(config.origin, Origin::Translate(Point::new(5.0, -2.5)));
    }

    #[test]
    fn test_parse_radii() {
        let config =
            HexConfig::from_toml("dimensions = { xRadius = 4.0, yRadius = 3.0 }").unwrap();
        assert_eq!(
            config.dimensions,
            Dimensions::Radii {
                x_radius: 4.0,
                y_radius: 3.0
            }
        );
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            HexConfig::from_toml(r#"orientation = "sideways""#),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hex.toml");
        let config = HexConfig::with_radius(12.5)
            .orientation(Orientation::Flat)
            .origin(Origin::Translate(Point::new(1.0, 2.0)));
        config.save(&path).unwrap();
        assert_eq!(HexConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hex.toml");
        std::fs::write(&path, "dimensions = -1.0").unwrap();
        assert!(matches!(
            HexConfig::load(&path),
            Err(Error::InvalidLayout(LayoutError::NonPositiveSize { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            HexConfig::load("/definitely/not/a/real/hex.toml"),
            Err(Error::CouldNotLoad(_))
        ));
    }
}
