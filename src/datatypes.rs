//! The closed set of runtime geometry type tags understood by the typed layer.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoHandleError, Result};

/// Runtime type tag of a native geometry.
///
/// The discriminants are the integers reported by the engine. Any other integer is an unknown
/// geometry type and never produces a typed wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum GeometryType {
    Point = 0,
    LineString = 1,
    LinearRing = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    /// Resolve a raw engine tag.
    pub fn from_type_id(type_id: i32) -> Result<Self> {
        Self::try_from(type_id).map_err(|err| GeoHandleError::UnknownGeometryType(err.number))
    }

    /// The raw engine tag.
    pub fn type_id(self) -> i32 {
        self.into()
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        for type_id in 0..8 {
            let geometry_type = GeometryType::from_type_id(type_id).unwrap();
            assert_eq!(geometry_type.type_id(), type_id);
        }
        assert_eq!(
            GeometryType::from_type_id(3).unwrap(),
            GeometryType::Polygon
        );
    }

    #[test]
    fn unknown_tags_are_rejected() {
        for type_id in [-1, 8, 12, i32::MAX] {
            match GeometryType::from_type_id(type_id) {
                Err(GeoHandleError::UnknownGeometryType(found)) => assert_eq!(found, type_id),
                other => panic!("expected unknown type error, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(GeometryType::Point.to_string(), "Point");
        assert_eq!(GeometryType::MultiPolygon.to_string(), "MultiPolygon");
    }
}
