use std::ops::Deref;

use crate::datatypes::GeometryType;
use crate::engine::Handle;
use crate::error::Result;
use crate::scalar::{HandleLifetime, LineString};
use crate::trait_::{check_type, FromHandle, GeometryScalarTrait};

/// A closed line string, used for the rings of a polygon.
///
/// Every line string accessor is available through [`Deref`].
#[derive(Debug)]
pub struct LinearRing<'a>(LineString<'a>);

impl<'a> LinearRing<'a> {
    pub const GEOMETRY_TYPE: GeometryType = GeometryType::LinearRing;

    pub(crate) fn new_unchecked(lifetime: HandleLifetime<'a>) -> Self {
        Self(LineString::new_unchecked(lifetime))
    }
}

impl<'a> Deref for LinearRing<'a> {
    type Target = LineString<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> FromHandle<'a> for LinearRing<'a> {
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType) -> Result<Self> {
        check_type(geometry_type, Self::GEOMETRY_TYPE)?;
        Ok(Self::new_unchecked(lifetime))
    }
}

impl GeometryScalarTrait for LinearRing<'_> {
    type ScalarGeo = geo::LineString;

    fn handle(&self) -> Handle {
        self.0.lifetime().handle()
    }

    fn owns_handle(&self) -> bool {
        self.0.lifetime().owns()
    }

    fn geometry_type(&self) -> GeometryType {
        Self::GEOMETRY_TYPE
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        self.0.to_geo()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::LineString(self.to_geo())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkt::FromWkt;
    use crate::scalar::{Coordinate, Polygon};
    use crate::test::wkt;

    #[test]
    fn ring_reads_like_a_line_string() {
        let polygon = Polygon::from_wkt(wkt::POLYGON).unwrap();
        let ring = polygon.exterior_ring();
        assert_eq!(ring.geometry_type(), GeometryType::LinearRing);
        assert!(!ring.owns_handle());
        assert_eq!(ring.num_coords(), 5);
        assert_eq!(ring.points().value(4), Coordinate::new(0., 0.));
        assert_eq!(ring.to_geo().0.len(), 5);
    }

    #[test]
    fn ring_handles_are_not_line_strings() {
        let polygon = Polygon::from_wkt(wkt::POLYGON).unwrap();
        let ring = HandleLifetime::borrowed(polygon.exterior_ring().handle());
        assert!(LineString::try_new(ring).is_err());
    }
}
