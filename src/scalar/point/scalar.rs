use tracing::warn;

use crate::datatypes::GeometryType;
use crate::engine::Handle;
use crate::error::Result;
use crate::scalar::{Coordinate, CoordinateView, HandleLifetime};
use crate::trait_::{check_type, CollectionElement, FromHandle, GeometryScalarTrait};

/// A point geometry.
///
/// The coordinate is read once, when the wrapper is built.
#[derive(Debug)]
pub struct Point<'a> {
    lifetime: HandleLifetime<'a>,
    coord: Option<Coordinate>,
}

impl<'a> Point<'a> {
    pub const GEOMETRY_TYPE: GeometryType = GeometryType::Point;

    /// Wrap a handle already known to be a point.
    ///
    /// An empty point, or one whose coordinate the engine cannot report, reads as (0, 0).
    pub(crate) fn new_unchecked(lifetime: HandleLifetime<'a>) -> Self {
        let coord = match CoordinateView::try_new(lifetime.handle()) {
            Ok(points) => {
                let coord = points.get(0);
                if coord.is_none() {
                    warn!(handle = %lifetime.handle(), "empty point reads as (0, 0)");
                }
                coord
            }
            Err(err) => {
                warn!(handle = %lifetime.handle(), error = %err, "point coordinate unavailable");
                None
            }
        };
        Self { lifetime, coord }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord.unwrap_or_default()
    }

    pub fn x(&self) -> f64 {
        self.coord().x()
    }

    pub fn y(&self) -> f64 {
        self.coord().y()
    }

    /// Whether the native point has no coordinate.
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

impl<'a> FromHandle<'a> for Point<'a> {
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType) -> Result<Self> {
        check_type(geometry_type, Self::GEOMETRY_TYPE)?;
        Ok(Self::new_unchecked(lifetime))
    }
}

impl<'a> CollectionElement<'a> for Point<'a> {
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiPoint;
    type Borrowed<'b> = Point<'b>;
}

impl GeometryScalarTrait for Point<'_> {
    type ScalarGeo = geo::Point;

    fn handle(&self) -> Handle {
        self.lifetime.handle()
    }

    fn owns_handle(&self) -> bool {
        self.lifetime.owns()
    }

    fn geometry_type(&self) -> GeometryType {
        Self::GEOMETRY_TYPE
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        self.into()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::Point(self.to_geo())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::Context;
    use crate::error::GeoHandleError;
    use crate::io::wkb::FromWkb;
    use crate::io::wkt::FromWkt;
    use crate::test::{wkb, wkt};

    #[test]
    fn point_from_wkt() {
        let point = Point::from_wkt(wkt::POINT).unwrap();
        assert_eq!(point.coord(), Coordinate::new(30., 10.));
        assert_eq!(point.x(), 30.);
        assert_eq!(point.y(), 10.);
        assert!(point.owns_handle());
        assert!(!point.is_empty());
    }

    #[test]
    fn point_from_wkb() {
        let point = Point::from_wkb(&wkb::point(-1.5, 2.25)).unwrap();
        assert_eq!(point.coord(), Coordinate::new(-1.5, 2.25));
    }

    #[test]
    fn empty_point_reads_as_origin() {
        let point = Point::from_wkt("POINT EMPTY").unwrap();
        assert!(point.is_empty());
        assert_eq!(point.coord(), Coordinate::default());

        let nan = Point::from_wkb(&wkb::point(f64::NAN, f64::NAN)).unwrap();
        assert!(nan.is_empty());
    }

    #[test]
    fn other_shapes_are_not_points() {
        assert!(Point::from_wkt(wkt::LINE_STRING).is_none());
        let err = Point::try_from_wkt(wkt::POLYGON).unwrap_err();
        assert!(matches!(
            err,
            GeoHandleError::IncorrectGeometryType {
                expected: GeometryType::Point,
                found: GeometryType::Polygon
            }
        ));
    }

    #[test]
    fn dropping_releases_the_handle() {
        let point = Point::from_wkt(wkt::POINT).unwrap();
        let handle = point.handle();
        assert!(Context::global().contains(handle));
        drop(point);
        assert!(!Context::global().contains(handle));
    }
}
