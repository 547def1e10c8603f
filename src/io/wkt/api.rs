use tracing::debug;

use crate::engine::{Context, ReadOptions, WktReader};
use crate::error::Result;
use crate::scalar::HandleLifetime;
use crate::trait_::FromHandle;

/// Parse a typed geometry from WKT text.
///
/// The parsed geometry is owned by the returned value. If it is not of the requested type it is
/// released before the error is returned.
///
/// ```
/// use geohandle::io::wkt::FromWkt;
/// use geohandle::scalar::{LineString, Point};
///
/// let line = LineString::from_wkt("LINESTRING (0 0, 10 10, 20 25)").unwrap();
/// assert_eq!(line.points().len(), 3);
///
/// assert!(Point::from_wkt("LINESTRING (0 0, 10 10)").is_none());
/// ```
pub trait FromWkt: Sized {
    fn try_from_wkt_with_options(text: &str, options: ReadOptions) -> Result<Self>;

    fn try_from_wkt(text: &str) -> Result<Self> {
        Self::try_from_wkt_with_options(text, ReadOptions::default())
    }

    /// Like [`FromWkt::try_from_wkt`], returning `None` on any failure.
    fn from_wkt(text: &str) -> Option<Self> {
        match Self::try_from_wkt(text) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                debug!(error = %err, "discarded WKT input");
                None
            }
        }
    }
}

impl<T: FromHandle<'static>> FromWkt for T {
    fn try_from_wkt_with_options(text: &str, options: ReadOptions) -> Result<Self> {
        let handle = WktReader::new(Context::global(), options).read(text)?;
        T::try_new(HandleLifetime::owned(handle))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::GeometryType;
    use crate::error::GeoHandleError;
    use crate::scalar::{Geometry, LineString, MultiPoint, Point, Polygon};
    use crate::test::wkt;
    use crate::trait_::GeometryScalarTrait;

    #[test]
    fn point_coordinates_are_exact() {
        for (x, y) in [(30., 10.), (-0.1, 1e-9), (123456.789, -98765.4321)] {
            let point = Point::from_wkt(&format!("POINT ({x} {y})")).unwrap();
            assert_eq!(point.x(), x);
            assert_eq!(point.y(), y);
        }
    }

    #[test]
    fn malformed_is_no_geometry() {
        assert!(Geometry::from_wkt(wkt::MALFORMED).is_none());
        assert!(matches!(
            Geometry::try_from_wkt(wkt::MALFORMED),
            Err(GeoHandleError::Wkt(_))
        ));
        assert!(Geometry::from_wkt("").is_none());
        assert!(Geometry::from_wkt("CIRCLE (0 0, 1)").is_none());
        assert!(LineString::from_wkt("LINESTRING (0 0)").is_none());
    }

    #[test]
    fn type_mismatch_releases_the_parsed_geometry() {
        let handle = WktReader::new(Context::global(), ReadOptions::default())
            .read(wkt::LINE_STRING)
            .unwrap();
        let err = Point::try_new(HandleLifetime::owned(handle)).unwrap_err();
        assert!(matches!(
            err,
            GeoHandleError::IncorrectGeometryType {
                expected: GeometryType::Point,
                found: GeometryType::LineString
            }
        ));
        assert!(!Context::global().contains(handle));

        assert!(Point::from_wkt(wkt::LINE_STRING).is_none());
        assert!(MultiPoint::from_wkt(wkt::POLYGON).is_none());
    }

    #[test]
    fn scenarios() {
        let point = Point::from_wkt(wkt::POINT).unwrap();
        assert_eq!((point.x(), point.y()), (30., 10.));

        let line = LineString::from_wkt(wkt::LINE_STRING).unwrap();
        assert_eq!(line.points().len(), 3);
        assert_eq!(line.points().value(2).x(), 20.);
        assert_eq!(line.points().value(2).y(), 25.);

        let polygon = Polygon::from_wkt(wkt::POLYGON).unwrap();
        assert_eq!(polygon.exterior_ring().points().len(), 5);
        assert_eq!(polygon.interior_rings().len(), 0);

        let multi = MultiPoint::from_wkt(wkt::MULTI_POINT).unwrap();
        assert_eq!(multi.geometries().len(), 2);
        let second = multi.geometries().value(1);
        assert_eq!((second.x(), second.y()), (1., 1.));

        assert!(Geometry::from_wkt(wkt::MALFORMED).is_none());
        assert_eq!(
            Geometry::from_wkt(wkt::POLYGON).unwrap().geometry_type(),
            GeometryType::Polygon
        );
    }
}
