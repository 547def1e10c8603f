use crate::datatypes::GeometryType;
use crate::engine::Handle;
use crate::error::{GeoHandleError, Result};
use crate::scalar::geometry::registry;
use crate::scalar::{
    GeometryCollection, HandleLifetime, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::trait_::{CollectionElement, FromHandle, GeometryScalarTrait};

/// A geometry of any of the supported types, chosen by the handle's runtime type tag.
#[derive(Debug)]
pub enum Geometry<'a> {
    Point(Point<'a>),
    LineString(LineString<'a>),
    LinearRing(LinearRing<'a>),
    Polygon(Polygon<'a>),
    MultiPoint(MultiPoint<'a>),
    MultiLineString(MultiLineString<'a>),
    MultiPolygon(MultiPolygon<'a>),
    GeometryCollection(GeometryCollection<'a, Geometry<'a>>),
}

impl<'a> FromHandle<'a> for Geometry<'a> {
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType) -> Result<Self> {
        Ok(registry::dispatch(lifetime, geometry_type))
    }
}

impl<'a> CollectionElement<'a> for Geometry<'a> {
    const COLLECTION_TYPE: GeometryType = GeometryType::GeometryCollection;
    type Borrowed<'b> = Geometry<'b>;
}

impl GeometryScalarTrait for Geometry<'_> {
    type ScalarGeo = geo::Geometry;

    fn handle(&self) -> Handle {
        match self {
            Geometry::Point(g) => g.handle(),
            Geometry::LineString(g) => g.handle(),
            Geometry::LinearRing(g) => g.handle(),
            Geometry::Polygon(g) => g.handle(),
            Geometry::MultiPoint(g) => g.handle(),
            Geometry::MultiLineString(g) => g.handle(),
            Geometry::MultiPolygon(g) => g.handle(),
            Geometry::GeometryCollection(g) => g.handle(),
        }
    }

    fn owns_handle(&self) -> bool {
        match self {
            Geometry::Point(g) => g.owns_handle(),
            Geometry::LineString(g) => g.owns_handle(),
            Geometry::LinearRing(g) => g.owns_handle(),
            Geometry::Polygon(g) => g.owns_handle(),
            Geometry::MultiPoint(g) => g.owns_handle(),
            Geometry::MultiLineString(g) => g.owns_handle(),
            Geometry::MultiPolygon(g) => g.owns_handle(),
            Geometry::GeometryCollection(g) => g.owns_handle(),
        }
    }

    fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::LinearRing(_) => GeometryType::LinearRing,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        self.into()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        self.to_geo()
    }
}

macro_rules! impl_try_from_geometry {
    ($lt:lifetime, $variant:ident, $ty:ty) => {
        impl<$lt> TryFrom<Geometry<$lt>> for $ty {
            type Error = GeoHandleError;

            fn try_from(value: Geometry<$lt>) -> Result<Self> {
                match value {
                    Geometry::$variant(g) => Ok(g),
                    other => Err(GeoHandleError::IncorrectGeometryType {
                        expected: GeometryType::$variant,
                        found: other.geometry_type(),
                    }),
                }
            }
        }
    };
}

impl_try_from_geometry!('a, Point, Point<'a>);
impl_try_from_geometry!('a, LineString, LineString<'a>);
impl_try_from_geometry!('a, LinearRing, LinearRing<'a>);
impl_try_from_geometry!('a, Polygon, Polygon<'a>);
impl_try_from_geometry!('a, MultiPoint, MultiPoint<'a>);
impl_try_from_geometry!('a, MultiLineString, MultiLineString<'a>);
impl_try_from_geometry!('a, MultiPolygon, MultiPolygon<'a>);
impl_try_from_geometry!('a, GeometryCollection, GeometryCollection<'a, Geometry<'a>>);

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::arena::{NodeKind, PendingNode};
    use crate::engine::Context;
    use crate::io::wkb::FromWkb;
    use crate::io::wkt::FromWkt;
    use crate::scalar::Coordinate;
    use crate::test::{wkb, wkt};

    #[test]
    fn dispatch_from_wkt() {
        let cases = [
            (wkt::POINT, GeometryType::Point),
            (wkt::LINE_STRING, GeometryType::LineString),
            (wkt::POLYGON, GeometryType::Polygon),
            (wkt::MULTI_POINT, GeometryType::MultiPoint),
            (wkt::MULTI_LINE_STRING, GeometryType::MultiLineString),
            (wkt::MULTI_POLYGON, GeometryType::MultiPolygon),
            (wkt::GEOMETRY_COLLECTION, GeometryType::GeometryCollection),
        ];
        for (text, expected) in cases {
            let geometry = Geometry::from_wkt(text).unwrap();
            assert_eq!(geometry.geometry_type(), expected, "{text}");
            assert!(geometry.owns_handle());
        }
    }

    #[test]
    fn dispatch_from_wkb() {
        let cases = [
            (wkb::point(1., 2.), GeometryType::Point),
            (wkb::line_string(&[(0., 0.), (1., 1.)]), GeometryType::LineString),
            (
                wkb::polygon(&[&[(0., 0.), (1., 0.), (1., 1.), (0., 0.)]]),
                GeometryType::Polygon,
            ),
            (wkb::multi_point(&[(0., 0.)]), GeometryType::MultiPoint),
            (
                wkb::multi_line_string(&[&[(0., 0.), (1., 1.)], &[(2., 2.), (3., 3.)]]),
                GeometryType::MultiLineString,
            ),
            (
                wkb::multi_polygon(&[&[&[(0., 0.), (1., 0.), (1., 1.), (0., 0.)]]]),
                GeometryType::MultiPolygon,
            ),
            (
                wkb::geometry_collection(&[wkb::point(1., 2.)]),
                GeometryType::GeometryCollection,
            ),
        ];
        for (bytes, expected) in cases {
            let geometry = Geometry::from_wkb(&bytes).unwrap();
            assert_eq!(geometry.geometry_type(), expected);
        }
    }

    #[test]
    fn unknown_tag_is_no_geometry() {
        let curve = PendingNode::with_coords(
            NodeKind::CircularString,
            vec![
                geo::coord! { x: 0., y: 0. },
                geo::coord! { x: 1., y: 1. },
                geo::coord! { x: 2., y: 0. },
            ],
        );
        let handle = Context::global().store(curve);
        let err = Geometry::try_new(HandleLifetime::owned(handle)).unwrap_err();
        assert!(matches!(err, GeoHandleError::UnknownGeometryType(8)));
        assert!(!Context::global().contains(handle));
    }

    #[test]
    fn destroyed_handle_is_no_geometry() {
        let geometry = Geometry::from_wkt(wkt::POINT).unwrap();
        let handle = geometry.handle();
        drop(geometry);
        let borrowed = HandleLifetime::borrowed(handle);
        assert!(matches!(
            Geometry::try_new(borrowed),
            Err(GeoHandleError::Engine(_))
        ));
    }

    #[test]
    fn downcasts() {
        let point: Point = Geometry::from_wkt(wkt::POINT).unwrap().try_into().unwrap();
        assert_eq!(point.coord(), Coordinate::new(30., 10.));
        assert!(point.owns_handle());

        let err = Polygon::try_from(Geometry::from_wkt(wkt::LINE_STRING).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            GeoHandleError::IncorrectGeometryType {
                expected: GeometryType::Polygon,
                found: GeometryType::LineString
            }
        ));
    }

    #[test]
    fn nested_collection_members() {
        let collection = GeometryCollection::<Geometry>::from_wkt(
            "GEOMETRYCOLLECTION (MULTIPOINT (0 0, 1 1), GEOMETRYCOLLECTION (POINT (5 6)))",
        )
        .unwrap();
        let geometries = collection.geometries();
        let Geometry::MultiPoint(multi) = geometries.value(0) else {
            panic!("expected a multi point");
        };
        assert_eq!(multi.num_geometries(), 2);

        let Geometry::GeometryCollection(inner) = geometries.value(1) else {
            panic!("expected a geometry collection");
        };
        let point = Point::try_from(inner.geometries().value(0)).unwrap();
        assert_eq!(point.coord(), Coordinate::new(5., 6.));
        assert!(!point.owns_handle());
    }
}
