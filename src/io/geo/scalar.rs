use crate::scalar::{
    Coordinate, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Convert a [`Coordinate`] to a [`geo::Coord`].
pub fn coord_to_geo(coord: Coordinate) -> geo::Coord {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert a [`Point`] to a [`geo::Point`].
///
/// An empty point converts to (0, 0).
pub fn point_to_geo(point: &Point<'_>) -> geo::Point {
    geo::Point(coord_to_geo(point.coord()))
}

/// Convert a [`LineString`] (or a ring, through deref) to a [`geo::LineString`].
pub fn line_string_to_geo(line_string: &LineString<'_>) -> geo::LineString {
    geo::LineString::new(line_string.points().iter().map(coord_to_geo).collect())
}

/// Convert a [`Polygon`] to a [`geo::Polygon`].
pub fn polygon_to_geo(polygon: &Polygon<'_>) -> geo::Polygon {
    let exterior = line_string_to_geo(&polygon.exterior_ring());
    let interiors = polygon
        .interior_rings()
        .iter()
        .map(|interior| line_string_to_geo(&interior))
        .collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a [`MultiPoint`] to a [`geo::MultiPoint`].
pub fn multi_point_to_geo(multi_point: &MultiPoint<'_>) -> geo::MultiPoint {
    geo::MultiPoint::new(
        multi_point
            .geometries()
            .iter()
            .map(|point| point_to_geo(&point))
            .collect(),
    )
}

/// Convert a [`MultiLineString`] to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString<'_>) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .geometries()
            .iter()
            .map(|line| line_string_to_geo(&line))
            .collect(),
    )
}

/// Convert a [`MultiPolygon`] to a [`geo::MultiPolygon`].
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon<'_>) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .geometries()
            .iter()
            .map(|polygon| polygon_to_geo(&polygon))
            .collect(),
    )
}

/// Convert a [`GeometryCollection`] to a [`geo::GeometryCollection`].
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection<'_, Geometry<'_>>,
) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(
        geometry_collection
            .geometries()
            .iter()
            .map(|geometry| geometry_to_geo(&geometry))
            .collect(),
    )
}

/// Convert any [`Geometry`] to a [`geo::Geometry`].
///
/// A ring converts to a [`geo::LineString`].
pub fn geometry_to_geo(geometry: &Geometry<'_>) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::LinearRing(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    }
}

impl From<Coordinate> for geo::Coord {
    fn from(value: Coordinate) -> Self {
        coord_to_geo(value)
    }
}

impl From<&Point<'_>> for geo::Point {
    fn from(value: &Point<'_>) -> Self {
        point_to_geo(value)
    }
}

impl From<Point<'_>> for geo::Point {
    fn from(value: Point<'_>) -> Self {
        (&value).into()
    }
}

impl From<&LineString<'_>> for geo::LineString {
    fn from(value: &LineString<'_>) -> Self {
        line_string_to_geo(value)
    }
}

impl From<LineString<'_>> for geo::LineString {
    fn from(value: LineString<'_>) -> Self {
        (&value).into()
    }
}

impl From<&LinearRing<'_>> for geo::LineString {
    fn from(value: &LinearRing<'_>) -> Self {
        line_string_to_geo(value)
    }
}

impl From<&Polygon<'_>> for geo::Polygon {
    fn from(value: &Polygon<'_>) -> Self {
        polygon_to_geo(value)
    }
}

impl From<Polygon<'_>> for geo::Polygon {
    fn from(value: Polygon<'_>) -> Self {
        (&value).into()
    }
}

impl From<&MultiPoint<'_>> for geo::MultiPoint {
    fn from(value: &MultiPoint<'_>) -> Self {
        multi_point_to_geo(value)
    }
}

impl From<&MultiLineString<'_>> for geo::MultiLineString {
    fn from(value: &MultiLineString<'_>) -> Self {
        multi_line_string_to_geo(value)
    }
}

impl From<&MultiPolygon<'_>> for geo::MultiPolygon {
    fn from(value: &MultiPolygon<'_>) -> Self {
        multi_polygon_to_geo(value)
    }
}

impl From<&GeometryCollection<'_, Geometry<'_>>> for geo::GeometryCollection {
    fn from(value: &GeometryCollection<'_, Geometry<'_>>) -> Self {
        geometry_collection_to_geo(value)
    }
}

impl From<&Geometry<'_>> for geo::Geometry {
    fn from(value: &Geometry<'_>) -> Self {
        geometry_to_geo(value)
    }
}

impl From<Geometry<'_>> for geo::Geometry {
    fn from(value: Geometry<'_>) -> Self {
        (&value).into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkt::FromWkt;
    use crate::test::wkt;
    use crate::trait_::GeometryScalarTrait;
    use approx::assert_relative_eq;
    use geo::Area;

    #[test]
    fn point_to_geo_matches() {
        let point = Point::from_wkt(wkt::POINT).unwrap();
        assert_eq!(point.to_geo(), geo::point!(x: 30., y: 10.));
    }

    #[test]
    fn polygon_area_survives_conversion() {
        let polygon = Polygon::from_wkt(wkt::POLYGON_WITH_HOLES).unwrap();
        let geo_polygon = polygon.to_geo();
        assert_eq!(geo_polygon.interiors().len(), 2);
        assert_relative_eq!(geo_polygon.unsigned_area(), 100. - 0.5 - 1.);
    }

    #[test]
    fn geometry_collection_to_geo_keeps_members() {
        let geometry = Geometry::from_wkt(wkt::GEOMETRY_COLLECTION).unwrap();
        let geo::Geometry::GeometryCollection(collection) = geometry.to_geo_geometry() else {
            panic!("expected a geometry collection");
        };
        assert_eq!(collection.len(), 3);
        assert!(matches!(collection[1], geo::Geometry::LineString(_)));
    }

    #[test]
    fn multi_line_string_to_geo_matches() {
        let multi = MultiLineString::from_wkt(wkt::MULTI_LINE_STRING).unwrap();
        let geo_multi: geo::MultiLineString = (&multi).into();
        assert_eq!(geo_multi.0.len(), 2);
        assert_eq!(geo_multi.0[1].0.len(), 3);
    }

    #[test]
    fn empty_point_converts_to_origin() {
        let point = Point::from_wkt("POINT EMPTY").unwrap();
        assert_eq!(geo::Point::from(point), geo::point!(x: 0., y: 0.));
    }
}
