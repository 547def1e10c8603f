//! The dispatch table from runtime type tag to typed wrapper.

use crate::datatypes::GeometryType;
use crate::scalar::{
    Geometry, GeometryCollection, HandleLifetime, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

type Constructor = for<'a> fn(HandleLifetime<'a>) -> Geometry<'a>;

/// Indexed by [`GeometryType::type_id`].
const REGISTRY: [Constructor; 8] = [
    point,
    line_string,
    linear_ring,
    polygon,
    multi_point,
    multi_line_string,
    multi_polygon,
    geometry_collection,
];

/// Build the wrapper for a handle whose tag has been read and resolved.
pub(crate) fn dispatch(lifetime: HandleLifetime<'_>, geometry_type: GeometryType) -> Geometry<'_> {
    REGISTRY[geometry_type as usize](lifetime)
}

fn point(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::Point(Point::new_unchecked(lifetime))
}

fn line_string(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::LineString(LineString::new_unchecked(lifetime))
}

fn linear_ring(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::LinearRing(LinearRing::new_unchecked(lifetime))
}

fn polygon(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::Polygon(Polygon::new_unchecked(lifetime))
}

fn multi_point(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::MultiPoint(MultiPoint::new_unchecked(lifetime))
}

fn multi_line_string(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::MultiLineString(MultiLineString::new_unchecked(lifetime))
}

fn multi_polygon(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::MultiPolygon(MultiPolygon::new_unchecked(lifetime))
}

fn geometry_collection(lifetime: HandleLifetime<'_>) -> Geometry<'_> {
    Geometry::GeometryCollection(GeometryCollection::new_unchecked(lifetime))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::{Context, ReadOptions, WktReader};
    use crate::test::wkt;
    use crate::trait_::GeometryScalarTrait;

    #[test]
    fn every_entry_builds_its_own_type() {
        let point = WktReader::new(Context::global(), ReadOptions::default())
            .read(wkt::POINT)
            .unwrap();
        let owner = HandleLifetime::owned(point);
        for (index, constructor) in REGISTRY.iter().enumerate() {
            let expected = GeometryType::from_type_id(index as i32).unwrap();
            // Wrappers other than Point read nothing until they are queried.
            let geometry = constructor(HandleLifetime::borrowed(owner.handle()));
            assert_eq!(geometry.geometry_type(), expected);
            assert!(!geometry.owns_handle());
        }
    }
}
