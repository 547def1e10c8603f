use crate::io::geozero::scalar::{
    process_geometry_collection, process_line_string, process_multi_line_string,
    process_multi_point, process_multi_polygon, process_point, process_polygon,
};
use crate::scalar::Geometry;
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_geometry<P: GeomProcessor>(
    geom: &Geometry<'_>,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    match geom {
        Geometry::Point(g) => process_point(g, geom_idx, processor)?,
        Geometry::LineString(g) => process_line_string(g, true, geom_idx, processor)?,
        Geometry::LinearRing(g) => process_line_string(g, true, geom_idx, processor)?,
        Geometry::Polygon(g) => process_polygon(g, true, geom_idx, processor)?,
        Geometry::MultiPoint(g) => process_multi_point(g, geom_idx, processor)?,
        Geometry::MultiLineString(g) => process_multi_line_string(g, geom_idx, processor)?,
        Geometry::MultiPolygon(g) => process_multi_polygon(g, geom_idx, processor)?,
        Geometry::GeometryCollection(g) => process_geometry_collection(g, geom_idx, processor)?,
    };

    Ok(())
}

impl GeozeroGeometry for Geometry<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_geometry(self, 0, processor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::FromWkb;
    use crate::io::wkt::FromWkt;
    use crate::test::wkt;
    use geozero::{CoordDimensions, ToWkb, ToWkt};

    #[test]
    fn geometry_to_wkt() {
        let cases = [
            (wkt::POINT, "POINT(30 10)"),
            (wkt::LINE_STRING, "LINESTRING(0 0,10 10,20 25)"),
            (wkt::MULTI_LINE_STRING, "MULTILINESTRING((0 0,1 1),(2 2,3 3,4 4))"),
            (
                wkt::GEOMETRY_COLLECTION,
                "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1),POLYGON((0 0,4 0,4 4,0 0)))",
            ),
        ];
        for (input, expected) in cases {
            let geometry = Geometry::from_wkt(input).unwrap();
            assert_eq!(geometry.to_wkt().unwrap(), expected);
        }
    }

    #[test]
    fn wkb_export_reads_back() {
        let geometry = Geometry::from_wkt(wkt::POLYGON_WITH_HOLES).unwrap();
        let bytes = geometry.to_wkb(CoordDimensions::xy()).unwrap();
        let reread = Geometry::from_wkb(&bytes).unwrap();
        assert_eq!(reread.to_wkt().unwrap(), geometry.to_wkt().unwrap());
    }
}
