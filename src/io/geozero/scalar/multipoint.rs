use crate::io::geozero::scalar::process_coord;
use crate::scalar::MultiPoint;
use geozero::{GeomProcessor, GeozeroGeometry};

/// Members are written as bare coordinates, without `point_begin`/`point_end`. An empty member
/// is written as a NaN coordinate, which WKB readers take as an empty point.
pub(crate) fn process_multi_point<P: GeomProcessor>(
    geom: &MultiPoint<'_>,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.multipoint_begin(geom.num_geometries(), geom_idx)?;

    for (point_idx, point) in geom.geometries().iter().enumerate() {
        if point.is_empty() {
            processor.xy(f64::NAN, f64::NAN, point_idx)?;
        } else {
            process_coord(point.coord(), point_idx, processor)?;
        }
    }

    processor.multipoint_end(geom_idx)?;
    Ok(())
}

impl GeozeroGeometry for MultiPoint<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_multi_point(self, 0, processor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::FromWkb;
    use crate::io::wkt::FromWkt;
    use crate::scalar::Coordinate;
    use crate::test::{wkb, wkt};
    use geozero::{CoordDimensions, ToWkb, ToWkt};

    #[test]
    fn multi_point_to_wkt() {
        let multi = MultiPoint::from_wkt(wkt::MULTI_POINT).unwrap();
        assert_eq!(multi.to_wkt().unwrap(), "MULTIPOINT(0 0,1 1)");
    }

    #[test]
    fn empty_member_survives_wkb_export() {
        let bytes = wkb::multi_point(&[(f64::NAN, f64::NAN), (1., 1.)]);
        let multi = MultiPoint::from_wkb(&bytes).unwrap();
        assert!(multi.geometries().value(0).is_empty());

        let exported = multi.to_wkb(CoordDimensions::xy()).unwrap();
        let reread = MultiPoint::from_wkb(&exported).unwrap();
        assert_eq!(reread.num_geometries(), 2);
        assert!(reread.geometries().value(0).is_empty());
        let second = reread.geometries().value(1);
        assert!(!second.is_empty());
        assert_eq!(second.coord(), Coordinate::new(1., 1.));
    }
}
