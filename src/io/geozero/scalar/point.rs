use crate::io::geozero::scalar::process_coord;
use crate::scalar::Point;
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_point<P: GeomProcessor>(
    geom: &Point<'_>,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    if geom.is_empty() {
        return processor.empty_point(geom_idx);
    }
    processor.point_begin(geom_idx)?;
    process_coord(geom.coord(), 0, processor)?;
    processor.point_end(geom_idx)?;
    Ok(())
}

impl GeozeroGeometry for Point<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_point(self, 0, processor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkt::FromWkt;
    use crate::test::wkt;
    use geozero::ToWkt;

    #[test]
    fn point_to_wkt() {
        let point = Point::from_wkt(wkt::POINT).unwrap();
        assert_eq!(point.to_wkt().unwrap(), "POINT(30 10)");
    }
}
