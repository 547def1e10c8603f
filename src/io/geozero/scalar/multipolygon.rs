use crate::io::geozero::scalar::process_polygon;
use crate::scalar::MultiPolygon;
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_multi_polygon<P: GeomProcessor>(
    geom: &MultiPolygon<'_>,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.multipolygon_begin(geom.num_geometries(), geom_idx)?;

    for (polygon_idx, polygon) in geom.geometries().iter().enumerate() {
        process_polygon(&polygon, false, polygon_idx, processor)?;
    }

    processor.multipolygon_end(geom_idx)?;
    Ok(())
}

impl GeozeroGeometry for MultiPolygon<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_multi_polygon(self, 0, processor)
    }
}
