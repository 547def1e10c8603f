use crate::io::geozero::scalar::process_line_string;
use crate::scalar::Polygon;
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_polygon<P: GeomProcessor>(
    geom: &Polygon<'_>,
    tagged: bool,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let exterior = geom.exterior_ring();
    if exterior.is_empty() {
        processor.polygon_begin(tagged, 0, geom_idx)?;
        return processor.polygon_end(tagged, geom_idx);
    }

    processor.polygon_begin(tagged, geom.num_interiors() + 1, geom_idx)?;
    process_line_string(&exterior, false, 0, processor)?;
    for (interior_ring_idx, interior_ring) in geom.interior_rings().iter().enumerate() {
        process_line_string(&interior_ring, false, interior_ring_idx + 1, processor)?;
    }
    processor.polygon_end(tagged, geom_idx)?;

    Ok(())
}

impl GeozeroGeometry for Polygon<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_polygon(self, true, 0, processor)
    }
}
