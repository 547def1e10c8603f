use crate::io::geozero::scalar::process_coord;
use crate::scalar::{LineString, LinearRing};
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_line_string<P: GeomProcessor>(
    geom: &LineString<'_>,
    tagged: bool,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.linestring_begin(tagged, geom.num_coords(), geom_idx)?;

    for (coord_idx, coord) in geom.points().iter().enumerate() {
        process_coord(coord, coord_idx, processor)?;
    }

    processor.linestring_end(tagged, geom_idx)?;
    Ok(())
}

impl GeozeroGeometry for LineString<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_line_string(self, true, 0, processor)
    }
}

/// A standalone ring is written as a line string.
impl GeozeroGeometry for LinearRing<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_line_string(self, true, 0, processor)
    }
}
