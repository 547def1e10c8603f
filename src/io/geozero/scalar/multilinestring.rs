use crate::io::geozero::scalar::process_line_string;
use crate::scalar::MultiLineString;
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_multi_line_string<P: GeomProcessor>(
    geom: &MultiLineString<'_>,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.multilinestring_begin(geom.num_geometries(), geom_idx)?;

    for (line_idx, line) in geom.geometries().iter().enumerate() {
        process_line_string(&line, false, line_idx, processor)?;
    }

    processor.multilinestring_end(geom_idx)?;
    Ok(())
}

impl GeozeroGeometry for MultiLineString<'_> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_multi_line_string(self, 0, processor)
    }
}
