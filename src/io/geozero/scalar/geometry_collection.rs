use crate::io::geozero::scalar::process_geometry;
use crate::scalar::{Geometry, GeometryCollection};
use geozero::{GeomProcessor, GeozeroGeometry};

pub(crate) fn process_geometry_collection<P: GeomProcessor>(
    geom: &GeometryCollection<'_, Geometry<'_>>,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.geometrycollection_begin(geom.num_geometries(), geom_idx)?;

    for (i, g) in geom.geometries().iter().enumerate() {
        process_geometry(&g, i, processor)?;
    }

    processor.geometrycollection_end(geom_idx)?;
    Ok(())
}

impl GeozeroGeometry for GeometryCollection<'_, Geometry<'_>> {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_geometry_collection(self, 0, processor)
    }
}
