use crate::scalar::Coordinate;
use geozero::GeomProcessor;

pub(crate) fn process_coord<P: GeomProcessor>(
    coord: Coordinate,
    coord_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.xy(coord.x(), coord.y(), coord_idx)
}
