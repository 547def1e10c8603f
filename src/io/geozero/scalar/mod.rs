mod coord;
mod geometry;
mod geometry_collection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub(crate) use coord::process_coord;
pub(crate) use geometry::process_geometry;
pub(crate) use geometry_collection::process_geometry_collection;
pub(crate) use linestring::process_line_string;
pub(crate) use multilinestring::process_multi_line_string;
pub(crate) use multipoint::process_multi_point;
pub(crate) use multipolygon::process_multi_polygon;
pub(crate) use point::process_point;
pub(crate) use polygon::process_polygon;
