pub(crate) const POINT: &str = "POINT (30 10)";
pub(crate) const LINE_STRING: &str = "LINESTRING (0 0, 10 10, 20 25)";
pub(crate) const POLYGON: &str = "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))";
pub(crate) const POLYGON_WITH_HOLES: &str =
    "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (1 1, 2 1, 2 2, 1 1), (5 5, 6 5, 6 6, 5 6, 5 5))";
pub(crate) const MULTI_POINT: &str = "MULTIPOINT (0 0, 1 1)";
pub(crate) const MULTI_LINE_STRING: &str = "MULTILINESTRING ((0 0, 1 1), (2 2, 3 3, 4 4))";
pub(crate) const MULTI_POLYGON: &str =
    "MULTIPOLYGON (((0 0, 4 0, 4 4, 0 4, 0 0)), ((10 10, 12 10, 12 12, 10 10)))";
pub(crate) const GEOMETRY_COLLECTION: &str =
    "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1), POLYGON ((0 0, 4 0, 4 4, 0 0)))";
pub(crate) const MALFORMED: &str = "POLYGON ((";
