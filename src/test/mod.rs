pub(crate) mod wkt;
