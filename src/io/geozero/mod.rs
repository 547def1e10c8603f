//! Export of typed geometries through geozero's [`GeomProcessor`](geozero::GeomProcessor)
//! events, so that any geozero writer (WKT, WKB, GeoJSON, ...) can serialize them.

mod scalar;
