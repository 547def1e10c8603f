use std::sync::atomic::Ordering;

use geozero::GeozeroGeometry;

use crate::engine::builder::TreeBuilder;
use crate::engine::{Context, Handle, ReadOptions};
use crate::error::{GeoHandleError, Result};

/// Reader for the textual (WKT) geometry format.
///
/// A reader is a resource of its [`Context`]; it is released when dropped, whatever the outcome
/// of the reads made through it.
#[derive(Debug)]
pub struct WktReader<'c> {
    context: &'c Context,
    options: ReadOptions,
}

impl<'c> WktReader<'c> {
    pub fn new(context: &'c Context, options: ReadOptions) -> Self {
        context.live_readers.fetch_add(1, Ordering::SeqCst);
        Self { context, options }
    }

    /// Parse `text` into a new root geometry owned by the caller.
    ///
    /// The returned handle must eventually be released with [`Context::destroy`].
    pub fn read(&self, text: &str) -> Result<Handle> {
        let mut builder = TreeBuilder::new(&self.options);
        geozero::wkt::WktStr(text)
            .process_geom(&mut builder)
            .and_then(|_| builder.finish())
            .map(|tree| self.context.store(tree))
            .map_err(|err| GeoHandleError::Wkt(err.to_string()))
    }
}

impl Drop for WktReader<'_> {
    fn drop(&mut self) {
        self.context.live_readers.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Reader for the binary (WKB) geometry format.
///
/// Released on drop, like [`WktReader`].
#[derive(Debug)]
pub struct WkbReader<'c> {
    context: &'c Context,
    options: ReadOptions,
}

impl<'c> WkbReader<'c> {
    pub fn new(context: &'c Context, options: ReadOptions) -> Self {
        context.live_readers.fetch_add(1, Ordering::SeqCst);
        Self { context, options }
    }

    /// Parse `bytes` into a new root geometry owned by the caller.
    pub fn read(&self, bytes: &[u8]) -> Result<Handle> {
        if bytes.is_empty() {
            return Err(GeoHandleError::Wkb("empty input".to_string()));
        }
        let mut builder = TreeBuilder::new(&self.options);
        geozero::wkb::Wkb(bytes.to_vec())
            .process_geom(&mut builder)
            .and_then(|_| builder.finish())
            .map(|tree| self.context.store(tree))
            .map_err(|err| GeoHandleError::Wkb(err.to_string()))
    }
}

impl Drop for WkbReader<'_> {
    fn drop(&mut self) {
        self.context.live_readers.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::wkb;

    #[test]
    fn readers_are_released() {
        let context = Context::new();
        {
            let reader = WktReader::new(&context, ReadOptions::default());
            assert_eq!(context.live_readers(), 1);
            assert!(reader.read("POLYGON ((").is_err());
        }
        {
            let reader = WkbReader::new(&context, ReadOptions::default());
            assert!(reader.read(&[1, 2, 3]).is_err());
        }
        assert_eq!(context.live_readers(), 0);
    }

    #[test]
    fn read_text() {
        let context = Context::new();
        let reader = WktReader::new(&context, ReadOptions::default());
        let handle = reader.read("LINESTRING (0 0, 10 10, 20 25)").unwrap();
        assert_eq!(context.geometry_type_id(handle).unwrap(), 1);
        assert_eq!(context.coord_seq_size(handle).unwrap(), 3);
        assert_eq!(context.coord_x(handle, 2).unwrap(), 20.);
        assert_eq!(context.coord_y(handle, 2).unwrap(), 25.);
        context.destroy(handle).unwrap();
        assert!(!context.contains(handle));
    }

    #[test]
    fn read_binary() {
        let context = Context::new();
        let reader = WkbReader::new(&context, ReadOptions::default());
        let handle = reader.read(&wkb::point(30., 10.)).unwrap();
        assert_eq!(context.geometry_type_id(handle).unwrap(), 0);
        assert_eq!(context.coord_x(handle, 0).unwrap(), 30.);
        context.destroy(handle).unwrap();
    }

    #[test]
    fn garbage_is_rejected() {
        let context = Context::new();
        let text = WktReader::new(&context, ReadOptions::default());
        assert!(matches!(text.read("hello"), Err(GeoHandleError::Wkt(_))));
        assert!(matches!(text.read(""), Err(GeoHandleError::Wkt(_))));

        let binary = WkbReader::new(&context, ReadOptions::default());
        assert!(matches!(binary.read(&[]), Err(GeoHandleError::Wkb(_))));
        assert!(matches!(binary.read(&[0xff; 3]), Err(GeoHandleError::Wkb(_))));
        assert_eq!(context.num_geometries_stored(), 0);
    }
}
