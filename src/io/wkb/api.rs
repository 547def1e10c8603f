use tracing::debug;

use crate::engine::{Context, ReadOptions, WkbReader};
use crate::error::Result;
use crate::scalar::HandleLifetime;
use crate::trait_::FromHandle;

/// Parse a typed geometry from WKB bytes.
///
/// The parsed geometry is owned by the returned value. If it is not of the requested type it is
/// released before the error is returned.
pub trait FromWkb: Sized {
    fn try_from_wkb_with_options(bytes: &[u8], options: ReadOptions) -> Result<Self>;

    fn try_from_wkb(bytes: &[u8]) -> Result<Self> {
        Self::try_from_wkb_with_options(bytes, ReadOptions::default())
    }

    /// Like [`FromWkb::try_from_wkb`], returning `None` on any failure.
    fn from_wkb(bytes: &[u8]) -> Option<Self> {
        match Self::try_from_wkb(bytes) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                debug!(len = bytes.len(), error = %err, "discarded WKB input");
                None
            }
        }
    }
}

impl<T: FromHandle<'static>> FromWkb for T {
    fn try_from_wkb_with_options(bytes: &[u8], options: ReadOptions) -> Result<Self> {
        let handle = WkbReader::new(Context::global(), options).read(bytes)?;
        T::try_new(HandleLifetime::owned(handle))
    }
}
