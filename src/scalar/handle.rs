use std::marker::PhantomData;

use tracing::{trace, warn};

use crate::datatypes::GeometryType;
use crate::engine::{Context, Handle};
use crate::error::Result;

/// A native geometry handle together with the decision of who releases it.
///
/// An owning lifetime is created only for the root handle returned by a reader, and releases it
/// through the engine exactly once when dropped. Every handle derived from a parent (a ring, a
/// member of a collection) is wrapped as borrowed: it never releases anything and the `'a`
/// lifetime keeps it from outliving the wrapper it was derived from.
#[derive(Debug)]
pub struct HandleLifetime<'a> {
    handle: Handle,
    owns: bool,
    _owner: PhantomData<&'a ()>,
}

impl HandleLifetime<'static> {
    /// Take ownership of a freshly parsed root handle.
    pub(crate) fn owned(handle: Handle) -> Self {
        Self {
            handle,
            owns: true,
            _owner: PhantomData,
        }
    }
}

impl<'a> HandleLifetime<'a> {
    /// Borrow a handle whose storage belongs to a wrapper alive for `'a`.
    pub(crate) fn borrowed(handle: Handle) -> Self {
        Self {
            handle,
            owns: false,
            _owner: PhantomData,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Whether dropping this lifetime releases the native geometry.
    pub fn owns(&self) -> bool {
        self.owns
    }

    /// Read the runtime type tag of the handle.
    pub(crate) fn geometry_type(&self) -> Result<GeometryType> {
        let type_id = Context::global().geometry_type_id(self.handle)?;
        GeometryType::from_type_id(type_id)
    }

    fn release(&mut self) {
        if !self.owns {
            return;
        }
        self.owns = false;
        match Context::global().destroy(self.handle) {
            Ok(()) => trace!(handle = %self.handle, "released owned geometry"),
            Err(err) => warn!(handle = %self.handle, error = %err, "failed to release geometry"),
        }
    }
}

impl Drop for HandleLifetime<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Unwrap the result of an engine query made through a live handle of a known shape.
///
/// Such a query can only fail if the engine broke its own contract.
pub(crate) fn expect_live<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("geometry engine rejected a query on a live handle: {err}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::{ReadOptions, WktReader};

    fn parse(text: &str) -> Handle {
        WktReader::new(Context::global(), ReadOptions::default())
            .read(text)
            .unwrap()
    }

    #[test]
    fn owned_lifetime_releases_once() {
        let handle = parse("POINT (1 2)");
        let lifetime = HandleLifetime::owned(handle);
        assert!(lifetime.owns());
        assert_eq!(lifetime.geometry_type().unwrap(), GeometryType::Point);
        drop(lifetime);
        assert!(!Context::global().contains(handle));
    }

    #[test]
    fn borrowed_lifetime_never_releases() {
        let handle = parse("POINT (1 2)");
        let owner = HandleLifetime::owned(handle);
        {
            let borrowed = HandleLifetime::borrowed(owner.handle());
            assert!(!borrowed.owns());
        }
        assert!(Context::global().contains(handle));
        drop(owner);
        assert!(!Context::global().contains(handle));
    }
}
