//! Defines [`FromHandle`], [`CollectionElement`] and [`GeometryScalarTrait`], the capability set
//! shared by every typed geometry wrapper.

use crate::datatypes::GeometryType;
use crate::engine::Handle;
use crate::error::{GeoHandleError, Result};
use crate::scalar::HandleLifetime;

/// Construction of a typed wrapper from a native handle.
///
/// The wrapper takes over the [`HandleLifetime`] it is built from: if construction fails the
/// lifetime is dropped with the error, so an owned handle is released on that path too.
pub trait FromHandle<'a>: Sized {
    /// Build the wrapper from a handle whose runtime type tag has already been read.
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType)
        -> Result<Self>;

    /// Read the runtime type tag of the handle once and build the wrapper from it.
    fn try_new(lifetime: HandleLifetime<'a>) -> Result<Self> {
        let geometry_type = lifetime.geometry_type()?;
        Self::from_typed_handle(lifetime, geometry_type)
    }
}

/// A geometry type that can be the element of a
/// [`GeometryCollection`](crate::scalar::GeometryCollection).
pub trait CollectionElement<'a>: FromHandle<'a> {
    /// The type tag of a collection holding elements of this type.
    const COLLECTION_TYPE: GeometryType;

    /// The same element type, borrowed for the lifetime of the collection that yields it.
    type Borrowed<'b>: CollectionElement<'b>;
}

/// Accessors shared by every typed geometry wrapper.
pub trait GeometryScalarTrait {
    /// The [`geo`] type this wrapper converts to.
    type ScalarGeo;

    /// The native handle this wrapper reads through.
    fn handle(&self) -> Handle;

    /// Whether dropping this wrapper releases its native handle.
    fn owns_handle(&self) -> bool;

    /// The runtime type tag of the wrapped geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Copy the geometry into an owned [`geo`] value.
    fn to_geo(&self) -> Self::ScalarGeo;

    fn to_geo_geometry(&self) -> geo::Geometry;
}

/// Fail with [`GeoHandleError::IncorrectGeometryType`] unless `found` is `expected`.
pub(crate) fn check_type(found: GeometryType, expected: GeometryType) -> Result<()> {
    if found == expected {
        Ok(())
    } else {
        Err(GeoHandleError::IncorrectGeometryType { expected, found })
    }
}
