use std::fmt;
use std::marker::PhantomData;

use crate::engine::{Context, Handle};
use crate::error::{GeoHandleError, Result};
use crate::scalar::child::ChildGeometryIterator;
use crate::scalar::handle::HandleLifetime;
use crate::trait_::FromHandle;

/// Which list of sub-geometries a [`ChildGeometryView`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Children {
    /// The members of a collection.
    Geometries,
    /// The holes of a polygon.
    InteriorRings,
}

/// A lazy, index-addressable view onto the sub-geometries of a native geometry.
///
/// The number of children is fixed when the view is created. Each access asks the engine for
/// the child handle and wraps it as a non-owning `T`; the child's runtime type tag is checked
/// against `T` on every access.
pub struct ChildGeometryView<'a, T> {
    parent: Handle,
    children: Children,
    len: usize,
    _element: PhantomData<fn() -> T>,
    _owner: PhantomData<&'a ()>,
}

impl<'a, T> ChildGeometryView<'a, T> {
    pub(crate) fn with_len(parent: Handle, children: Children, len: usize) -> Self {
        Self {
            parent,
            children,
            len,
            _element: PhantomData,
            _owner: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn child_handle(&self, i: usize) -> Result<Handle> {
        let context = Context::global();
        match self.children {
            Children::Geometries => context.geometry_n(self.parent, i),
            Children::InteriorRings => context.interior_ring_n(self.parent, i),
        }
    }
}

impl<'a, T: FromHandle<'a>> ChildGeometryView<'a, T> {
    /// The child at position `i`, wrapped without taking ownership.
    pub fn try_value(&self, i: usize) -> Result<T> {
        if i >= self.len {
            return Err(GeoHandleError::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        let child = self.child_handle(i)?;
        T::try_new(HandleLifetime::borrowed(child))
    }

    /// The child at position `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`, or if the child is not a `T`.
    pub fn value(&self, i: usize) -> T {
        assert!(
            i < self.len,
            "child index {i} out of bounds for length {}",
            self.len
        );
        match self.try_value(i) {
            Ok(child) => child,
            Err(err) => panic!("child {i} of geometry {} cannot be read: {err}", self.parent),
        }
    }

    pub fn get(&self, i: usize) -> Option<T> {
        self.try_value(i).ok()
    }

    /// Returns an iterator over the children, starting from the first one on every call.
    pub fn iter(&self) -> ChildGeometryIterator<'a, T> {
        ChildGeometryIterator::new(*self)
    }
}

impl<T> Clone for ChildGeometryView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChildGeometryView<'_, T> {}

impl<T> fmt::Debug for ChildGeometryView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildGeometryView")
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T: FromHandle<'a>> IntoIterator for ChildGeometryView<'a, T> {
    type Item = T;
    type IntoIter = ChildGeometryIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: FromHandle<'a>> IntoIterator for &ChildGeometryView<'a, T> {
    type Item = T;
    type IntoIter = ChildGeometryIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
