use std::marker::PhantomData;

use crate::engine::{Context, Handle};
use crate::error::Result;
use crate::scalar::coord::{Coordinate, CoordinateIterator};
use crate::scalar::handle::expect_live;

/// A lazy, index-addressable view onto the coordinate sequence of a native geometry.
///
/// The number of coordinates is read once when the view is created. Each access reads the
/// ordinates at that position through the engine; nothing else is cached. The view borrows the
/// geometry it was created from and never releases anything.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateView<'a> {
    handle: Handle,
    len: usize,
    _owner: PhantomData<&'a ()>,
}

impl<'a> CoordinateView<'a> {
    pub(crate) fn try_new(handle: Handle) -> Result<Self> {
        let len = Context::global().coord_seq_size(handle)?;
        Ok(Self::with_len(handle, len))
    }

    /// Create a view from a coordinate count the caller already read.
    pub(crate) fn with_len(handle: Handle, len: usize) -> Self {
        Self {
            handle,
            len,
            _owner: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The coordinate at position `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn value(&self, i: usize) -> Coordinate {
        assert!(
            i < self.len,
            "coordinate index {i} out of bounds for length {}",
            self.len
        );
        let context = Context::global();
        let x = expect_live(context.coord_x(self.handle, i));
        let y = expect_live(context.coord_y(self.handle, i));
        Coordinate::new(x, y)
    }

    /// The coordinate at position `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<Coordinate> {
        (i < self.len).then(|| self.value(i))
    }

    /// Returns an iterator of [`Coordinate`], starting from the first position on every call.
    pub fn iter(&self) -> CoordinateIterator<'a> {
        CoordinateIterator::new(*self)
    }
}

impl<'a> IntoIterator for CoordinateView<'a> {
    type Item = Coordinate;
    type IntoIter = CoordinateIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &CoordinateView<'a> {
    type Item = Coordinate;
    type IntoIter = CoordinateIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
