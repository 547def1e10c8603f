use std::fmt;

use crate::scalar::child::ChildGeometryView;
use crate::trait_::FromHandle;

/// Iterator of values of a [`ChildGeometryView`]
pub struct ChildGeometryIterator<'a, T> {
    view: ChildGeometryView<'a, T>,
    index: usize,
    end: usize,
}

impl<'a, T: FromHandle<'a>> ChildGeometryIterator<'a, T> {
    #[inline]
    pub fn new(view: ChildGeometryView<'a, T>) -> Self {
        Self {
            view,
            index: 0,
            end: view.len(),
        }
    }
}

impl<T> Clone for ChildGeometryIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            index: self.index,
            end: self.end,
        }
    }
}

impl<T> fmt::Debug for ChildGeometryIterator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildGeometryIterator")
            .field("view", &self.view)
            .field("index", &self.index)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, T: FromHandle<'a>> Iterator for ChildGeometryIterator<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        let old = self.index;
        self.index += 1;
        Some(self.view.value(old))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.end - self.index, Some(self.end - self.index))
    }
}

impl<'a, T: FromHandle<'a>> ExactSizeIterator for ChildGeometryIterator<'a, T> {}

impl<'a, T: FromHandle<'a>> DoubleEndedIterator for ChildGeometryIterator<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            None
        } else {
            self.end -= 1;
            Some(self.view.value(self.end))
        }
    }
}
