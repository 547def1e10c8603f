use crate::scalar::coord::{Coordinate, CoordinateView};

/// Iterator of values of a [`CoordinateView`]
#[derive(Clone, Debug)]
pub struct CoordinateIterator<'a> {
    view: CoordinateView<'a>,
    index: usize,
    end: usize,
}

impl<'a> CoordinateIterator<'a> {
    #[inline]
    pub fn new(view: CoordinateView<'a>) -> Self {
        Self {
            view,
            index: 0,
            end: view.len(),
        }
    }
}

impl<'a> Iterator for CoordinateIterator<'a> {
    type Item = Coordinate;

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

impl<'a> ExactSizeIterator for CoordinateIterator<'a> {}

impl<'a> DoubleEndedIterator for CoordinateIterator<'a> {
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
