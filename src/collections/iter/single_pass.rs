use std::iter::FusedIterator;

use super::{Input, IterTraits};

/// Wraps any [`Iterator`] so that it can be used where an [`InputIter`](super::InputIter) is
/// required. See [`single_pass`].
#[derive(Debug)]
pub struct SinglePass<I> {
    pub(crate) inner: I,
}

/// Downgrades `iter` to the [`Input`] category.
///
/// # Examples
/// ```
/// # use containers_lib::collections::contiguous::Vector;
/// # use containers_lib::collections::iter::single_pass;
/// let vec = Vector::from_range(single_pass((1..=3).map(|i| i * 10)));
/// assert_eq!(&*vec, &[10, 20, 30]);
/// ```
pub const fn single_pass<I: Iterator>(iter: I) -> SinglePass<I> {
    SinglePass { inner: iter }
}

impl<I> SinglePass<I> {
    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for SinglePass<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for SinglePass<I> {}

impl<I: Iterator> IterTraits for SinglePass<I> {
    type Category = Input;
    type Value = I::Item;
    type Difference = isize;
    type Pointer = *const I::Item;
    type Reference = I::Item;
}
