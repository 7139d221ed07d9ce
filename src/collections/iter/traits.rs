use std::iter::{Cloned, Copied, Empty, Map, Once, Rev, Skip, Take};
use std::ops::Range;
use std::str::Chars;
use std::{array, slice, vec};

use super::{AtLeast, Bidirectional, Category, CategoryKind, Forward, Input, RandomAccess};

/// A descriptor for an iterator type, exposing its category and the types it traverses.
///
/// Querying the descriptor never fails; an iterator either implements this trait or it doesn't
/// take part in category checking at all (see [`SinglePass`](super::SinglePass) for the latter).
pub trait IterTraits {
    /// The traversal capabilities of the iterator.
    type Category: Category;
    /// The type of the elements being traversed.
    type Value;
    /// The type used to express offsets between two positions.
    type Difference;
    /// A raw pointer to an element.
    type Pointer;
    /// The type yielded for each element, a borrow or an owned value.
    type Reference;
}

/// The category tag of `I`.
pub type CategoryOf<I> = <I as IterTraits>::Category;
/// The element type traversed by `I`.
pub type ValueOf<I> = <I as IterTraits>::Value;
/// The offset type of `I`.
pub type DifferenceOf<I> = <I as IterTraits>::Difference;
/// The pointer type of `I`.
pub type PointerOf<I> = <I as IterTraits>::Pointer;
/// The reference type of `I`.
pub type ReferenceOf<I> = <I as IterTraits>::Reference;

/// Requires an iterator of at least the [`Input`] category.
pub trait InputIter: Iterator + IterTraits<Category: AtLeast<Input>> {}

impl<I> InputIter for I
where
    I: Iterator + IterTraits,
    CategoryOf<I>: AtLeast<Input>,
{}

/// Requires an iterator of at least the [`Forward`] category.
pub trait ForwardIter: InputIter + Clone + IterTraits<Category: AtLeast<Forward>> {}

impl<I> ForwardIter for I
where
    I: Iterator + Clone + IterTraits,
    CategoryOf<I>: AtLeast<Input> + AtLeast<Forward>,
{}

/// Requires an iterator of at least the [`Bidirectional`] category.
pub trait BidirectionalIter:
    ForwardIter + DoubleEndedIterator + IterTraits<Category: AtLeast<Bidirectional>>
{}

impl<I> BidirectionalIter for I
where
    I: DoubleEndedIterator + Clone + IterTraits,
    CategoryOf<I>: AtLeast<Input> + AtLeast<Forward> + AtLeast<Bidirectional>,
{}

/// Requires an iterator of the [`RandomAccess`] category.
pub trait RandomAccessIter:
    BidirectionalIter + ExactSizeIterator + IterTraits<Category: AtLeast<RandomAccess>>
{}

impl<I> RandomAccessIter for I
where
    I: DoubleEndedIterator + ExactSizeIterator + Clone + IterTraits,
    CategoryOf<I>:
        AtLeast<Input> + AtLeast<Forward> + AtLeast<Bidirectional> + AtLeast<RandomAccess>,
{}

/// Returns the number of elements remaining in `iter`.
///
/// Random access iterators report their exact length in constant time, every other category is
/// counted by walking the iterator to its end.
///
/// # Examples
/// ```
/// # use containers_lib::collections::iter::{distance, single_pass};
/// assert_eq!(distance([1, 2, 3].iter()), 3);
/// assert_eq!(distance(single_pass("abc".chars())), 3);
/// ```
pub fn distance<I: InputIter>(iter: I) -> usize {
    match <CategoryOf<I> as Category>::KIND {
        CategoryKind::RandomAccess => match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => lower,
            _ => iter.count(),
        },
        _ => iter.count(),
    }
}

/// Steps `iter` forward by up to `n` elements, returning the number of steps actually taken.
///
/// # Examples
/// ```
/// # use containers_lib::collections::iter::advance;
/// let mut iter = [1, 2, 3, 4].iter();
/// assert_eq!(advance(&mut iter, 2), 2);
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(advance(&mut iter, 5), 1);
/// ```
pub fn advance<I: InputIter>(iter: &mut I, n: usize) -> usize {
    if n == 0 {
        return 0;
    }

    if let (CategoryKind::RandomAccess, (lower, Some(upper))) =
        (<CategoryOf<I> as Category>::KIND, iter.size_hint())
    {
        if lower == upper {
            let taken = n.min(lower);
            if taken > 0 {
                iter.nth(taken - 1);
            }
            return taken;
        }
    }

    let mut taken = 0;
    while taken < n && iter.next().is_some() {
        taken += 1;
    }
    taken
}

impl<'a, T> IterTraits for slice::Iter<'a, T> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
}

/// Hands out unique references, so it can't be cloned and only supports a single pass.
impl<'a, T> IterTraits for slice::IterMut<'a, T> {
    type Category = Input;
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference = &'a mut T;
}

impl<T> IterTraits for vec::IntoIter<T> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<T, const N: usize> IterTraits for array::IntoIter<T, N> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<'a> IterTraits for Chars<'a> {
    type Category = Bidirectional;
    type Value = char;
    type Difference = isize;
    type Pointer = *const char;
    type Reference = char;
}

impl<T> IterTraits for Empty<T> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<T> IterTraits for Once<T> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

macro_rules! range_traits {
    ($category:ty => $($int:ty),+) => {
        $(
            impl IterTraits for Range<$int> {
                type Category = $category;
                type Value = $int;
                type Difference = isize;
                type Pointer = *const $int;
                type Reference = $int;
            }
        )+
    };
}

// Only ranges which implement ExactSizeIterator can be random access.
range_traits!(RandomAccess => u8, u16, u32, usize, i8, i16, i32, isize);
range_traits!(Bidirectional => u64, i64, u128, i128);

impl<I: IterTraits> IterTraits for Rev<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<I: IterTraits> IterTraits for Cloned<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Value;
}

impl<I: IterTraits> IterTraits for Copied<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Value;
}

impl<I: IterTraits> IterTraits for Take<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<I: IterTraits> IterTraits for Skip<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

/// The mapping closure may be stateful, so a mapped iterator is only ever single pass.
impl<B, I, F> IterTraits for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Category = Input;
    type Value = B;
    type Difference = isize;
    type Pointer = *const B;
    type Reference = B;
}
