use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Input {}
    impl Sealed for super::Forward {}
    impl Sealed for super::Bidirectional {}
    impl Sealed for super::RandomAccess {}
}

/// A value-level mirror of the category tags, ordered from least to most capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl CategoryKind {
    /// Returns true if an iterator of this kind can be used where `other` is required.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::iter::CategoryKind;
    /// assert!(CategoryKind::RandomAccess.refines(CategoryKind::Forward));
    /// assert!(!CategoryKind::Input.refines(CategoryKind::Forward));
    /// ```
    pub const fn refines(self, other: CategoryKind) -> bool {
        self as u8 >= other as u8
    }
}

/// A compile-time marker describing the traversal operations an iterator supports. This trait is
/// sealed, the four tags in this module are the only implementors.
pub trait Category: sealed::Sealed + Debug + Default + Copy + Eq + Hash + 'static {
    /// The runtime representation of this tag.
    const KIND: CategoryKind;
}

/// Single pass traversal. Once an element has been yielded it can't be visited again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Input;

/// Multi-pass traversal. Cloning the iterator produces an independent cursor over the same
/// remaining elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Forward;

/// Multi-pass traversal from either end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Multi-pass traversal from either end with a known length and constant time jumps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomAccess;

impl Category for Input {
    const KIND: CategoryKind = CategoryKind::Input;
}

impl Category for Forward {
    const KIND: CategoryKind = CategoryKind::Forward;
}

impl Category for Bidirectional {
    const KIND: CategoryKind = CategoryKind::Bidirectional;
}

impl Category for RandomAccess {
    const KIND: CategoryKind = CategoryKind::RandomAccess;
}

/// Implemented by every tag that provides at least the capabilities of `C`, including `C` itself.
pub trait AtLeast<C: Category>: Category {}

macro_rules! refines {
    ($tag:ty => $($base:ty),+) => {
        $( impl AtLeast<$base> for $tag {} )+
    };
}

refines!(Input => Input);
refines!(Forward => Input, Forward);
refines!(Bidirectional => Input, Forward, Bidirectional);
refines!(RandomAccess => Input, Forward, Bidirectional, RandomAccess);
