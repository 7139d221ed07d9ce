#![cfg(test)]

use std::any::TypeId;

use super::*;

fn kind_of<I: IterTraits>(_: &I) -> CategoryKind {
    <CategoryOf<I> as Category>::KIND
}

fn requires_forward<I: ForwardIter>(iter: I) -> usize {
    iter.clone().count() + iter.count()
}

fn requires_bidirectional<I: BidirectionalIter>(iter: I) -> usize {
    requires_forward(iter.clone()) + distance(iter)
}

fn requires_random_access<I: RandomAccessIter>(iter: I) -> usize {
    iter.len()
}

fn requires_each<I: RandomAccessIter>(iter: I) -> [usize; 3] {
    [
        requires_forward(iter.clone()),
        requires_bidirectional(iter.clone()),
        requires_random_access(iter),
    ]
}

/// Counts down from `n`, declaring only forward traversal.
#[derive(Clone)]
struct Countdown(u8);

impl Iterator for Countdown {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.0 = self.0.checked_sub(1)?;
        Some(self.0)
    }
}

impl IterTraits for Countdown {
    type Category = Forward;
    type Value = u8;
    type Difference = isize;
    type Pointer = *const u8;
    type Reference = u8;
}

#[test]
fn test_refinement_order() {
    use CategoryKind::*;

    let kinds = [Input, Forward, Bidirectional, RandomAccess];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            assert_eq!(
                a.refines(*b),
                i >= j,
                "{a:?} should refine {b:?} only if it is at least as capable."
            );
        }
    }
}

#[test]
fn test_descriptors() {
    let values = [1_u8, 2, 3];

    assert_eq!(kind_of(&values.iter()), CategoryKind::RandomAccess);
    assert_eq!(kind_of(&values.iter().rev()), CategoryKind::RandomAccess);
    assert_eq!(kind_of(&values.iter().copied()), CategoryKind::RandomAccess);
    assert_eq!(kind_of(&"abc".chars()), CategoryKind::Bidirectional);
    assert_eq!(kind_of(&(0_u64..4)), CategoryKind::Bidirectional);
    assert_eq!(kind_of(&(0_usize..4)), CategoryKind::RandomAccess);
    assert_eq!(
        kind_of(&values.iter().map(|i| i + 1)),
        CategoryKind::Input,
        "Mapped iterators should always be single pass."
    );
    assert_eq!(kind_of(&single_pass(values.iter())), CategoryKind::Input);

    assert_eq!(
        TypeId::of::<ValueOf<std::slice::Iter<'static, u8>>>(),
        TypeId::of::<u8>(),
        "Slice iterators should traverse their element type."
    );
    assert_eq!(
        TypeId::of::<ReferenceOf<std::slice::Iter<'static, u8>>>(),
        TypeId::of::<&'static u8>(),
    );
    assert_eq!(
        TypeId::of::<DifferenceOf<std::vec::IntoIter<u8>>>(),
        TypeId::of::<isize>(),
    );
    assert_eq!(
        TypeId::of::<PointerOf<std::slice::IterMut<'static, u8>>>(),
        TypeId::of::<*mut u8>(),
    );
}

#[test]
fn test_gated_functions() {
    let values = [1, 2, 3, 4];

    assert_eq!(requires_forward(values.iter()), 8);
    assert_eq!(requires_forward("ab".chars()), 4);
    assert_eq!(requires_random_access(values.iter().rev()), 4);
    assert_eq!(requires_random_access(0_i32..10), 10);
}

#[test]
fn test_gates_compose() {
    assert_eq!(requires_forward(Countdown(3)), 6, "A Forward tag should satisfy ForwardIter.");
    assert_eq!(distance(Countdown(5)), 5, "A Forward tag should satisfy InputIter.");
    assert_eq!(requires_bidirectional("abc".chars()), 9);
    assert_eq!(
        requires_each([1, 2, 3, 4].iter()),
        [8, 12, 4],
        "Stronger requirements should satisfy every weaker one."
    );
}

#[test]
fn test_distance() {
    assert_eq!(distance([1, 2, 3, 4, 5].iter()), 5);
    assert_eq!(distance(std::iter::empty::<u8>()), 0);
    assert_eq!(distance("héllo".chars()), 5, "Bidirectional iterators should be counted.");
    assert_eq!(distance(single_pass(std::iter::repeat_n(0, 7))), 7);

    let mut iter = [1, 2, 3, 4].iter();
    iter.next();
    assert_eq!(distance(iter), 3, "Distance should only cover the remaining elements.");
}

#[test]
fn test_advance() {
    let mut iter = 0_u32..10;
    assert_eq!(advance(&mut iter, 0), 0);
    assert_eq!(advance(&mut iter, 4), 4);
    assert_eq!(iter.next(), Some(4));
    assert_eq!(advance(&mut iter, 100), 5, "Should stop at the end of the iterator.");
    assert_eq!(iter.next(), None);

    let mut chars = single_pass("abcdef".chars());
    assert_eq!(advance(&mut chars, 2), 2);
    assert_eq!(chars.next(), Some('c'));
}
