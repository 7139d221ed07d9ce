#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::collections::iter::{distance, single_pass};
use crate::util::alloc::{CloneBudget, CountedDrop, PanicOnClone, ZeroSizedType};
use crate::util::error::{EmptyCollection, IndexOutOfBounds, RangeOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = ForwardList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.try_pop_front(), Err(EmptyCollection));

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_links();
    assert_eq!(list, [1, 2, 3]);
    assert_eq!((*list.front(), *list.back()), (1, 3));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    list.verify_links();
    assert_eq!(list.try_back(), Err(EmptyCollection), "The tail should be cleared with the head.");

    list.push_back(4);
    list.verify_links();
    assert_eq!(list.front(), list.back(), "A single element is both the front and the back.");
}

#[test]
fn test_access() {
    let mut list = ForwardList::from([10, 20, 30]);
    assert_eq!(*list.get(0), 10);
    assert_eq!(*list.get(2), 30);
    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *list.get_mut(1) += 5;
    *list.front_mut() -= 10;
    *list.back_mut() += 1;
    assert_eq!(list, [0, 25, 31]);
    assert!(list.contains(&25));
    assert!(!list.contains(&20));

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list.iter().copied().sum::<i32>(), 112);
}

#[test]
fn test_insert_and_erase_after() {
    let mut list = ForwardList::from([1, 4]);
    assert_eq!(list.insert_after(0, 2), 1, "Insertion should report the new element's index.");
    assert_eq!(list.insert_after(1, 3), 2);
    assert_eq!(list.insert_after(3, 5), 4, "Inserting after the last element should append.");
    list.verify_links();
    assert_eq!(list, [1, 2, 3, 4, 5]);
    assert_eq!(*list.back(), 5);

    assert_eq!(list.erase_after(3), 5, "Erasing the last element should move the tail back.");
    list.verify_links();
    assert_eq!(*list.back(), 4);
    assert_eq!(list.erase_after(0), 2);
    assert_eq!(list, [1, 3, 4]);

    assert_eq!(list.insert_n_after(2, 2, 0), 4);
    assert_eq!(list.insert_n_after(0, 0, 9), 0, "Inserting nothing returns the anchor index.");
    assert_eq!(list.insert_range_after(1, single_pass([7, 8].into_iter())), 3);
    list.verify_links();
    assert_eq!(list, [1, 3, 7, 8, 4, 0, 0]);
}

#[test]
fn test_erase_range() {
    let mut list: ForwardList<_> = (0..8).collect();
    assert_eq!(list.erase_range(2..5), 2);
    list.verify_links();
    assert_eq!(list, [0, 1, 5, 6, 7]);

    assert_eq!(list.erase_range(3..), 3, "Erasing a suffix should return the new end.");
    list.verify_links();
    assert_eq!(*list.back(), 5);

    assert_eq!(list.erase_range(1..1), 1, "An empty range should erase nothing.");
    assert_eq!(list.erase_range(..2), 0);
    assert_eq!(list, [5]);
    assert_eq!(list.erase_range(..), 0);
    list.verify_links();
    assert!(list.is_empty());
}

#[test]
fn test_errors() {
    let mut list = ForwardList::from([1, 2, 3]);
    assert_eq!(list.try_insert_after(3, 0), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(
        list.try_erase_after(2),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "There is nothing after the last element."
    );
    assert_eq!(
        list.try_erase_range(2..5),
        Err(RangeOutOfBounds { start: 2, end: 5, len: 3 })
    );
    assert_eq!(
        list.try_split_off(4).map(|rest| rest.len()),
        Err(IndexOutOfBounds { index: 4, len: 3 })
    );

    let mut calls = 0;
    let iter = single_pass([4, 5].into_iter().inspect(|_| calls += 1));
    assert!(list.try_insert_range_after(7, iter).is_err());
    assert_eq!(calls, 0, "An invalid index shouldn't consume the iterator.");
    assert_eq!(list, [1, 2, 3], "Failed operations should leave the list unchanged.");

    assert_panics!({ list.clone().insert_after(5, 0) }, "Index 5 out of bounds");
    assert_panics!({ list.clone().erase_after(2) }, "Index 3 out of bounds");
    assert_panics!({ list.clone().erase_range(1..5) }, "Range 1..5 out of bounds");
    assert_panics!({ *ForwardList::<u8>::new().front() }, "Collection is empty");
}

#[test]
fn test_split_and_join() {
    let mut list: ForwardList<_> = (1..=6).collect();
    let mut rest = list.split_off(4);
    list.verify_links();
    rest.verify_links();
    assert_eq!(list, [1, 2, 3, 4]);
    assert_eq!(rest, [5, 6]);

    assert!(list.split_off(4).is_empty(), "Splitting at the end should take nothing.");
    let all = list.split_off(0);
    list.verify_links();
    assert!(list.is_empty());
    assert_eq!(all, [1, 2, 3, 4]);

    list.append(all);
    list.append(ForwardList::new());
    list.verify_links();
    assert_eq!(*list.back(), 4);

    rest.prepend(list);
    rest.verify_links();
    assert_eq!(rest, [1, 2, 3, 4, 5, 6]);
    rest.push_back(7);
    assert_eq!(*rest.back(), 7, "The tail should follow the appended nodes.");

    let mut empty = ForwardList::new();
    empty.prepend(rest.split_off(5));
    empty.verify_links();
    assert_eq!(empty, [6, 7]);
}

#[test]
fn test_cursor() {
    let mut list: ForwardList<_> = (1..=6).collect();
    let mut cursor = list.cursor_mut();
    assert_eq!(cursor.index(), None);
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek_next(), Some(&1));

    cursor.insert_after(0);
    assert_eq!(cursor.peek_next(), Some(&0), "Inserting shouldn't move the cursor.");
    while let Some(&next) = cursor.peek_next() {
        if next % 2 == 1 {
            cursor.remove_after();
        } else {
            cursor.move_next();
        }
    }
    assert_eq!(cursor.index(), Some(3));
    assert_eq!(cursor.current(), Some(&6));
    assert!(!cursor.move_next(), "The cursor shouldn't move past the last element.");

    if let Some(current) = cursor.current_mut() {
        *current = 60;
    }
    cursor.splice_after(ForwardList::from([7, 8]));
    assert!(cursor.move_next());
    let tail = cursor.split_after();
    assert_eq!(tail, [8]);

    cursor.reset();
    cursor.insert_after(-1);
    list.verify_links();
    assert_eq!(list, [-1, 0, 2, 4, 60, 7]);
    assert_eq!(*list.back(), 7);

    let mut cursor = list.cursor_mut();
    let all = cursor.split_after();
    assert_eq!(all.len(), 6);
    list.verify_links();
    assert!(list.is_empty());
}

#[test]
fn test_assign_and_resize() {
    let mut list = ForwardList::from([1, 2, 3]);
    list.assign_range([7, 8].iter().copied());
    assert_eq!(list, [7, 8]);
    list.assign_n(3, 0);
    assert_eq!(list, [0, 0, 0]);

    list.resize(5, 1);
    list.verify_links();
    assert_eq!(list, [0, 0, 0, 1, 1]);
    list.resize(2, 1);
    list.verify_links();
    assert_eq!(list, [0, 0]);

    let mut next = 10;
    list.resize_with(4, || {
        next += 1;
        next
    });
    assert_eq!(list, [0, 0, 11, 12]);

    list.truncate(10);
    assert_eq!(list.len(), 4, "Truncating to a longer length should do nothing.");
    list.truncate(1);
    list.verify_links();
    assert_eq!(list, [0]);
    list.clear();
    list.verify_links();
    assert!(list.is_empty());
}

#[test]
fn test_zst_support() {
    let mut list = ForwardList::new();
    for _ in 0..10 {
        list.push_back(ZeroSizedType);
    }
    assert_eq!(list.erase_range(2..5), 2);
    assert_eq!(list.len(), 7);
    assert_eq!(list.iter().count(), 7, "Each ZST still gets its own node.");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut list = ForwardList::new();
    for _ in 0..8 {
        list.push_back(counter.clone());
    }

    drop(list.erase_after(0));
    assert_eq!(*counter.borrow(), 1);

    list.erase_range(2..4);
    assert_eq!(*counter.borrow(), 3, "Erased values should be dropped.");

    list.truncate(3);
    assert_eq!(*counter.borrow(), 5, "Truncated values should be dropped.");

    let mut iter = list.into_iter();
    drop(iter.next());
    assert_eq!(*counter.borrow(), 6);
    drop(iter);
    assert_eq!(*counter.borrow(), 8, "Dropping the iterator should drop the remaining values.");
}

#[test]
fn test_clone_rollback() {
    let budget = CloneBudget::new(0);
    let mut list = ForwardList::new();
    for i in 0..3 {
        list.push_back(PanicOnClone::new(i, &budget));
    }

    budget.refill(2);
    let value = PanicOnClone::new(9, &budget);
    let result = panic::catch_unwind(AssertUnwindSafe(|| list.insert_n_after(1, 5, value)));
    assert!(result.is_err());
    list.verify_links();
    assert_eq!(
        list.iter().map(|v| v.value).collect::<Vec<_>>(),
        [0, 1, 2],
        "A failed insertion should leave the values unchanged."
    );
    assert_eq!(budget.live.get(), 3, "Every partial clone should have been destroyed.");

    budget.refill(1);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        list.resize(6, PanicOnClone::new(7, &budget))
    }));
    assert!(result.is_err());
    assert_eq!(list.len(), 3);
    assert_eq!(budget.live.get(), 3);

    budget.refill(1);
    assert!(panic::catch_unwind(AssertUnwindSafe(|| list.clone())).is_err());
    assert_eq!(budget.live.get(), 3, "A failed copy should leave nothing behind.");

    drop(list);
    assert_eq!(budget.live.get(), 0, "Dropping the ForwardList should destroy every value.");
}

#[test]
fn test_iter_categories() {
    let list = ForwardList::from([3, 1, 2]);
    let iter = list.iter();
    let copy = iter.clone();
    assert_eq!(distance(iter), 3);
    assert_eq!(copy.len(), 3, "A clone should keep its own position.");

    #[cfg(feature = "algorithm")]
    {
        use crate::algorithm::{is_permutation, min_element};
        assert_eq!(min_element(list.iter()).next(), Some(&1));
        assert!(is_permutation(list.iter(), [1, 2, 3].iter()));
    }

    let mut list = list;
    assert_eq!(distance(list.iter_mut()), 3);
    assert_eq!(distance(list.clone().into_iter()), 3);
}

#[test]
fn test_comparison_and_format() {
    let a = ForwardList::from([1, 2, 3]);
    let b = ForwardList::from([1, 2, 4]);
    let c = ForwardList::from([1, 2]);
    assert!(a < b);
    assert!(c < a, "A prefix should order before the longer sequence.");
    assert_ne!(a, c);
    assert_eq!(a, a.clone());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(a.clone()));
    assert_ne!(state.hash_one(&a), state.hash_one(&c));

    assert_eq!(a.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(ForwardList::<u8>::new().to_string(), "");
    assert_eq!(format!("{c:?}"), "ForwardList { contents: [1, 2], len: 2 }");
    assert_eq!(format!("{:?}", c.into_iter()), "IntoIter([1, 2])");
}

#[test]
fn test_long_list_drop() {
    let list: ForwardList<_> = (0..100_000).collect();
    assert_eq!(list.len(), 100_000);
    drop(list);
}

mod proptests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        InsertAfter(usize, i32),
        EraseAfter(usize),
        SplitAppend(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushFront),
            any::<i32>().prop_map(Op::PushBack),
            Just(Op::PopFront),
            (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::InsertAfter(i, v)),
            any::<usize>().prop_map(Op::EraseAfter),
            any::<usize>().prop_map(Op::SplitAppend),
        ]
    }

    proptest! {
        #[test]
        fn matches_deque(ops in prop::collection::vec(op(), 0..100)) {
            let mut list = ForwardList::new();
            let mut model = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushFront(value) => {
                        list.push_front(value);
                        model.push_front(value);
                    },
                    Op::PushBack(value) => {
                        list.push_back(value);
                        model.push_back(value);
                    },
                    Op::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
                    Op::InsertAfter(index, value) => {
                        let result = list.try_insert_after(index, value);
                        if index < model.len() {
                            model.insert(index + 1, value);
                            prop_assert_eq!(result, Ok(index + 1));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    },
                    Op::EraseAfter(index) => {
                        let result = list.try_erase_after(index);
                        if index.saturating_add(1) < model.len() {
                            prop_assert_eq!(result.ok(), model.remove(index + 1));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    },
                    Op::SplitAppend(at) => {
                        let at = at % (model.len() + 1);
                        let rest = list.split_off(at);
                        list.verify_links();
                        list.append(rest);
                    },
                }
                list.verify_links();
                prop_assert!(list.iter().eq(model.iter()));
            }
        }
    }
}
