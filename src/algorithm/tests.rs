#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::iter::single_pass;
use crate::vector;

#[test]
fn test_search() {
    let vec = vector![3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(find(vec.iter(), &5), Some(&5));
    assert_eq!(find(single_pass(vec.iter().map(|v| v * 2)), &18), Some(18));
    assert_eq!(find_if(vec.iter(), |v| **v > 100), None);
    assert_eq!(find_if_not(vec.iter(), |v| **v < 4), Some(&4));
    assert_eq!(position(vec.iter(), |v| **v == 9), Some(5));
    assert_eq!(count(vec.iter(), &1), 2);
    assert_eq!(count_if(vec.iter(), |v| **v % 2 == 0), 3);
}

#[test]
fn test_min_max() {
    let vec: Vector<i32> = vector![5, 1, 9, 1, 9, 3];

    let min = min_element(vec.iter());
    assert_eq!(min.len(), 5, "min_element should pick the first minimum.");

    let max = max_element(vec.iter());
    assert_eq!(max.len(), 4, "max_element should pick the first maximum.");

    let (min, max) = minmax_element(vec.iter());
    assert_eq!(min.len(), 5, "minmax_element should pick the first minimum.");
    assert_eq!(max.len(), 2, "minmax_element should pick the last maximum.");

    let by_distance = min_element_by(vec.iter(), |a, b| (**a - 4).abs().cmp(&(**b - 4).abs()));
    assert_eq!(by_distance.as_slice(), &[5, 1, 9, 1, 9, 3], "5 is the first value closest to 4.");

    let empty: [u8; 0] = [];
    assert_eq!(min_element(empty.iter()).next(), None);
    let (min, max) = minmax_element(empty.iter());
    assert_eq!((min.len(), max.len()), (0, 0));

    let mut pos = max_element(0..10);
    assert_eq!(pos.next(), Some(9), "Ranges are forward iterators too.");
}

#[test]
fn test_adjacent_find() {
    let mut pos = adjacent_find("bookkeeper".chars());
    assert_eq!(pos.as_str(), "ookkeeper");
    pos.next();
    pos = adjacent_find(pos);
    assert_eq!(pos.as_str(), "kkeeper", "Searching again should find the next pair.");

    assert_eq!(adjacent_find([1, 2, 3].iter()).len(), 0, "No pair should exhaust the iterator.");

    let rising = adjacent_find_by([1, 3, 2, 5].iter(), |a, b| b < a);
    assert_eq!(rising.as_slice(), &[3, 2, 5]);
}

#[test]
fn test_compare() {
    let vec = vector![1, 2, 3];
    assert!(equal(vec.iter(), vec.clone().iter()));
    assert!(equal_by(vec.iter(), ["1", "2", "3"].iter(), |a, b| a.to_string() == **b));
    assert!(!equal(vec.iter(), [1, 2].iter()), "A shorter second range is never equal.");

    assert_eq!(mismatch(vec.iter(), [1, 2, 4].iter()), Some(2));
    assert_eq!(mismatch_by(vec.iter(), [2, 3, 4].iter(), |a, b| **a < **b), None);

    assert!(lexicographical_compare(vec.iter(), [1, 3].iter()));
    assert!(!lexicographical_compare([1, 3].iter(), vec.iter()));
    assert!(!lexicographical_compare(std::iter::empty::<u8>(), std::iter::empty()));
    assert!(!lexicographical_compare_by(
        "B".chars(),
        "a".chars(),
        |a, b| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    ));

    assert!(is_permutation(vec.iter(), [3, 1, 2].iter()));
    assert!(is_permutation([1, 1, 2].iter(), [1, 2, 1].iter()));
    assert!(!is_permutation([1, 1, 2].iter(), [1, 2, 2].iter()));
    assert!(!is_permutation([1, 2].iter(), [2].iter()));
    assert!(is_permutation(std::iter::empty::<u8>(), std::iter::empty()));
    assert!(is_permutation_by(
        "Abc".chars(),
        "cbA".chars(),
        |a, b| a.eq_ignore_ascii_case(b)
    ));
}

#[test]
fn test_modify() {
    let mut vec = vector![1, 2, 3, 2, 4, 2];
    let len = remove(&mut vec, &2);
    assert_eq!(&vec[..len], &[1, 3, 4], "Retained elements should keep their order.");
    vec.truncate(len);

    let mut words = vector!["apple", "kiwi", "banana", "fig"];
    let len = remove_if(&mut words, |w| w.len() < 5);
    assert_eq!(&words[..len], &["apple", "banana"]);

    let mut runs = vector![1, 1, 1, 2, 3, 3, 1, 1];
    let len = unique(&mut runs);
    assert_eq!(&runs[..len], &[1, 2, 3, 1]);

    let mut close = [1, 2, 3, 10, 11, 20];
    let len = unique_by(&mut close, |kept, next| next - kept < 5);
    assert_eq!(&close[..len], &[1, 10, 20], "Elements compare against the last retained one.");

    let mut empty: [u8; 0] = [];
    assert_eq!(unique(&mut empty), 0);

    let mut sink = Vector::new();
    assert_eq!(copy(vec.iter().copied(), &mut sink), 3);
    assert_eq!(remove_copy([5, 6, 5].into_iter(), &mut sink, &5), 1);
    assert_eq!(remove_copy_if(0..10, &mut sink, |v| *v != 7), 1);
    assert_eq!(unique_copy([8, 8, 9, 9, 8].into_iter(), &mut sink), 3);
    assert_eq!(
        unique_copy_by(single_pass([1, 2, 4, 5].into_iter()), &mut sink, |a, b| b - a == 1),
        2
    );
    assert_eq!(sink, [1, 3, 4, 6, 7, 8, 9, 8, 1, 4]);
}

#[test]
fn test_heap() {
    let mut heap = Vector::new();
    for value in [4, 8, 1, 9, 3, 7] {
        heap.push(value);
        push_heap(&mut heap);
        assert!(is_heap(&heap), "Every push should maintain the heap.");
    }
    assert_eq!(heap[0], 9);

    let mut popped = Vector::new();
    while !heap.is_empty() {
        pop_heap(&mut heap);
        popped.push(heap.pop());
        assert!(is_heap(&heap), "Every pop should maintain the heap.");
    }
    assert_eq!(
        popped,
        [Some(9), Some(8), Some(7), Some(4), Some(3), Some(1)],
        "Elements should be popped from greatest to smallest."
    );

    let mut values = [5, 2, 8, 2, 6];
    make_heap_by(&mut values, |a: &i32, b: &i32| b.cmp(a));
    assert_eq!(values[0], 2, "A reversed comparator should produce a min-heap.");
    assert!(is_heap_by(&values, |a: &i32, b: &i32| b.cmp(a)));
    assert!(!is_heap(&values));

    sort_heap_by(&mut values, |a: &i32, b: &i32| b.cmp(a));
    assert_eq!(values, [8, 6, 5, 2, 2], "Sorting is ascending with respect to the comparator.");

    let mut single = [1];
    push_heap(&mut single);
    pop_heap(&mut single);
    assert_eq!(single, [1]);
}

#[test]
fn test_sorts() {
    let sorts: [(&str, fn(&mut [i32])); 4] = [
        ("selection", selection_sort),
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("heap", heap_sort),
    ];

    for (name, sort) in sorts {
        let mut values = vector![5, 4, 3, 2, 1];
        sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5], "{name} sort should reverse a descending input.");

        let mut values = vector![2, 7, 1, 8, 2, 8, 1, 8];
        sort(&mut values);
        assert_eq!(values, [1, 1, 2, 2, 7, 8, 8, 8], "{name} sort should keep duplicates.");

        let mut empty: [i32; 0] = [];
        sort(&mut empty);
    }
}

#[test]
fn test_stable_sorts() {
    let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);

    let mut values = pairs;
    bubble_sort_by(&mut values, by_key);
    assert_eq!(values, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')], "Bubble sort should be stable.");

    let mut values = pairs;
    insertion_sort_by(&mut values, by_key);
    assert_eq!(values, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')], "Insertion sort should be stable.");

    let mut values = pairs;
    selection_sort_by(&mut values, |a, b| b.0.cmp(&a.0));
    assert_eq!(values.map(|p| p.0), [2, 2, 1, 1]);

    let mut values = pairs;
    heap_sort_by(&mut values, |a, b| a.1.cmp(&b.1));
    assert_eq!(values.map(|p| p.1), ['a', 'b', 'c', 'd']);
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn sorts_match_std(values in prop::collection::vec(any::<i16>(), 0..100)) {
            let mut expected = values.clone();
            expected.sort();

            let sorts: [fn(&mut [i16]); 4] =
                [selection_sort, bubble_sort, insertion_sort, heap_sort];
            for sort in sorts {
                let mut actual = Vector::from(values.as_slice());
                sort(&mut actual);
                prop_assert_eq!(&*actual, expected.as_slice());
            }
        }

        #[test]
        fn heap_pops_in_order(values in prop::collection::vec(any::<u8>(), 0..60)) {
            let mut heap = Vector::from(values.as_slice());
            make_heap(&mut heap);
            prop_assert!(is_heap(&heap));

            let mut last = None;
            while !heap.is_empty() {
                pop_heap(&mut heap);
                let top = heap.pop();
                prop_assert!(last.is_none() || top <= last, "Pops should never increase.");
                last = top;
            }
        }

        #[test]
        fn reversal_is_permutation(values in prop::collection::vec(0_u8..4, 0..30)) {
            let reversed: Vec<_> = values.iter().rev().copied().collect();
            prop_assert!(is_permutation(values.iter(), reversed.iter()));

            let mut changed = values.clone();
            changed.push(4);
            prop_assert!(!is_permutation(values.iter(), changed.iter()));
        }

        #[test]
        fn remove_if_matches_retain(values in prop::collection::vec(any::<u8>(), 0..60)) {
            let mut expected = values.clone();
            expected.retain(|v| v % 3 != 0);

            let mut actual = values.clone();
            let len = remove_if(&mut actual, |v| v % 3 == 0);
            prop_assert_eq!(&actual[..len], expected.as_slice());
        }
    }
}
