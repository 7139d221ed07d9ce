#![cfg(test)]

use super::*;
use crate::collections::linked::ForwardList;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyCollection;
use crate::util::panic::assert_panics;
use crate::vector;

#[test]
fn test_stack_order() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    for i in 0..5 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 5);
    assert_eq!(*stack.top(), 4, "The last pushed value should be on top.");

    *stack.top_mut() = 40;
    assert_eq!(stack.pop(), Some(40));
    assert_eq!(stack.try_pop(), Ok(3));

    let mut stack: Stack<_> = stack.into_inner().into_iter().rev().collect();
    assert_eq!(stack.pop(), Some(0), "Collecting should push in iteration order.");
}

#[test]
fn test_stack_empty() {
    let mut stack = Stack::<u8>::with_cap(4);
    assert_eq!(stack.try_top(), Err(EmptyCollection));
    assert_eq!(stack.try_pop(), Err(EmptyCollection));
    assert_eq!(stack.pop(), None);
    assert_panics!({ *Stack::<u8>::new().top() }, "Collection is empty");
    assert_panics!({ *Stack::<u8>::new().top_mut() });
}

#[test]
fn test_stack_drops() {
    let counter = CountedDrop::new(0);
    let mut stack = Stack::from(vector![counter.clone(), counter.clone()]);
    stack.extend([counter.clone()]);
    drop(stack.pop());
    assert_eq!(*counter.borrow(), 1);
    drop(stack);
    assert_eq!(*counter.borrow(), 3, "Dropping the Stack should drop every value.");
}

#[test]
fn test_queue_order() {
    let mut queue = Queue::new();
    assert!(queue.is_empty());
    for i in 0..5 {
        queue.push(i);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(*queue.front(), 0, "The first pushed value should be at the front.");
    assert_eq!(*queue.back(), 4);

    *queue.front_mut() = 10;
    *queue.back_mut() = 40;
    assert_eq!(queue.pop(), Some(10));
    assert_eq!(queue.try_pop(), Ok(1));
    queue.push(5);
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), [2, 3, 40, 5]);

    let queue: Queue<_> = "abc".chars().collect();
    assert_eq!(queue.into_inner(), ['a', 'b', 'c'], "Collecting should push in iteration order.");
}

#[test]
fn test_queue_empty() {
    let mut queue = Queue::<u8>::default();
    assert_eq!(queue.try_front(), Err(EmptyCollection));
    assert_eq!(queue.try_back(), Err(EmptyCollection));
    assert_eq!(queue.try_pop(), Err(EmptyCollection));
    assert_eq!(queue.pop(), None);
    assert_eq!(format!("{queue:?}"), "Queue { front: None, back: None, len: 0 }");
    assert_panics!({ *Queue::<u8>::new().front() }, "Collection is empty");
    assert_panics!({ *Queue::<u8>::new().back_mut() }, "Collection is empty");

    queue.push(7);
    queue.push(9);
    assert_eq!(format!("{queue:?}"), "Queue { front: Some(7), back: Some(9), len: 2 }");
}

#[test]
fn test_queue_drops() {
    let counter = CountedDrop::new(0);
    let mut queue = Queue::from(ForwardList::from([counter.clone(), counter.clone()]));
    queue.extend([counter.clone()]);
    drop(queue.pop());
    assert_eq!(*counter.borrow(), 1);
    let copy = queue.clone();
    drop(queue);
    assert_eq!(*counter.borrow(), 3, "Dropping the Queue should drop every value.");
    drop(copy);
    assert_eq!(*counter.borrow(), 5);
}

#[test]
fn test_priority_queue_order() {
    let mut queue = PriorityQueue::new();
    for value in [5, 1, 8, 3, 9, 2, 8] {
        queue.push(value);
    }
    assert_eq!(queue.len(), 7);
    assert_eq!(*queue.top(), 9);

    let mut popped = Vec::new();
    while let Some(value) = queue.pop() {
        popped.push(value);
    }
    assert_eq!(popped, [9, 8, 8, 5, 3, 2, 1], "Values should leave greatest first.");
    assert!(queue.is_empty());
    assert_eq!(queue.try_pop(), Err(EmptyCollection));
    assert_eq!(queue.try_top(), Err(EmptyCollection));
    assert_panics!({ *PriorityQueue::<u8>::new().top() });
}

#[test]
fn test_priority_queue_comparator() {
    let mut queue = PriorityQueue::with_compare(|a: &(u8, char), b: &(u8, char)| b.0.cmp(&a.0));
    queue.extend([(3, 'l'), (1, 'u'), (2, 'n')]);
    assert_eq!(queue.top().1, 'u', "A reversed comparator should put the smallest on top.");
    assert_eq!(queue.pop().map(|task| task.1), Some('u'));
    assert_eq!(queue.pop().map(|task| task.1), Some('n'));

    let queue = PriorityQueue::from_vector(vector![4, 9, 2, 7], |a: &i32, b: &i32| b.cmp(a));
    assert_eq!(
        queue.into_sorted(),
        [9, 7, 4, 2],
        "Sorting is ascending with respect to the comparator."
    );
}

#[test]
fn test_priority_queue_from() {
    let queue = PriorityQueue::from(vector![3, 1, 4, 1, 5]);
    assert_eq!(*queue.top(), 5);
    assert_eq!(queue.clone().into_sorted(), [1, 1, 3, 4, 5]);

    let heap = queue.into_vector();
    assert!(crate::algorithm::is_heap(&heap), "The underlying Vector should be a heap.");

    let empty: PriorityQueue<u8> = PriorityQueue::default();
    assert_eq!(format!("{empty:?}"), "PriorityQueue { top: None, len: 0 }");
}
