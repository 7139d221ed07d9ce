//! Instrumented element types for observing construction and destruction inside collections.

use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

/// Increments the shared counter every time a handle is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// Shared bookkeeping for [`PanicOnClone`] values: how many clones may still succeed and how many
/// live values exist.
#[derive(Debug)]
pub struct CloneBudget {
    pub remaining: Cell<usize>,
    pub live: Cell<usize>,
}

impl CloneBudget {
    pub fn new(remaining: usize) -> Rc<CloneBudget> {
        Rc::new(CloneBudget {
            remaining: Cell::new(remaining),
            live: Cell::new(0),
        })
    }

    pub fn refill(&self, remaining: usize) {
        self.remaining.set(remaining);
    }
}

/// A value whose [`Clone`] implementation panics once the shared budget runs out, used to inject
/// failures part way through clone-driven operations.
#[derive(Debug)]
pub struct PanicOnClone {
    pub value: u32,
    pub budget: Rc<CloneBudget>,
}

impl PanicOnClone {
    pub fn new(value: u32, budget: &Rc<CloneBudget>) -> PanicOnClone {
        budget.live.set(budget.live.get() + 1);
        PanicOnClone {
            value,
            budget: Rc::clone(budget),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        match self.budget.remaining.get() {
            0 => panic!("PanicOnClone: clone budget exhausted"),
            n => self.budget.remaining.set(n - 1),
        }
        PanicOnClone::new(self.value, &self.budget)
    }
}

impl PartialEq for PanicOnClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for PanicOnClone {
    fn drop(&mut self) {
        self.budget.live.set(self.budget.live.get() - 1);
    }
}
