use std::{cell::RefCell, rc::Rc};

use crate::core::shape::ExpandStep;

/// A shared slot holding one element. Views clone the handle, never the
/// value, so a write through any holder is seen by all of them.
pub(crate) struct Cell<T>(Rc<RefCell<T>>);

impl<T> Cell<T> {
    pub(crate) fn new(value: T) -> Cell<T> {
        Cell(Rc::new(RefCell::new(value)))
    }

    pub(crate) fn shares(&self, other: &Cell<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Copy> Cell<T> {
    pub(crate) fn get(&self) -> T {
        *self.0.borrow()
    }

    pub(crate) fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Cell<T> {
        Cell(Rc::clone(&self.0))
    }
}

/// Repeat each contiguous run of `block` handles `times` times. The result
/// holds more handles to the same cells; no values are copied.
pub(crate) fn expand<T>(cells: &[Cell<T>], block: usize, times: usize) -> Vec<Cell<T>> {
    if cells.is_empty() {
        return Vec::new();
    }

    let mut expanded = Vec::with_capacity(cells.len() * times);
    for run in cells.chunks(block) {
        for _ in 0..times {
            expanded.extend(run.iter().cloned());
        }
    }

    expanded
}

pub(crate) fn expand_all<T>(cells: &[Cell<T>], steps: &[ExpandStep]) -> Vec<Cell<T>> {
    steps.iter().fold(cells.to_vec(), |cells, step| {
        expand(&cells, step.block, step.times)
    })
}
