use std::cell::Cell;
use std::rc::Rc;

/// A value which increments a shared counter when dropped, used to prove that a collection
/// releases every element it owns exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
