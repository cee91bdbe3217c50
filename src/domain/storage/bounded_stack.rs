use thiserror::Error;

/// A rejected push. The item is handed back untouched.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Stack is full (capacity: {capacity})")]
pub struct StackFull<T> {
    pub capacity: usize,
    pub item: T,
}

/// Fixed-capacity last-in-first-out container.
///
/// The capacity is set once at construction. The backing vector is preallocated
/// and never grows past it.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    capacity: usize,
    elements: Vec<T>,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        BoundedStack { capacity, elements: Vec::with_capacity(capacity) }
    }

    /// Pushes `item` on top of the stack.
    ///
    /// # Returns
    /// `Err(StackFull)` carrying `item` if the stack already holds `capacity` items.
    pub fn push(&mut self, item: T) -> Result<(), StackFull<T>> {
        if self.is_full() {
            return Err(StackFull { capacity: self.capacity, item });
        }

        self.elements.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.elements.last_mut()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates the occupants from bottom to top without modifying the stack.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}
