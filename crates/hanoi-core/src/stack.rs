// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Fixed-capacity LIFO storage.
//!
//! `BoundedStack<T>` reserves room for exactly `capacity` elements when it is
//! created and never grows past that. Exceeding the capacity or removing from
//! an empty stack is reported through `StackError` instead of reallocating or
//! panicking, which lets callers decide whether the condition is a user error
//! or a broken invariant.
//!
//! The surface is intentionally small: push, pop, peek, emptiness, and clear.
//! There is no iteration or indexed access.

use thiserror::Error;

/// Failure conditions of a [`BoundedStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StackError {
    /// A push was attempted while the stack already held `capacity` elements.
    #[error("stack overflow: all {capacity} slots are occupied")]
    Overflow {
        /// The fixed capacity of the stack that rejected the push.
        capacity: usize,
    },
    /// A pop or peek was attempted on an empty stack.
    #[error("stack underflow: the stack is empty")]
    Underflow,
}

/// A last-in-first-out container with a capacity fixed at construction.
///
/// The top element, if any, is the most recently pushed one. The number of
/// occupied slots always satisfies `0 <= len <= capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedStack<T> {
    /// Occupied slots, bottom first. Never longer than `capacity`.
    entries: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack with room for exactly `capacity` elements.
    ///
    /// A capacity of zero is valid; every push on such a stack overflows.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of elements the stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Places `item` on top of the stack.
    ///
    /// Fails with [`StackError::Overflow`] if the stack is full; the stack is
    /// left untouched in that case.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.entries.push(item);
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`StackError::Underflow`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.entries.pop().ok_or(StackError::Underflow)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// Fails with [`StackError::Underflow`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, StackError> {
        self.entries.last().ok_or(StackError::Underflow)
    }

    /// Discards all elements. The capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> std::fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundedStack(len: {}, capacity: {})",
            self.entries.len(),
            self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let s = BoundedStack::<u32>::new(4);
        assert!(s.is_empty());
        assert!(!s.is_full());
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 4);
    }

    #[test]
    fn test_push_up_to_capacity_then_overflow() {
        let mut s = BoundedStack::new(3);
        for i in 0..3 {
            assert!(s.push(i).is_ok());
        }
        assert!(s.is_full());
        assert_eq!(s.push(99), Err(StackError::Overflow { capacity: 3 }));

        // Rejected push leaves the contents alone
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Ok(&2));
    }

    #[test]
    fn test_zero_capacity_always_overflows() {
        let mut s = BoundedStack::new(0);
        assert!(s.is_empty());
        assert!(s.is_full());
        assert_eq!(s.push('x'), Err(StackError::Overflow { capacity: 0 }));
    }

    #[test]
    fn test_pop_and_peek_on_empty_underflow() {
        let mut s = BoundedStack::<i64>::new(2);
        assert_eq!(s.pop(), Err(StackError::Underflow));
        assert_eq!(s.peek(), Err(StackError::Underflow));
    }

    #[test]
    fn test_push_then_pop_returns_same_value() {
        let mut s = BoundedStack::new(1);
        s.push(42u32).unwrap();
        assert_eq!(s.pop(), Ok(42));
        assert!(s.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut s = BoundedStack::new(5);
        for i in [5u32, 4, 3, 2, 1] {
            s.push(i).unwrap();
        }
        assert_eq!(s.peek(), Ok(&1));
        let drained: Vec<u32> = std::iter::from_fn(|| s.pop().ok()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut s = BoundedStack::new(2);
        s.push("bottom").unwrap();
        s.push("top").unwrap();
        assert_eq!(s.peek(), Ok(&"top"));
        assert_eq!(s.peek(), Ok(&"top"));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_clear_resets_count_but_keeps_capacity() {
        let mut s = BoundedStack::new(2);
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 2);

        // Full capacity is available again
        s.push(3).unwrap();
        s.push(4).unwrap();
        assert_eq!(s.push(5), Err(StackError::Overflow { capacity: 2 }));
    }

    #[test]
    fn test_display_and_error_messages() {
        let mut s = BoundedStack::new(3);
        s.push(1).unwrap();
        assert_eq!(format!("{}", s), "BoundedStack(len: 1, capacity: 3)");

        let overflow = StackError::Overflow { capacity: 3 }.to_string();
        assert!(overflow.contains("overflow"));
        assert!(overflow.contains('3'));
        assert!(StackError::Underflow.to_string().contains("underflow"));
    }
}
