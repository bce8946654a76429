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

//! Disks, tower labels, and labeled towers.
//!
//! A `Tower` is a `BoundedStack<Disk>` paired with a fixed `Label`. Disks are
//! identified purely by their size, so a well-formed tower holds strictly
//! decreasing sizes from bottom to top. The stack itself does not know about
//! that ordering; `Tower` checks it in debug builds whenever a disk is placed.

use crate::{
    sink::MoveSink,
    stack::{BoundedStack, StackError},
};

/// A puzzle disk, identified by its size. Sizes start at 1 (the smallest).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Disk(u32);

impl Disk {
    /// Creates a disk of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[inline]
    pub fn new(size: u32) -> Self {
        assert!(size > 0, "called `Disk::new` with size 0");
        Self(size)
    }

    /// Returns the size of the disk.
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<Disk> for u32 {
    #[inline(always)]
    fn from(disk: Disk) -> Self {
        disk.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one of the three tower positions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    /// All labels in their natural order.
    pub const ALL: [Label; 3] = [Label::A, Label::B, Label::C];

    /// Returns the single-character form used in move logs.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A labeled, bounded stack of disks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tower {
    label: Label,
    disks: BoundedStack<Disk>,
}

impl Tower {
    /// Creates an empty tower that can hold up to `capacity` disks.
    #[inline]
    pub fn new(label: Label, capacity: usize) -> Self {
        Self {
            label,
            disks: BoundedStack::new(capacity),
        }
    }

    /// Creates a tower of capacity `count` holding disks `count..=1`,
    /// largest at the bottom.
    pub fn with_disks(label: Label, count: u32) -> Result<Self, StackError> {
        let mut tower = Self::new(label, count as usize);
        for size in (1..=count).rev() {
            tower.push(Disk::new(size))?;
        }
        Ok(tower)
    }

    /// Returns the label of this tower.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the number of disks on the tower.
    #[inline]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Returns the maximum number of disks the tower can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.disks.capacity()
    }

    /// Returns `true` if the tower holds no disks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Returns the topmost disk.
    #[inline]
    pub fn top(&self) -> Result<Disk, StackError> {
        self.disks.peek().copied()
    }

    /// Places a disk on top of the tower.
    #[inline]
    pub fn push(&mut self, disk: Disk) -> Result<(), StackError> {
        debug_assert!(
            self.disks.peek().ok().is_none_or(|&top| top > disk),
            "placed disk {} on smaller disk {} at tower {}",
            disk,
            self.disks.peek().map_or(0, |d| d.get()),
            self.label
        );
        self.disks.push(disk)
    }

    /// Removes the topmost disk.
    #[inline]
    pub fn pop(&mut self) -> Result<Disk, StackError> {
        self.disks.pop()
    }

    /// Moves the topmost disk of `self` onto `destination`, reporting the move
    /// to `sink` between the pop and the push. Returns the moved disk.
    pub fn move_top_to<S>(
        &mut self,
        destination: &mut Tower,
        sink: &mut S,
    ) -> Result<Disk, StackError>
    where
        S: MoveSink + ?Sized,
    {
        let disk = self.pop()?;
        sink.record_move(disk, self.label, destination.label);
        destination.push(disk)?;
        Ok(disk)
    }

    /// Removes every disk from the tower.
    #[inline]
    pub fn clear(&mut self) {
        self.disks.clear();
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tower({}, disks: {}/{})",
            self.label,
            self.disks.len(),
            self.disks.capacity()
        )
    }
}
