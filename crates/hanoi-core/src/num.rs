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

//! Numeric helpers shared by the solvers.

use num_traits::{PrimInt, Unsigned};

/// Returns the number of moves needed to transfer `disks` disks, `2^disks - 1`,
/// or `None` if that value does not fit into `T`.
///
/// # Examples
///
/// ```rust
/// # use hanoi_core::num::move_count;
///
/// assert_eq!(move_count::<u64>(0), Some(0));
/// assert_eq!(move_count::<u64>(3), Some(7));
/// assert_eq!(move_count::<u8>(8), Some(255));
/// assert_eq!(move_count::<u8>(9), None);
/// ```
#[inline]
pub fn move_count<T>(disks: u32) -> Option<T>
where
    T: PrimInt + Unsigned,
{
    let bits = T::zero().count_zeros();
    match disks.cmp(&bits) {
        std::cmp::Ordering::Less => Some((T::one() << disks as usize) - T::one()),
        // 2^bits - 1 is exactly the maximum value.
        std::cmp::Ordering::Equal => Some(T::max_value()),
        std::cmp::Ordering::Greater => None,
    }
}
