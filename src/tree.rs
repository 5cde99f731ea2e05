//! Array-backed range query tree (segment tree).
//!
//! The tree threads an implicit binary tree through one flat buffer: slot `1`
//! is the root, and the children of slot `v` live at `2v` and `2v + 1`. Each
//! slot holds the aggregate of a contiguous sub-range `[tl, tr]` of the
//! source values. A node covering `[tl, tr]` splits at
//! `tm = tl + (tr - tl) / 2`, so its left child covers `[tl, tm]` and its
//! right child `[tm + 1, tr]`. The left side is never smaller than the right.
//!
//! Invariant: for every internal slot `v`,
//! `slots[v] == combine(slots[2v], slots[2v + 1])`, and leaf slots hold the
//! current value at their position.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `build`   | O(n) |
//! | `query`   | O(log n) |
//! | `update`  | O(log n) |
//! | `total`   | O(1) |

use std::fmt;
use std::marker::PhantomData;
use std::ops::Bound;
use std::ops::RangeBounds;

use crate::error::Error;
use crate::error::Result;
use crate::logging::log_debug;
use crate::logging::log_trace;
use crate::logging::log_warn;
use crate::op::Combine;
use crate::op::Sum;

/// A range query tree over `T`, aggregated with the operation `O`.
///
/// The tree owns its values; it is built once and never resized.
pub struct RangeQueryTree<T, O = Sum<T>> {
    len: usize,
    slots: Vec<T>,
    op: PhantomData<fn() -> O>,
}

impl<T, O> RangeQueryTree<T, O>
where
    T: Clone,
    O: Combine<Value = T>,
{
    /// Build a tree over `values`.
    ///
    /// Fails with [`Error::Empty`] if `values` is empty.
    pub fn build(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            log_warn!("rejected build from an empty sequence");
            return Err(Error::Empty);
        }

        let len = values.len();
        let mut slots = vec![O::identity(); 4 * len];
        let mut leaves = values.into_iter();
        Self::build_node(&mut slots, &mut leaves, 1, 0, len - 1);
        log_debug!(len, slots = slots.len(), "built range query tree");

        return Ok(RangeQueryTree { len, slots, op: PhantomData });
    }

    /// Build a tree from any iterator of values.
    pub fn build_from<I: IntoIterator<Item = T>>(values: I) -> Result<Self> {
        return Self::build(values.into_iter().collect());
    }

    // Leaves are reached left to right, so they consume the source in order.
    fn build_node(
        slots: &mut [T],
        leaves: &mut impl Iterator<Item = T>,
        v: usize,
        tl: usize,
        tr: usize,
    ) {
        if tl == tr {
            if let Some(value) = leaves.next() {
                slots[v] = value;
            }
            return;
        }

        let tm = tl + (tr - tl) / 2;
        Self::build_node(slots, leaves, 2 * v, tl, tm);
        Self::build_node(slots, leaves, 2 * v + 1, tm + 1, tr);
        slots[v] = O::combine(&slots[2 * v], &slots[2 * v + 1]);
    }

    /// Number of positions covered by the tree.
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Always false: empty trees cannot be built.
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// The aggregate of every value, read straight from the root.
    pub fn total(&self) -> &T {
        return &self.slots[1];
    }

    /// Aggregate of the values at positions `l..=r`.
    ///
    /// Both bounds must be below [`len`](Self::len), otherwise this fails
    /// with [`Error::OutOfRange`]. An inclusive query with `l > r` is a
    /// malformed call and fails with [`Error::InvertedRange`]; use
    /// [`range`](Self::range) to ask for a possibly empty range.
    pub fn query(&self, l: usize, r: usize) -> Result<T> {
        self.check_index(l)?;
        self.check_index(r)?;
        if l > r {
            log_warn!(l, r, "rejected inverted query");
            return Err(Error::InvertedRange { l, r });
        }

        return Ok(self.query_node(1, 0, self.len - 1, l, r));
    }

    /// Aggregate over any range expression, such as `2..5`, `..=3` or `..`.
    ///
    /// An empty range yields the identity of `O`. A start past the end fails
    /// with [`Error::OutOfRange`]. A start after the end fails with
    /// [`Error::InvertedRange`], whose `r` is the exclusive end of the range.
    pub fn range<R: RangeBounds<usize>>(&self, range: R) -> Result<T> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or(Error::OutOfRange {
                index: s,
                len: self.len,
            })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1).ok_or(Error::OutOfRange {
                index: e,
                len: self.len,
            })?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };

        if start > self.len {
            log_warn!(start, len = self.len, "rejected range starting past the end");
            return Err(Error::OutOfRange { index: start, len: self.len });
        }
        if end > self.len {
            log_warn!(end, len = self.len, "rejected range past the end");
            return Err(Error::OutOfRange { index: end - 1, len: self.len });
        }
        if start > end {
            log_warn!(start, end, "rejected inverted range");
            return Err(Error::InvertedRange { l: start, r: end });
        }
        if start == end {
            return Ok(O::identity());
        }

        return Ok(self.query_node(1, 0, self.len - 1, start, end - 1));
    }

    fn query_node(&self, v: usize, tl: usize, tr: usize, l: usize, r: usize) -> T {
        if l > r {
            return O::identity();
        }
        if l == tl && r == tr {
            return self.slots[v].clone();
        }

        let tm = tl + (tr - tl) / 2;
        let left = self.query_node(2 * v, tl, tm, l, r.min(tm));
        let right = self.query_node(2 * v + 1, tm + 1, tr, l.max(tm + 1), r);
        return O::combine(&left, &right);
    }

    /// Overwrite the value at `pos` and repair every ancestor aggregate.
    pub fn update(&mut self, pos: usize, value: T) -> Result<()> {
        self.replace(pos, value)?;
        return Ok(());
    }

    /// Like [`update`](Self::update), but returns the value that was replaced.
    pub fn replace(&mut self, pos: usize, value: T) -> Result<T> {
        self.check_index(pos)?;
        log_trace!(pos, "updating leaf");
        return Ok(self.update_node(1, 0, self.len - 1, pos, value));
    }

    fn update_node(&mut self, v: usize, tl: usize, tr: usize, pos: usize, value: T) -> T {
        if tl == tr {
            return std::mem::replace(&mut self.slots[v], value);
        }

        let tm = tl + (tr - tl) / 2;
        let old = if pos <= tm {
            self.update_node(2 * v, tl, tm, pos, value)
        } else {
            self.update_node(2 * v + 1, tm + 1, tr, pos, value)
        };
        self.slots[v] = O::combine(&self.slots[2 * v], &self.slots[2 * v + 1]);
        return old;
    }

    /// The value at `pos`, or `None` past the end.
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.len {
            return None;
        }

        let mut v = 1;
        let mut tl = 0;
        let mut tr = self.len - 1;
        while tl != tr {
            let tm = tl + (tr - tl) / 2;
            if pos <= tm {
                v = 2 * v;
                tr = tm;
            } else {
                v = 2 * v + 1;
                tl = tm + 1;
            }
        }
        return Some(&self.slots[v]);
    }

    /// The current values, in position order.
    pub fn leaves(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_leaves(1, 0, self.len - 1, &mut out);
        return out;
    }

    fn collect_leaves(&self, v: usize, tl: usize, tr: usize, out: &mut Vec<T>) {
        if tl == tr {
            out.push(self.slots[v].clone());
            return;
        }
        let tm = tl + (tr - tl) / 2;
        self.collect_leaves(2 * v, tl, tm, out);
        self.collect_leaves(2 * v + 1, tm + 1, tr, out);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            log_warn!(index, len = self.len, "rejected out of range index");
            return Err(Error::OutOfRange { index, len: self.len });
        }
        return Ok(());
    }
}

impl<T, O> TryFrom<Vec<T>> for RangeQueryTree<T, O>
where
    T: Clone,
    O: Combine<Value = T>,
{
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        return Self::build(values);
    }
}

impl<T: Clone, O> Clone for RangeQueryTree<T, O> {
    fn clone(&self) -> Self {
        return RangeQueryTree {
            len: self.len,
            slots: self.slots.clone(),
            op: PhantomData,
        };
    }
}

impl<T, O> fmt::Debug for RangeQueryTree<T, O>
where
    T: Clone + fmt::Debug,
    O: Combine<Value = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("RangeQueryTree")
            .field("len", &self.len)
            .field("leaves", &self.leaves())
            .finish();
    }
}
