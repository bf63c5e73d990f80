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


//! # Strongly Typed Indices
//!
//! Phantom-typed wrappers around `usize`. `TypedIndex<T>` carries a tag type
//! `T: TypedIndexTag` that names the index space at the type level while
//! compiling down to a transparent `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use arbor_core::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone)]
//! struct NodeTag;
//! impl TypedIndexTag for NodeTag { const NAME: &'static str = "NodeIndex"; }
//!
//! type NodeIndex = TypedIndex<NodeTag>;
//! let n = NodeIndex::new(3);
//! assert_eq!(n.get(), 3);
//! assert_eq!(format!("{}", n), "NodeIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::index::{TypedIndex, TypedIndexTag};
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MyTag;
///
/// impl TypedIndexTag for MyTag {
///    const NAME: &'static str = "MyIndex";
/// }
///
/// type MyIndex = TypedIndex<MyTag>;
///
/// let index = MyIndex::new(5);
/// assert_eq!(index.get(), 5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns an iterator over the first `len` indices of this index space,
    /// in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arbor_core::index::{TypedIndex, TypedIndexTag};
    /// # #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// # struct MyTag;
    /// # impl TypedIndexTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// let all: Vec<usize> = TypedIndex::<MyTag>::range(3).map(|i| i.get()).collect();
    /// assert_eq!(all, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn range(len: usize) -> IndexRange<T> {
        IndexRange {
            inner: 0..len,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

/// Ascending iterator over `TypedIndex<T>` values, created by [`TypedIndex::range`].
#[derive(Clone, Debug)]
pub struct IndexRange<T> {
    inner: std::ops::Range<usize>,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Iterator for IndexRange<T> {
    type Item = TypedIndex<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(TypedIndex::new)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IndexRange<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(TypedIndex::new)
    }
}

impl<T> ExactSizeIterator for IndexRange<T> {}

impl<T> std::iter::FusedIterator for IndexRange<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIndexTag for TestTag {
        const NAME: &'static str = "TestIdx";
    }

    type TestIndex = TypedIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let idx = TestIndex::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions() {
        let idx: TestIndex = 42.into();
        assert_eq!(idx.get(), 42);

        let val: usize = idx.into();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let idx = TestIndex::new(7);
        assert_eq!(format!("{}", idx), "TestIdx(7)");
        assert_eq!(format!("{:?}", idx), "TestIdx(7)");
    }

    #[test]
    fn test_range_is_ascending_and_exact() {
        let range = TestIndex::range(4);
        assert_eq!(range.len(), 4);
        let collected: Vec<TestIndex> = range.collect();
        assert_eq!(
            collected,
            vec![
                TestIndex::new(0),
                TestIndex::new(1),
                TestIndex::new(2),
                TestIndex::new(3)
            ]
        );
    }

    #[test]
    fn test_range_reversed_and_empty() {
        let rev: Vec<usize> = TestIndex::range(3).rev().map(|i| i.get()).collect();
        assert_eq!(rev, vec![2, 1, 0]);
        assert_eq!(TestIndex::range(0).count(), 0);
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(TestIndex::new(1) < TestIndex::new(2));
        assert_eq!(TestIndex::new(3).max(TestIndex::new(1)), TestIndex::new(3));
    }
}
