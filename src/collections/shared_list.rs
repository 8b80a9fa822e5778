//! A [singly-linked list] whose nodes can be shared between lists.
//!
//! Nodes are reference counted and immutable once linked, so two lists may be
//! built on top of the same tail. From the first shared node onwards both
//! lists walk the *same* allocations, which is what an intersection between
//! two lists means.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use std::rc::Rc;

use crate::algorithms::intersection::Strategy;
use crate::error::{Error, Result};

/// Creates a `SharedList` containing the arguments, front to back.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// let list = shared![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! shared {
    ($($elem:expr)=>*) => {{
        let shared: $crate::collections::shared_list::SharedList<_> =
            ::core::iter::FromIterator::from_iter([$($elem),*]);
        shared
    }};
}

/// Optional, shared link to the next node of a chain.
pub type Link<T> = Option<Rc<ListNode<T>>>;

/// A single node of a chain: some data and a link to its successor.
///
/// The successor is held through an [`Rc`], so any number of chains may
/// converge onto the same node.
pub struct ListNode<T> {
    data: T,
    next: Link<T>,
}

/// Identity of a [`ListNode`], derived from its address.
///
/// Two ids compare equal only if they were taken from the same node. The
/// data held by the node plays no part in the comparison. An id is only
/// meaningful while the node it came from is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl<T> ListNode<T> {
    /// Allocates a node holding `data` and linking to `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let tail = ListNode::new(2, None);
    /// let head = ListNode::new(1, Some(tail.clone()));
    ///
    /// assert!(head.next().is_some_and(|next| std::rc::Rc::ptr_eq(next, &tail)));
    /// ```
    #[inline]
    pub fn new(data: T, next: Link<T>) -> Rc<Self> {
        Rc::new(Self { data, next })
    }

    /// Returns a reference to the data held by the node.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the successor of the node, or [`None`] at the end of a chain.
    #[inline]
    pub fn next(&self) -> Option<&Rc<Self>> {
        self.next.as_ref()
    }

    /// Returns the identity of the node.
    #[inline]
    pub fn id(&self) -> NodeId {
        NodeId(ptr::from_ref(self).addr())
    }
}

impl<T> Drop for ListNode<T> {
    // Unlink iteratively so long chains do not recurse once per node. Stop at
    // the first node some other chain still holds.
    fn drop(&mut self) {
        let mut link = self.next.take();

        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("data", &self.data)
            .field("id", &self.id())
            .finish_non_exhaustive()
    }
}

/// Returns an iterator over the nodes of the chain starting at `head`.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// let list = shared![1 => 2 => 3];
///
/// assert_eq!(chain(list.head()).count(), 3);
/// assert_eq!(chain::<i32>(None).count(), 0);
/// ```
#[inline]
pub fn chain<T>(head: Option<&Rc<ListNode<T>>>) -> Nodes<'_, T> {
    Nodes { next: head }
}

/// Iterator over the nodes of a chain.
///
/// Created by [`chain`] or [`SharedList::nodes`].
pub struct Nodes<'a, T> {
    next: Option<&'a Rc<ListNode<T>>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Rc<ListNode<T>>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_ref();
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<T: fmt::Debug> fmt::Debug for Nodes<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nodes").field("next", &self.next).finish()
    }
}

/// Iterator over the data of a chain, front to back.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes.clone().map(|node| &node.data)).finish()
    }
}

/// A singly-linked list that may share its tail with other lists.
///
/// Cloning a `SharedList` is cheap: the clone points at the very same nodes.
pub struct SharedList<T> {
    /// First node of the list.
    head: Link<T>,
    /// Number of nodes reachable from `head`.
    len: usize,
}

impl<T> SharedList<T> {
    /// Creates a new, empty `SharedList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let list: SharedList<i32> = SharedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Wraps an existing chain, counting its nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, the chain is walked once to learn its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let tail = ListNode::new(3, None);
    /// let list = SharedList::from_tail(Some(ListNode::new(2, Some(tail))));
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_tail(tail: Link<T>) -> Self {
        let len = chain(tail.as_ref()).count();
        Self { head: tail, len }
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Only the new node is allocated, the rest of the
    /// chain is left untouched (and stays shared with whoever else holds it).
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let mut list = SharedList::new();
    /// list.push_front(3);
    /// list.push_front(4);
    ///
    /// assert_eq!(list.front(), Some(&4));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_front(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(ListNode::new(data, next));
        self.len += 1;
    }

    /// Detaches the first node from the list and returns it, or [`None`] if
    /// the list is empty.
    ///
    /// The returned node keeps its link to the rest of the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let mut list = shared![1 => 2];
    ///
    /// let node = list.pop_front().unwrap();
    /// assert_eq!(node.data(), &1);
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop_front(&mut self) -> Option<Rc<ListNode<T>>> {
        let head = self.head.take()?;
        self.head = head.next.clone();
        self.len -= 1;

        Some(head)
    }

    /// Returns the first node of the list, or [`None`] if it is empty.
    #[inline]
    pub fn head(&self) -> Option<&Rc<ListNode<T>>> {
        self.head.as_ref()
    }

    /// Returns a reference to the first element, or [`None`] if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(ListNode::data)
    }

    /// Returns the node at `idx`, or [`None`] if it is out of bounds.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time.
    #[inline]
    pub fn node_at(&self, idx: usize) -> Option<&Rc<ListNode<T>>> {
        self.nodes().nth(idx)
    }

    /// Returns a reference to the element at `idx`, or [`None`] if it is out
    /// of bounds.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.node_at(idx).map(|node| &node.data)
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over the nodes of the list.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        chain(self.head())
    }

    /// Returns an iterator over the elements of the list.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Builds a list made of fresh nodes holding `prefix`, followed by the
    /// nodes of `onto` starting at index `at`.
    ///
    /// The tail is shared, not copied. Grafting at `onto.len()` shares
    /// nothing and yields a list of `prefix` alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `at` is greater than the length
    /// of `onto`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let a = shared![4 => 1 => 8 => 4 => 5];
    /// let b = SharedList::graft([5, 6, 1], &a, 2)?;
    ///
    /// assert_eq!(b.iter().copied().collect::<Vec<_>>(), [5, 6, 1, 8, 4, 5]);
    /// assert!(std::rc::Rc::ptr_eq(b.node_at(3).unwrap(), a.node_at(2).unwrap()));
    /// # Ok::<(), listmatch::Error>(())
    /// ```
    pub fn graft<I>(prefix: I, onto: &Self, at: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        if at > onto.len {
            return Err(Error::IndexOutOfBounds {
                index: at,
                len: onto.len,
            });
        }

        let mut list = Self {
            head: onto.node_at(at).cloned(),
            len: onto.len - at,
        };

        let prefix: Vec<T> = prefix.into_iter().collect();
        for data in prefix.into_iter().rev() {
            list.push_front(data);
        }

        Ok(list)
    }

    /// Returns the first node shared by `self` and `other`, found with the
    /// given `strategy`.
    ///
    /// See [`Strategy::find`].
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let a = shared![1 => 9 => 1 => 2 => 4];
    /// let b = SharedList::graft([3], &a, 3)?;
    ///
    /// let node = a.intersection(&b, Strategy::Alignment).unwrap();
    /// assert_eq!(node.data(), &2);
    /// # Ok::<(), listmatch::Error>(())
    /// ```
    #[inline]
    pub fn intersection<'a>(
        &'a self,
        other: &'a Self,
        strategy: Strategy,
    ) -> Option<&'a Rc<ListNode<T>>> {
        strategy.find(self.head(), other.head())
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Nodes can only be prepended once linked.
        let items: Vec<T> = iter.into_iter().collect();

        let mut list = Self::new();
        for data in items.into_iter().rev() {
            list.push_front(data);
        }

        list
    }
}

impl<'a, T> IntoIterator for &'a SharedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
