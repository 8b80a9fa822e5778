//! [Intersection] of two singly-linked chains: the first node both chains
//! reach.
//!
//! Convergence is decided by node *identity*. Two nodes holding equal data
//! are still different nodes. Since every node has a single successor, two
//! chains that meet never part again, and the intersection is a shared
//! suffix.
//!
//! [Intersection]: https://en.wikipedia.org/wiki/Linked_list

use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::collections::shared_list::{ListNode, NodeId, chain};
use crate::error::Error;

/// Way of searching for the intersection of two chains.
///
/// Both strategies return the same node for every input; they differ only in
/// the memory they use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Remember every node of one chain in a set, then look up the other.
    /// See [`intersection_by_membership`].
    Membership,
    /// Skip the length difference, then walk both chains in lock-step.
    /// See [`intersection_by_alignment`].
    #[default]
    Alignment,
}

impl Strategy {
    /// Every available strategy.
    pub const ALL: [Strategy; 2] = [Strategy::Membership, Strategy::Alignment];

    /// Returns the first node shared by the chains starting at `a` and `b`,
    /// or [`None`] if they never meet.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmatch::prelude::*;
    ///
    /// let a = shared![4 => 1 => 8 => 4 => 5];
    /// let b = SharedList::graft([5, 6, 1], &a, 2)?;
    ///
    /// for strategy in Strategy::ALL {
    ///     let node = strategy.find(a.head(), b.head()).unwrap();
    ///     assert!(std::rc::Rc::ptr_eq(node, a.node_at(2).unwrap()));
    /// }
    /// # Ok::<(), listmatch::Error>(())
    /// ```
    pub fn find<'a, T>(
        self,
        a: Option<&'a Rc<ListNode<T>>>,
        b: Option<&'a Rc<ListNode<T>>>,
    ) -> Option<&'a Rc<ListNode<T>>> {
        match self {
            Strategy::Membership => intersection_by_membership(a, b),
            Strategy::Alignment => intersection_by_alignment(a, b),
        }
    }

    /// Returns the lowercase name of the strategy.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strategy::Membership => "membership",
            Strategy::Alignment => "alignment",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "membership" | "hash" | "set" => Ok(Strategy::Membership),
            "alignment" | "align" | "length" => Ok(Strategy::Alignment),
            _ => Err(Error::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Returns the first node shared by the chains starting at `a` and `b`, using
/// the default [`Strategy`].
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// let a = shared![2 => 6 => 4];
/// let b = shared![1 => 5];
///
/// assert!(find_intersection(a.head(), b.head()).is_none());
/// assert!(find_intersection(a.head(), None).is_none());
/// ```
#[inline]
pub fn find_intersection<'a, T>(
    a: Option<&'a Rc<ListNode<T>>>,
    b: Option<&'a Rc<ListNode<T>>>,
) -> Option<&'a Rc<ListNode<T>>> {
    Strategy::default().find(a, b)
}

/// Finds the intersection by recording the identity of every node of `b`,
/// then returning the first node of `a` that was recorded.
///
/// # Time Complexity
///
/// Takes *O*(*n* + *m*) time and *O*(*m*) extra space, where `m` is the
/// length of `b`. Every node of `b` is hashed once and every node of `a` is
/// looked up at most once.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// let a = shared![1 => 2 => 3];
/// let b = SharedList::graft([9], &a, 1)?;
///
/// let node = intersection_by_membership(a.head(), b.head()).unwrap();
/// assert_eq!(node.data(), &2);
/// # Ok::<(), listmatch::Error>(())
/// ```
pub fn intersection_by_membership<'a, T>(
    a: Option<&'a Rc<ListNode<T>>>,
    b: Option<&'a Rc<ListNode<T>>>,
) -> Option<&'a Rc<ListNode<T>>> {
    if a.is_none() || b.is_none() {
        return None;
    }

    let seen: HashSet<NodeId> = chain(b).map(|node| node.id()).collect();
    trace!(len_b = seen.len(), "recorded node identities");

    let found = chain(a).find(|node| seen.contains(&node.id()));
    if let Some(node) = found {
        debug!(node = ?node.id(), "chains intersect");
    }

    found
}

/// Finds the intersection by skipping the head of the longer chain until
/// both have the same number of nodes left, then stepping through both
/// together until they land on the same node.
///
/// # Time Complexity
///
/// Takes *O*(*n* + *m*) time and *O*(1) extra space. Each chain is walked
/// once to count it and at most once more to compare.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// let a = shared![1 => 2 => 3];
///
/// // A list intersects itself at its head.
/// let node = intersection_by_alignment(a.head(), a.head()).unwrap();
/// assert!(std::rc::Rc::ptr_eq(node, a.head().unwrap()));
/// ```
pub fn intersection_by_alignment<'a, T>(
    a: Option<&'a Rc<ListNode<T>>>,
    b: Option<&'a Rc<ListNode<T>>>,
) -> Option<&'a Rc<ListNode<T>>> {
    let (Some(a), Some(b)) = (a, b) else {
        return None;
    };

    let len_a = chain(Some(a)).count();
    let len_b = chain(Some(b)).count();

    let (long, short, diff) = if len_a > len_b {
        (a, b, len_a - len_b)
    } else {
        (b, a, len_b - len_a)
    };
    trace!(len_a, len_b, skip = diff, "aligned chains");

    // Both iterators now have the same number of nodes left, so a shared
    // suffix starts at the same step in each.
    let found = chain(Some(long))
        .skip(diff)
        .zip(chain(Some(short)))
        .find(|&(l, s)| Rc::ptr_eq(l, s))
        .map(|(node, _)| node);

    if let Some(node) = found {
        debug!(node = ?node.id(), "chains intersect");
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::shared_list::SharedList;
    use crate::shared;

    fn both<'a, T>(
        a: &'a SharedList<T>,
        b: &'a SharedList<T>,
    ) -> [Option<&'a Rc<ListNode<T>>>; 2] {
        Strategy::ALL.map(|strategy| a.intersection(b, strategy))
    }

    #[test]
    fn test_shared_tail() {
        let a = shared![4 => 1 => 8 => 4 => 5];
        let b = SharedList::graft([5, 6, 1], &a, 2).unwrap();
        let expected = a.node_at(2).unwrap();

        for found in both(&a, &b) {
            assert!(Rc::ptr_eq(found.unwrap(), expected));
        }
    }

    #[test]
    fn test_equal_values_are_not_an_intersection() {
        let a = shared![1 => 2 => 3];
        let b = shared![1 => 2 => 3];

        assert!(both(&a, &b).iter().all(Option::is_none));
    }

    #[test]
    fn test_identical_heads() {
        let a = shared![1 => 2];
        let b = a.clone();

        for found in both(&a, &b) {
            assert!(Rc::ptr_eq(found.unwrap(), a.head().unwrap()));
        }
    }

    #[test]
    fn test_empty_inputs() {
        let a = shared![1 => 2];
        let empty = SharedList::new();

        assert!(both(&a, &empty).iter().all(Option::is_none));
        assert!(both(&empty, &a).iter().all(Option::is_none));
        assert!(both(&empty, &empty).iter().all(Option::is_none));
    }

    #[test]
    fn test_suffix_of_other() {
        let a = shared![1 => 2 => 3 => 4];
        let b = SharedList::from_tail(a.node_at(2).cloned());
        let expected = a.node_at(2).unwrap();

        for found in both(&a, &b).into_iter().chain(both(&b, &a)) {
            assert!(Rc::ptr_eq(found.unwrap(), expected));
        }
    }

    #[test]
    fn test_meet_at_last_node() {
        let a = shared![1 => 2 => 3];
        let b = SharedList::graft([7, 7, 7, 7, 7], &a, 2).unwrap();
        let expected = a.node_at(2).unwrap();

        for found in both(&a, &b) {
            assert!(Rc::ptr_eq(found.unwrap(), expected));
        }
    }

    #[test]
    fn test_find_intersection_uses_default() {
        let a = shared![1 => 2 => 3];
        let b = SharedList::graft([0], &a, 1).unwrap();

        let found = find_intersection(a.head(), b.head()).unwrap();
        assert!(Rc::ptr_eq(found, a.node_at(1).unwrap()));
        assert_eq!(Strategy::default(), Strategy::Alignment);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!("membership".parse::<Strategy>(), Ok(Strategy::Membership));
        assert_eq!(" Hash ".parse::<Strategy>(), Ok(Strategy::Membership));
        assert_eq!("ALIGN".parse::<Strategy>(), Ok(Strategy::Alignment));
        assert_eq!(
            "two-pointer".parse::<Strategy>(),
            Err(Error::UnknownStrategy("two-pointer".to_owned()))
        );

        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}
