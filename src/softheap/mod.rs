/*! A soft heap: a mergeable priority queue that trades a bounded amount of
key corruption for amortized O(1) insert and O(log(1/ε)) delete-min.

This module wires together the four leaf-level pieces built in its
submodules ([`item_ring`], [`node`], [`tree_ops`], and [`root_list`])
behind the public [`SoftHeap`] façade. Everything below this type is
`pub(crate)`: callers only ever see a heap of items and its `Result`-typed
operations, never a raw `Node`.
*/

mod item_ring;
mod node;
mod root_list;
mod tree_ops;

use node::Node;
use root_list::{key_swap, key_swap_opt, meldable_insert, meldable_meld, rank_swap_opt, reorder};
use tree_ops::defill;

use crate::error::SoftHeapError;

/// A mergeable priority queue with bounded key corruption.
///
/// `eps == 0.0` degenerates to an exact min-heap (every `find_min`/
/// `delete_min` pair returns items in strictly sorted order). `eps > 0.0`
/// trades some of that ordering guarantee for a lower amortized cost per
/// delete-min, bounded by the threshold `T = ⌈log2(3/eps)⌉`.
#[derive(Debug)]
pub struct SoftHeap<K> {
    root: Option<Box<Node<K>>>,
    eps: f64,
    t: usize,
    len: usize,
}

impl<K: Ord + Clone> SoftHeap<K> {
    /// Builds an empty heap with corruption parameter `eps`.
    ///
    /// `eps` must lie in `[0, 1)`; anything else is `SoftHeapError::InvalidEps`.
    pub fn new(eps: f64) -> Result<Self, SoftHeapError> {
        if !(0.0..1.0).contains(&eps) {
            return Err(SoftHeapError::InvalidEps(eps));
        }
        let t = threshold(eps);
        Ok(SoftHeap { root: None, eps, t, len: 0 })
    }

    /// The corruption parameter this heap was built with.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts one item. `meldable_insert(singleton, rank_swap(root))` then
    /// `key_swap` back to findable order, per the façade's constructor rule.
    pub fn insert(&mut self, key: K) {
        let x = Node::singleton(key);
        let meldable_root = rank_swap_opt(self.root.take());
        let merged = meldable_insert(x, meldable_root, self.t);
        self.root = Some(key_swap(merged));
        self.len += 1;
    }

    /// The next item `delete_min` would remove, without removing it.
    pub fn find_min(&self) -> Result<&K, SoftHeapError> {
        let head = self.root.as_ref().ok_or(SoftHeapError::EmptyHeap)?;
        match head.items.peek_first() {
            Some(k) => Ok(k),
            None => unreachable!("findable head carries no items while heap reports non-empty"),
        }
    }

    /// Removes one item from the min-key root. Wires an item out of the
    /// head's ring if more than one remains there; otherwise the root's
    /// subtree is refilled (or the whole tree discarded, if it was a leaf)
    /// and the list is reordered.
    pub fn delete_min(&mut self) -> Result<(), SoftHeapError> {
        let mut head = self.root.take().ok_or(SoftHeapError::EmptyHeap)?;
        if head.items.len() > 1 {
            head.items.wire_out_first();
            self.root = Some(head);
        } else {
            head.items.wire_out_first();
            let k = head.rank;
            if head.is_leaf() {
                self.root = head.next.take();
            } else {
                defill(&mut head, self.t);
                self.root = Some(reorder(head, k));
            }
        }
        self.len -= 1;
        Ok(())
    }

    /// Absorbs every item of `other` into `self`. `other` is left empty
    /// (its root list is taken via `mem::take`-equivalent ownership
    /// transfer) and must not be treated as holding any items afterward.
    pub fn meld(&mut self, other: &mut Self) {
        let a = rank_swap_opt(self.root.take());
        let b = rank_swap_opt(other.root.take());
        let merged = meldable_meld(a, b, self.t);
        self.root = key_swap_opt(merged);
        self.len += other.len;
        other.len = 0;
    }
}

fn threshold(eps: f64) -> usize {
    if eps == 0.0 {
        usize::MAX
    } else {
        (3.0 / eps).log2().ceil() as usize
    }
}

/// Sorts `items` by repeatedly inserting into a heap of corruption `eps`
/// and draining it via `find_min`/`delete_min`. At `eps == 0` this is an
/// (inefficient, but invariant-exercising) exact sort; at `eps > 0` the
/// output is a permutation of the input with bounded disorder.
pub fn sort<K: Ord + Clone>(eps: f64, items: impl IntoIterator<Item = K>) -> Result<Vec<K>, SoftHeapError> {
    let mut heap = SoftHeap::new(eps)?;
    let mut n = 0usize;
    for item in items {
        heap.insert(item);
        n += 1;
    }
    let mut out = Vec::with_capacity(n);
    while !heap.is_empty() {
        out.push(heap.find_min()?.clone());
        heap.delete_min()?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_eps_outside_the_unit_interval() {
        assert_eq!(SoftHeap::<i32>::new(-0.1).unwrap_err(), SoftHeapError::InvalidEps(-0.1));
        assert_eq!(SoftHeap::<i32>::new(1.0).unwrap_err(), SoftHeapError::InvalidEps(1.0));
    }

    #[test]
    fn zero_eps_degenerates_to_exact_min_heap() {
        let mut h = SoftHeap::new(0.0).unwrap();
        for k in [5, 1, 4, 2, 3] {
            h.insert(k);
        }
        let mut out = Vec::new();
        while !h.is_empty() {
            out.push(*h.find_min().unwrap());
            h.delete_min().unwrap();
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_heap_reports_errors_not_panics() {
        let h = SoftHeap::<i32>::new(0.1).unwrap();
        assert_eq!(h.find_min().unwrap_err(), SoftHeapError::EmptyHeap);
        let mut h = h;
        assert_eq!(h.delete_min().unwrap_err(), SoftHeapError::EmptyHeap);
    }

    #[test]
    fn len_tracks_inserts_and_deletes() {
        let mut h = SoftHeap::new(0.0).unwrap();
        assert_eq!(h.len(), 0);
        h.insert(1);
        h.insert(2);
        assert_eq!(h.len(), 2);
        h.delete_min().unwrap();
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn meld_conserves_the_combined_multiset() {
        let mut a = SoftHeap::new(0.0).unwrap();
        for k in 0..100 {
            a.insert(k);
        }
        let mut b = SoftHeap::new(0.0).unwrap();
        for k in 100..300 {
            b.insert(k);
        }
        a.meld(&mut b);
        assert!(b.is_empty());
        assert_eq!(a.len(), 300);
        let mut out = Vec::new();
        while !a.is_empty() {
            out.push(*a.find_min().unwrap());
            a.delete_min().unwrap();
        }
        assert_eq!(out, (0..300).collect::<Vec<_>>());
    }

    #[test]
    fn sort_at_zero_eps_is_exact() {
        let perm = vec![7, 3, 9, 1, 0, 5, 8, 2, 6, 4];
        let sorted = sort(0.0, perm).unwrap();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn sort_at_nonzero_eps_bounds_disorder() {
        let n = 30;
        let perm: Vec<i32> = (0..n).collect();
        let out = sort(0.5, perm).unwrap();
        assert_eq!(out.len(), n as usize);
        let mut seen: Vec<i32> = out.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..n).collect::<Vec<_>>());
        let inversions = out.windows(2).filter(|w| w[0] > w[1]).count();
        assert!(inversions <= (0.5 * n as f64) as usize);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn count_conservation(xs: Vec<i32>) -> bool {
        let mut h = SoftHeap::new(0.2).unwrap();
        let n = xs.len();
        for x in xs {
            h.insert(x);
        }
        let deletes = n / 2;
        for _ in 0..deletes {
            if h.delete_min().is_err() {
                break;
            }
        }
        h.len() == n - deletes.min(n)
    }

    #[quickcheck]
    fn exactness_at_zero_eps(xs: Vec<i32>) -> bool {
        let mut h = SoftHeap::new(0.0).unwrap();
        for x in &xs {
            h.insert(*x);
        }
        let mut out = Vec::new();
        while !h.is_empty() {
            out.push(*h.find_min().unwrap());
            h.delete_min().unwrap();
        }
        let mut expected = xs;
        expected.sort();
        out == expected
    }

    #[quickcheck]
    fn working_key_dominates_original_key(xs: Vec<i32>) -> bool {
        // every item returned by find_min/delete_min was at most the
        // current head's working key at the moment of extraction
        let mut h = SoftHeap::new(0.3).unwrap();
        for x in &xs {
            h.insert(*x);
        }
        while !h.is_empty() {
            let item = *h.find_min().unwrap();
            let working_key = h.root.as_ref().unwrap().key;
            if item > working_key {
                return false;
            }
            h.delete_min().unwrap();
        }
        true
    }

    #[quickcheck]
    fn meld_conserves_the_combined_multiset(a: Vec<i32>, b: Vec<i32>) -> bool {
        let mut ha = SoftHeap::new(0.0).unwrap();
        for x in &a {
            ha.insert(*x);
        }
        let mut hb = SoftHeap::new(0.0).unwrap();
        for x in &b {
            hb.insert(*x);
        }
        ha.meld(&mut hb);
        let mut merged = Vec::new();
        while !ha.is_empty() {
            merged.push(*ha.find_min().unwrap());
            ha.delete_min().unwrap();
        }
        let mut expected: Vec<i32> = a.into_iter().chain(b).collect();
        expected.sort();
        merged == expected
    }
}
