/*! Root-list maintenance: the findable/meldable orderings and the
operations that convert between them.

The root list is a singly-linked chain of roots threaded through each
[`Node`]'s `next` field. It carries one of two disciplines at a time:

- **findable** (keys strictly increase from the head, so the head is
  always the minimum - what `find_min`/`delete_min` need)
- **meldable** (ranks strictly increase from the head - what `insert`/
  `meld` need to find where a same-rank root lives)

`rank_swap`/`key_swap` convert one step at the head. `reorder`,
`meldable_insert`, and `meldable_meld` are naturally recursive list walks,
written here as loops instead so a long root list can't blow the native
stack: there's no reason to pay for a stack frame per root when a
`Vec`-backed loop says the same thing.
*/

use super::node::Node;
use super::tree_ops::link;

/// Swaps the head with its successor if the successor has a smaller rank.
/// A missing successor reads as infinite rank (never smaller), so this is
/// a no-op on a singleton or empty list.
pub(crate) fn rank_swap<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let should_swap = matches!(&h.next, Some(n) if n.rank < h.rank);
    if should_swap {
        let mut x = h.next.take().expect("checked above");
        h.next = x.next.take();
        x.next = Some(h);
        x
    } else {
        h
    }
}

pub(crate) fn rank_swap_opt<K>(h: Option<Box<Node<K>>>) -> Option<Box<Node<K>>> {
    h.map(rank_swap)
}

/// Swaps the head with its successor if the successor has a smaller key.
pub(crate) fn key_swap<K: Ord>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let should_swap = matches!(&h.next, Some(n) if n.key < h.key);
    if should_swap {
        let mut x = h.next.take().expect("checked above");
        h.next = x.next.take();
        x.next = Some(h);
        x
    } else {
        h
    }
}

pub(crate) fn key_swap_opt<K: Ord>(h: Option<Box<Node<K>>>) -> Option<Box<Node<K>>> {
    h.map(key_swap)
}

/// Restores findable order after a delete-min altered the rank-`k` head.
///
/// Recursive definition: while `H.next.rank < k`, `rank_swap` at this level
/// and recurse into the (possibly new) tail; then `key_swap` on the way
/// back up. Implemented iteratively: descend collecting the chain of heads
/// that still need a `rank_swap`, then unwind applying `key_swap` bottom-up.
pub(crate) fn reorder<K: Ord>(mut h: Box<Node<K>>, k: usize) -> Box<Node<K>> {
    let mut pending: Vec<Box<Node<K>>> = Vec::new();
    loop {
        let should_descend = matches!(&h.next, Some(n) if n.rank < k);
        if !should_descend {
            break;
        }
        h = rank_swap(h);
        let next = h.next.take().expect("checked above via should_descend");
        pending.push(h);
        h = next;
    }
    let mut cur = key_swap(h);
    while let Some(mut parent) = pending.pop() {
        parent.next = Some(cur);
        cur = key_swap(parent);
    }
    cur
}

pub(crate) fn reorder_opt<K: Ord>(h: Option<Box<Node<K>>>, k: usize) -> Option<Box<Node<K>>> {
    h.map(|h| reorder(h, k))
}

/// Inserts root `x` into meldable list `h`, linking equal-rank roots as it
/// goes. The recursive definition is tail-recursive, so this loop form is
/// a direct, structure-preserving translation of it.
pub(crate) fn meldable_insert<K: Ord + Clone>(
    mut x: Box<Node<K>>,
    mut h: Option<Box<Node<K>>>,
    t: usize,
) -> Box<Node<K>> {
    loop {
        match h {
            None => {
                x.next = None;
                return x;
            }
            Some(head) => {
                if x.rank < head.rank {
                    x.next = Some(key_swap(head));
                    return x;
                }
                let mut head = head;
                let head_next = head.next.take();
                x = link(x, head, t);
                h = rank_swap_opt(head_next);
            }
        }
    }
}

/// Merges two meldable lists by smallest-rank-first, linking on collision.
///
/// The recursive definition wraps its recursive call in a call to
/// `meldable_insert`, so it isn't tail-recursive, and this iterative form
/// needs an explicit stack: descend picking the lower-rank head at each
/// level, then unwind applying `meldable_insert` bottom-up.
pub(crate) fn meldable_meld<K: Ord + Clone>(
    mut a: Option<Box<Node<K>>>,
    mut b: Option<Box<Node<K>>>,
    t: usize,
) -> Option<Box<Node<K>>> {
    let mut pending: Vec<Box<Node<K>>> = Vec::new();
    let base = loop {
        match (a, b) {
            (None, None) => break None,
            (Some(x), None) => break Some(x),
            (None, Some(y)) => break Some(y),
            (Some(x), Some(y)) => {
                let (mut lo, hi) = if x.rank > y.rank { (y, x) } else { (x, y) };
                let lo_next = lo.next.take();
                pending.push(lo);
                a = rank_swap_opt(lo_next);
                b = Some(hi);
            }
        }
    };
    let mut result = base;
    while let Some(lo) = pending.pop() {
        result = Some(meldable_insert(lo, result, t));
    }
    result
}
