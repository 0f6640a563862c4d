/*! The soft-heap tree node.

A plain record with no logic beyond a couple of accessors (the interesting
behavior lives in [`crate::softheap::tree_ops`] and
[`crate::softheap::root_list`], which take `&mut Node`/`Box<Node>` and
rearrange these fields). A missing child or missing next-root is plain
`None`: absence needs no fields of its own and can't be mutated by accident.
*/

use super::item_ring::ItemRing;

#[derive(Debug)]
pub(crate) struct Node<K> {
    /// Items co-located at this node, all corrupted up to `key`.
    pub(crate) items: ItemRing<K>,
    /// The node's working key: the max original key among `items`, once
    /// items are present (the corruption invariant: every item here reads
    /// back at a key no smaller than its own original key).
    pub(crate) key: K,
    /// Fixed at creation; never decreases even as the subtree below drains.
    pub(crate) rank: usize,
    pub(crate) left: Option<Box<Node<K>>>,
    pub(crate) right: Option<Box<Node<K>>>,
    /// Next root in the heap's root list. Only meaningful while this node
    /// is itself a root; internal nodes never read or write it.
    pub(crate) next: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    /// A brand-new rank-0 root holding exactly one item.
    pub(crate) fn singleton(key: K) -> Box<Node<K>>
    where
        K: Clone,
    {
        Box::new(Node {
            items: ItemRing::singleton(key.clone()),
            key,
            rank: 0,
            left: None,
            right: None,
            next: None,
        })
    }

    /// A node is a leaf iff it has no left child (by invariant, no right
    /// child either).
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none()
    }
}
