//! Greedy construction of a Huffman tree from a [`FrequencyTable`].
//!
//! Starting with one leaf per symbol, the two lightest nodes are repeatedly taken out of
//! a [`MinPriorityQueue`] and joined under a new internal node whose weight is their sum.
//! The first node extracted becomes the left child (edge-bit 0), the second the right
//! child (edge-bit 1). With `k` symbols this takes exactly `k - 1` merges and yields a
//! tree with minimal weighted path length.

use crate::errors::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::heap::MinPriorityQueue;
use crate::Symbol;

/// A node of a [`HuffmanTree`], either a leaf holding a symbol or an internal node owning two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanNode<S> {
    frequency: usize,
    /// Which branch of its parent this node is. `None` for the root.
    edge_bit: Option<bool>,
    kind: NodeKind<S>,
}

/// What a [`HuffmanNode`] holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<S> {
    Leaf(S),
    /// `left` hangs off edge-bit 0, `right` off edge-bit 1
    Internal {
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    fn leaf(symbol: S, frequency: usize) -> Self {
        HuffmanNode {
            frequency,
            edge_bit: None,
            kind: NodeKind::Leaf(symbol),
        }
    }

    fn internal(mut left: HuffmanNode<S>, mut right: HuffmanNode<S>) -> Self {
        left.edge_bit = Some(false);
        right.edge_bit = Some(true);
        HuffmanNode {
            frequency: left.frequency + right.frequency,
            edge_bit: None,
            kind: NodeKind::Internal {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// For leaves the symbol count, for internal nodes the sum of both children
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn edge_bit(&self) -> Option<bool> {
        self.edge_bit
    }

    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn symbol(&self) -> Option<&S> {
        match &self.kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// `(left, right)` for internal nodes, `None` for leaves
    pub fn children(&self) -> Option<(&HuffmanNode<S>, &HuffmanNode<S>)> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// The child selected by `bit`, `None` for leaves
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode<S>> {
        self.children()
            .map(|(left, right)| if bit { right } else { left })
    }
}

/// An immutable Huffman tree. Every node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for `frequencies`.
    ///
    /// A table with a single symbol yields a tree whose root is that symbol's leaf.
    pub fn build(frequencies: &FrequencyTable<S>) -> Result<Self, HuffmanError> {
        let mut queue = MinPriorityQueue::with_capacity(frequencies.len());
        for (symbol, count) in frequencies.iter() {
            queue.insert(HuffmanNode::leaf(symbol.clone(), count), count);
        }

        let mut merges = 0;
        let root = loop {
            let first = queue.extract_min().ok_or(HuffmanError::InvalidInput)?;
            let second = match queue.extract_min() {
                Some(node) => node,
                None => break first,
            };
            let merged = HuffmanNode::internal(first, second);
            let weight = merged.frequency;
            queue.insert(merged, weight);
            merges += 1;
        };
        debug_assert_eq!(merges + 1, frequencies.len());
        vlog!(
            leaves = frequencies.len(),
            merges,
            root_frequency = root.frequency,
            "built huffman tree"
        );

        Ok(HuffmanTree { root })
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Number of leaves, which equals the number of unique symbols
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.for_each_leaf(|_, _| count += 1);
        count
    }

    /// Length of the longest root to leaf path. Zero for a single leaf tree.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        self.for_each_leaf(|_, depth| max_depth = max_depth.max(depth));
        max_depth
    }

    /// Sum over all leaves of `frequency * code length`, i.e. the number of bits needed to
    /// encode the input the tree was built from.
    ///
    /// The leaf of a single leaf tree is encoded with one bit per occurrence.
    pub fn weighted_path_length(&self) -> usize {
        let mut total = 0;
        self.for_each_leaf(|leaf, depth| total += leaf.frequency * depth.max(1));
        total
    }

    /// Visit every leaf together with its depth, left subtrees first
    pub(crate) fn for_each_leaf(&self, mut visit: impl FnMut(&HuffmanNode<S>, usize)) {
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match &node.kind {
                NodeKind::Leaf(_) => visit(node, depth),
                NodeKind::Internal { left, right } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
    }
}
