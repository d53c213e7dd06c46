use std::collections::BTreeMap;

use super::label_data::LabelData;

pub type NodeId = usize;
pub type Tree = BTreeMap<LabelData, NodeId>;

// The root always lives at the front of the node arena
pub const ROOT: NodeId = 0;

// Where the edge coming into a node ends (inclusive).
// Every leaf starts out as `Open`, aliasing the single
// leaf end that the builder bumps once per phase, which
// is what makes Rule 1 extensions free. Internal nodes
// are created by splits and always own a `Fixed` end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
  Open,
  Fixed(usize),
}

impl EdgeEnd {
  pub fn resolve(&self, leaf_end: usize) -> usize {
    match self {
      EdgeEnd::Open => leaf_end,
      EdgeEnd::Fixed(end) => *end,
    }
  }
}

#[derive(Debug)]
pub struct Node {
  pub parent: Option<NodeId>,
  // At most 257 children (every byte plus the separator),
  // and usually only a handful, so a sorted map beats a
  // fixed 256-wide array on memory while keeping the
  // "one child per first symbol" invariant for free.
  pub children: Tree,
  // Never owning. Defaults to the root and is only
  // meaningful on internal nodes.
  pub suffix_link: NodeId,

  pub start: usize,
  pub end: EdgeEnd,

  // Set on leaves once the tree is complete: the offset
  // in the text where the suffix of this leaf starts,
  // i.e. text[suffix_index..] is the leaf's path label.
  pub suffix_index: Option<usize>,
}

impl Node {
  pub fn root() -> Node {
    Node {
      parent: None,
      children: BTreeMap::new(),
      suffix_link: ROOT,
      start: 0,
      end: EdgeEnd::Fixed(0),
      suffix_index: None,
    }
  }

  pub fn leaf(parent: NodeId, start: usize) -> Node {
    Node {
      parent: Some(parent),
      children: BTreeMap::new(),
      suffix_link: ROOT,
      start,
      end: EdgeEnd::Open,
      suffix_index: None,
    }
  }

  pub fn internal(parent: NodeId, start: usize, end: usize) -> Node {
    Node {
      parent: Some(parent),
      children: BTreeMap::new(),
      suffix_link: ROOT,
      start,
      end: EdgeEnd::Fixed(end),
      suffix_index: None,
    }
  }

  pub fn child(&self, b: &LabelData) -> Option<NodeId> {
    self.children.get(b).copied()
  }

  pub fn children(&self) -> &Tree {
    &self.children
  }

  pub fn is_root(&self) -> bool {
    self.parent.is_none()
  }

  // A node is a leaf if it has no children
  pub fn is_leaf(&self) -> bool {
    !self.is_root() && self.children.is_empty()
  }

  pub fn is_internal_node(&self) -> bool {
    !self.is_root() && !self.children.is_empty()
  }

  pub fn suffix_index(&self) -> Option<usize> {
    self.suffix_index
  }

  // Length of the incoming edge, given the current leaf end.
  // The root has no incoming edge.
  pub fn length(&self, leaf_end: usize) -> usize {
    if self.is_root() {
      return 0;
    }
    self.end.resolve(leaf_end) + 1 - self.start
  }
}
