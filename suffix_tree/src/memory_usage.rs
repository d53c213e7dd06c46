use std::mem;

use crate::types::label_data::LabelData;
use crate::types::node::{Node, NodeId};

// Heap footprint of a built tree, computed from the sizes of the
// containers rather than measured from the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
  nodes_size: usize,
  children_size: usize,
  text_size: usize,
}

impl MemoryUsage {
  pub fn new(nodes_size: usize, children_size: usize, text_size: usize) -> Self {
    MemoryUsage {
      nodes_size,
      children_size,
      text_size,
    }
  }

  pub(crate) fn of(nodes: &Vec<Node>, string: &Vec<LabelData>, raw_string: &Vec<u8>) -> Self {
    let nodes_size = single_list(nodes);
    // BTreeMap does not expose its allocation, so only the
    // entries themselves are accounted for.
    let children_size = nodes
      .iter()
      .map(|n| n.children().len() * mem::size_of::<(LabelData, NodeId)>())
      .sum();
    // The symbols the tree indexes into plus the raw bytes it hands back
    let text_size = single_list(string) + single_list(raw_string);

    MemoryUsage::new(nodes_size, children_size, text_size)
  }

  pub fn nodes_size(&self) -> usize {
    self.nodes_size
  }

  pub fn children_size(&self) -> usize {
    self.children_size
  }

  pub fn text_size(&self) -> usize {
    self.text_size
  }

  pub fn tree_size(&self) -> usize {
    self.nodes_size + self.children_size
  }

  pub fn total(&self) -> usize {
    self.tree_size() + self.text_size
  }

  // Bytes spent per byte of input text
  pub fn bytes_per_symbol(&self, symbols: usize) -> Option<f64> {
    if symbols == 0 {
      None
    } else {
      Some(self.total() as f64 / symbols as f64)
    }
  }
}

// Computes the memory consumption of a Vector of stack-allocated elements
fn single_list<T>(v: &Vec<T>) -> usize {
  v.capacity() * mem::size_of::<T>()
}
