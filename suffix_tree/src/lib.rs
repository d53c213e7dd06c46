// Suffix tree over a byte string, built online with Ukkonen's algorithm,
// answering substring queries in time proportional to the pattern.
#[macro_use]
extern crate log;

use std::collections::TryReserveError;
use std::fmt;
use std::iter;

use thiserror::Error;

mod builder;
pub mod brute_force;
mod memory_usage;
mod traversal;
mod types;

use builder::Builder;
pub use memory_usage::MemoryUsage;
pub use types::label_data::LabelData;
pub use types::node::{EdgeEnd, Node, NodeId, ROOT};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Pattern must contain at least one byte")]
    EmptyPattern,

    #[error("Could not allocate room for {requested} elements while building the suffix tree")]
    Allocation { requested: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

// Outcome of a pattern lookup. Not finding the pattern is
// a regular result with a count of 0, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub found: bool,
    pub count: usize,
}

impl Match {
    fn none() -> Match {
        Match {
            found: false,
            count: 0,
        }
    }
}

pub struct SuffixTree {
    raw_string: Vec<u8>,
    nodes: Vec<Node>,
    // Every byte of the text followed by the separator
    string: Vec<LabelData>,
    // Final value of the open leaf end, shared by all leaves
    leaf_end: usize,
}

impl SuffixTree {
    pub fn new<T: AsRef<[u8]>>(s: T) -> SuffixTree {
        let bytes = s.as_ref();
        let string = label_string(bytes, Vec::with_capacity(bytes.len() + 1));
        let nodes = Vec::with_capacity(max_nodes(string.len()));
        init_suffix_tree(bytes.to_vec(), string, nodes)
    }

    // Like `new`, but reserves everything the construction needs up
    // front and reports when that fails, instead of aborting midway.
    pub fn try_new<T: AsRef<[u8]>>(s: T) -> Result<SuffixTree> {
        let bytes = s.as_ref();

        let mut raw_string = Vec::new();
        try_reserve(&mut raw_string, bytes.len())?;
        raw_string.extend_from_slice(bytes);

        let mut string = Vec::new();
        try_reserve(&mut string, bytes.len() + 1)?;
        let string = label_string(bytes, string);

        let nodes = reserve_arena(string.len())?;

        Ok(init_suffix_tree(raw_string, string, nodes))
    }

    // The text the tree was built from, without the separator
    pub fn text(&self) -> &[u8] {
        &self.raw_string
    }

    // Number of symbols in the tree's text, separator included
    pub fn size(&self) -> usize {
        self.string.len()
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        traversal::count_leaves(&self.nodes, ROOT)
    }

    pub fn edge_length(&self, node: &Node) -> usize {
        node.length(self.leaf_end)
    }

    // Gets the label going into the node
    pub fn label_of_node(&self, node: &Node) -> &[LabelData] {
        if node.is_root() {
            return &[];
        }
        &self.string[node.start..=node.end.resolve(self.leaf_end)]
    }

    pub fn label_of_node_formatted(&self, node: &Node) -> String {
        let label_data: Vec<u8> = self
            .label_of_node(node)
            .iter()
            .flat_map(|l| l.as_readable())
            .collect();

        String::from_utf8_lossy(&label_data).into_owned()
    }

    // Walks down from the root along `pattern`, returning the node
    // whose incoming edge the pattern ends on, if it occurs at all.
    fn locate(&self, pattern: &[u8]) -> Result<Option<NodeId>> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let mut current = ROOT;
        let mut idx = 0;
        loop {
            let node = &self.nodes[current];
            if !node.is_root() {
                let end = node.end.resolve(self.leaf_end);
                let mut k = node.start;
                while k <= end && idx < pattern.len() {
                    if self.string[k] != pattern[idx] {
                        return Ok(None);
                    }
                    k += 1;
                    idx += 1;
                }
                if idx == pattern.len() {
                    return Ok(Some(current));
                }
            }

            // The whole edge matched, continue with the child
            // starting with the next byte of the pattern
            match node.child(&LabelData::new(pattern[idx])) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
    }

    pub fn find(&self, pattern: &[u8]) -> Result<Match> {
        let result = match self.locate(pattern)? {
            None => Match::none(),
            Some(id) => Match {
                found: true,
                count: traversal::count_leaves(&self.nodes, id),
            },
        };
        trace!(
            "Pattern of {} bytes: found = {}, count = {}",
            pattern.len(),
            result.found,
            result.count
        );
        Ok(result)
    }

    pub fn contains(&self, pattern: &[u8]) -> Result<bool> {
        Ok(self.locate(pattern)?.is_some())
    }

    pub fn count(&self, pattern: &[u8]) -> Result<usize> {
        Ok(self.find(pattern)?.count)
    }

    // Every offset in the text where `pattern` starts, ascending
    pub fn occurrences(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        let mut indices = match self.locate(pattern)? {
            None => vec![],
            Some(id) => traversal::leaf_indices(&self.nodes, id),
        };
        indices.sort_unstable();
        Ok(indices)
    }

    // Suffix index of every leaf, in lexicographic order of the suffixes
    pub fn suffix_indices(&self) -> Vec<usize> {
        traversal::leaf_indices(&self.nodes, ROOT)
    }

    // (start, end) of the longest substring occurring at least twice
    pub fn longest_repeated_substring(&self) -> Option<(usize, usize)> {
        traversal::deepest_internal_node(&self.nodes, self.leaf_end)
            .map(|(start, len)| (start, start + len))
    }

    pub fn memory_usage(&self) -> MemoryUsage {
        MemoryUsage::of(&self.nodes, &self.string, &self.raw_string)
    }
}

impl fmt::Debug for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt(f: &mut fmt::Formatter, st: &SuffixTree, node: &Node, depth: usize) -> fmt::Result {
            let indent: String = iter::repeat(' ').take(depth * 2).collect();
            if node.is_root() {
                writeln!(f, "ROOT")?;
            } else if let Some(index) = node.suffix_index() {
                writeln!(f, "{}{:?} [{}]", indent, &st.label_of_node_formatted(node), index)?;
            } else {
                writeln!(f, "{}{:?}", indent, &st.label_of_node_formatted(node))?;
            }
            for child in node.children().values() {
                fmt(f, st, &st.nodes[*child], depth + 1)?;
            }
            Ok(())
        }
        writeln!(f, "\n-----------------------------------------")?;
        writeln!(f, "SUFFIX TREE")?;
        writeln!(f, "text: {}", String::from_utf8_lossy(&self.raw_string))?;
        fmt(f, self, self.root(), 0)?;
        writeln!(f, "-----------------------------------------")
    }
}

// Root, one leaf per suffix and at most one fewer internal nodes
fn max_nodes(size: usize) -> usize {
    size.saturating_mul(2)
}

// Node arena large enough that construction never reallocates
fn reserve_arena(size: usize) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    try_reserve(&mut nodes, max_nodes(size))?;
    Ok(nodes)
}

fn try_reserve<T>(v: &mut Vec<T>, additional: usize) -> Result<()> {
    v.try_reserve_exact(additional)
        .map_err(|_: TryReserveError| Error::Allocation {
            requested: additional,
        })
}

// Transforms the input into a list of bytes, wrapped into
// the LabelData enum, and appends the separator at the end
fn label_string(bytes: &[u8], mut string: Vec<LabelData>) -> Vec<LabelData> {
    string.extend(bytes.iter().map(|&b| LabelData::new(b)));
    string.push(LabelData::Sep);
    string
}

fn init_suffix_tree(raw_string: Vec<u8>, string: Vec<LabelData>, nodes: Vec<Node>) -> SuffixTree {
    debug!("Building suffix tree over {} symbols", string.len());

    let (mut nodes, leaf_end) = Builder::new(&string, nodes).build();
    traversal::set_suffix_indices(&mut nodes, leaf_end, string.len());

    debug!(
        "Suffix tree done: {} nodes for {} symbols",
        nodes.len(),
        string.len()
    );

    SuffixTree {
        raw_string,
        nodes,
        string,
        leaf_end,
    }
}

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
