// Ukkonen's online construction. The control variables that
// are usually kept as globals live on the `Builder` instead,
// so building a tree has no shared state with anything else.
use crate::types::label_data::LabelData;
use crate::types::node::{Node, NodeId, ROOT};

pub(crate) struct Builder<'s> {
    string: &'s [LabelData],
    nodes: Vec<Node>,

    // The single open end every leaf aliases. Bumped once at
    // the start of each phase (Rule 1).
    leaf_end: usize,

    // Active point. `active_edge` is an index into `string`,
    // so string[active_edge] is the first symbol of the edge.
    active_node: NodeId,
    active_edge: usize,
    active_length: usize,

    remaining_suffix_count: usize,
    // Internal node created in this phase which is still
    // waiting for its suffix link to be set
    last_new_node: Option<NodeId>,
}

impl<'s> Builder<'s> {
    // `nodes` is handed in so the caller decides how the arena
    // is allocated. It has to be empty.
    pub fn new(string: &'s [LabelData], mut nodes: Vec<Node>) -> Builder<'s> {
        debug_assert!(nodes.is_empty());
        nodes.push(Node::root());

        Builder {
            string,
            nodes,
            leaf_end: 0,
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remaining_suffix_count: 0,
            last_new_node: None,
        }
    }

    // Runs every phase and hands back the arena along
    // with the final value of the open leaf end.
    pub fn build(mut self) -> (Vec<Node>, usize) {
        for pos in 0..self.string.len() {
            self.extend(pos);
        }
        debug_assert_eq!(self.remaining_suffix_count, 0);
        (self.nodes, self.leaf_end)
    }

    fn edge_length(&self, id: NodeId) -> usize {
        self.nodes[id].length(self.leaf_end)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    // Skip/count trick: if the active length covers the whole
    // edge into `next`, jump straight to `next` instead of
    // comparing symbols one by one.
    fn walk_down(&mut self, next: NodeId) -> bool {
        let length = self.edge_length(next);
        if self.active_length >= length {
            self.active_edge += length;
            self.active_length -= length;
            self.active_node = next;
            return true;
        }
        false
    }

    // One phase: makes every suffix of string[..=pos] present
    fn extend(&mut self, pos: usize) {
        // Rule 1, every leaf grows by one symbol
        self.leaf_end = pos;
        self.remaining_suffix_count += 1;
        self.last_new_node = None;

        while self.remaining_suffix_count > 0 {
            if self.active_length == 0 {
                self.active_edge = pos;
            }

            let edge_symbol = self.string[self.active_edge];
            match self.nodes[self.active_node].child(&edge_symbol) {
                None => {
                    // Rule 2, new leaf straight off the active node
                    let leaf = self.push(Node::leaf(self.active_node, pos));
                    self.nodes[self.active_node]
                        .children
                        .insert(edge_symbol, leaf);

                    if let Some(last_new_node) = self.last_new_node.take() {
                        self.nodes[last_new_node].suffix_link = self.active_node;
                    }
                }
                Some(next) => {
                    if self.walk_down(next) {
                        // Retry from the new active node
                        continue;
                    }

                    // Rule 3, the symbol is already on the edge. Every
                    // remaining suffix is implicitly there too, so the
                    // whole phase stops here.
                    let next_start = self.nodes[next].start;
                    if self.string[next_start + self.active_length] == self.string[pos] {
                        if let Some(last_new_node) = self.last_new_node {
                            if self.active_node != ROOT {
                                self.nodes[last_new_node].suffix_link = self.active_node;
                                self.last_new_node = None;
                            }
                        }
                        self.active_length += 1;
                        break;
                    }

                    // Rule 2 in the middle of an edge. The new internal
                    // node owns a fixed end, the continuation keeps
                    // its own end (open if it is a leaf).
                    let split_end = next_start + self.active_length - 1;
                    let split = self.push(Node::internal(self.active_node, next_start, split_end));
                    self.nodes[self.active_node]
                        .children
                        .insert(edge_symbol, split);

                    let leaf = self.push(Node::leaf(split, pos));
                    self.nodes[split]
                        .children
                        .insert(self.string[pos], leaf);

                    self.nodes[next].start += self.active_length;
                    self.nodes[next].parent = Some(split);
                    let next_symbol = self.string[self.nodes[next].start];
                    self.nodes[split].children.insert(next_symbol, next);

                    if let Some(last_new_node) = self.last_new_node {
                        self.nodes[last_new_node].suffix_link = split;
                    }
                    self.last_new_node = Some(split);
                }
            }

            // A suffix was added, either as a new leaf or by a split
            self.remaining_suffix_count -= 1;
            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = pos + 1 - self.remaining_suffix_count;
            } else if self.active_node != ROOT {
                self.active_node = self.nodes[self.active_node].suffix_link;
            }
        }
    }
}
