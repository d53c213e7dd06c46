// Depth first passes over a finished node arena. All of them use an
// explicit stack, since a text of a few megabytes easily produces a
// tree deeper than the call stack allows.
use crate::types::node::{Node, NodeId, ROOT};

// Labels every leaf with the offset its suffix starts at.
// `size` is the length of the text including the separator.
pub(crate) fn set_suffix_indices(nodes: &mut [Node], leaf_end: usize, size: usize) {
    let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

    while let Some((id, label_height)) = stack.pop() {
        if nodes[id].is_leaf() {
            nodes[id].suffix_index = Some(size - label_height);
            continue;
        }
        for &child in nodes[id].children().values() {
            let height = label_height + nodes[child].length(leaf_end);
            stack.push((child, height));
        }
    }
}

pub(crate) fn count_leaves(nodes: &[Node], from: NodeId) -> usize {
    let mut count = 0;
    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        let node = &nodes[id];
        if node.suffix_index.is_some() {
            count += 1;
        } else {
            stack.extend(node.children().values());
        }
    }
    count
}

// Suffix indices of the leaves below `from`, in lexicographic order
pub(crate) fn leaf_indices(nodes: &[Node], from: NodeId) -> Vec<usize> {
    let mut indices = vec![];
    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        let node = &nodes[id];
        if let Some(index) = node.suffix_index {
            indices.push(index);
        } else {
            // Reversed so the smallest child is popped first
            stack.extend(node.children().values().rev());
        }
    }
    indices
}

// The internal node with the longest path label is the longest
// substring occurring at least twice. Among equally long ones, the
// one with the earliest occurrence in the text wins.
// Returns the (start, length) of that substring in the text.
pub(crate) fn deepest_internal_node(nodes: &[Node], leaf_end: usize) -> Option<(usize, usize)> {
    let mut deepest: Vec<NodeId> = vec![];
    let mut max_height = 0;

    let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];
    while let Some((id, label_height)) = stack.pop() {
        let node = &nodes[id];
        if !node.is_internal_node() {
            if node.is_root() {
                for &child in node.children().values() {
                    stack.push((child, nodes[child].length(leaf_end)));
                }
            }
            continue;
        }

        if label_height > max_height {
            max_height = label_height;
            deepest.clear();
        }
        if label_height == max_height {
            deepest.push(id);
        }
        for &child in node.children().values() {
            stack.push((child, label_height + nodes[child].length(leaf_end)));
        }
    }

    deepest
        .into_iter()
        .filter_map(|id| {
            leaf_indices(nodes, id)
                .into_iter()
                .min()
                .map(|start| (start, max_height))
        })
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::types::label_data::LabelData;

    fn built(s: &str) -> (Vec<Node>, usize, usize) {
        let mut string: Vec<LabelData> = s.bytes().map(LabelData::new).collect();
        string.push(LabelData::Sep);
        let (mut nodes, leaf_end) = Builder::new(&string, Vec::new()).build();
        set_suffix_indices(&mut nodes, leaf_end, string.len());
        (nodes, leaf_end, string.len())
    }

    #[test]
    fn suffix_indices_of_banana() {
        let (nodes, _, _) = built("banana");
        // Sorted suffixes of "banana<$>", separator first
        assert_eq!(leaf_indices(&nodes, ROOT), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn internal_nodes_have_no_suffix_index() {
        let (nodes, _, _) = built("mississippi");
        for node in nodes.iter() {
            assert_eq!(node.suffix_index.is_some(), node.is_leaf());
        }
    }

    #[test]
    fn leaves_below_root() {
        let (nodes, _, size) = built("mississippi");
        assert_eq!(count_leaves(&nodes, ROOT), size);
    }

    #[test]
    fn deepest_node_of_banana() {
        let (nodes, leaf_end, _) = built("banana");
        // "ana" first occurs at 1
        assert_eq!(deepest_internal_node(&nodes, leaf_end), Some((1, 3)));
    }

    #[test]
    fn deepest_node_reports_a_text_offset() {
        let (nodes, leaf_end, _) = built("xyzGEEKSFORGEEKS");
        // "GEEKS" starts at offset 3, not at whatever id its node got
        assert_eq!(deepest_internal_node(&nodes, leaf_end), Some((3, 5)));
    }

    #[test]
    fn nothing_repeats() {
        let (nodes, leaf_end, _) = built("abcd");
        assert_eq!(deepest_internal_node(&nodes, leaf_end), None);
    }
}
