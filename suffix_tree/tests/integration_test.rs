use suffix_tree::{brute_force, Error, Match, SuffixTree};

fn found(count: usize) -> Match {
    Match { found: true, count }
}

fn not_found() -> Match {
    Match {
        found: false,
        count: 0,
    }
}

#[test]
fn test_repeated_prefix() {
    let tree = SuffixTree::new("ABCABXABCD$");
    assert_eq!(tree.find(b"ABC"), Ok(found(2)));
    assert_eq!(tree.occurrences(b"ABC"), Ok(vec![0, 6]));
}

#[test]
fn test_geeks() {
    let tree = SuffixTree::new("GEEKSFORGEEKS$");
    assert_eq!(tree.find(b"GEEKS"), Ok(found(2)));
    assert_eq!(tree.find(b"GEEK1"), Ok(not_found()));
    assert_eq!(tree.find(b"FOR"), Ok(found(1)));
}

#[test]
fn test_overlapping_occurrences() {
    let tree = SuffixTree::new("AABAACAADAABAAABAA$");
    assert_eq!(tree.find(b"AABA"), Ok(found(3)));
    // Offsets 0, 3, 6, 9, 12, 13 and 16
    assert_eq!(tree.find(b"AA"), Ok(found(7)));
    assert_eq!(tree.find(b"AAE"), Ok(not_found()));
}

#[test]
fn test_single_letter_text() {
    let tree = SuffixTree::new("AAAAAAAAA$");
    assert_eq!(tree.find(b"AAAA"), Ok(found(6)));
    assert_eq!(tree.find(b"A"), Ok(found(9)));
    assert_eq!(tree.find(b"AB"), Ok(not_found()));
}

#[test]
fn test_whole_text_is_a_single_leaf() {
    let text = "GEEKSFORGEEKS";
    let tree = SuffixTree::new(text);
    assert_eq!(tree.find(text.as_bytes()), Ok(found(1)));
    assert_eq!(tree.find(b"GEEKSFORGEEKSX"), Ok(not_found()));
    assert_eq!(tree.find(b"GEEKSFORGEEKSGEEKSFORGEEKS"), Ok(not_found()));
}

#[test]
fn test_leaf_per_suffix() {
    for text in &["ABCABXABCD$", "GEEKSFORGEEKS$", "AABAACAADAABAAABAA$", "AAAAAAAAA$"] {
        let tree = SuffixTree::new(text);
        assert_eq!(tree.leaf_count(), tree.size());

        let mut indices = tree.suffix_indices();
        indices.sort_unstable();
        assert_eq!(indices, (0..tree.size()).collect::<Vec<_>>());
    }
}

#[test]
fn test_every_substring_agrees_with_brute_force() {
    let text = b"AABAACAADAABAAABAA";
    let tree = SuffixTree::new(&text[..]);
    for i in 0..text.len() {
        for j in (i + 1)..=text.len() {
            let pattern = &text[i..j];
            let result = tree.find(pattern).unwrap();
            assert!(result.found, "{:?} should be a substring", pattern);
            assert_eq!(result.count, brute_force::count(text, pattern));
        }
    }
}

#[test]
fn test_repeated_queries() {
    let tree = SuffixTree::new("GEEKSFORGEEKS");
    let first = tree.find(b"EEK");
    let second = tree.find(b"EEK");
    assert_eq!(first, second);
    assert_eq!(first, Ok(found(2)));
}

#[test]
fn test_empty_pattern() {
    let tree = SuffixTree::new("GEEKSFORGEEKS");
    assert_eq!(tree.find(b""), Err(Error::EmptyPattern));
    assert_eq!(tree.count(b""), Err(Error::EmptyPattern));
}

#[test]
fn test_longest_repeated_substring() {
    let tree = SuffixTree::new("bananas");
    assert_eq!(tree.longest_repeated_substring(), Some((1, 4)));

    let tree = SuffixTree::new("GEEKSFORGEEKS");
    let (start, end) = tree.longest_repeated_substring().unwrap();
    assert_eq!(&tree.text()[start..end], b"GEEKS");
}
