// Straightforward scans over the raw text, used as a baseline to
// time the suffix tree against and to cross-check its answers.

// Counts (possibly overlapping) occurrences of `pattern` in `text`
// by trying every starting offset, O(n·m).
pub fn count(text: &[u8], pattern: &[u8]) -> usize {
    windows(text, pattern).count()
}

pub fn occurrences(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    windows(text, pattern).collect()
}

fn windows<'a>(text: &'a [u8], pattern: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    let m = pattern.len();
    let last_start = if m == 0 || m > text.len() {
        None
    } else {
        Some(text.len() - m)
    };

    last_start
        .into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&i| &text[i..i + m] == pattern)
}

// Longest substring that occurs at least twice (occurrences may
// overlap), as a (start, end) range into `text`. Compares every pair
// of starting offsets, so O(n³) in the worst case. Among equally long
// candidates the earliest start wins.
pub fn longest_repeated_substring(text: &[u8]) -> Option<(usize, usize)> {
    let n = text.len();
    let mut best: Option<(usize, usize)> = None;
    let mut best_len = 0;

    for i in 0..n {
        for j in i + 1..n {
            let k = text[i..]
                .iter()
                .zip(&text[j..])
                .take_while(|(a, b)| a == b)
                .count();
            if k > best_len {
                best_len = k;
                best = Some((i, i + k));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_overlapping_matches() {
        assert_eq!(count(b"AAAAAAAAA", b"AAAA"), 6);
        assert_eq!(count(b"ABCABXABCD", b"ABC"), 2);
        assert_eq!(occurrences(b"AABAACAADAABAAABAA", b"AABA"), vec![0, 9, 13]);
    }

    #[test]
    fn degenerate_patterns() {
        assert_eq!(count(b"abc", b""), 0);
        assert_eq!(count(b"abc", b"abcd"), 0);
        assert_eq!(count(b"", b"a"), 0);
        assert_eq!(count(b"abc", b"abc"), 1);
    }

    #[test]
    fn longest_repeat() {
        assert_eq!(longest_repeated_substring(b"bananas"), Some((1, 4)));
        assert_eq!(longest_repeated_substring(b"abc"), None);
        assert_eq!(longest_repeated_substring(b""), None);
        assert_eq!(longest_repeated_substring(b"aaaa"), Some((0, 3)));
    }
}
