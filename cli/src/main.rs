#[macro_use]
extern crate log;

mod alloc_stats;

use alloc_stats::AllocationMeter;
use simplelog::*;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use suffix_tree::{brute_force, Match, MemoryUsage, SuffixTree};

// CLI tools
use anyhow::{Context, Result};
use console::style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use structopt::StructOpt;

// Docs @ https://docs.rs/structopt/0.3.20/structopt/
#[derive(StructOpt)]
#[structopt(
    name = "pattern_search",
    about = "Compares suffix tree pattern search against a brute force scan"
)]
struct CliInput {
    /// The path to the file to search in
    #[structopt(parse(from_os_str))]
    path: PathBuf,

    /// Pattern to search for, can be given multiple times
    #[structopt(short, long = "pattern", default_value = "atc", number_of_values = 1)]
    patterns: Vec<String>,

    /// Also find the longest repeated substring of the text
    #[structopt(short, long)]
    lrs: bool,

    /// Largest input (in bytes) the naive longest repeated substring is run on
    #[structopt(long, default_value = "10000")]
    naive_limit: usize,

    /// Removes line breaks from the input before building the tree
    #[structopt(long)]
    strip_newlines: bool,

    /// Increases the log level (-v debug, -vv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Also write the log to this file
    #[structopt(long, parse(from_os_str))]
    log_file: Option<PathBuf>,
}

struct SearchReport {
    tree: Match,
    tree_time: Duration,
    brute_force: usize,
    brute_force_time: Duration,
    brute_force_memory: usize,
}

// Example input: "../test_data/dna.50MB"
fn main() -> Result<()> {
    let args = CliInput::from_args();
    init_logging(args.verbose, args.log_file.as_deref())?;

    let text = read_text(&args.path, args.strip_newlines)?;
    info!(
        "Read text from `{}` (input size: {})",
        args.path.display(),
        HumanBytes(text.len() as u64)
    );

    // Suffix tree implementation
    let tree_meter = AllocationMeter::start()?;
    let spinner_style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner} {wide_msg}");
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style);
    pb.set_message("Creating suffix tree...");
    pb.enable_steady_tick(100);

    let stopwatch = Instant::now();
    let tree = SuffixTree::try_new(&text)?;
    let build_time = stopwatch.elapsed();
    pb.finish_and_clear();

    let tree_memory = tree_meter.delta()?;
    print_build_data(&tree, build_time, tree_memory, tree.memory_usage());

    for pattern in &args.patterns {
        let report = search(&tree, &text, pattern.as_bytes())
            .with_context(|| format!("Could not search for pattern <{}>", pattern))?;
        print_search_report(pattern, &report);
    }

    if args.lrs {
        print_longest_repeated_substring(&tree, &text, args.naive_limit);
    }

    Ok(())
}

fn read_text(path: &Path, strip_newlines: bool) -> Result<Vec<u8>> {
    trace!("Loading file into memory");
    let mut text =
        fs::read(path).with_context(|| format!("Could not read file `{}`", path.display()))?;
    if strip_newlines {
        text.retain(|&b| b != b'\n' && b != b'\r');
    }
    Ok(text)
}

fn search(tree: &SuffixTree, text: &[u8], pattern: &[u8]) -> Result<SearchReport> {
    let stopwatch = Instant::now();
    let tree_match = tree.find(pattern)?;
    let tree_time = stopwatch.elapsed();

    // Brute force implementation
    let meter = AllocationMeter::start()?;
    let stopwatch = Instant::now();
    let count = brute_force::count(text, pattern);
    let brute_force_time = stopwatch.elapsed();
    let brute_force_memory = meter.delta()?;

    if tree_match.count != count {
        warn!(
            "Suffix tree found {} occurrences but the brute force scan found {}",
            tree_match.count, count
        );
    }

    Ok(SearchReport {
        tree: tree_match,
        tree_time,
        brute_force: count,
        brute_force_time,
        brute_force_memory,
    })
}

fn verdict(found: bool) -> String {
    if found {
        style("is a substring").green().to_string()
    } else {
        style("is NOT a substring").red().to_string()
    }
}

fn print_build_data(tree: &SuffixTree, time: Duration, allocated: usize, usage: MemoryUsage) {
    info!(
        "Built suffix tree of {} nodes over {} symbols, taking {:?}",
        tree.node_count(),
        tree.size(),
        time
    );
    info!(
        "Memory used for suffix tree implementation: {} allocated ({} computed)",
        HumanBytes(allocated as u64),
        HumanBytes(usage.total() as u64)
    );
    debug!("Nodes: {}", HumanBytes(usage.nodes_size() as u64));
    debug!("Children: {}", HumanBytes(usage.children_size() as u64));
    debug!("Text: {}", HumanBytes(usage.text_size() as u64));
    if let Some(rate) = usage.bytes_per_symbol(tree.size()) {
        debug!("Bytes per symbol: {:.2}", rate);
    }
}

fn print_search_report(pattern: &str, report: &SearchReport) {
    info!(
        "Pattern <{}> {} (suffix tree, count: {}), taking {:?}",
        pattern,
        verdict(report.tree.found),
        report.tree.count,
        report.tree_time
    );
    info!(
        "Pattern <{}> {} (brute force, count: {}), taking {:?}",
        pattern,
        verdict(report.brute_force > 0),
        report.brute_force,
        report.brute_force_time
    );
    debug!(
        "Memory used for brute force implementation: {}",
        HumanBytes(report.brute_force_memory as u64)
    );
}

fn print_longest_repeated_substring(tree: &SuffixTree, text: &[u8], naive_limit: usize) {
    let stopwatch = Instant::now();
    let found = tree.longest_repeated_substring();
    let tree_time = stopwatch.elapsed();
    info!(
        "Longest repeated substring (suffix tree): {}, taking {:?}",
        format_range(text, found),
        tree_time
    );

    if text.len() > naive_limit {
        info!(
            "Skipping naive longest repeated substring, input is larger than {}",
            HumanBytes(naive_limit as u64)
        );
        return;
    }

    let stopwatch = Instant::now();
    let naive = brute_force::longest_repeated_substring(text);
    let naive_time = stopwatch.elapsed();
    info!(
        "Longest repeated substring (naive): {}, taking {:?}",
        format_range(text, naive),
        naive_time
    );
}

fn format_range(text: &[u8], range: Option<(usize, usize)>) -> String {
    match range {
        None => String::from("<none>"),
        Some((start, end)) => format!(
            "<{}> at {} ({} bytes)",
            String::from_utf8_lossy(&text[start..end]),
            start,
            end - start
        ),
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![TermLogger::new(level, Config::default(), TerminalMode::Mixed)];
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file `{}`", path.display()))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    CombinedLogger::init(loggers).context("Could not initialize loggers")?;

    debug!("Loggers initialized.");
    Ok(())
}

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Removed again when the handle is dropped
    fn temp_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_raw_bytes() {
        let file = temp_file(b"acgt\nacgt\r\n");
        assert_eq!(read_text(file.path(), false).unwrap(), b"acgt\nacgt\r\n");
        assert_eq!(read_text(file.path(), true).unwrap(), b"acgtacgt");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist");
        let err = read_text(&path, false).unwrap_err();
        assert!(err.to_string().contains("Could not read file"));
    }

    #[test]
    fn search_agrees_with_brute_force() {
        let text = b"GEEKSFORGEEKS";
        let tree = SuffixTree::new(&text[..]);
        let report = search(&tree, text, b"GEEKS").unwrap();
        assert_eq!(report.tree, Match { found: true, count: 2 });
        assert_eq!(report.brute_force, 2);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let tree = SuffixTree::new("GEEKSFORGEEKS");
        assert!(search(&tree, b"GEEKSFORGEEKS", b"").is_err());
    }

    #[test]
    fn range_formatting() {
        assert_eq!(format_range(b"banana", None), "<none>");
        assert_eq!(format_range(b"banana", Some((1, 4))), "<ana> at 1 (3 bytes)");
    }

    #[quickcheck]
    fn qc_search_counts_agree(text: Vec<u8>, pattern: Vec<u8>) -> bool {
        let tree = SuffixTree::new(&text);
        match search(&tree, &text, &pattern) {
            Ok(report) => report.tree.count == report.brute_force,
            Err(_) => pattern.is_empty(),
        }
    }
}
