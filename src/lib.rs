use std::error::Error;
use std::io;
use std::io::Write;
use std::num::NonZeroUsize;

use clap::{Parser, ValueEnum};

pub use crate::configuration_error::ConfigurationError;
pub use crate::duplicate_terminator_error::DuplicateTerminatorError;
pub use crate::index::{GeneralizedIndex, Hit, MatchResult};
pub use crate::match_kind::MatchKind;
pub use crate::sequence_index::SequenceIndex;
pub use crate::symbol::{Alphabet, SequenceId, Symbol};
pub use crate::tree_builder::{NaiveBuilder, TreeBuilder, UkkonenBuilder};
use crate::util::{get_time_ms, read_lines, time_execution};

pub mod configuration_error;
pub mod cursor;
pub mod duplicate_terminator_error;
pub mod index;
pub mod match_kind;
pub mod read_only_cursor;
pub mod searcher;
pub mod sequence_index;
pub mod symbol;
pub mod tree;
pub mod tree_builder;
pub mod util;

/// Enum that represents the 3 kinds of search that we support
/// - Search until match and return the kind of the match
/// - Search until match, if there is a match search the whole subtree to find all matching lines
/// - Search until match, if there is a match return every position where the probe occurs
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum SearchMode {
    Match,
    AllOccurrences,
    Positions,
}

/// How a line of the input files is turned into a sequence
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum Tokenization {
    /// Every character is a symbol
    Chars,
    /// Every whitespace separated word is a symbol
    Words,
}

#[derive(Parser, Debug)]
pub struct Arguments {
    /// File with the sequences used to build the index, one sequence per line.
    /// The line itself is the value that is returned when the sequence matches.
    #[arg(short, long)]
    database_file: String,
    #[arg(short, long, value_enum, default_value_t = Tokenization::Chars)]
    tokenization: Tokenization,
    /// A file that contains sequences that we want to search in the index. Every line contains a new sequence.
    /// Without it the sequences are read from stdin.
    #[arg(short, long)]
    search_file: Option<String>,
    /// This will only build the index and stop after that is completed. Used during benchmarking.
    #[arg(long)]
    build_only: bool,
    /// `match` will only report how the sequence matches.
    /// `all-occurrences` will also print every matching line of the database file.
    /// `positions` will print `<sequence id>:<start>` for every occurrence.
    #[arg(short, long, value_enum)]
    mode: Option<SearchMode>,
    /// Also report lines that contain the sequence with at most this many substituted symbols
    #[arg(long)]
    max_mismatches: Option<usize>,
    /// Execute every query n times and change the output to <found (0 or 1)>;<sequence length>;<average search time in ms>
    /// for each query.
    #[arg(short, long)]
    verbose: Option<NonZeroUsize>,
    /// Print the number of sequences, the number of nodes and the heap size of the index after building it
    #[arg(long)]
    print_size: bool,
}

type LineIndex = GeneralizedIndex<String, String>;

fn tokenize(line: &str, tokenization: &Tokenization) -> Vec<String> {
    match tokenization {
        Tokenization::Chars => line.chars().map(String::from).collect(),
        Tokenization::Words => line.split_whitespace().map(String::from).collect(),
    }
}

/// Builds an index with one sequence for every line of `database_file`
pub fn load_index(database_file: &str, tokenization: &Tokenization) -> Result<LineIndex, Box<dyn Error>> {
    let mut index = GeneralizedIndex::new();
    for line in read_lines(database_file)? {
        let line = line?;
        index.add(tokenize(&line, tokenization), line)?;
    }
    Ok(index)
}

fn format_kind(kind: Option<MatchKind>) -> String {
    match kind {
        Some(kind) => format!("{:?}", kind),
        None => String::from("NoMatch"),
    }
}

/// Executes the kind of search indicated by the commandline arguments and returns the output
fn handle_search_word(index: &LineIndex, probe: &[String], mode: &SearchMode, max_mismatches: Option<usize>) -> String {
    if *mode == SearchMode::Positions {
        let occurrences = index.find_occurrences(probe);
        let mut output = format!("found {} occurrences", occurrences.len());
        for (sequence_id, start) in occurrences {
            output.push_str(&format!("\n* {}:{}", sequence_id, start));
        }
        return output;
    }

    let result = match max_mismatches {
        Some(max_mismatches) => index.find_approximate(probe, max_mismatches),
        None => index.find(probe),
    };
    if *mode == SearchMode::Match {
        return format_kind(result.kind);
    }

    let mut output = format!("{}\nfound {} matches", format_kind(result.kind), result.hits.len());
    for hit in &result.hits {
        output.push_str(&format!("\n* {:?}: {}", hit.kind, hit.value));
    }
    output
}

/// Times `repetitions` executions of the search and returns the verbose output line
fn time_search_word(
    index: &LineIndex,
    probe: &[String],
    mode: &SearchMode,
    max_mismatches: Option<usize>,
    repetitions: NonZeroUsize,
) -> Result<String, Box<dyn Error>> {
    let mut found = false;
    let mut total_time = 0.0;
    for _ in 0..repetitions.get() {
        let execution_time;
        (found, execution_time) = time_execution(|| match (mode, max_mismatches) {
            (SearchMode::Positions, _) => !index.find_occurrences(probe).is_empty(),
            (_, Some(max_mismatches)) => index.find_approximate(probe, max_mismatches).is_match(),
            (_, None) => index.find(probe).is_match(),
        })?;
        total_time += execution_time;
    }
    Ok(format!("{};{};{}", found as u8, probe.len(), total_time / repetitions.get() as f64))
}

/// Main run function that executes all the logic with the received arguments
pub fn run(args: Arguments) -> Result<(), Box<dyn Error>> {
    let start_building_ms = get_time_ms()?;
    let index = load_index(&args.database_file, &args.tokenization)?;
    eprintln!(
        "Built index with {} sequences and {} nodes in {} ms",
        index.len(),
        index.node_count(),
        get_time_ms()? - start_building_ms
    );

    if args.print_size {
        println!("sequences: {}", index.len());
        println!("nodes: {}", index.node_count());
        println!("heap size: {} bytes", index.heap_size());
    }

    // option that only builds the index, but does not allow for querying (easy for benchmark purposes)
    if args.build_only {
        return Ok(());
    }
    let mode = args.mode.as_ref().ok_or_else(|| ConfigurationError::new("search mode expected!"))?;
    if args.max_mismatches.is_some() && *mode == SearchMode::Positions {
        return Err(Box::new(ConfigurationError::new("max-mismatches can not be combined with the positions mode")));
    }

    let mut verbose_output: Vec<String> = vec![];
    let mut handle_line = |line: &str| -> Result<(), Box<dyn Error>> {
        let probe = tokenize(line.trim_end_matches(['\n', '\r']), &args.tokenization);
        match args.verbose {
            Some(repetitions) => verbose_output.push(time_search_word(&index, &probe, mode, args.max_mismatches, repetitions)?),
            None => println!("{}", handle_search_word(&index, &probe, mode, args.max_mismatches)),
        }
        Ok(())
    };

    if let Some(search_file) = &args.search_file {
        for line in read_lines(search_file)? {
            handle_line(&line?)?;
        }
    } else {
        loop {
            print!("Input your search string: ");
            io::stdout().flush()?;
            let mut word = String::new();

            // 0 bytes means stdin is closed
            if io::stdin().read_line(&mut word)? == 0 {
                break;
            }
            handle_line(&word)?;
        }
    }

    verbose_output.iter().for_each(|val| println!("{}", val));
    Ok(())
}
