use std::error::Error;
use std::path::PathBuf;

use structopt::StructOpt;
use tracing::Level;

use string_tree::{FileFormat, Index, TrieStats, Wordlist};

/// Load six-letter words into a prefix tree and query them.
#[derive(StructOpt)]
#[structopt(name = "string-tree")]
struct Cli {
    /// The word list to read, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,

    /// Column delimiter, for word lists with several columns per line
    #[structopt(short, long)]
    delimiter: Option<char>,

    /// Column holding the word when a delimiter is given
    #[structopt(short = "c", long, default_value = "0")]
    word_column: usize,

    /// Print results as JSON
    #[structopt(long)]
    json: bool,

    /// More log output (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Check whether a word is stored
    Contains { word: String },
    /// List stored words starting with a prefix (all words if omitted)
    Prefix { prefix: Option<String> },
    /// List stored words grouped by first letter
    Groups,
    /// Show word count, node count and compression ratio
    Stats,
    /// Remove words, then show the resulting stats
    Remove { words: Vec<String> },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::from_args();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let format = match args.delimiter {
        Some(delimiter) => FileFormat::builder()
            .delimiter(delimiter)
            .word_column(args.word_column)
            .build(),
        None => FileFormat::builder().build(),
    };
    let mut wl = Wordlist::from_file(&args.path, format);

    match args.command {
        Command::Contains { word } => {
            let found = wl.contains(&word);
            if args.json {
                println!("{}", serde_json::to_string(&found)?);
            } else {
                println!("{}", found);
            }
        }
        Command::Prefix { prefix } => {
            let words = wl.all_starting_with(prefix.as_deref().unwrap_or(""));
            if args.json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                words.iter().for_each(|word| println!("{}", word));
            }
        }
        Command::Groups => {
            let groups = wl.group_by_first_letter();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for (letter, words) in &groups {
                    let words: Vec<&str> = words.iter().map(|x| x.as_str()).collect();
                    println!("{}: {}", letter, words.join(", "));
                }
            }
        }
        Command::Stats => print_stats(&wl.stats(), args.json)?,
        Command::Remove { words } => {
            let removed = wl.remove_all(words.iter().map(|x| x.as_str()));
            if args.json {
                println!("{}", serde_json::to_string_pretty(&removed)?);
            } else {
                for (word, removed) in &removed {
                    println!("{} {}", word, if *removed { "removed" } else { "not found" });
                }
            }
            print_stats(&wl.stats(), args.json)?;
        }
    }
    Ok(())
}

fn print_stats(stats: &TrieStats, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        println!("words: {}", stats.words);
        println!("nodes: {}", stats.nodes);
        println!("naive cost: {}", stats.naive_cost);
        println!("compression: {:.4}", stats.compression_ratio);
    }
    Ok(())
}
