use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use metrics::{counter, histogram};
use serde::Serialize;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::index::Index;
use crate::wordlist::trie::{Trie, TrieError, TrieStats};

/// A trie filled from a word list, one word per line.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word list file. Plain lists need no options; for delimited
/// lines, the word is taken from `word_column` (default 0).
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

/// What happened to the lines of one load.
#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub added: usize,
    pub duplicates: usize,
    pub failures: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    /// Loads `filename`. A file that cannot be opened leaves the list empty;
    /// that is reported through the log, not to the caller.
    pub fn from_file<P: AsRef<Path>>(filename: P, format: FileFormat) -> Wordlist {
        let mut wl = Wordlist::new();
        wl.load_file(filename, &format);
        wl
    }

    pub fn from_reader<R: BufRead>(reader: R, format: FileFormat) -> Wordlist {
        let mut wl = Wordlist::new();
        wl.load_reader(reader, &format);
        wl
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, filename: P, format: &FileFormat) -> LoadReport {
        let filename = filename.as_ref();
        info!("Reading words from {:?}", filename);

        match File::open(filename) {
            Ok(file) => self.load_reader(BufReader::new(file), format),
            Err(e) => {
                warn!(error = %e, "File not found. Starting with empty tree.");
                LoadReport::default()
            }
        }
    }

    /// Adds every line of `reader`. Blank lines are ignored; lines that are
    /// not a six-letter word are skipped and counted as failures, so one bad
    /// line does not empty the list the way an unreadable source does.
    ///
    /// If reading stops with an I/O error partway through, every word this
    /// load added is taken out again, so a fresh list falls back to empty,
    /// and every line read so far is reported as a failure.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> LoadReport {
        let start = Instant::now();
        let mut report = LoadReport::default();
        let mut loaded: Vec<String> = vec![];

        for (lineno, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    debug!(line = lineno + 1, "skipping line that is not UTF-8");
                    report.failures += 1;
                    continue;
                }
                Err(e) => {
                    warn!(
                        line = lineno + 1,
                        error = %e,
                        "Word list unreadable. Dropping the words it added."
                    );
                    loaded.iter().for_each(|word| {
                        self.trie.remove(word);
                    });
                    report = LoadReport::new(0, 0, lineno + 1);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let word = match format.parse_line(&line) {
                Some(word) => normalize(word),
                None => {
                    debug!(line = lineno + 1, "no word column in {:?}", line);
                    report.failures += 1;
                    continue;
                }
            };
            match self.trie.insert(&word) {
                Ok(true) => {
                    report.added += 1;
                    loaded.push(word);
                }
                Ok(false) => report.duplicates += 1,
                Err(e) => {
                    debug!(line = lineno + 1, "skipping: {}", e);
                    report.failures += 1;
                }
            }
        }

        let elapsed = start.elapsed();
        counter!("wordlist.words_added", report.added as u64);
        counter!("wordlist.lines_rejected", report.failures as u64);
        histogram!("wordlist.load_seconds", elapsed.as_secs_f64());
        info!(
            "Read {} words in {:.3}s [{} duplicates, {} failures]",
            report.added,
            elapsed.as_secs_f64(),
            report.duplicates,
            report.failures
        );
        report
    }

    /// Removes each of `words`, reporting per word whether it was stored.
    pub fn remove_all<'a, I>(&mut self, words: I) -> BTreeMap<String, bool>
        where I: IntoIterator<Item=&'a str> {
        words.into_iter()
            .map(|word| (word.to_string(), self.trie.remove(word)))
            .collect()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }

    delegate! {
        to self.trie {
            pub fn all_starting_with(&self, prefix: &str) -> Vec<String>;
            pub fn group_by_first_letter(&self) -> BTreeMap<char, BTreeSet<String>>;
            pub fn word_count(&self) -> usize;
            pub fn compression_ratio(&self) -> f64;
            pub fn stats(&self) -> TrieStats;
        }
    }
}

impl Index for Wordlist {
    fn add(&mut self, word: &str) -> Result<bool, TrieError> {
        self.trie.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    fn remove(&mut self, word: &str) -> bool {
        self.trie.remove(word)
    }
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}
