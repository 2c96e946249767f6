//! Splits the search by the first two letters of slot 0 and runs the pieces
//! on a fixed-size worker pool.
//!
//! The coordinator builds one prototype state per partition with those
//! letters already taken. Each worker owns its copy outright; only the
//! [`SharedOutcome`] is shared.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use rayon::ThreadPoolBuilder;

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::letters::letter_char;
use crate::outcome::SharedOutcome;
use crate::search::{SearchState, Searcher};
use crate::trie::Trie;

/// What to search for and how many workers to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub word_count: usize,
    pub word_length: usize,
    pub threads: usize,
}

impl SearchConfig {
    pub fn new(word_count: usize, word_length: usize, threads: usize) -> Result<Self> {
        for (name, value) in [
            ("word count", word_count),
            ("word length", word_length),
            ("thread count", threads),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{} must be at least 1", name)));
            }
        }
        Ok(SearchConfig {
            word_count,
            word_length,
            threads,
        })
    }
}

/// Opening letters of slot 0 that one worker explores.
///
/// `second` is `None` only for one-letter words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed {
    pub first: u8,
    pub second: Option<u8>,
}

impl Seed {
    /// How many letters of slot 0 the seed fixes.
    pub fn depth(self) -> usize {
        1 + self.second.is_some() as usize
    }

    fn letters(self) -> impl Iterator<Item = u8> {
        std::iter::once(self.first).chain(self.second)
    }

    /// The prototype state with the seed's letters taken.
    pub fn state(self, trie: &Trie, word_count: usize) -> Option<SearchState> {
        let mut state = SearchState::new(word_count);
        self.letters()
            .all(|letter| state.advance(trie, 0, letter))
            .then_some(state)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters()
            .try_for_each(|letter| write!(f, "{}", letter_char(letter)))
    }
}

/// Every partition in ascending order: each trie path of two distinct
/// letters from the root, or of one letter when words are one letter long.
pub fn seeds(trie: &Trie, word_length: usize) -> Vec<Seed> {
    let mut seeds = Vec::new();
    for (first, node) in trie.children(trie.root()) {
        if word_length < 2 {
            seeds.push(Seed {
                first,
                second: None,
            });
            continue;
        }
        seeds.extend(
            trie.children(node)
                .filter(|&(second, _)| second != first)
                .map(|(second, _)| Seed {
                    first,
                    second: Some(second),
                }),
        );
    }
    seeds
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Emitted lines, after anagram expansion.
    pub solutions: u64,
    /// Distinct signature combinations found.
    pub patterns: u64,
    /// Partitions handed to workers.
    pub tasks: usize,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} solutions from {} patterns across {} tasks",
            self.solutions, self.patterns, self.tasks
        )
    }
}

/// Runs the whole search on `config.threads` workers, writing one line per
/// solution to `sink`. `progress` sees each partition as a worker starts on it.
///
/// Returns the report and the flushed sink. If any worker fails to write,
/// the first such error is returned once every worker has stopped.
pub fn find_answers<W, P>(
    dictionary: &Dictionary,
    config: SearchConfig,
    sink: W,
    progress: P,
) -> Result<(SearchReport, W)>
where
    W: Write + Send,
    P: Fn(Seed) + Sync,
{
    check_word_length(dictionary, config.word_length)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|i| format!("search-worker-{}", i))
        .build()?;

    let trie = dictionary.trie();
    let seeds = seeds(trie, config.word_length);
    let tasks = seeds.len();
    let outcome = SharedOutcome::new(sink);
    let failure: Mutex<Option<Error>> = Mutex::new(None);

    pool.scope_fifo(|scope| {
        for seed in seeds {
            let Some(state) = seed.state(trie, config.word_count) else {
                continue;
            };
            log::debug!("dispatching {}", seed);

            let outcome = &outcome;
            let failure = &failure;
            let progress = &progress;
            scope.spawn_fifo(move |_| {
                progress(seed);
                let searcher = Searcher::new(dictionary, config.word_length, state, outcome);
                if let Err(err) = searcher.run(seed.depth(), seed.first) {
                    log::debug!("worker for {} failed: {}", seed, err);
                    failure
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .get_or_insert(err);
                }
            });
        }
    });

    if let Some(err) = failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
        return Err(err);
    }
    let report = SearchReport {
        solutions: outcome.solutions(),
        patterns: outcome.patterns(),
        tasks,
    };
    log::info!("search finished: {}", report);
    Ok((report, outcome.into_sink()?))
}

/// The same search on the calling thread, without partitioning.
pub fn search_single_threaded<W: Write>(
    dictionary: &Dictionary,
    word_count: usize,
    word_length: usize,
    sink: W,
) -> Result<(SearchReport, W)> {
    check_word_length(dictionary, word_length)?;
    let outcome = SharedOutcome::new(sink);
    Searcher::new(dictionary, word_length, SearchState::new(word_count), &outcome).run(0, 0)?;
    let report = SearchReport {
        solutions: outcome.solutions(),
        patterns: outcome.patterns(),
        tasks: 1,
    };
    Ok((report, outcome.into_sink()?))
}

/// A dictionary filtered to one length holds no word of any other.
fn check_word_length(dictionary: &Dictionary, word_length: usize) -> Result<()> {
    match dictionary.word_length() {
        Some(loaded) if loaded != word_length => Err(Error::InvalidConfig(format!(
            "dictionary holds {}-letter words, search asked for {}",
            loaded, word_length
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{find_answers, search_single_threaded, seeds, SearchConfig, Seed};
    use crate::dictionary::Dictionary;
    use crate::error::Error;
    use itertools::Itertools;
    use std::sync::Mutex;

    #[test]
    fn config_rejects_zero() {
        assert!(SearchConfig::new(2, 3, 4).is_ok());
        assert!(matches!(
            SearchConfig::new(0, 3, 4),
            Err(Error::InvalidConfig(_))
        ));
        assert!(SearchConfig::new(2, 0, 4).is_err());
        assert!(SearchConfig::new(2, 3, 0).is_err());
    }

    #[test]
    fn seeds_follow_two_letter_paths() {
        let dict = Dictionary::from_words(Some(3), ["cat", "cab", "cut", "dog"]).unwrap();
        let seeds = seeds(dict.trie(), 3).iter().map(Seed::to_string).collect_vec();
        assert_eq!(seeds, ["ca", "cu", "do"]);
    }

    #[test]
    fn one_letter_words_seed_by_first_letter() {
        let dict = Dictionary::from_words(Some(1), ["b", "a"]).unwrap();
        let seeds = seeds(dict.trie(), 1);
        assert_eq!(
            seeds,
            [
                Seed { first: 0, second: None },
                Seed { first: 1, second: None }
            ]
        );
        assert_eq!(seeds[0].depth(), 1);
    }

    #[test]
    fn seed_state_takes_its_letters() {
        let dict = Dictionary::from_words(Some(3), ["cat"]).unwrap();
        let seed = Seed {
            first: 2,
            second: Some(0),
        };
        let state = seed.state(dict.trie(), 2).unwrap();
        assert_eq!(state.used().to_string(), "ac");
        assert_eq!(state.cursor(0), dict.trie().find("ca").unwrap());
        assert_eq!(state.cursor(1), dict.trie().root());
    }

    #[test]
    fn progress_sees_every_partition() {
        let dict =
            Dictionary::from_words(Some(3), ["cat", "act", "dog", "god", "fish"]).unwrap();
        let seen = Mutex::new(Vec::new());
        let config = SearchConfig::new(2, 3, 2).unwrap();
        let (report, out) = find_answers(&dict, config, Vec::new(), |seed| {
            seen.lock().unwrap().push(seed.to_string())
        })
        .unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.into_iter().sorted().collect_vec(), ["ca", "do"]);
        assert_eq!(report.tasks, 2);
        assert_eq!(report.patterns, 1);
        assert_eq!(report.solutions, 4);
        let lines = String::from_utf8(out).unwrap();
        assert_eq!(
            lines.lines().sorted().collect_vec(),
            ["act dog", "act god", "cat dog", "cat god"]
        );
    }

    #[test]
    fn mismatched_word_length_is_rejected() {
        let dict = Dictionary::from_words(Some(3), ["cat", "dog"]).unwrap();
        let config = SearchConfig::new(2, 5, 2).unwrap();
        let err = find_answers(&dict, config, Vec::new(), |_| {}).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(search_single_threaded(&dict, 2, 5, Vec::new()).is_err());

        let unfiltered = Dictionary::from_words(None, ["cat", "dog", "fish"]).unwrap();
        let (report, _) = search_single_threaded(&unfiltered, 2, 3, Vec::new()).unwrap();
        assert_eq!(report.solutions, 1);
    }
}
