//! # Unique letter words
//!
//! Finds every set of `N` dictionary words of length `L` in which no letter
//! occurs twice, across all `N * L` letters.
//!
//! The search walks a trie holding one representative word per anagram
//! signature, so it only ever sees letter patterns. Each pattern it completes
//! is expanded into every combination of real words sharing those
//! signatures.
//!
//! ```no_run
//! use unique_letter_words::{find_answers, Dictionary, SearchConfig};
//!
//! let dictionary = Dictionary::load("words_alpha.txt", Some(5))?;
//! let config = SearchConfig::new(5, 5, 8)?;
//! let (report, _) = find_answers(&dictionary, config, std::io::stdout(), |_| {})?;
//! println!("{}", report.solutions);
//! # Ok::<(), unique_letter_words::Error>(())
//! ```

pub mod anagram;
pub mod dictionary;
pub mod dispatch;
pub mod error;
pub mod expand;
pub mod letters;
pub mod outcome;
pub mod search;
pub mod signature;
pub mod trie;

pub use anagram::{AnagramClass, AnagramIndex, ClassId};
pub use dictionary::{Dictionary, DictionaryStats};
pub use dispatch::{find_answers, search_single_threaded, SearchConfig, SearchReport, Seed};
pub use error::{Error, Result};
pub use letters::LetterSet;
pub use outcome::SharedOutcome;
pub use search::{SearchState, Searcher};
pub use signature::Signature;
pub use trie::{NodeId, Trie};
