//! Loads a word list into the trie and the anagram index.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;

use crate::anagram::AnagramIndex;
use crate::error::{Error, Result};
use crate::signature::Signature;
use crate::trie::Trie;

/// The search's read-only input: one representative per signature in the
/// trie, every word in the anagram index.
#[derive(Debug, Default)]
pub struct Dictionary {
    word_length: Option<usize>,
    trie: Trie,
    anagrams: AnagramIndex,
}

impl Dictionary {
    /// An empty dictionary accepting words of `word_length` bytes, or every
    /// length when `None`.
    pub fn new(word_length: Option<usize>) -> Self {
        Dictionary {
            word_length,
            ..Default::default()
        }
    }

    pub fn from_words<I, S>(word_length: Option<usize>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new(word_length);
        for word in words {
            dictionary.add_word(word.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Reads whitespace separated words.
    pub fn from_reader<R: BufRead>(reader: R, word_length: Option<usize>) -> Result<Self> {
        let mut dictionary = Dictionary::new(word_length);
        for line in reader.lines() {
            for word in line?.split_whitespace() {
                dictionary.add_word(word)?;
            }
        }
        log::info!(
            "loaded {} words in {} anagram classes",
            dictionary.anagrams.word_count(),
            dictionary.anagrams.len()
        );
        Ok(dictionary)
    }

    pub fn load(path: impl AsRef<Path>, word_length: Option<usize>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), word_length)
    }

    /// Adds `word` if it has the accepted length and no repeated letter.
    /// Returns whether it was kept.
    ///
    /// The first word of each signature becomes the trie representative.
    pub fn add_word(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() || self.word_length.map_or(false, |len| word.len() != len) {
            return Ok(false);
        }
        let signature = Signature::of(word);
        if signature.has_repeat() {
            return Ok(false);
        }
        if let Some(letter) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(Error::InvalidLetter {
                word: word.to_owned(),
                letter,
            });
        }
        let (class, created) = self.anagrams.insert(signature, word);
        if created {
            self.trie.insert(word, class)?;
        }
        Ok(true)
    }

    pub fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn anagrams(&self) -> &AnagramIndex {
        &self.anagrams
    }

    pub fn stats(&self) -> DictionaryStats {
        let words = self.trie.words();
        let first = words.iter().take(3).cloned().collect_vec();
        let last = words[words.len().saturating_sub(3)..].to_vec();
        DictionaryStats {
            words: words.len(),
            signatures: self.anagrams.len(),
            dictionary_words: self.anagrams.word_count(),
            first,
            last,
        }
    }
}

/// Summary of a loaded dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Representative words stored in the trie.
    pub words: usize,
    pub signatures: usize,
    /// Words across all anagram sets.
    pub dictionary_words: usize,
    pub first: Vec<String>,
    pub last: Vec<String>,
}

impl fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word count: {}", self.words)?;
        writeln!(
            f,
            "Dictionary words: {} in {} anagram classes",
            self.dictionary_words, self.signatures
        )?;
        for word in self.first.iter().chain(&self.last) {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}
